use picview_core::controller::SelectionId;

/// Overall UI state outside the viewer itself.
#[derive(Default)]
pub struct UIState {
    /// Generated gallery URLs.
    pub gallery: Vec<String>,

    /// Selection the loader is still working on (None = idle).
    pub loading: Option<SelectionId>,

    /// Log messages.
    pub log_messages: Vec<String>,

    pub show_about: bool,
}

impl UIState {
    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
