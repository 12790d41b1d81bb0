use super::Surface;
use crate::geometry::{Color, Point, Rect};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand<I> {
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, color: Color },
    DrawImage { image: I, dest: Rect },
    FillText { text: String, origin: Point, color: Color },
}

/// Retained surface: records draw commands in paint order so a host can
/// replay them onto its own painter. An opaque fill covering the whole
/// surface discards everything recorded before it.
#[derive(Clone, Debug)]
pub struct DisplayList<I> {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand<I>>,
}

impl<I: Clone> DisplayList<I> {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand<I>] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Text of every `FillText` command, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl<I: Clone> Surface for DisplayList<I> {
    type Image = I;
    type Snapshot = Vec<DrawCommand<I>>;

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.commands.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if color.a == 255 && rect.contains_rect(&self.bounds()) {
            self.commands.clear();
        }
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::StrokeRect { rect, color });
    }

    fn draw_image(&mut self, image: &I, dest: Rect) {
        self.commands.push(DrawCommand::DrawImage {
            image: image.clone(),
            dest,
        });
    }

    fn fill_text(&mut self, text: &str, origin: Point, color: Color) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            origin,
            color,
        });
    }

    fn capture(&self) -> Vec<DrawCommand<I>> {
        self.commands.clone()
    }

    fn restore(&mut self, snapshot: &Vec<DrawCommand<I>>) {
        self.commands.extend(snapshot.iter().cloned());
    }
}
