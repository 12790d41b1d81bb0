use std::path::PathBuf;
use std::time::Duration;

use picview_core::controller::SelectionId;
use picview_core::error::ViewerError;
use picview_core::loader::{DecodedImage, ImageSource};

/// Commands sent from the UI thread to the loader thread.
pub enum LoaderCommand {
    /// Fetch and decode an image for the given selection.
    Load {
        selection: SelectionId,
        source: ImageSource,
    },
}

/// Results sent from the loader thread (and file dialogs) back to the UI thread.
pub enum LoaderResult {
    Loaded {
        selection: SelectionId,
        source: ImageSource,
        image: DecodedImage,
        elapsed: Duration,
    },
    Failed {
        selection: SelectionId,
        error: ViewerError,
    },
    /// A local file was chosen in the open dialog.
    FilePicked {
        path: PathBuf,
    },
    Log {
        message: String,
    },
}
