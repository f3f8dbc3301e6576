mod app;
mod state;

pub use app::{GuiOptions, run_gui};
pub use state::{UiState, show_ui};
