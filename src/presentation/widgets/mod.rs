//! Reusable widgets.

mod helper_panel;
mod status_bar;
mod text_input;

pub use helper_panel::HelperPanel;
pub use status_bar::{StatusBar, StatusLevel};
pub use text_input::TextInput;
