//! Presentation layer.

/// UI screens and application shells.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use ui::{HubApp, WebsiteApp};
