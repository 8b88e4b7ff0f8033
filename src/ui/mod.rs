//! egui rendering: figure panels, the missingness table, standalone
//! windows and the explorer panels.

pub mod panels;
pub mod plot;
pub mod table;
pub mod window;

pub use window::{show, show_report};
