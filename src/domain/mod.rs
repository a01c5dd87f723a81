//! Application state.

mod app;

pub use app::{App, View};
