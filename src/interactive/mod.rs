//! Full-screen terminal interface

pub mod app;
mod rendering;

pub use app::{App, TuiSurface, run_tui};
