//! Terminal front end for the lottery simulator.

mod app;

pub use app::terminal;
