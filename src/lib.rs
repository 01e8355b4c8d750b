pub mod api;
pub mod cli;
pub mod core;
pub mod error;
pub mod format;
pub mod logging;
pub mod report;
