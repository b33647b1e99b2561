pub mod cli;
pub mod clipboard;
pub mod config;
pub mod generation;
pub mod logging;
pub mod ui;
