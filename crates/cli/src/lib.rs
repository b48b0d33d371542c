pub mod commands;
pub mod error;
pub mod exit;
pub mod logging;
pub mod output;
