//! LEGO catalog converter CLI components.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod summary;
