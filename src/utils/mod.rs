//! Process-level helpers: file logging and terminal restoration.

pub mod guard;
pub mod logger;
