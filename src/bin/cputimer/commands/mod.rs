//! Command implementations

pub mod check;
pub mod completions;
pub mod demo;
pub mod deps;
pub mod export;
pub mod info;
pub mod init;
