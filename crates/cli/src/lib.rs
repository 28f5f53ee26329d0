//! Codicon build tooling CLI library.

pub mod cli;
pub mod commands;
