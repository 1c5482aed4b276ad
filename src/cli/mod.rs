//! Command implementations behind the `gwalk` binary.

pub mod commands;
