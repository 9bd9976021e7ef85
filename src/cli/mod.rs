//! CLI support for the `algokit` binary.

pub mod commands;
