//! CLI subcommands.

pub mod build;
pub mod carousel;
pub mod serve;
