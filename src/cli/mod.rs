pub mod commands;
pub mod generate;
pub mod serve;

pub use commands::{Cli, Commands};
