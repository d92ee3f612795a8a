//! Command-line interface module.

mod args;
pub mod check;
pub mod init;
pub mod inspect;
pub mod render;

pub use args::{Cli, Commands, PageArgs};
