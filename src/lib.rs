pub mod boundary;
pub mod cli;
pub mod config;
pub mod descriptor;
pub mod domain;
pub mod error;
pub mod git;
pub mod logging;
pub mod release;
pub mod safety;
pub mod templates;
pub mod ui;

pub use error::{BumpError, Result};
