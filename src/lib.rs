#[macro_use]
extern crate derive_builder;

pub mod cli;

pub mod embed;

pub mod error;

pub mod file;

pub mod logging;

pub mod output;

pub use error::{Error, Result};
