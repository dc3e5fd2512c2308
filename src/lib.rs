pub mod boundary;
pub mod changelog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod server;
pub mod sink;
pub mod ui;

pub use error::{Result, ShipnoteError};
