pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod feed;
pub mod matcher;
pub mod model;
pub mod present;
pub mod schedule;

pub use error::{Error, FetchError, NotFound};
