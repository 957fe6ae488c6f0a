pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod languages;
pub mod logging;
pub mod model;
pub mod readme;
pub mod streak;
pub mod util;

pub use error::{PulseError, Result};
