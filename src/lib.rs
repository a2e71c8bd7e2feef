// Public API
pub mod cli;
pub mod commands;
pub mod render;

// Core domain types
mod config;
mod error;
mod path_list;
mod source;
mod ui;
mod util;

// Re-export main types
pub use config::{Config, RenderConfig};
pub use error::{PathsError, Result};
pub use path_list::{PathList, DELIMITER};
pub use render::{Format, Formatter, MultiPipeline, Pipeline, Sink};
pub use source::{PathSource, DEFAULT_ENV_VAR};
