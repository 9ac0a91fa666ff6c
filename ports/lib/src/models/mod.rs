mod cli_launcher;
mod library_config;
mod log_format;

pub use cli_launcher::*;
pub use library_config::*;
pub use log_format::*;
