mod load;
mod types;

pub use load::{load, load_from_path};
pub use types::{AppConfig, DefaultsConfig, InputConfig, LoggingConfig};
