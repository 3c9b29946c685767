mod manager;
mod provider;
mod validate;

pub use manager::ConfigManager;
pub use provider::{ConfigContentProvider, FileContentConfigProvider};
pub use validate::Validate;
