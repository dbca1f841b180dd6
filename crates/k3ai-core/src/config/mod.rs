//! User configuration
//!
//! Settings live in `<config_dir>/k3ai/config.toml`. A missing file means
//! "use the public k3ai plugin repository with default HTTP settings".

pub mod parser;
pub mod schema;
pub mod store;

pub use parser::{parse_settings, parse_settings_str, to_toml};
pub use schema::{RemoteSettings, Settings};
pub use store::SettingsStore;
