#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CheckInAction, CliConfig, Command, JournalAction};
pub use toml_config::TomlConfig;
