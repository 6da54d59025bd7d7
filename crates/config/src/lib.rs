//! Feed Mixer Configuration
//!
//! Settings structures, file loading and startup validation.

pub mod loader;
pub mod settings;

pub use loader::load_config;
pub use settings::{
	LogFormat, LoggingSettings, PatternEntry, ProviderSettings, ServerSettings, Settings,
	SettingsError, TimeoutSettings,
};
