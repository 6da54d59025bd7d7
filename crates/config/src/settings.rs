//! Configuration settings structures

use mixer_types::{MixPattern, ProviderConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub providers: HashMap<String, ProviderSettings>,
	pub pattern: Vec<PatternEntry>,
	pub timeouts: TimeoutSettings,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 8080,
		}
	}
}

/// Individual upstream provider configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ProviderSettings {
	pub endpoint: String,
	pub timeout_ms: u64,
	pub enabled: bool,
	pub headers: Option<HashMap<String, String>>,
	// Optional descriptive metadata
	pub name: Option<String>,
}

impl Default for ProviderSettings {
	fn default() -> Self {
		Self {
			endpoint: String::new(),
			timeout_ms: 2000,
			enabled: true,
			headers: None,
			name: None,
		}
	}
}

/// One slot of the configured repeating mix
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PatternEntry {
	pub provider: String,
	pub fallback: Option<String>,
}

/// Timeout configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct TimeoutSettings {
	/// Optional deadline applied to each provider call by the dispatcher;
	/// expiry is treated like a provider failure. Unset means no deadline.
	pub per_call_ms: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Compact,
			structured: false,
		}
	}
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	#[default]
	Compact,
}

/// Validation failures collected while checking the settings
#[derive(Error, Debug)]
#[error("configuration errors found:\n{}", .problems.join("\n"))]
pub struct SettingsError {
	pub problems: Vec<String>,
}

impl ProviderSettings {
	/// Human-readable label for logs; falls back to the registry id
	pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
		self.name.as_deref().unwrap_or(id)
	}
}

impl Settings {
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}

	/// Providers that are enabled in configuration
	pub fn enabled_providers(&self) -> HashMap<String, ProviderSettings> {
		self.providers
			.iter()
			.filter(|(_, p)| p.enabled)
			.map(|(id, p)| (id.clone(), p.clone()))
			.collect()
	}

	/// The configured pattern as domain provider configurations
	pub fn mix_pattern(&self) -> MixPattern {
		self.pattern
			.iter()
			.map(|entry| ProviderConfig {
				provider: entry.provider.as_str().into(),
				fallback: entry.fallback.as_deref().map(Into::into),
			})
			.collect::<Vec<_>>()
			.into()
	}

	pub fn per_call_timeout(&self) -> Option<Duration> {
		self.timeouts.per_call_ms.map(Duration::from_millis)
	}

	/// Check the pattern and provider table before the core is exercised,
	/// collecting every problem rather than stopping at the first
	pub fn validate(&self) -> Result<(), SettingsError> {
		let mut problems = Vec::new();
		let enabled = self.enabled_providers();

		if self.pattern.is_empty() {
			problems.push("the mix pattern is empty".to_string());
		}

		for (index, entry) in self.pattern.iter().enumerate() {
			if !enabled.contains_key(&entry.provider) {
				problems.push(format!(
					"pattern slot {} references unknown or disabled provider '{}'",
					index, entry.provider
				));
			}
			if let Some(fallback) = &entry.fallback {
				if !enabled.contains_key(fallback) {
					problems.push(format!(
						"pattern slot {} references unknown or disabled fallback '{}'",
						index, fallback
					));
				}
			}
		}

		for (id, provider) in &enabled {
			if provider.endpoint.is_empty() {
				problems.push(format!("provider '{}' has an empty endpoint", id));
			}
		}

		if problems.is_empty() {
			Ok(())
		} else {
			Err(SettingsError { problems })
		}
	}
}
