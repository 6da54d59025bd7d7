//! Feed Mixer Library
//!
//! A pattern-driven content mixing service: expands a configured repeating
//! pattern of providers over a requested window, fetches concurrently with
//! single-level fallback, and interleaves the results back into order.

// Core domain types
pub use mixer_types::{
	ContentItem, ContentProvider, MixError, MixPattern, MixRequest, ProviderConfig,
	ProviderError, ProviderId, ProviderResult,
};

// Service layer
pub use mixer_service::MixerService;

// Providers
pub use mixer_providers::{HttpContentProvider, ProviderRegistry};

// API layer
pub use mixer_api::{create_router, AppState};

// Config
pub use mixer_config::{load_config, LogFormat, PatternEntry, ProviderSettings, Settings};

pub mod mocks;

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

// Re-export external dependencies for examples
pub use async_trait;
pub use serde_json;

/// Builder pattern for configuring the mixer
///
/// Providers and the pattern can come from [`Settings`] (HTTP providers
/// built from the config file) or be supplied programmatically, which is
/// how tests swap in deterministic fakes.
pub struct MixerBuilder {
	settings: Option<Settings>,
	registry: ProviderRegistry,
	pattern: Option<MixPattern>,
}

impl Default for MixerBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl MixerBuilder {
	pub fn new() -> Self {
		Self {
			settings: None,
			registry: ProviderRegistry::new(),
			pattern: None,
		}
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Register a provider under its own id
	/// Panics on a duplicate id (intentional for startup-time configuration errors)
	pub fn with_provider(mut self, provider: Arc<dyn ContentProvider>) -> Self {
		self.registry
			.register(provider)
			.expect("Failed to register provider during startup - this is a fatal configuration error");
		self
	}

	/// Set the mix pattern directly, overriding the one from settings
	pub fn with_pattern(mut self, pattern: impl Into<MixPattern>) -> Self {
		self.pattern = Some(pattern.into());
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Initialize tracing with configuration-based settings
	fn init_tracing_from_settings(
		&self,
		settings: &Settings,
	) -> Result<(), Box<dyn std::error::Error>> {
		let log_level = &settings.logging.level;
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

		match settings.logging.format {
			LogFormat::Json => {
				let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);
				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Pretty => {
				let subscriber = tracing_subscriber::fmt()
					.pretty()
					.with_env_filter(env_filter);
				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Compact => {
				let subscriber = tracing_subscriber::fmt()
					.compact()
					.with_env_filter(env_filter);
				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
		}

		info!(
			"Logging configuration applied: level={}, format={:?}, structured={}",
			settings.logging.level, settings.logging.format, settings.logging.structured
		);

		Ok(())
	}

	/// Assemble the mixer and return the configured router with state
	pub async fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let MixerBuilder {
			settings,
			mut registry,
			pattern,
		} = self;
		let settings = settings.unwrap_or_default();

		// Build HTTP providers for settings entries that were not supplied
		// programmatically
		for (id, provider_settings) in settings.enabled_providers() {
			let provider_id = ProviderId::from(id);
			if registry.contains(&provider_id) {
				continue;
			}
			let provider = HttpContentProvider::new(
				provider_id,
				provider_settings.endpoint.clone(),
				provider_settings.timeout_ms,
				provider_settings.headers.as_ref(),
			)?;
			registry.register(Arc::new(provider))?;
		}

		let pattern = pattern.unwrap_or_else(|| settings.mix_pattern());
		let pattern_len = pattern.len();

		let service = MixerService::new(
			pattern,
			Arc::new(registry),
			settings.per_call_timeout(),
		);
		service.validate()?;

		info!(
			"Successfully initialized with {} provider(s), pattern of {} slot(s)",
			service.registry().len(),
			pattern_len
		);

		let app_state = AppState {
			mixer_service: Arc::new(service),
		};
		let router = create_router().with_state(app_state.clone());

		Ok((router, app_state))
	}

	/// Start the complete server with all defaults and setup
	/// This method handles everything needed to run the server, including:
	/// - Loading .env file
	/// - Loading configuration with defaults
	/// - Initializing tracing
	/// - Binding and serving the application
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		// Load .env file if it exists
		dotenvy::dotenv().ok();

		let using_provided_settings = self.settings.is_some();
		let settings = match self.settings.take() {
			Some(settings) => settings,
			None => load_config().unwrap_or_default(),
		};

		self.init_tracing_from_settings(&settings)?;

		info!(
			"Using configuration: loaded from {}",
			if using_provided_settings {
				"provided settings"
			} else {
				"config file or defaults"
			}
		);

		// Settings-level validation only applies when the pattern and
		// providers come from settings
		if self.pattern.is_none() {
			settings.validate()?;
		}

		let enabled_providers = settings.enabled_providers();
		info!("Enabled providers: {}", enabled_providers.len());
		for (id, provider) in &enabled_providers {
			info!(
				"  - {}: {} ({}ms timeout)",
				provider.display_name(id),
				provider.endpoint,
				provider.timeout_ms
			);
		}
		info!("Mix pattern: {} slot(s)", settings.pattern.len());

		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		self.settings = Some(settings);
		let (app, _) = self.start().await?;

		let listener = tokio::net::TcpListener::bind(addr).await?;

		info!("🥣 Feed mixer listening on {}", bind_addr);
		info!("API endpoints available:");
		info!("  GET  /health");
		info!("  GET  /ready");
		info!("  GET  /api/v1/feed?count=N&offset=M");

		axum::serve(listener, app).await?;

		Ok(())
	}
}
