use std::sync::Arc;

use mixer_service::MixerService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub mixer_service: Arc<MixerService>,
}
