//! Feed Mixer Server
//!
//! Main entry point for the content mixing server

use feed_mixer::MixerBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Start the complete server with all defaults and setup handled automatically
	MixerBuilder::new().start_server().await
}
