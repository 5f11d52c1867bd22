use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	#[serde(default)]
	pub security: Security,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Security {
	/// Refuse to start when `service.http_bind` is not a loopback address.
	#[serde(default = "default_bind_localhost_only")]
	pub bind_localhost_only: bool,
}
impl Default for Security {
	fn default() -> Self {
		Self { bind_localhost_only: default_bind_localhost_only() }
	}
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_bind_localhost_only() -> bool {
	true
}
