mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Security, Service};

use std::{fs, net::SocketAddr, path::Path};

/// Reads, trims, and validates the config at `path`.
pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|source| Error::Read { path: path.to_path_buf(), source })?;
	let cfg = parse(&raw).map_err(|source| Error::Parse { path: path.to_path_buf(), source })?;

	validate(&cfg)?;

	Ok(cfg)
}

fn parse(raw: &str) -> std::result::Result<Config, toml::de::Error> {
	let mut cfg: Config = toml::from_str(raw)?;

	normalize(&mut cfg);

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.service.http_bind.parse::<SocketAddr>().is_err() {
		return Err(Error::Validation {
			message: "service.http_bind must be a socket address such as 127.0.0.1:8080."
				.to_string(),
		});
	}
	if cfg.service.log_level.is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.service.http_bind = cfg.service.http_bind.trim().to_string();
	cfg.service.log_level = cfg.service.log_level.trim().to_string();
}
