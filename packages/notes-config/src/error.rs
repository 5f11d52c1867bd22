use std::{io, path::PathBuf};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Cannot read notes config {}: {source}", path.display())]
	Read { path: PathBuf, source: io::Error },
	#[error("Notes config {} is not valid TOML: {source}", path.display())]
	Parse { path: PathBuf, source: toml::de::Error },
	#[error("{message}")]
	Validation { message: String },
}
