pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Not found: {message}")]
	NotFound { message: String },
}
impl Error {
	pub(crate) fn note_not_found() -> Self {
		Self::NotFound { message: "Note not found".to_string() }
	}
}
