pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

mod error;

pub use create::{CreateNoteRequest, CreateNoteResponse};
pub use delete::DeleteResponse;
pub use error::{Error, Result};
pub use notes_storage::{Note, NoteStore, NoteSummary};
pub use update::UpdateNoteRequest;

use std::sync::Arc;

/// Request-layer front of the note store.
///
/// Each operation validates its input, issues exactly one store call, and turns an absent note
/// (or an empty collection) into [`Error::NotFound`].
pub struct NotesService {
	pub store: Arc<NoteStore>,
}
impl NotesService {
	pub fn new(store: Arc<NoteStore>) -> Self {
		Self { store }
	}
}

/// Ids arrive as signed integers from the transport. Anything the store could never have issued
/// is reported as a missing note.
pub(crate) fn stored_id(id: i64) -> Result<u64> {
	u64::try_from(id).ok().filter(|id| *id > 0).ok_or_else(Error::note_not_found)
}

pub(crate) fn require_title_and_content(title: &str, content: &str, message: &str) -> Result<()> {
	if title.is_empty() || content.is_empty() {
		return Err(Error::InvalidRequest { message: message.to_string() });
	}

	Ok(())
}
