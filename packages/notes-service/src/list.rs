use notes_storage::NoteSummary;

use crate::{Error, NotesService, Result};

impl NotesService {
	/// An empty collection is reported as not found rather than as an empty list.
	pub fn list(&self) -> Result<Vec<NoteSummary>> {
		let notes = self.store.list();

		if notes.is_empty() {
			return Err(Error::NotFound { message: "No notes found".to_string() });
		}

		tracing::info!(count = notes.len(), "Listed notes.");

		Ok(notes)
	}
}
