use notes_storage::NoteSummary;

use crate::{Error, NotesService, Result};

impl NotesService {
	pub fn get(&self, id: i64) -> Result<NoteSummary> {
		let note = self.store.get(crate::stored_id(id)?).ok_or_else(Error::note_not_found)?;

		tracing::info!(note_id = note.id, title = %note.title, "Note retrieved.");

		Ok(note)
	}
}
