use serde::{Deserialize, Serialize};

use notes_storage::NoteSummary;

use crate::{Error, NotesService, Result};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdateNoteRequest {
	#[serde(default, alias = "Title")]
	pub title: String,
	#[serde(default, alias = "Content")]
	pub content: String,
}

impl NotesService {
	pub fn update(&self, id: i64, req: UpdateNoteRequest) -> Result<NoteSummary> {
		crate::require_title_and_content(
			&req.title,
			&req.content,
			"Title and content are required",
		)?;

		let id = crate::stored_id(id)?;
		let note =
			self.store.update(id, &req.title, &req.content).ok_or_else(Error::note_not_found)?;

		tracing::info!(note_id = note.id, title = %note.title, "Note updated.");

		Ok(note)
	}
}
