use serde::{Deserialize, Serialize};

use crate::{NotesService, Result};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CreateNoteRequest {
	#[serde(default, alias = "Title")]
	pub title: String,
	#[serde(default, alias = "Content")]
	pub content: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateNoteResponse {
	#[serde(rename = "NoteId")]
	pub note_id: u64,
}

impl NotesService {
	pub fn create(&self, req: CreateNoteRequest) -> Result<CreateNoteResponse> {
		crate::require_title_and_content(
			&req.title,
			&req.content,
			"Title and content are mandatory",
		)?;

		let note = self.store.create(&req.title, &req.content);

		tracing::info!(note_id = note.id, title = %note.title, "Note created.");

		Ok(CreateNoteResponse { note_id: note.id })
	}
}
