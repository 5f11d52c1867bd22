use serde::{Deserialize, Serialize};

use crate::{Error, NotesService, Result};

pub const DELETE_CONFIRMATION: &str = "Note deleted successfully";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
	pub message: String,
}

impl NotesService {
	pub fn delete(&self, id: i64) -> Result<DeleteResponse> {
		let id = crate::stored_id(id)?;

		if !self.store.delete(id) {
			return Err(Error::note_not_found());
		}

		tracing::info!(note_id = id, "Note deleted.");

		Ok(DeleteResponse { message: DELETE_CONFIRMATION.to_string() })
	}
}
