use std::sync::Arc;

use notes_service::{NoteStore, NotesService};

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<NotesService>,
}
impl AppState {
	pub fn new(store: Arc<NoteStore>) -> Self {
		Self { service: Arc::new(NotesService::new(store)) }
	}
}
