use std::sync::Arc;

use notes_service::{
	CreateNoteRequest, Error, NoteStore, NoteSummary, NotesService, UpdateNoteRequest,
};

fn service() -> NotesService {
	NotesService::new(Arc::new(NoteStore::new()))
}

fn create_req(title: &str, content: &str) -> CreateNoteRequest {
	CreateNoteRequest { title: title.to_string(), content: content.to_string() }
}

fn update_req(title: &str, content: &str) -> UpdateNoteRequest {
	UpdateNoteRequest { title: title.to_string(), content: content.to_string() }
}

#[test]
fn create_then_get() {
	let service = service();
	let created =
		service.create(create_req("Groceries", "Milk, eggs")).expect("Failed to create note.");

	assert_eq!(created.note_id, 1);

	let note = service.get(1).expect("Failed to get note.");

	assert_eq!(
		note,
		NoteSummary { id: 1, title: "Groceries".to_string(), content: "Milk, eggs".to_string() }
	);
}

#[test]
fn create_rejects_empty_fields_without_consuming_an_id() {
	let service = service();

	for (title, content) in [("", "content"), ("title", ""), ("", "")] {
		let err = service.create(create_req(title, content)).expect_err("Expected rejection.");

		assert!(
			matches!(&err, Error::InvalidRequest { message } if message == "Title and content are mandatory"),
			"Unexpected error: {err:?}"
		);
	}

	assert!(service.store.is_empty());
	assert_eq!(service.create(create_req("A", "B")).expect("Failed to create note.").note_id, 1);
}

#[test]
fn list_on_empty_store_is_not_found() {
	let service = service();
	let err = service.list().expect_err("Expected not found.");

	assert!(
		matches!(&err, Error::NotFound { message } if message == "No notes found"),
		"Unexpected error: {err:?}"
	);
}

#[test]
fn list_returns_live_notes() {
	let service = service();

	service.create(create_req("A", "B")).expect("Failed to create note.");
	service.create(create_req("C", "D")).expect("Failed to create note.");
	service.delete(1).expect("Failed to delete note.");

	let notes = service.list().expect("Failed to list notes.");

	assert_eq!(
		notes,
		vec![NoteSummary { id: 2, title: "C".to_string(), content: "D".to_string() }]
	);
}

#[test]
fn get_missing_note_is_not_found() {
	let err = service().get(9).expect_err("Expected not found.");

	assert!(matches!(err, Error::NotFound { .. }), "Unexpected error: {err:?}");
}

#[test]
fn update_on_empty_store_is_not_found() {
	let err = service().update(1, update_req("New", "Content")).expect_err("Expected not found.");

	assert!(
		matches!(&err, Error::NotFound { message } if message == "Note not found"),
		"Unexpected error: {err:?}"
	);
}

#[test]
fn update_validates_before_lookup() {
	let service = service();

	service.create(create_req("X", "Y")).expect("Failed to create note.");

	let err = service.update(1, update_req("", "Y2")).expect_err("Expected rejection.");

	assert!(
		matches!(&err, Error::InvalidRequest { message } if message == "Title and content are required"),
		"Unexpected error: {err:?}"
	);
	assert_eq!(service.get(1).expect("Failed to get note.").title, "X");

	let err = service.update(2, update_req("", "")).expect_err("Expected rejection.");

	assert!(matches!(err, Error::InvalidRequest { .. }), "Unexpected error: {err:?}");
}

#[test]
fn update_returns_new_summary() {
	let service = service();

	service.create(create_req("X", "Y")).expect("Failed to create note.");

	let before = service.store.snapshot(1).expect("Expected note to exist.");
	let note = service.update(1, update_req("X2", "Y2")).expect("Failed to update note.");

	assert_eq!(note, NoteSummary { id: 1, title: "X2".to_string(), content: "Y2".to_string() });

	let after = service.store.snapshot(1).expect("Expected note to exist.");

	assert_eq!(after.created_at, before.created_at);
	assert!(after.updated_at > after.created_at);
}

#[test]
fn delete_confirms_then_reports_missing() {
	let service = service();

	service.create(create_req("A", "B")).expect("Failed to create note.");

	let response = service.delete(1).expect("Failed to delete note.");

	assert_eq!(response.message, "Note deleted successfully");

	let err = service.delete(1).expect_err("Expected not found.");

	assert!(matches!(err, Error::NotFound { .. }), "Unexpected error: {err:?}");
}

#[test]
fn create_response_uses_note_id_key() {
	let service = service();
	let response = service.create(create_req("A", "B")).expect("Failed to create note.");
	let json = serde_json::to_value(&response).expect("Failed to serialize response.");

	assert_eq!(json, serde_json::json!({ "NoteId": 1 }));
}

#[test]
fn requests_default_missing_fields_to_empty() {
	let req: CreateNoteRequest =
		serde_json::from_str(r#"{"title":"only"}"#).expect("Failed to parse request.");

	assert_eq!(req.title, "only");
	assert!(req.content.is_empty());

	let err = service().create(req).expect_err("Expected rejection.");

	assert!(matches!(err, Error::InvalidRequest { .. }), "Unexpected error: {err:?}");
}

#[test]
fn ids_outside_the_store_range_are_not_found() {
	let service = service();

	service.create(create_req("A", "B")).expect("Failed to create note.");

	for id in [0, -1, i64::MIN] {
		let err = service.get(id).expect_err("Expected not found.");

		assert!(
			matches!(&err, Error::NotFound { message } if message == "Note not found"),
			"Unexpected error for {id}: {err:?}"
		);
		assert!(matches!(
			service.update(id, update_req("New", "Content")),
			Err(Error::NotFound { .. })
		));
		assert!(matches!(service.delete(id), Err(Error::NotFound { .. })));
	}

	assert_eq!(service.store.len(), 1);
}

#[test]
fn requests_accept_capitalized_keys() {
	let service = service();
	let req: CreateNoteRequest = serde_json::from_str(r#"{"Title":"a","Content":"b"}"#)
		.expect("Failed to parse request.");
	let created = service.create(req).expect("Failed to create note.");
	let req: UpdateNoteRequest = serde_json::from_str(r#"{"Title":"c","Content":"d"}"#)
		.expect("Failed to parse request.");
	let note = service.update(created.note_id as i64, req).expect("Failed to update note.");

	assert_eq!(note.title, "c");
	assert_eq!(note.content, "d");
}
