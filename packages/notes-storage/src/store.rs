//! In-memory note collection guarded by a single reader-writer lock.
//!
//! The lock covers both the notes and the id counter. Mutations take the write guard for their
//! whole duration, including timestamp assignment, so readers observe either the state before a
//! mutation or the state after it.

use std::{
	collections::BTreeMap,
	sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use time::{Duration, OffsetDateTime};

use crate::models::{Note, NoteSummary};

#[derive(Debug, Default)]
pub struct NoteStore {
	inner: RwLock<Inner>,
}
impl NoteStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Allocates the next id and inserts a note with both timestamps set to now.
	pub fn create(&self, title: &str, content: &str) -> NoteSummary {
		let mut inner = self.write();

		inner.last_id += 1;

		let now = OffsetDateTime::now_utc();
		let note = Note {
			id: inner.last_id,
			title: title.to_string(),
			content: content.to_string(),
			created_at: now,
			updated_at: now,
		};
		let summary = note.summary();

		inner.notes.insert(note.id, note);

		summary
	}

	/// Returns a snapshot of every stored note. Order is not part of the contract.
	pub fn list(&self) -> Vec<NoteSummary> {
		self.read().notes.values().map(Note::summary).collect()
	}

	pub fn get(&self, id: u64) -> Option<NoteSummary> {
		self.read().notes.get(&id).map(Note::summary)
	}

	/// Full record including timestamps.
	pub fn snapshot(&self, id: u64) -> Option<Note> {
		self.read().notes.get(&id).cloned()
	}

	/// Replaces title and content and refreshes `updated_at`. `id` and `created_at` are left
	/// untouched. Returns `None` without any change when the id is unknown.
	pub fn update(&self, id: u64, title: &str, content: &str) -> Option<NoteSummary> {
		let mut inner = self.write();
		let note = inner.notes.get_mut(&id)?;

		note.title = title.to_string();
		note.content = content.to_string();
		note.updated_at = next_timestamp(note.updated_at, OffsetDateTime::now_utc());

		Some(note.summary())
	}

	/// Removes the note. Its id is never handed out again.
	pub fn delete(&self, id: u64) -> bool {
		self.write().notes.remove(&id).is_some()
	}

	pub fn len(&self) -> usize {
		self.read().notes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.read().notes.is_empty()
	}

	// A panic while a guard is held cannot leave a note half-written: every field is assigned
	// from already-owned values, so a poisoned lock still protects a consistent collection.
	fn read(&self) -> RwLockReadGuard<'_, Inner> {
		self.inner.read().unwrap_or_else(|err| err.into_inner())
	}

	fn write(&self) -> RwLockWriteGuard<'_, Inner> {
		self.inner.write().unwrap_or_else(|err| err.into_inner())
	}
}

#[derive(Debug, Default)]
struct Inner {
	notes: BTreeMap<u64, Note>,
	last_id: u64,
}

// `updated_at` must move strictly forward even if the clock did not.
fn next_timestamp(previous: OffsetDateTime, now: OffsetDateTime) -> OffsetDateTime {
	if now > previous { now } else { previous + Duration::nanoseconds(1) }
}
