use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Note {
	pub id: u64,
	pub title: String,
	pub content: String,
	pub created_at: OffsetDateTime,
	pub updated_at: OffsetDateTime,
}
impl Note {
	pub fn summary(&self) -> NoteSummary {
		NoteSummary { id: self.id, title: self.title.clone(), content: self.content.clone() }
	}
}

/// The externally visible projection of a [`Note`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSummary {
	pub id: u64,
	pub title: String,
	pub content: String,
}
