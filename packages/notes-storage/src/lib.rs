pub mod models;
pub mod store;

pub use models::{Note, NoteSummary};
pub use store::NoteStore;
