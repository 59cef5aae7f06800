mod content;

pub use content::{ContentRef, ContentType, Intent, COLLECTIONS};
