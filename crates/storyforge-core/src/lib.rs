pub mod entry;
pub mod key;
pub mod message;

pub use entry::{StoryEntry, WireframeEntry};
pub use key::{default_key, KeyFn};
pub use message::{ChatMessage, Role};
