//! Data models for the library catalog

pub mod enums;
pub mod item;
pub mod member;

// Re-export commonly used types
pub use enums::Genre;
pub use item::{Book, Borrowable, CreateBook};
pub use member::{CreateMember, Member};
