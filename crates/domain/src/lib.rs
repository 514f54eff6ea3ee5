//! Domain layer - Pure tag library with no interpreter dependencies
//!
//! This crate contains:
//! - Value Objects (Tag, Tagset)
//! - Attribute identifiers and their string aliases
//! - The tagset byte codec
//! - Port interfaces (TagsetSink)
//!
//! Principles:
//! - No dependencies on the scripting layer or infrastructure
//! - Decoding a tag as the wrong type yields `None`, never an error
//! - Testable in isolation

pub mod error;
pub mod sink;
pub mod tag;

// Re-export commonly used types
pub use error::DomainError;
pub use sink::{SinkError, TagsetSink};
pub use tag::{Aid, Tag, Tagset};
