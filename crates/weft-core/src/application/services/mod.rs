//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and capability handles to
//! accomplish high-level use cases like "render this page" or "register
//! these libraries".

pub mod library_service;
pub mod page_service;

pub use library_service::LibraryService;
pub use page_service::PageService;
