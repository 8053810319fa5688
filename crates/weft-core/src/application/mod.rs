//! Application layer for Weft.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (PageService, LibraryService)
//! - **Ports**: The template draw contract implemented outside the core
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{LibraryService, PageService};

// Re-export the template port (for concrete template implementations)
pub use ports::Template;

pub use error::ApplicationError;
