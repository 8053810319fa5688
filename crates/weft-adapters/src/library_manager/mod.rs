//! Web library manager adapters.

pub mod memory;

pub use memory::InMemoryLibraryManager;
