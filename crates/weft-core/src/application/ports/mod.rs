//! Application ports (traits) for the outside world.
//!
//! The capability traits a template consumes (`HtmlElement`,
//! `WebLibraryManager`, renderers) live in `crate::domain::capabilities`;
//! this module defines the port the outside world implements *for* the
//! application: the [`Template`] draw contract.

pub mod output;

pub use output::Template;
