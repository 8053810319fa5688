//! Domain entities: the template configuration holder and the asset model.

pub mod common;
pub mod template_config;
pub mod web_library;

pub use common::{Asset, AssetUrl};
pub use template_config::TemplateConfig;
pub use web_library::{WebLibrary, WebLibraryBuilder};
