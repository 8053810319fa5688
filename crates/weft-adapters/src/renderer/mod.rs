//! Renderer adapters.

pub mod chain;

pub use chain::RendererChain;
