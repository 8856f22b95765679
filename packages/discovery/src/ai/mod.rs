//! Language model provider implementations.

pub mod anthropic;

pub use anthropic::Anthropic;
