//! # clio-provider
//!
//! LLM provider abstraction layer for Clio.
//!
//! ## Features
//! - Narrow `Provider` trait: prompt in, raw text out, errors as values
//! - OpenRouter implementation over reqwest (fixed 30s timeout, no retry)

pub mod error;
pub mod message;
pub mod providers;
pub mod r#trait;

// Core traits and types
pub use message::{ChatRequest, Message, MessageRole};
pub use r#trait::Provider;

// Error
pub use error::ProviderError;

// Provider implementations
pub use providers::openrouter::OpenRouterProvider;
