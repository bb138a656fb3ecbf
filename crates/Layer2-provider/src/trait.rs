//! Provider trait
//!
//! The orchestrator only ever sees this narrow interface: a prompt goes
//! in, the model's raw text comes out, and every failure is a
//! `ProviderError`. Test doubles implement it without any network.

use crate::error::ProviderError;
use crate::message::ChatRequest;
use async_trait::async_trait;

/// A remote language model, reduced to one synchronous-feeling call
#[async_trait]
pub trait Provider: Send + Sync {
    /// Provider identifier for logging
    fn name(&self) -> &str;

    /// Send one completion request and return the raw response text
    async fn complete(&self, request: ChatRequest) -> Result<String, ProviderError>;
}
