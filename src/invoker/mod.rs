//! Structured Prompt Invoker: the schema-in/schema-out seam between the
//! operations and whatever executes prompts.

mod llm;
mod template;

pub use llm::LlmInvoker;
pub use template::{PromptLibrary, PromptTemplate};

use crate::{Result, operations::Shape};
use async_trait::async_trait;
use serde_json::Value;

/// One call to a named prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationRequest {
    pub operation: &'static str,
    pub input: Value,
    pub input_shape: Shape,
    pub output_shape: Shape,
}

#[async_trait]
pub trait PromptInvoker: Send + Sync {
    /// Runs the named prompt. `Value::Null` means the backend produced nothing.
    async fn invoke(&self, request: InvocationRequest) -> Result<Value>;
}
