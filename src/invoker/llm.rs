use super::{InvocationRequest, PromptInvoker, PromptLibrary};
use crate::{
    Error, Result,
    config::LlmConfig,
    llm::{ChatCompletionRequest, ChatMessage, LlmClient, StructuredOutput},
};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Executes operations as single chat completions with a JSON Schema
/// response format derived from the operation's output shape.
pub struct LlmInvoker {
    llm_client: Arc<dyn LlmClient>,
    prompts: PromptLibrary,
    model: String,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
}

impl LlmInvoker {
    pub fn new(llm_client: Arc<dyn LlmClient>, prompts: PromptLibrary, config: &LlmConfig) -> Self {
        Self {
            llm_client,
            prompts,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }
}

#[async_trait]
impl PromptInvoker for LlmInvoker {
    async fn invoke(&self, request: InvocationRequest) -> Result<Value> {
        let template = self.prompts.get(request.operation)?;
        let prompt = template.render(&request.input)?;

        let completion = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(template.system), ChatMessage::user(prompt)],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            response_format: Some(StructuredOutput {
                name: request.operation.to_string(),
                schema: request.output_shape.to_json_schema(),
            }),
        };

        let response = self.llm_client.create_chat_completion(completion).await?;

        if let Some(usage) = &response.usage {
            debug!(
                "{} completed: prompt_tokens={}, completion_tokens={}",
                request.operation, usage.prompt_tokens, usage.completion_tokens
            );
        }

        let Some(text) = response.first_content() else {
            warn!("{} returned no content", request.operation);
            return Ok(Value::Null);
        };

        serde_json::from_str(strip_json_fences(text)).map_err(|e| Error::MalformedOutput {
            operation: request.operation,
            reason: format!("response is not valid JSON: {e}"),
        })
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));

    match inner {
        Some(stripped) => {
            let stripped = stripped.trim_start();
            stripped
                .strip_suffix("```")
                .map(str::trim)
                .unwrap_or(stripped)
        }
        None => text,
    }
}
