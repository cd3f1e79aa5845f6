use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessageArgs,
    ChatCompletionRequestUserMessageContent, ResponseFormat, ResponseFormatJsonSchema,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Asks the model to answer with JSON matching `schema`.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredOutput {
    pub name: String,
    pub schema: serde_json::Value,
}

#[derive(Debug, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub response_format: Option<StructuredOutput>,
}

#[derive(Debug, Clone)]
pub struct ChatCompletionResponse {
    pub id: String,
    pub model: String,
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

impl ChatCompletionResponse {
    /// Text of the first choice, if the model produced any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .map(|c| c.message.content.as_str())
            .filter(|c| !c.trim().is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct Choice {
    pub index: u32,
    pub message: ChatMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl ChatMessage {
    pub fn to_openai_message(&self) -> Result<ChatCompletionRequestMessage, crate::Error> {
        match self.role.as_str() {
            "system" => {
                let msg = ChatCompletionRequestSystemMessageArgs::default()
                    .content(ChatCompletionRequestSystemMessageContent::Text(
                        self.content.clone(),
                    ))
                    .build()
                    .map_err(|e| {
                        crate::Error::llm(format!("Failed to build system message: {}", e))
                    })?;
                Ok(msg.into())
            }
            "user" => {
                let msg = ChatCompletionRequestUserMessageArgs::default()
                    .content(ChatCompletionRequestUserMessageContent::Text(
                        self.content.clone(),
                    ))
                    .build()
                    .map_err(|e| {
                        crate::Error::llm(format!("Failed to build user message: {}", e))
                    })?;
                Ok(msg.into())
            }
            _ => Err(crate::Error::llm(format!(
                "Unsupported message role: {}",
                self.role
            ))),
        }
    }
}

impl StructuredOutput {
    pub fn to_openai_format(&self) -> ResponseFormat {
        ResponseFormat::JsonSchema {
            json_schema: ResponseFormatJsonSchema {
                description: None,
                name: self.name.clone(),
                schema: Some(self.schema.clone()),
                strict: None,
            },
        }
    }
}
