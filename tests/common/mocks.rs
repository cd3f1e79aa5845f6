use async_trait::async_trait;
use careerfit_rust::{
    Error, Result,
    invoker::{InvocationRequest, PromptInvoker},
    llm::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, LlmClient},
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock prompt invoker answering each operation with a canned value or error
#[derive(Debug, Default, Clone)]
pub struct StubInvoker {
    pub responses: Arc<Mutex<HashMap<&'static str, Value>>>,
    pub failures: Arc<Mutex<HashMap<&'static str, String>>>,
    pub requests: Arc<Mutex<Vec<InvocationRequest>>>,
}

impl StubInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, operation: &'static str, output: Value) -> Self {
        self.responses.lock().unwrap().insert(operation, output);
        self
    }

    pub fn with_failure(self, operation: &'static str, message: &str) -> Self {
        self.failures
            .lock()
            .unwrap()
            .insert(operation, message.to_string());
        self
    }

    pub fn get_requests(&self) -> Vec<InvocationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self, operation: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.operation == operation)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl PromptInvoker for StubInvoker {
    async fn invoke(&self, request: InvocationRequest) -> Result<Value> {
        let operation = request.operation;
        self.requests.lock().unwrap().push(request);

        if let Some(message) = self.failures.lock().unwrap().get(operation) {
            return Err(Error::llm(message.clone()));
        }

        Ok(self
            .responses
            .lock()
            .unwrap()
            .get(operation)
            .cloned()
            .unwrap_or(Value::Null))
    }
}

/// Mock LLM client replaying queued responses in order
#[derive(Debug, Default)]
pub struct MockLlmClient {
    pub responses: Arc<Mutex<Vec<ChatCompletionResponse>>>,
    pub requests: Arc<Mutex<Vec<ChatCompletionRequest>>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(self, content: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(create_mock_chat_response(content));
        self
    }

    pub fn get_requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.requests.lock().unwrap().push(request);

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::llm("No mock responses available"));
        }
        Ok(responses.remove(0))
    }
}

pub fn create_mock_chat_response(content: &str) -> ChatCompletionResponse {
    ChatCompletionResponse {
        id: "test-response-id".to_string(),
        model: "gpt-4".to_string(),
        choices: vec![Choice {
            index: 0,
            message: ChatMessage {
                role: "assistant".to_string(),
                content: content.to_string(),
            },
            finish_reason: Some("stop".to_string()),
        }],
        usage: None,
    }
}
