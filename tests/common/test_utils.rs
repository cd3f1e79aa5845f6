use super::mocks::StubInvoker;
use careerfit_rust::{
    config::{
        Config, LlmConfig, LogsConfig, OrchestratorConfig, ServerConfig, SpeechConfig,
    },
    orchestrator::{AnalysisRequest, Orchestrator},
    speech::NullSpeechProvider,
};
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;

pub const RESUME: &str = "Senior Rust engineer with eight years building distributed storage, \
    async network services and developer tooling. Led a team of five.";
pub const JOB_DESCRIPTION: &str = "We are hiring a backend engineer to own our Rust services, \
    design APIs and mentor junior developers in a fast moving product team.";

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        llm: LlmConfig {
            provider: "openai".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: "test-api-key".to_string(),
            model: "gpt-4o-mini".to_string(),
            max_tokens: None,
            temperature: None,
        },
        speech: SpeechConfig::default(),
        orchestrator: OrchestratorConfig::default(),
    }
}

pub fn fit_output() -> Value {
    json!({
        "fitScore": 72,
        "feedback": "Strong async background, light on mentoring.",
        "suggestions": "1. Quantify impact\n2. Mention mentoring"
    })
}

pub fn improvements_output() -> Value {
    json!({"improvements": ["Add metrics", "Move skills section up"]})
}

pub fn script_output() -> Value {
    json!({"questions": ["Tell me about yourself.", "Describe a hard bug you fixed."]})
}

/// Invoker answering the three full-analysis operations successfully.
pub fn full_analysis_invoker() -> StubInvoker {
    StubInvoker::new()
        .with_response("resume_fit_analysis", fit_output())
        .with_response("resume_improvement_suggestions", improvements_output())
        .with_response("interview_script_generation", script_output())
}

/// Orchestrator over `invoker` with an instant placeholder transcriber.
pub fn create_test_orchestrator(invoker: StubInvoker) -> Orchestrator {
    Orchestrator::new(
        Arc::new(invoker),
        Arc::new(NullSpeechProvider::new(Duration::ZERO)),
    )
}

pub fn analysis_request(skills: &str) -> AnalysisRequest {
    AnalysisRequest {
        resume_text: RESUME.to_string(),
        job_description_text: JOB_DESCRIPTION.to_string(),
        resume_skills: skills.to_string(),
    }
}
