use careerfit_rust::{
    Error,
    config::LlmConfig,
    invoker::{InvocationRequest, LlmInvoker, PromptInvoker},
    llm::{LlmClient, OpenAiClient},
    operations::{self, Operation, ResumeFitAnalysis, ResumeJobPair, prompts},
    orchestrator::{OperationSource, Orchestrator},
    server::build_orchestrator,
    speech::NullSpeechProvider,
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::sync::Arc;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, method, path},
};

mod common;
use common::{
    JOB_DESCRIPTION, MockLlmClient, RESUME, analysis_request, create_test_config,
};

fn llm_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        base_url: base_url.to_string(),
        ..create_test_config().llm
    }
}

fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 120, "completion_tokens": 40, "total_tokens": 160}
    })
}

fn fit_request() -> InvocationRequest {
    InvocationRequest {
        operation: ResumeFitAnalysis::NAME,
        input: json!({"resume": RESUME, "jobDescription": JOB_DESCRIPTION}),
        input_shape: ResumeFitAnalysis::input_shape(),
        output_shape: ResumeFitAnalysis::output_shape(),
    }
}

#[tokio::test]
async fn test_invoker_sends_schema_and_parses_answer() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({
            "model": "gpt-4o-mini",
            "response_format": {
                "type": "json_schema",
                "json_schema": {"name": "resume_fit_analysis"}
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(
            r#"{"fitScore": 88, "feedback": "Great match", "suggestions": "1. Add links"}"#,
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = llm_config(&mock_server.uri());
    let client: Arc<dyn LlmClient> = Arc::new(OpenAiClient::new(config.clone()));
    let invoker = LlmInvoker::new(client, prompts::library(), &config);

    let pair = ResumeJobPair {
        resume: RESUME.to_string(),
        job_description: JOB_DESCRIPTION.to_string(),
    };
    let fit = operations::run::<ResumeFitAnalysis>(&invoker, &pair)
        .await
        .unwrap();

    assert_eq!(fit.fit_score, 88);
    assert_eq!(fit.feedback, "Great match");
}

#[tokio::test]
async fn test_invoker_surfaces_http_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "message": "Invalid schema",
                "type": "invalid_request_error",
                "param": null,
                "code": null
            }
        })))
        .mount(&mock_server)
        .await;

    let config = llm_config(&mock_server.uri());
    let client: Arc<dyn LlmClient> = Arc::new(OpenAiClient::new(config.clone()));
    let invoker = LlmInvoker::new(client, prompts::library(), &config);

    let err = invoker.invoke(fit_request()).await.unwrap_err();
    assert!(matches!(err, Error::OpenAi(_)));
}

#[tokio::test]
async fn test_invoker_renders_prompt_and_strips_fences() {
    let llm = Arc::new(
        MockLlmClient::new()
            .with_content("```json\n{\"fitScore\": 40, \"feedback\": \"Gaps\", \"suggestions\": \"1. Learn Go\"}\n```"),
    );
    let config = create_test_config().llm;
    let invoker = LlmInvoker::new(llm.clone(), prompts::library(), &config);

    let output = invoker.invoke(fit_request()).await.unwrap();
    assert_eq!(output["fitScore"], 40);

    let requests = llm.get_requests();
    assert_eq!(requests.len(), 1);
    let messages = &requests[0].messages;
    assert_eq!(messages[0].role, "system");
    assert_eq!(messages[1].role, "user");
    assert!(messages[1].content.contains(RESUME));
    assert!(messages[1].content.contains(JOB_DESCRIPTION));
    assert!(!messages[1].content.contains("{resume}"));

    let format = requests[0].response_format.as_ref().unwrap();
    assert_eq!(format.name, "resume_fit_analysis");
    assert_eq!(format.schema["required"], json!(["fitScore", "feedback", "suggestions"]));
}

#[tokio::test]
async fn test_invoker_blank_answer_is_null() {
    let llm = Arc::new(MockLlmClient::new().with_content("   "));
    let invoker = LlmInvoker::new(llm, prompts::library(), &create_test_config().llm);

    let output = invoker.invoke(fit_request()).await.unwrap();
    assert!(output.is_null());
}

#[tokio::test]
async fn test_invoker_non_json_answer_is_malformed() {
    let llm = Arc::new(MockLlmClient::new().with_content("I think the fit is decent."));
    let invoker = LlmInvoker::new(llm, prompts::library(), &create_test_config().llm);

    let err = invoker.invoke(fit_request()).await.unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedOutput {
            operation: "resume_fit_analysis",
            ..
        }
    ));
}

#[tokio::test]
async fn test_orchestrator_over_http_backend() {
    let mock_server = MockServer::start().await;
    for (name, content) in [
        (
            "resume_fit_analysis",
            r#"{"fitScore": 70, "feedback": "Fine", "suggestions": "1. More detail"}"#,
        ),
        (
            "resume_improvement_suggestions",
            r#"{"improvements": ["Add a summary"]}"#,
        ),
        (
            "interview_script_generation",
            r#"{"questions": ["Walk me through your last project."]}"#,
        ),
    ] {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(
                json!({"response_format": {"json_schema": {"name": name}}}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(content)))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let mut config = create_test_config();
    config.llm.base_url = mock_server.uri();
    let orchestrator = build_orchestrator(&config);

    let result = orchestrator
        .perform_full_analysis(analysis_request("Rust"))
        .await
        .unwrap();

    assert_eq!(result.fit_analysis.fit_score, 70);
    assert_eq!(result.improvement_suggestions.improvements, vec!["Add a summary"]);
    assert_eq!(
        result.interview_script.questions,
        vec!["Walk me through your last project."]
    );
}

#[tokio::test]
async fn test_orchestrator_reports_backend_failure_with_source() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("not json")))
        .mount(&mock_server)
        .await;

    let config = llm_config(&mock_server.uri());
    let client: Arc<dyn LlmClient> = Arc::new(OpenAiClient::new(config.clone()));
    let orchestrator = Orchestrator::new(
        Arc::new(LlmInvoker::new(client, prompts::library(), &config)),
        Arc::new(NullSpeechProvider::default()),
    );

    let err = orchestrator
        .perform_full_analysis(analysis_request(""))
        .await
        .unwrap_err();

    assert_eq!(err.source, OperationSource::ResumeFit);
    assert!(
        err.message
            .starts_with("Error in resume-fit: Malformed output from resume_fit_analysis")
    );
}
