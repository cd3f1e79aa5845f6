pub mod handlers;
pub mod types;

use crate::{
    Result,
    config::{Config, SpeechProviderKind},
    invoker::LlmInvoker,
    llm::{LlmClient, OpenAiClient},
    operations::prompts,
    orchestrator::Orchestrator,
    speech::{NullSpeechProvider, SpeechProvider},
};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub async fn run(config: Config) -> Result<()> {
    let orchestrator = build_orchestrator(&config);

    let app_state = handlers::AppState {
        orchestrator: Arc::new(orchestrator),
    };

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn router(app_state: handlers::AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/analysis", post(handlers::full_analysis))
        .route("/api/speech/synthesize", post(handlers::synthesize_speech))
        .route("/api/speech/transcribe", post(handlers::transcribe_speech))
        .route(
            "/api/interview/response-analysis",
            post(handlers::analyze_response),
        )
        .route("/api/resume/tailor", post(handlers::tailor_resume))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

pub fn build_orchestrator(config: &Config) -> Orchestrator {
    let llm_client: Arc<dyn LlmClient> = Arc::new(OpenAiClient::new(config.llm.clone()));
    let invoker = LlmInvoker::new(llm_client, prompts::library(), &config.llm);

    let speech: Arc<dyn SpeechProvider> = match config.speech.provider {
        SpeechProviderKind::Null => Arc::new(NullSpeechProvider::new(Duration::from_millis(
            config.speech.transcription_delay_ms,
        ))),
    };

    info!(
        "Orchestrator ready: model {}, speech provider {}, operation timeout {:?}",
        config.llm.model,
        speech.name(),
        config.orchestrator.operation_timeout_secs
    );

    Orchestrator::new(Arc::new(invoker), speech).with_operation_timeout(
        config
            .orchestrator
            .operation_timeout_secs
            .map(Duration::from_secs),
    )
}
