use super::types::{
    CritiqueResponse, HealthResponse, MIN_FORM_TEXT_CHARS, TailorRequest,
};
use crate::{
    operations::{AnalyzeResponseInput, TailoredResume},
    orchestrator::{
        AnalysisOutcome, AnalysisRequest, ClassifiedError, OperationSource, Orchestrator,
        PassThroughError,
    },
    speech::{SpeechAudio, SynthesizeSpeechInput, TranscribeSpeechInput, Transcript},
};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
}

type PassThroughReply<T> = Result<Json<T>, (StatusCode, Json<PassThroughError>)>;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "careerfit",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn full_analysis(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> (StatusCode, Json<AnalysisOutcome>) {
    let request_id = Uuid::new_v4();

    async move {
        info!("Received full analysis request");

        if let Err(error) = validate_form(&request) {
            info!("Form validation failed: {}", error);
            return (StatusCode::BAD_REQUEST, Json(AnalysisOutcome::Error(error)));
        }

        let outcome = state.orchestrator.perform_full_analysis(request).await;
        let status = match &outcome {
            Ok(_) => StatusCode::OK,
            Err(e) if e.source == OperationSource::Unknown => StatusCode::BAD_REQUEST,
            Err(_) => StatusCode::BAD_GATEWAY,
        };

        (status, Json(outcome.into()))
    }
    .instrument(info_span!("full_analysis", %request_id))
    .await
}

pub async fn synthesize_speech(
    State(state): State<AppState>,
    Json(input): Json<SynthesizeSpeechInput>,
) -> PassThroughReply<SpeechAudio> {
    reply(state.orchestrator.text_to_speech(input).await)
}

pub async fn transcribe_speech(
    State(state): State<AppState>,
    Json(input): Json<TranscribeSpeechInput>,
) -> PassThroughReply<Transcript> {
    reply(state.orchestrator.speech_to_text(input).await)
}

pub async fn analyze_response(
    State(state): State<AppState>,
    Json(input): Json<AnalyzeResponseInput>,
) -> PassThroughReply<CritiqueResponse> {
    reply(
        state
            .orchestrator
            .analyze_spoken_response(input)
            .await
            .map(|critique| CritiqueResponse { critique }),
    )
}

pub async fn tailor_resume(
    State(state): State<AppState>,
    Json(request): Json<TailorRequest>,
) -> PassThroughReply<TailoredResume> {
    reply(
        state
            .orchestrator
            .generate_tailored_resume(request.into())
            .await,
    )
}

/// Length rules the browser form enforces, repeated here for other clients.
fn validate_form(request: &AnalysisRequest) -> Result<(), ClassifiedError> {
    if request.resume_text.chars().count() < MIN_FORM_TEXT_CHARS {
        return Err(ClassifiedError::validation(format!(
            "Resume text must be at least {MIN_FORM_TEXT_CHARS} characters."
        )));
    }
    if request.job_description_text.chars().count() < MIN_FORM_TEXT_CHARS {
        return Err(ClassifiedError::validation(format!(
            "Job description text must be at least {MIN_FORM_TEXT_CHARS} characters."
        )));
    }
    Ok(())
}

fn reply<T>(result: Result<T, PassThroughError>) -> PassThroughReply<T> {
    result.map(Json).map_err(|e| {
        let status = if e.local {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::BAD_GATEWAY
        };
        (status, Json(e))
    })
}
