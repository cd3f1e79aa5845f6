//! Turns one user submission into concurrent operation calls and reduces
//! their outcomes to a single result or a single classified error.

mod skills;
mod types;

pub use skills::parse_skill_list;
pub use types::*;

use crate::{
    Error,
    invoker::PromptInvoker,
    operations::{
        self, AnalyzeResponseInput, InterviewScriptGeneration, InterviewScriptInput, Operation,
        ResponseCritique, ResumeFitAnalysis, ResumeImprovementSuggestions, ResumeJobPair,
        ResumeTailoring, SpokenResponseAnalysis, TailorResumeInput, TailoredResume,
    },
    speech::{SpeechAudio, SpeechProvider, SynthesizeSpeechInput, TranscribeSpeechInput, Transcript},
};
use std::{future::Future, sync::Arc, time::Duration};
use tracing::{debug, error, info, warn};

pub const EMPTY_INPUT_MESSAGE: &str = "Resume and Job Description text cannot be empty.";

pub struct Orchestrator {
    invoker: Arc<dyn PromptInvoker>,
    speech: Arc<dyn SpeechProvider>,
    operation_timeout: Option<Duration>,
}

impl Orchestrator {
    pub fn new(invoker: Arc<dyn PromptInvoker>, speech: Arc<dyn SpeechProvider>) -> Self {
        Self {
            invoker,
            speech,
            operation_timeout: None,
        }
    }

    /// Bounds every individual operation call. `None` waits indefinitely.
    pub fn with_operation_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.operation_timeout = timeout;
        self
    }

    /// Runs fit analysis, improvement suggestions and interview script
    /// generation concurrently.
    ///
    /// All three calls settle before anything is decided. Any failure discards
    /// the successful outputs; when several fail, the reported one is the first
    /// in the order resume-fit, improvement-suggestions, interview-script.
    pub async fn perform_full_analysis(
        &self,
        request: AnalysisRequest,
    ) -> Result<FullAnalysisResult, ClassifiedError> {
        if request.resume_text.trim().is_empty() || request.job_description_text.trim().is_empty()
        {
            warn!("Rejecting analysis request with empty resume or job description");
            return Err(ClassifiedError::validation(EMPTY_INPUT_MESSAGE));
        }

        let skills = parse_skill_list(&request.resume_skills);
        if skills.is_empty() {
            warn!(
                "No resume skills provided for interview script generation, proceeding with the job description only"
            );
        }

        let pair = ResumeJobPair {
            resume: request.resume_text,
            job_description: request.job_description_text,
        };
        let script_input = InterviewScriptInput {
            job_description: pair.job_description.clone(),
            resume_skills: skills,
        };

        info!(
            "Starting full analysis ({} resume chars, {} job description chars, {} skills)",
            pair.resume.chars().count(),
            pair.job_description.chars().count(),
            script_input.resume_skills.len()
        );

        let (fit, improvements, script) = tokio::join!(
            self.call::<ResumeFitAnalysis>(&pair),
            self.call::<ResumeImprovementSuggestions>(&pair),
            self.call::<InterviewScriptGeneration>(&script_input),
        );

        let result = FullAnalysisResult {
            fit_analysis: fit.map_err(classify::<ResumeFitAnalysis>)?,
            improvement_suggestions: improvements.map_err(classify::<ResumeImprovementSuggestions>)?,
            interview_script: script.map_err(classify::<InterviewScriptGeneration>)?,
        };

        info!(
            "Full analysis complete: fit score {}, {} improvements, {} questions",
            result.fit_analysis.fit_score,
            result.improvement_suggestions.improvements.len(),
            result.interview_script.questions.len()
        );

        Ok(result)
    }

    pub async fn text_to_speech(
        &self,
        input: SynthesizeSpeechInput,
    ) -> Result<SpeechAudio, PassThroughError> {
        debug!("Text to speech via {} provider", self.speech.name());
        self.bounded(
            OperationSource::TextToSpeech.as_str(),
            self.speech.synthesize(input),
        )
        .await
        .map_err(|e| pass_through_failure(OperationSource::TextToSpeech, &e))
    }

    pub async fn speech_to_text(
        &self,
        input: TranscribeSpeechInput,
    ) -> Result<Transcript, PassThroughError> {
        debug!("Speech to text via {} provider", self.speech.name());
        self.bounded(
            OperationSource::SpeechToText.as_str(),
            self.speech.transcribe(input),
        )
        .await
        .map_err(|e| pass_through_failure(OperationSource::SpeechToText, &e))
    }

    pub async fn analyze_spoken_response(
        &self,
        input: AnalyzeResponseInput,
    ) -> Result<ResponseCritique, PassThroughError> {
        self.call::<SpokenResponseAnalysis>(&input)
            .await
            .map_err(|e| pass_through_failure(SpokenResponseAnalysis::SOURCE, &e))
    }

    /// `input.key_skills` must already be split and trimmed by the caller.
    pub async fn generate_tailored_resume(
        &self,
        input: TailorResumeInput,
    ) -> Result<TailoredResume, PassThroughError> {
        self.call::<ResumeTailoring>(&input)
            .await
            .map_err(|e| pass_through_failure(ResumeTailoring::SOURCE, &e))
    }

    async fn call<O: Operation>(&self, input: &O::Input) -> crate::Result<O::Output> {
        self.bounded(O::NAME, operations::run::<O>(self.invoker.as_ref(), input))
            .await
    }

    async fn bounded<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = crate::Result<T>>,
    ) -> crate::Result<T> {
        match self.operation_timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| Error::Timeout {
                    operation,
                    after_secs: limit.as_secs(),
                })?,
            None => call.await,
        }
    }
}

fn classify<O: Operation>(cause: Error) -> ClassifiedError {
    error!("{} failed: {}", O::SOURCE, cause);
    ClassifiedError::from_operation(O::SOURCE, &cause)
}

fn pass_through_failure(source: OperationSource, cause: &Error) -> PassThroughError {
    error!("{} failed: {}", source, cause);
    PassThroughError::from_cause(cause)
}
