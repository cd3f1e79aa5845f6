use crate::operations::{FitAnalysis, ImprovementSuggestions, InterviewScript};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which operation a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperationSource {
    ResumeFit,
    ImprovementSuggestions,
    InterviewScript,
    Tailoring,
    TextToSpeech,
    SpeechToText,
    ResponseAnalysis,
    Unknown,
}

impl OperationSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ResumeFit => "resume-fit",
            Self::ImprovementSuggestions => "improvement-suggestions",
            Self::InterviewScript => "interview-script",
            Self::Tailoring => "tailoring",
            Self::TextToSpeech => "text-to-speech",
            Self::SpeechToText => "speech-to-text",
            Self::ResponseAnalysis => "response-analysis",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for OperationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One user submission, as it arrives from the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub resume_text: String,
    pub job_description_text: String,
    /// Comma-separated skill labels, possibly empty.
    #[serde(default)]
    pub resume_skills: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullAnalysisResult {
    pub fit_analysis: FitAnalysis,
    pub improvement_suggestions: ImprovementSuggestions,
    pub interview_script: InterviewScript,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedError {
    pub message: String,
    pub source: OperationSource,
}

// Written by hand: thiserror would treat the `source` field as a cause.
impl fmt::Display for ClassifiedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ClassifiedError {}

impl ClassifiedError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: OperationSource::Unknown,
        }
    }

    pub fn from_operation(source: OperationSource, cause: &crate::Error) -> Self {
        Self {
            message: format!("Error in {source}: {cause}"),
            source,
        }
    }
}

/// Wire form of a full analysis: exactly one of `result` or `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnalysisOutcome {
    Result(FullAnalysisResult),
    Error(ClassifiedError),
}

impl From<Result<FullAnalysisResult, ClassifiedError>> for AnalysisOutcome {
    fn from(value: Result<FullAnalysisResult, ClassifiedError>) -> Self {
        match value {
            Ok(result) => Self::Result(result),
            Err(error) => Self::Error(error),
        }
    }
}

/// Failure of a single pass-through call. The caller already knows which
/// entry point it used, so only the message is kept.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{error}")]
pub struct PassThroughError {
    pub error: String,
    #[serde(skip)]
    pub local: bool,
}

impl PassThroughError {
    pub(crate) fn from_cause(cause: &crate::Error) -> Self {
        Self {
            error: cause.to_string(),
            local: cause.is_local() || matches!(cause, crate::Error::Speech(_)),
        }
    }

    pub fn message(&self) -> &str {
        &self.error
    }
}
