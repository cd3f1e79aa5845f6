use super::{Operation, Shape};
use crate::orchestrator::OperationSource;
use serde::{Deserialize, Serialize};

/// Resume and job description, the input shared by fit analysis and
/// improvement suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeJobPair {
    pub resume: String,
    pub job_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitAnalysis {
    /// 0 to 100, passed through as the model reported it.
    pub fit_score: u32,
    pub feedback: String,
    /// May contain a numbered list.
    pub suggestions: String,
}

pub struct ResumeFitAnalysis;

impl Operation for ResumeFitAnalysis {
    type Input = ResumeJobPair;
    type Output = FitAnalysis;

    const NAME: &'static str = "resume_fit_analysis";
    const SOURCE: OperationSource = OperationSource::ResumeFit;

    fn input_shape() -> Shape {
        resume_job_shape()
    }

    fn output_shape() -> Shape {
        Shape::object()
            .integer(
                "fitScore",
                0,
                100,
                "A score (0-100) indicating how well the resume matches the job description.",
            )
            .text(
                "feedback",
                "Detailed feedback on the resume and its alignment with the job description.",
            )
            .text(
                "suggestions",
                "Specific improvements to the resume to better align it with the job requirements.",
            )
    }
}

pub(super) fn resume_job_shape() -> Shape {
    Shape::object()
        .required_text("resume", "The resume content as text.")
        .required_text("jobDescription", "The job description as text.")
}
