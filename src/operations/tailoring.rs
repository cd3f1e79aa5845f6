use super::{Operation, Shape};
use crate::orchestrator::OperationSource;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailorResumeInput {
    pub original_resume: String,
    pub job_description: String,
    /// Already split and trimmed by the caller.
    pub key_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailoredResume {
    pub tailored_resume_text: String,
}

pub struct ResumeTailoring;

impl Operation for ResumeTailoring {
    type Input = TailorResumeInput;
    type Output = TailoredResume;

    const NAME: &'static str = "resume_tailoring";
    const SOURCE: OperationSource = OperationSource::Tailoring;

    fn input_shape() -> Shape {
        Shape::object()
            .required_text("originalResume", "The original resume content as text.")
            .required_text("jobDescription", "The job description as text.")
            .text_list("keySkills", "A list of key skills to emphasize.")
    }

    fn output_shape() -> Shape {
        Shape::object().text(
            "tailoredResumeText",
            "The full text of the newly generated, tailored resume.",
        )
    }
}
