use super::{Operation, Shape};
use crate::orchestrator::OperationSource;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewScriptInput {
    pub job_description: String,
    pub resume_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewScript {
    pub questions: Vec<String>,
}

pub struct InterviewScriptGeneration;

impl Operation for InterviewScriptGeneration {
    type Input = InterviewScriptInput;
    type Output = InterviewScript;

    const NAME: &'static str = "interview_script_generation";
    const SOURCE: OperationSource = OperationSource::InterviewScript;

    fn input_shape() -> Shape {
        Shape::object()
            .required_text("jobDescription", "The job description for the role.")
            .text_list("resumeSkills", "Skills extracted from the resume.")
    }

    fn output_shape() -> Shape {
        Shape::object().text_list(
            "questions",
            "Interview questions in the order they should be asked.",
        )
    }
}
