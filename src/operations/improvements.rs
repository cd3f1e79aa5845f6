use super::{Operation, Shape, resume_fit::{ResumeJobPair, resume_job_shape}};
use crate::orchestrator::OperationSource;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementSuggestions {
    pub improvements: Vec<String>,
}

pub struct ResumeImprovementSuggestions;

impl Operation for ResumeImprovementSuggestions {
    type Input = ResumeJobPair;
    type Output = ImprovementSuggestions;

    const NAME: &'static str = "resume_improvement_suggestions";
    const SOURCE: OperationSource = OperationSource::ImprovementSuggestions;

    fn input_shape() -> Shape {
        resume_job_shape()
    }

    fn output_shape() -> Shape {
        Shape::object().text_list(
            "improvements",
            "Concrete, individually actionable improvements to the resume.",
        )
    }
}
