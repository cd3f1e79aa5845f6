use super::{Operation, Shape};
use crate::orchestrator::OperationSource;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponseInput {
    pub transcribed_response: String,
    pub interview_question: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseCritique {
    pub communication_style: String,
    pub confidence_level: String,
    pub content_relevance: String,
    pub overall_feedback: String,
}

pub struct SpokenResponseAnalysis;

impl Operation for SpokenResponseAnalysis {
    type Input = AnalyzeResponseInput;
    type Output = ResponseCritique;

    const NAME: &'static str = "spoken_response_analysis";
    const SOURCE: OperationSource = OperationSource::ResponseAnalysis;

    fn input_shape() -> Shape {
        Shape::object()
            .required_text(
                "transcribedResponse",
                "The user's transcribed verbal response to an interview question.",
            )
            .required_text(
                "interviewQuestion",
                "The interview question the user was responding to.",
            )
    }

    fn output_shape() -> Shape {
        Shape::object()
            .text(
                "communicationStyle",
                "Feedback on the user's communication style (clarity, tone).",
            )
            .text(
                "confidenceLevel",
                "Assessment of the confidence conveyed in the response.",
            )
            .text(
                "contentRelevance",
                "How relevant the response content was to the question.",
            )
            .text(
                "overallFeedback",
                "Overall constructive feedback and suggestions for improvement.",
            )
    }
}
