//! Typed contracts over the prompt invoker.
//!
//! Every operation declares a name, an input shape and an output shape.
//! [`run`] validates the input locally, makes exactly one invoker call and
//! checks the answer against the output shape before deserializing it.

mod improvements;
mod interview_script;
pub mod prompts;
mod resume_fit;
mod response_analysis;
mod shape;
mod tailoring;

pub use improvements::{ImprovementSuggestions, ResumeImprovementSuggestions};
pub use interview_script::{InterviewScript, InterviewScriptGeneration, InterviewScriptInput};
pub use resume_fit::{FitAnalysis, ResumeFitAnalysis, ResumeJobPair};
pub use response_analysis::{AnalyzeResponseInput, ResponseCritique, SpokenResponseAnalysis};
pub use shape::{Field, FieldKind, Shape};
pub use tailoring::{ResumeTailoring, TailorResumeInput, TailoredResume};

use crate::{
    Error, Result,
    invoker::{InvocationRequest, PromptInvoker},
    orchestrator::OperationSource,
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::debug;

pub trait Operation {
    type Input: Serialize + Sync;
    type Output: DeserializeOwned;

    /// Prompt name handed to the invoker.
    const NAME: &'static str;
    /// Tag used when a failure of this operation is reported.
    const SOURCE: OperationSource;

    fn input_shape() -> Shape;
    fn output_shape() -> Shape;
}

pub async fn run<O: Operation>(invoker: &dyn PromptInvoker, input: &O::Input) -> Result<O::Output> {
    let input_value = serde_json::to_value(input)?;
    let input_shape = O::input_shape();
    input_shape
        .validate(&input_value)
        .map_err(|reason| Error::InvalidInput {
            operation: O::NAME,
            reason,
        })?;

    debug!("Invoking {}", O::NAME);

    let output_shape = O::output_shape();
    let mut output = invoker
        .invoke(InvocationRequest {
            operation: O::NAME,
            input: input_value,
            input_shape,
            output_shape: output_shape.clone(),
        })
        .await?;

    if output.is_null() {
        return Err(Error::MissingOutput { operation: O::NAME });
    }

    output_shape
        .validate(&output)
        .map_err(|reason| Error::MalformedOutput {
            operation: O::NAME,
            reason,
        })?;
    output_shape.normalize(&mut output);

    serde_json::from_value::<O::Output>(output).map_err(|e| Error::MalformedOutput {
        operation: O::NAME,
        reason: e.to_string(),
    })
}
