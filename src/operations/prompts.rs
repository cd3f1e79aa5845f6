// Prompt templates for every invoker-backed operation.
// Placeholders are the camelCase field names of each operation's input.

use super::{
    InterviewScriptGeneration, Operation, ResumeFitAnalysis, ResumeImprovementSuggestions,
    ResumeTailoring, SpokenResponseAnalysis,
};
use crate::invoker::{PromptLibrary, PromptTemplate};

pub const RESUME_FIT: PromptTemplate = PromptTemplate {
    system: "You are a career expert who evaluates how well candidates match open roles. \
        Respond with a single JSON object that matches the requested schema. \
        Do not add text outside the JSON object.",
    user: r#"Analyze the resume below against the job description.

Resume:
{resume}

Job Description:
{jobDescription}

Return:
- "fitScore": an integer between 0 and 100, where 100 means a perfect fit for the role
- "feedback": detailed feedback on how the resume aligns with the job requirements
- "suggestions": a numbered list ("1. ", "2. ", ...) of specific changes that would improve the fit"#,
};

pub const IMPROVEMENTS: PromptTemplate = PromptTemplate {
    system: "You are a resume reviewer who gives concrete, actionable advice. \
        Respond with a single JSON object that matches the requested schema. \
        Do not add text outside the JSON object.",
    user: r#"Suggest improvements to this resume so it better targets the job description.

Resume:
{resume}

Job Description:
{jobDescription}

Return "improvements": an array of short, self-contained suggestions, most important first.
Each suggestion should name what to change and why it matters for this role."#,
};

pub const INTERVIEW_SCRIPT: PromptTemplate = PromptTemplate {
    system: "You prepare realistic mock interviews for job candidates. \
        Respond with a single JSON object that matches the requested schema. \
        Do not add text outside the JSON object.",
    user: r#"Write a mock interview for the role below, taking the candidate's skills into account.

Job Description:
{jobDescription}

Candidate Skills:
{resumeSkills}

Return "questions": an array of interview questions in the order they should be asked.
Cover technical skills, behavioral competencies and cultural fit. One question per item."#,
};

pub const TAILORING: PromptTemplate = PromptTemplate {
    system: "You are an expert resume writer and career coach. \
        Respond with a single JSON object that matches the requested schema. \
        Do not add text outside the JSON object.",
    user: r#"Rewrite the resume so it is optimized for the job description.

Keep the original's content and structure, and never invent experience. Emphasize the key skills
where the original supports them, keep the tone professional and concise, and prioritize what
the target role asks for.

Original Resume:
{originalResume}

Job Description:
{jobDescription}

Key Skills to Emphasize:
{keySkills}

Return "tailoredResumeText": the full text of the tailored resume."#,
};

pub const RESPONSE_ANALYSIS: PromptTemplate = PromptTemplate {
    system: "You are an expert interview coach. \
        Respond with a single JSON object that matches the requested schema. \
        Do not add text outside the JSON object.",
    user: r#"Analyze the candidate's transcribed answer to an interview question.

Interview Question:
"{interviewQuestion}"

Candidate's Transcribed Response:
"{transcribedResponse}"

Return:
- "communicationStyle": clarity, conciseness, tone and professionalism
- "confidenceLevel": the confidence the wording conveys
- "contentRelevance": how directly and thoroughly the answer addresses the question
- "overallFeedback": constructive feedback with specific, actionable suggestions"#,
};

/// The templates for all registered operations.
pub fn library() -> PromptLibrary {
    PromptLibrary::new()
        .with(ResumeFitAnalysis::NAME, RESUME_FIT)
        .with(ResumeImprovementSuggestions::NAME, IMPROVEMENTS)
        .with(InterviewScriptGeneration::NAME, INTERVIEW_SCRIPT)
        .with(ResumeTailoring::NAME, TAILORING)
        .with(SpokenResponseAnalysis::NAME, RESPONSE_ANALYSIS)
}
