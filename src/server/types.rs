use crate::{
    operations::{ResponseCritique, TailorResumeInput},
    orchestrator::parse_skill_list,
};
use serde::{Deserialize, Serialize};

pub const MIN_FORM_TEXT_CHARS: usize = 50;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CritiqueResponse {
    pub critique: ResponseCritique,
}

/// Key skills as sent by the browser: either the raw comma-separated text
/// or an already split list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SkillsField {
    List(Vec<String>),
    Csv(String),
}

impl Default for SkillsField {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl SkillsField {
    pub fn into_skills(self) -> Vec<String> {
        match self {
            Self::Csv(raw) => parse_skill_list(&raw),
            Self::List(items) => items
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailorRequest {
    pub original_resume: String,
    pub job_description: String,
    #[serde(default)]
    pub key_skills: SkillsField,
}

impl From<TailorRequest> for TailorResumeInput {
    fn from(request: TailorRequest) -> Self {
        Self {
            original_resume: request.original_resume,
            job_description: request.job_description,
            key_skills: request.key_skills.into_skills(),
        }
    }
}
