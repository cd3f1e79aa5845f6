use crate::{Error, Result};
use serde_json::Value;
use std::collections::HashMap;

/// A system prompt plus a user prompt with `{field}` placeholders.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub system: &'static str,
    pub user: &'static str,
}

impl PromptTemplate {
    /// Substitutes every top-level field of `input` into the user prompt.
    ///
    /// Strings are inserted verbatim, string lists become `- item` lines.
    pub fn render(&self, input: &Value) -> Result<String> {
        let fields = input
            .as_object()
            .ok_or_else(|| Error::invoker("prompt input must be a JSON object"))?;

        // Single pass, so substituted text is never scanned for placeholders.
        let mut rendered = String::with_capacity(self.user.len());
        let mut rest = self.user;
        while let Some(open) = rest.find('{') {
            rendered.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) if fields.contains_key(&after[..close]) => {
                    rendered.push_str(&render_value(&fields[&after[..close]]));
                    rest = &after[close + 1..];
                }
                _ => {
                    rendered.push('{');
                    rest = after;
                }
            }
        }
        rendered.push_str(rest);

        Ok(rendered)
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) if items.is_empty() => "(none provided)".to_string(),
        Value::Array(items) => items
            .iter()
            .map(|item| format!("- {}", render_value(item)))
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Prompt templates keyed by operation name.
#[derive(Debug, Clone, Default)]
pub struct PromptLibrary {
    templates: HashMap<&'static str, PromptTemplate>,
}

impl PromptLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, operation: &'static str, template: PromptTemplate) -> Self {
        self.templates.insert(operation, template);
        self
    }

    pub fn get(&self, operation: &str) -> Result<&PromptTemplate> {
        self.templates
            .get(operation)
            .ok_or_else(|| Error::invoker(format!("No prompt registered for operation '{operation}'")))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const TEMPLATE: PromptTemplate = PromptTemplate {
        system: "You are a recruiter.",
        user: "Job:\n{jobDescription}\n\nSkills:\n{resumeSkills}",
    };

    #[test]
    fn test_render_text_and_list_fields() {
        let input = json!({
            "jobDescription": "Backend engineer, Rust and Postgres",
            "resumeSkills": ["Rust", "SQL"]
        });

        assert_eq!(
            TEMPLATE.render(&input).unwrap(),
            "Job:\nBackend engineer, Rust and Postgres\n\nSkills:\n- Rust\n- SQL"
        );
    }

    #[test]
    fn test_render_empty_list_is_explicit() {
        let input = json!({"jobDescription": "Anything", "resumeSkills": []});
        assert!(TEMPLATE.render(&input).unwrap().ends_with("Skills:\n(none provided)"));
    }

    #[test]
    fn test_render_leaves_braces_in_values_alone() {
        let input = json!({
            "jobDescription": "Write {resumeSkills} in JSON: {\"a\": 1}",
            "resumeSkills": ["Go"]
        });

        assert_eq!(
            TEMPLATE.render(&input).unwrap(),
            "Job:\nWrite {resumeSkills} in JSON: {\"a\": 1}\n\nSkills:\n- Go"
        );
    }

    #[test]
    fn test_render_rejects_non_object_input() {
        assert!(TEMPLATE.render(&json!(["not", "an", "object"])).is_err());
    }

    #[test]
    fn test_library_lookup() {
        let library = PromptLibrary::new().with("interview_script_generation", TEMPLATE);

        assert_eq!(library.len(), 1);
        assert!(library.get("interview_script_generation").is_ok());

        let err = library.get("resume_tailoring").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invoker error: No prompt registered for operation 'resume_tailoring'"
        );
    }
}
