//! Declared field layouts for operation inputs and outputs.
//!
//! A [`Shape`] is checked locally against a JSON value and rendered to the
//! JSON Schema that is sent to the model as the structured-output contract.

use serde_json::{Map, Value, json};

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text { non_empty: bool },
    TextList,
    Integer { min: i64, max: i64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub fields: Vec<Field>,
}

impl Shape {
    pub fn object() -> Self {
        Self { fields: Vec::new() }
    }

    /// Free text, possibly empty.
    pub fn text(self, name: &'static str, description: &'static str) -> Self {
        self.field(name, FieldKind::Text { non_empty: false }, description)
    }

    /// Text that must contain at least one non-whitespace character.
    pub fn required_text(self, name: &'static str, description: &'static str) -> Self {
        self.field(name, FieldKind::Text { non_empty: true }, description)
    }

    pub fn text_list(self, name: &'static str, description: &'static str) -> Self {
        self.field(name, FieldKind::TextList, description)
    }

    pub fn integer(self, name: &'static str, min: i64, max: i64, description: &'static str) -> Self {
        self.field(name, FieldKind::Integer { min, max }, description)
    }

    fn field(mut self, name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        self.fields.push(Field {
            name,
            kind,
            description,
        });
        self
    }

    /// Checks `value` against the declared fields. Extra fields are tolerated.
    pub fn validate(&self, value: &Value) -> Result<(), String> {
        let object = value
            .as_object()
            .ok_or_else(|| format!("expected a JSON object, got {}", kind_of(value)))?;

        for field in &self.fields {
            let Some(found) = object.get(field.name) else {
                return Err(format!("missing field `{}`", field.name));
            };
            field.check(found)?;
        }

        Ok(())
    }

    /// Rewrites whole-number floats in integer fields (`85.0`) as integers.
    /// Expects a value that already passed [`Shape::validate`].
    pub fn normalize(&self, value: &mut Value) {
        let Some(object) = value.as_object_mut() else {
            return;
        };

        for field in &self.fields {
            if let FieldKind::Integer { .. } = field.kind
                && let Some(slot) = object.get_mut(field.name)
                && let Some(number) = whole_number(slot)
            {
                *slot = Value::from(number);
            }
        }
    }

    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        for field in &self.fields {
            properties.insert(field.name.to_string(), field.schema());
        }

        json!({
            "type": "object",
            "properties": properties,
            "required": self.fields.iter().map(|f| f.name).collect::<Vec<_>>(),
            "additionalProperties": false,
        })
    }
}

impl Field {
    fn check(&self, value: &Value) -> Result<(), String> {
        match &self.kind {
            FieldKind::Text { non_empty } => {
                let text = value.as_str().ok_or_else(|| {
                    format!("field `{}` must be a string, got {}", self.name, kind_of(value))
                })?;
                if *non_empty && text.trim().is_empty() {
                    return Err(format!("field `{}` must not be empty", self.name));
                }
            }
            FieldKind::TextList => {
                let items = value.as_array().ok_or_else(|| {
                    format!("field `{}` must be an array, got {}", self.name, kind_of(value))
                })?;
                if let Some(pos) = items.iter().position(|item| !item.is_string()) {
                    return Err(format!(
                        "field `{}` must contain only strings (item {} is {})",
                        self.name,
                        pos,
                        kind_of(&items[pos])
                    ));
                }
            }
            FieldKind::Integer { min, max } => {
                let number = whole_number(value).ok_or_else(|| {
                    format!("field `{}` must be an integer, got {}", self.name, kind_of(value))
                })?;
                if number < *min || number > *max {
                    return Err(format!(
                        "field `{}` is {}, outside {}..={}",
                        self.name, number, min, max
                    ));
                }
            }
        }
        Ok(())
    }

    fn schema(&self) -> Value {
        match &self.kind {
            FieldKind::Text { non_empty: true } => json!({
                "type": "string",
                "minLength": 1,
                "description": self.description,
            }),
            FieldKind::Text { non_empty: false } => json!({
                "type": "string",
                "description": self.description,
            }),
            FieldKind::TextList => json!({
                "type": "array",
                "items": { "type": "string" },
                "description": self.description,
            }),
            FieldKind::Integer { min, max } => json!({
                "type": "integer",
                "minimum": min,
                "maximum": max,
                "description": self.description,
            }),
        }
    }
}

/// Integers, and floats with no fractional part that fit in an `i64`.
fn whole_number(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() < 9.0e15)
            .map(|f| f as i64)
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
