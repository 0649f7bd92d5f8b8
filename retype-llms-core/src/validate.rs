//! Structural validation of a decoded config tree against a [`Shape`].
//!
//! The walk never stops early: every mismatch is recorded as an [`Issue`]
//! so a single run reports all problems in the file.

use std::fmt;

use serde_yaml::Value;

use crate::schema::{Shape, RETYPE_SCHEMA};

/// One step in the location of an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, "{key}"),
            PathSegment::Index(idx) => write!(f, "{idx}"),
        }
    }
}

/// A single schema violation: where it is and what is wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub path: Vec<PathSegment>,
    pub message: String,
}

impl Issue {
    /// Dotted path such as `footer.links.0.iconAlign`, or `<root>`.
    pub fn dotted_path(&self) -> String {
        if self.path.is_empty() {
            return "<root>".to_string();
        }
        self.path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.dotted_path(), self.message)
    }
}

/// Validates `value` against `shape`, returning every issue found.
pub fn validate(value: &Value, shape: &Shape) -> Vec<Issue> {
    let mut walker = Walker::default();
    walker.visit(value, shape);
    walker.issues
}

/// Validates a whole config document against [`RETYPE_SCHEMA`].
///
/// An empty document decodes to `null` and is accepted as `{}`.
pub fn validate_document(value: &Value) -> Vec<Issue> {
    if value.is_null() {
        return Vec::new();
    }
    validate(value, &RETYPE_SCHEMA)
}

#[derive(Default)]
struct Walker {
    path: Vec<PathSegment>,
    issues: Vec<Issue>,
}

impl Walker {
    fn visit(&mut self, value: &Value, shape: &Shape) {
        match shape {
            Shape::String => {
                if !value.is_string() {
                    self.mismatch(shape, value);
                }
            }
            Shape::Bool => {
                if !value.is_bool() {
                    self.mismatch(shape, value);
                }
            }
            Shape::Number => {
                if !value.is_number() {
                    self.mismatch(shape, value);
                }
            }
            Shape::Enum(options) => match value.as_str() {
                Some(s) if options.iter().any(|o| *o == s) => {}
                Some(s) => {
                    let expected = options
                        .iter()
                        .map(|o| format!("'{o}'"))
                        .collect::<Vec<_>>()
                        .join(" | ");
                    self.report(format!(
                        "Invalid enum value. Expected {expected}, received '{s}'"
                    ));
                }
                None => self.mismatch(shape, value),
            },
            Shape::Union(options) => {
                if !options.iter().any(|option| validate(value, option).is_empty()) {
                    self.mismatch(shape, value);
                }
            }
            Shape::Object(fields) => match value {
                Value::Mapping(map) => {
                    for field in fields.iter() {
                        // Absent and explicit `null` both mean "not set".
                        let child = match map.get(field.name) {
                            None | Some(Value::Null) => continue,
                            Some(child) => child,
                        };
                        self.path.push(PathSegment::Key(field.name.to_string()));
                        self.visit(child, &field.shape);
                        self.path.pop();
                    }
                }
                _ => self.mismatch(shape, value),
            },
            Shape::Array(element) => match value {
                Value::Sequence(items) => {
                    for (idx, item) in items.iter().enumerate() {
                        self.path.push(PathSegment::Index(idx));
                        self.visit(item, element);
                        self.path.pop();
                    }
                }
                _ => self.mismatch(shape, value),
            },
        }
    }

    fn mismatch(&mut self, expected: &Shape, value: &Value) {
        self.report(format!(
            "Expected {}, received {}",
            expected.describe(),
            kind_name(value)
        ));
    }

    fn report(&mut self, message: String) {
        self.issues.push(Issue {
            path: self.path.clone(),
            message,
        });
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "array",
        Value::Mapping(_) => "object",
        Value::Tagged(_) => "tagged value",
    }
}
