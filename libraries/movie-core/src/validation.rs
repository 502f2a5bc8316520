//! Movie schema validation
//!
//! Turns an untyped JSON body into a typed `CreateMovie` (full mode) or
//! `UpdateMovie` (partial mode). Every violation found is collected into a
//! `FieldErrors` list rather than stopping at the first one.
//!
//! Unknown keys, including `id`, are ignored. A `null` value is a type
//! error, not an absent field.

use crate::types::{CreateMovie, Genre, UpdateMovie};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Lowest accepted release year
pub const MIN_YEAR: i32 = 1900;
/// Highest accepted release year
pub const MAX_YEAR: i32 = 2024;
/// Lowest accepted rating
pub const MIN_RATE: f64 = 0.0;
/// Highest accepted rating
pub const MAX_RATE: f64 = 10.0;
/// Rating used when a new movie does not carry one
pub const DEFAULT_RATE: f64 = 0.0;

/// Kind of schema violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    InvalidType,
    TooSmall,
    TooBig,
    InvalidString,
    InvalidEnumValue,
}

/// One step of the path to an offending value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{}", index),
        }
    }
}

/// A single field-level validation error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub code: IssueCode,
    pub path: Vec<PathSegment>,
    pub message: String,
}

impl FieldError {
    fn new(code: IssueCode, path: Vec<PathSegment>, message: impl Into<String>) -> Self {
        Self {
            code,
            path,
            message: message.into(),
        }
    }

    /// Top-level field this error belongs to, if any
    pub fn field(&self) -> Option<&str> {
        match self.path.first() {
            Some(PathSegment::Key(key)) => Some(key),
            _ => None,
        }
    }
}

/// All validation errors found in one input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// Whether any error points at `field`
    pub fn mentions(&self, field: &str) -> bool {
        self.0.iter().any(|error| error.field() == Some(field))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            let path: Vec<String> = error.path.iter().map(ToString::to_string).collect();
            if path.is_empty() {
                f.write_str(&error.message)?;
            } else {
                write!(f, "{}: {}", path.join("."), error.message)?;
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Validate a complete movie. All fields are required except `rate`,
/// which defaults to 0.
pub fn validate_movie(input: &Value) -> Result<CreateMovie, FieldErrors> {
    let mut v = Validator::new(input, Mode::Full)?;

    let title = v.title();
    let year = v.year();
    let director = v.string("director", None);
    let duration = v.duration();
    let rate = v.rate();
    let poster = v.poster();
    let genre = v.genres();

    let issues = v.finish();
    match (title, year, director, duration, poster, genre) {
        (Some(title), Some(year), Some(director), Some(duration), Some(poster), Some(genre))
            if issues.is_empty() =>
        {
            Ok(CreateMovie {
                title,
                year,
                director,
                duration,
                rate: rate.unwrap_or(DEFAULT_RATE),
                poster,
                genre,
            })
        }
        _ => Err(issues),
    }
}

/// Validate a partial movie for merge-style updates. Every field is optional
/// and absent fields stay absent; an empty object is accepted.
pub fn validate_partial_movie(input: &Value) -> Result<UpdateMovie, FieldErrors> {
    let mut v = Validator::new(input, Mode::Partial)?;

    let patch = UpdateMovie {
        title: v.title(),
        year: v.year(),
        director: v.string("director", None),
        duration: v.duration(),
        rate: v.rate(),
        poster: v.poster(),
        genre: v.genres(),
    };

    let issues = v.finish();
    if issues.is_empty() {
        Ok(patch)
    } else {
        Err(issues)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Full,
    Partial,
}

#[derive(Debug, Clone, Copy)]
enum Bound {
    Inclusive(f64),
    Exclusive(f64),
}

/// Custom wording for a field's missing / wrong-type errors
#[derive(Debug, Clone, Copy, Default)]
struct Messages {
    required: Option<&'static str>,
    invalid_type: Option<&'static str>,
}

struct Validator<'a> {
    object: &'a Map<String, Value>,
    mode: Mode,
    issues: Vec<FieldError>,
}

impl<'a> Validator<'a> {
    fn new(input: &'a Value, mode: Mode) -> Result<Self, FieldErrors> {
        match input {
            Value::Object(object) => Ok(Self {
                object,
                mode,
                issues: Vec::new(),
            }),
            other => Err(FieldErrors(vec![FieldError::new(
                IssueCode::InvalidType,
                Vec::new(),
                format!("Expected object, received {}", type_name(other)),
            )])),
        }
    }

    fn finish(self) -> FieldErrors {
        FieldErrors(self.issues)
    }

    fn push(&mut self, code: IssueCode, path: Vec<PathSegment>, message: impl Into<String>) {
        self.issues.push(FieldError::new(code, path, message));
    }

    /// Look up `key`, recording a "required" error when it is missing in full mode
    fn lookup(&mut self, key: &str, messages: Messages, required: bool) -> Option<&'a Value> {
        let object = self.object;
        let value = object.get(key);
        if value.is_none() && required && self.mode == Mode::Full {
            self.push(
                IssueCode::InvalidType,
                key_path(key),
                messages.required.unwrap_or("Required"),
            );
        }
        value
    }

    fn type_mismatch(&mut self, key: &str, expected: &str, value: &Value, messages: Messages) {
        let message = messages.invalid_type.map_or_else(
            || format!("Expected {}, received {}", expected, type_name(value)),
            ToString::to_string,
        );
        self.push(IssueCode::InvalidType, key_path(key), message);
    }

    fn string(&mut self, key: &str, messages: Option<Messages>) -> Option<String> {
        let messages = messages.unwrap_or_default();
        let value = self.lookup(key, messages, true)?;
        match value {
            Value::String(s) => Some(s.clone()),
            other => {
                self.type_mismatch(key, "string", other, messages);
                None
            }
        }
    }

    fn number(
        &mut self,
        key: &str,
        integer: bool,
        min: Option<Bound>,
        max: Option<Bound>,
        required: bool,
    ) -> Option<f64> {
        let value = self.lookup(key, Messages::default(), required)?;
        let Some(n) = value.as_f64() else {
            self.type_mismatch(key, "number", value, Messages::default());
            return None;
        };

        let before = self.issues.len();
        if integer && n.fract() != 0.0 {
            self.push(
                IssueCode::InvalidType,
                key_path(key),
                "Expected integer, received float",
            );
        }
        match min {
            Some(Bound::Inclusive(lo)) if n < lo => self.push(
                IssueCode::TooSmall,
                key_path(key),
                format!("Number must be greater than or equal to {}", lo),
            ),
            Some(Bound::Exclusive(lo)) if n <= lo => self.push(
                IssueCode::TooSmall,
                key_path(key),
                format!("Number must be greater than {}", lo),
            ),
            _ => {}
        }
        match max {
            Some(Bound::Inclusive(hi)) if n > hi => self.push(
                IssueCode::TooBig,
                key_path(key),
                format!("Number must be less than or equal to {}", hi),
            ),
            Some(Bound::Exclusive(hi)) if n >= hi => self.push(
                IssueCode::TooBig,
                key_path(key),
                format!("Number must be less than {}", hi),
            ),
            _ => {}
        }

        (self.issues.len() == before).then_some(n)
    }

    fn title(&mut self) -> Option<String> {
        self.string(
            "title",
            Some(Messages {
                required: Some("Movie title is required."),
                invalid_type: Some("Movie title must be a string."),
            }),
        )
    }

    fn year(&mut self) -> Option<i32> {
        self.number(
            "year",
            true,
            Some(Bound::Inclusive(f64::from(MIN_YEAR))),
            Some(Bound::Inclusive(f64::from(MAX_YEAR))),
            true,
        )
        .map(|n| n as i32)
    }

    fn duration(&mut self) -> Option<u32> {
        self.number(
            "duration",
            true,
            Some(Bound::Exclusive(0.0)),
            Some(Bound::Inclusive(f64::from(u32::MAX))),
            true,
        )
        .map(|n| n as u32)
    }

    fn rate(&mut self) -> Option<f64> {
        self.number(
            "rate",
            false,
            Some(Bound::Inclusive(MIN_RATE)),
            Some(Bound::Inclusive(MAX_RATE)),
            false,
        )
    }

    fn poster(&mut self) -> Option<String> {
        let poster = self.string("poster", None)?;
        if url::Url::parse(&poster).is_err() {
            self.push(
                IssueCode::InvalidString,
                key_path("poster"),
                "Poster must be a valid URL",
            );
            return None;
        }
        Some(poster)
    }

    fn genres(&mut self) -> Option<Vec<Genre>> {
        let messages = Messages {
            required: Some("Movie genre is required."),
            invalid_type: Some("Movie genre must be an array of enum Genre."),
        };
        let value = self.lookup("genre", messages, true)?;
        let Value::Array(items) = value else {
            self.type_mismatch("genre", "array", value, messages);
            return None;
        };

        let before = self.issues.len();
        let mut genres = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let path = vec![PathSegment::Key("genre".to_string()), PathSegment::Index(index)];
            match item {
                Value::String(name) => match name.parse::<Genre>() {
                    Ok(genre) => genres.push(genre),
                    Err(_) => self.push(
                        IssueCode::InvalidEnumValue,
                        path,
                        format!(
                            "Invalid enum value. Expected {}, received '{}'",
                            expected_genres(),
                            name
                        ),
                    ),
                },
                other => self.push(
                    IssueCode::InvalidType,
                    path,
                    format!("Expected {}, received {}", expected_genres(), type_name(other)),
                ),
            }
        }

        (self.issues.len() == before).then_some(genres)
    }
}

fn key_path(key: &str) -> Vec<PathSegment> {
    vec![PathSegment::Key(key.to_string())]
}

fn expected_genres() -> String {
    Genre::ALL
        .iter()
        .map(|genre| format!("'{}'", genre))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
