//! Input checks shared by the submission handlers.

use serde::Deserialize;
use serde_json::Value;
use submission_store::{StopwatchTime, Submission};

use crate::errors::AppError;

/// Parses a record index with leading-integer semantics.
///
/// Leading whitespace and an optional sign are accepted, then the leading run
/// of ASCII digits is taken and anything after it is ignored. Returns `None`
/// when there are no digits or the value is negative. A run too large for
/// `usize` saturates, which callers then treat as out of bounds.
pub fn parse_index(raw: &str) -> Option<usize> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = unsigned
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }

    let index = unsigned[..digits_len]
        .bytes()
        .try_fold(0usize, |acc, digit| {
            acc.checked_mul(10)?.checked_add(usize::from(digit - b'0'))
        })
        .unwrap_or(usize::MAX);

    if negative && index != 0 {
        return None;
    }
    Some(index)
}

/// Values of every `key` pair in a decoded query string, in order.
pub fn query_values<'a>(
    params: &'a [(String, String)],
    key: &'a str,
) -> impl Iterator<Item = &'a str> + 'a {
    params
        .iter()
        .filter(move |(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}

/// Like [`parse_index`], but a missing or invalid value becomes a 400.
pub fn require_index(raw: Option<&str>) -> Result<usize, AppError> {
    raw.and_then(parse_index).ok_or_else(AppError::invalid_index)
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingField,

    #[error("Field `{0}` must be a string")]
    NotAString(&'static str),

    #[error("Field `stopwatch_time` must be a string or number")]
    InvalidStopwatchTime,
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::bad_request(err.to_string())
    }
}

/// Request body for submit and update before any checks are applied.
///
/// Fields stay as raw JSON so presence can be judged on truthiness rather
/// than on type.
#[derive(Debug, Default, Deserialize)]
pub struct SubmissionInput {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub phone: Option<Value>,
    pub github_link: Option<Value>,
    pub stopwatch_time: Option<Value>,
}

impl SubmissionInput {
    /// Checks every field and builds the record to persist.
    ///
    /// Presence is checked for all five fields before any type check, so a
    /// body with one missing field always reports the missing field.
    /// A numeric `stopwatch_time` of zero counts as missing.
    pub fn validate(self) -> Result<Submission, ValidationError> {
        let fields = [
            &self.name,
            &self.email,
            &self.phone,
            &self.github_link,
            &self.stopwatch_time,
        ];
        if fields.iter().any(|field| !is_present(field)) {
            return Err(ValidationError::MissingField);
        }

        Ok(Submission {
            name: text_field("name", self.name)?,
            email: text_field("email", self.email)?,
            phone: text_field("phone", self.phone)?,
            github_link: text_field("github_link", self.github_link)?,
            stopwatch_time: stopwatch_field(self.stopwatch_time)?,
        })
    }
}

/// A field is present unless it is absent or holds a falsy JSON value.
fn is_present(value: &Option<Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0),
        Some(_) => true,
    }
}

fn text_field(name: &'static str, value: Option<Value>) -> Result<String, ValidationError> {
    match value {
        Some(Value::String(s)) => Ok(s),
        _ => Err(ValidationError::NotAString(name)),
    }
}

fn stopwatch_field(value: Option<Value>) -> Result<StopwatchTime, ValidationError> {
    match value {
        Some(Value::String(s)) => Ok(StopwatchTime::Text(s)),
        Some(Value::Number(n)) => Ok(StopwatchTime::Number(n)),
        _ => Err(ValidationError::InvalidStopwatchTime),
    }
}
