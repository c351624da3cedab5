use serde::{Deserialize, Serialize};
use std::fmt;

/// One form entry as persisted in the store.
///
/// Field order matches the on-disk layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub github_link: String,
    pub stopwatch_time: StopwatchTime,
}

impl Submission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        github_link: impl Into<String>,
        stopwatch_time: impl Into<StopwatchTime>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            github_link: github_link.into(),
            stopwatch_time: stopwatch_time.into(),
        }
    }
}

/// Elapsed time exactly as the client sent it.
///
/// Never parsed as a duration. Numbers keep their JSON representation so
/// `90` stays `90` and `1.5` stays `1.5` across a save/load cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StopwatchTime {
    Text(String),
    Number(serde_json::Number),
}

impl From<String> for StopwatchTime {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for StopwatchTime {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<serde_json::Number> for StopwatchTime {
    fn from(value: serde_json::Number) -> Self {
        Self::Number(value)
    }
}

impl From<u64> for StopwatchTime {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl fmt::Display for StopwatchTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{}", number),
        }
    }
}
