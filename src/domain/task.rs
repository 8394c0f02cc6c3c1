use std::fmt;

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Server-assigned identifier. The client never interprets it, it only
/// echoes it back in paths and bodies.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum TaskId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Number(n) => write!(f, "{}", n),
            TaskId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for TaskId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    /// Fields the service adds (e.g. the owner) are kept so updates send the
    /// full record back.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Task {
    pub fn new(id: TaskId, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            title: title.into(),
            completed,
            extra: serde_json::Map::new(),
        }
    }

    /// The record sent back to the service to flip the completion flag.
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// Body of a task creation request.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: TaskTitle,
    pub completed: bool,
}

impl NewTask {
    pub fn new(title: TaskTitle) -> Self {
        Self {
            title,
            completed: false,
        }
    }
}

/// A title the task form would accept: anything but the empty string.
#[derive(Display, Serialize, Debug, Clone, PartialEq, Eq)]
#[display(fmt = "{}", _0)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TryFrom<String> for TaskTitle {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err("title is empty".into());
        }

        Ok(Self(value))
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
