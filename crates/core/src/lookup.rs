use serde::Serialize;

/// Outcome of a single-record lookup.
///
/// Absence is a normal answer, serialized as `{"error": "..."}` next to the
/// successful shape, so agents can tell "nothing found" from "request failed".
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Lookup<T> {
    Found(T),
    NotFound { error: String },
}

impl<T> Lookup<T> {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            error: message.into(),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}
