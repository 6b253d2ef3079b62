//! Use-case response carrier.
//!
//! An explicit result struct returned by the use case rather than a
//! caller-supplied mutable sink, so outcomes are plain values under test.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::errors::ApplicationError;

/// Outcome of a use-case invocation.
///
/// Pending until the use case settles it; failed and succeeded are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Failed,
    Succeeded,
}

/// Response populated by a use case: terminal success/failure status, a
/// field-keyed error collection and a named data payload.
#[derive(Debug, Clone, Serialize)]
pub struct UseCaseResponse {
    status: Status,
    errors: BTreeMap<String, ApplicationError>,
    data: BTreeMap<String, Value>,
}

impl Default for UseCaseResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl UseCaseResponse {
    /// A neutral response, neither failed nor succeeded.
    pub fn new() -> Self {
        Self {
            status: Status::Pending,
            errors: BTreeMap::new(),
            data: BTreeMap::new(),
        }
    }

    /// Settle the response as failed. No-op once a terminal state is reached.
    pub fn set_as_failed(&mut self) {
        if self.status == Status::Pending {
            self.status = Status::Failed;
        }
    }

    /// Settle the response as succeeded. No-op once a terminal state is reached.
    pub fn set_as_success(&mut self) {
        if self.status == Status::Pending {
            self.status = Status::Succeeded;
        }
    }

    /// Attach a named error.
    pub fn add_error(&mut self, key: impl Into<String>, error: ApplicationError) {
        self.errors.insert(key.into(), error);
    }

    /// Attach a named data entry.
    pub fn add_data(&mut self, key: impl Into<String>, value: Value) {
        self.data.insert(key.into(), value);
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Succeeded
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<String, ApplicationError> {
        &self.errors
    }

    pub fn error(&self, key: &str) -> Option<&ApplicationError> {
        self.errors.get(key)
    }

    pub fn data(&self) -> &BTreeMap<String, Value> {
        &self.data
    }
}
