use serde::{Deserialize, Serialize};

/// Body of `POST /is-not-active/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchRequest {
    #[serde(default)]
    pub inns: Option<Vec<String>>,
}

/// Reply of the registry for a single identifier.
///
/// A non-empty `date` means the identifier is flagged as inactive.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RegistryReply {
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: RegistryErrors,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RegistryErrors {
    #[serde(default, deserialize_with = "null_as_default")]
    pub inn: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl RegistryReply {
    /// First registry-reported error for the identifier, if any.
    pub fn first_error(&self) -> Option<&str> {
        self.errors.inn.first().map(String::as_str)
    }
}

/// Per-identifier result of a registry lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Success { inn: String, date: String },
    RegistryError { inn: String, message: String },
    TransportError { inn: String, message: String },
}

impl LookupOutcome {
    pub fn inn(&self) -> &str {
        match self {
            LookupOutcome::Success { inn, .. }
            | LookupOutcome::RegistryError { inn, .. }
            | LookupOutcome::TransportError { inn, .. } => inn,
        }
    }

    pub fn is_not_active(&self) -> bool {
        matches!(self, LookupOutcome::Success { date, .. } if !date.is_empty())
    }
}

/// Wire form of a [`LookupOutcome`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub inn: String,
    pub is_not_active: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error: String,
}

impl From<LookupOutcome> for CheckResult {
    fn from(outcome: LookupOutcome) -> Self {
        let is_not_active = outcome.is_not_active();
        match outcome {
            LookupOutcome::Success { inn, date } => CheckResult {
                inn,
                is_not_active,
                date,
                error: String::new(),
            },
            LookupOutcome::RegistryError { inn, message }
            | LookupOutcome::TransportError { inn, message } => CheckResult {
                inn,
                is_not_active,
                date: String::new(),
                error: message,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Ok,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResponse {
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub res_list: Option<Vec<CheckResult>>,
}

impl BatchResponse {
    /// Always `Ok`, per-identifier failures live inside `res_list`.
    pub fn ok(outcomes: Vec<LookupOutcome>) -> Self {
        Self {
            status: Status::Ok,
            error: None,
            res_list: Some(outcomes.into_iter().map(CheckResult::from).collect()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            error: Some(message.into()),
            res_list: None,
        }
    }
}
