//! Error types for the ledger and its browser bindings.

use std::fmt;

/// A transaction field that can fail validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Amount,
    /// No income/expense modal was open
    Kind,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Amount => "amount",
            Field::Kind => "type",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn join_fields(fields: &[Field]) -> String {
    fields.iter().map(Field::as_str).collect::<Vec<_>>().join(", ")
}

/// One or more form fields were rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {}", join_fields(.fields))]
pub struct ValidationError {
    pub fields: Vec<Field>,
}

impl ValidationError {
    pub fn has(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }
}

/// The key-value store refused or could not take a write.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,

    /// The host rejected the write, e.g. because the quota is exhausted.
    #[error("storage rejected the write: {0}")]
    Rejected(String),

    #[error("could not encode transactions: {0}")]
    Encode(String),
}

/// Why appending a transaction failed. The store is unchanged in every case.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppendError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("could not save transaction: {0}")]
    Persist(#[from] StorageError),
}

impl AppendError {
    /// Short text for the error toast
    pub fn user_message(&self) -> String {
        match self {
            AppendError::Invalid(invalid) => format!("Please check: {}", join_fields(&invalid.fields)),
            AppendError::Persist(_) => "Could not save the transaction".to_string(),
        }
    }
}

/// Failures reaching browser APIs or DOM nodes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BrowserError {
    #[error("missing element: {0}")]
    MissingElement(&'static str),

    #[error("{0} is not available")]
    MissingApi(&'static str),

    #[error("{api} failed: {message}")]
    Js { api: &'static str, message: String },
}

impl BrowserError {
    pub fn js(api: &'static str, value: wasm_bindgen::JsValue) -> Self {
        BrowserError::Js {
            api,
            message: value.as_string().unwrap_or_else(|| format!("{:?}", value)),
        }
    }
}
