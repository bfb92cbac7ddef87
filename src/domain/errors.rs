// src/domain/errors.rs
use std::fmt;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{attribute} can not be \"{text}\"")]
    BlankSlug { attribute: String, text: String },
    #[error("{attribute} can not be \"{text}\"")]
    ReservedSlug { attribute: String, text: String },
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("could not assign a sequence to slug '{name}' after {attempts} attempts")]
    SequenceAssignment { name: String, attempts: u32 },
    #[error(transparent)]
    NotFound(#[from] RecordNotFound),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    /// True for the errors that describe a record-level validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::BlankSlug { .. } | Self::ReservedSlug { .. }
        )
    }
}

/// What the caller told us about the slug scope when a lookup missed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScopeHint {
    #[default]
    NotApplicable,
    Supplied(String),
    Missing,
}

/// A single or batch lookup that did not produce the records asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordNotFound {
    pub record_type: String,
    pub tokens: Vec<String>,
    pub expected: usize,
    pub actual: usize,
    pub scope_hint: ScopeHint,
    /// Raised by a batch lookup, even one holding a single token.
    pub batch: bool,
}

impl RecordNotFound {
    pub fn single(record_type: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            record_type: record_type.into(),
            tokens: vec![token.into()],
            expected: 1,
            actual: 0,
            scope_hint: ScopeHint::NotApplicable,
            batch: false,
        }
    }

    pub fn batch(
        record_type: impl Into<String>,
        tokens: Vec<String>,
        expected: usize,
        actual: usize,
    ) -> Self {
        Self {
            record_type: record_type.into(),
            tokens,
            expected,
            actual,
            scope_hint: ScopeHint::NotApplicable,
            batch: true,
        }
    }

    pub fn with_scope_hint(mut self, hint: ScopeHint) -> Self {
        self.scope_hint = hint;
        self
    }
}

impl fmt::Display for RecordNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.batch {
            write!(
                f,
                "Couldn't find all {} records with IDs ({}) (found {} results, but was looking for {})",
                self.record_type,
                self.tokens.join(", "),
                self.actual,
                self.expected
            )?;
        } else {
            write!(
                f,
                "Couldn't find {} with ID={}",
                self.record_type,
                self.tokens.join(", ")
            )?;
        }

        match &self.scope_hint {
            ScopeHint::NotApplicable => Ok(()),
            ScopeHint::Supplied(scope) => write!(f, " and scope={scope}"),
            ScopeHint::Missing => f.write_str("; expected scope but got none"),
        }
    }
}

impl std::error::Error for RecordNotFound {}
