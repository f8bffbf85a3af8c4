//! Common error infrastructure for spell-core.
//!
//! Domain errors ([`crate::SpellError`], [`crate::OracleError`]) live next to
//! the code that raises them; this module holds the shared classification.
//!
//! Errors are values, never log lines. Callers that want an operator-facing
//! diagnostic log the error themselves.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: inconsistent game data that requires investigation
/// - **Fatal**: a required collaborator is missing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Examples: negative level, header index out of range
    Validation,

    /// Examples: spell without headers, projectile missing from the catalog
    Internal,

    /// Examples: oracle not wired into the environment
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates broken data or wiring.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all spell-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by who must act: caller input, game data, or wiring
/// - Error codes are stable strings suitable for log filtering
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
