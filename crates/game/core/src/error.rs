//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (`RegistryError`, `MoveError`, `CombatError`) live
//! next to the operations that produce them. None of them is fatal: every
//! failure leaves the map and registry exactly as they were.

/// Severity level of an error, used for categorization and logging priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Normal game logic refusal, e.g. walking into a wall.
    Recoverable,

    /// The request named something that cannot take part, e.g. attacking a
    /// non-creature. Retrying with the same input will fail again.
    Validation,

    /// Capacity or consistency limit reached inside the core.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all game-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for the variant, used in logs and tests.
    fn error_code(&self) -> &'static str;
}
