use schema::EnemyKind;
use std::fmt;

/// Errors from the enemy roster, the engine's only external data dependency.
/// The battle engine itself has no error type: an enemy is only constructed
/// after the roster has resolved valid stats, and phase-contract violations
/// are caller bugs surfaced as panics rather than recoverable errors.
#[derive(Debug)]
pub enum RosterError {
    /// No archetype data loaded for this enemy kind
    UnknownKind(EnemyKind),
    /// Archetype exists but its level table is empty
    NoLevelData(EnemyKind),
    /// A data file could not be read
    Io(std::io::Error),
    /// A data file could not be parsed as RON
    Parse(ron::error::SpannedError),
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::UnknownKind(kind) => write!(f, "No roster data for enemy kind: {}", kind),
            RosterError::NoLevelData(kind) => write!(f, "Empty level table for enemy kind: {}", kind),
            RosterError::Io(err) => write!(f, "Roster data I/O error: {}", err),
            RosterError::Parse(err) => write!(f, "Malformed roster data: {}", err),
        }
    }
}

impl std::error::Error for RosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterError::Io(err) => Some(err),
            RosterError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RosterError {
    fn from(err: std::io::Error) -> Self {
        RosterError::Io(err)
    }
}

impl From<ron::error::SpannedError> for RosterError {
    fn from(err: ron::error::SpannedError) -> Self {
        RosterError::Parse(err)
    }
}

/// Type alias for Results using RosterError
pub type RosterResult<T> = Result<T, RosterError>;
