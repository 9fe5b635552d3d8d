//! Common error infrastructure for game-core.
//!
//! Player-facing rejections are modelled by [`ActionError`]. Every variant maps
//! onto one of five [`ErrorKind`]s, and only [`ErrorKind::InvalidCommand`]
//! leaves the raid countdown untouched. Load-time errors live next to the code
//! that produces them (`OracleError`, `ProfileError`).

use crate::state::Weight;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: the player can retry with a different action
/// - **Validation**: the input itself was malformed
/// - **Internal**: unexpected state inconsistency
/// - **Fatal**: state cannot be trusted any more
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable | Self::Validation)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
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

/// Coarse classification of action failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// Unrecognized verb, missing argument, or a command illegal in the current phase.
    InvalidCommand,
    /// Adding the item would exceed the weight capacity.
    CapacityExceeded,
    /// The item type does not fit the requested slot or use.
    IllegalEquip,
    /// No match (or more than one) for the given name, or nowhere to extract.
    NoTarget,
    /// Not enough stamina or money.
    InsufficientResource,
}

/// Why an action was rejected.
///
/// Rejections never mutate state. Apart from [`ActionError::InvalidCommand`]
/// they still count as an attempted action and advance the raid countdown.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("invalid command: {reason}")]
    InvalidCommand { reason: String },

    #[error("{item} is too heavy to carry (capacity {capacity})")]
    CapacityExceeded { item: String, capacity: Weight },

    #[error("{item} cannot be equipped")]
    IllegalEquip { item: String },

    #[error("{item} cannot be used")]
    NotUsable { item: String },

    #[error("there is no '{query}' here")]
    NoTarget { query: String },

    #[error("'{query}' is ambiguous: {}", candidates.join(", "))]
    Ambiguous {
        query: String,
        candidates: Vec<String>,
    },

    #[error("this is not an extraction point")]
    NotExtractionPoint,

    #[error("cannot extract while enemies are present")]
    ExtractionBlocked,

    #[error("too exhausted: {required} stamina required, {available} available")]
    InsufficientStamina { required: u32, available: u32 },

    #[error("not enough roubles: {price} required, {balance} available")]
    InsufficientFunds { price: u32, balance: u32 },
}

impl ActionError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidCommand {
            reason: reason.into(),
        }
    }

    pub fn no_target(query: impl Into<String>) -> Self {
        Self::NoTarget {
            query: query.into(),
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCommand { .. } => ErrorKind::InvalidCommand,
            Self::CapacityExceeded { .. } => ErrorKind::CapacityExceeded,
            Self::IllegalEquip { .. } | Self::NotUsable { .. } => ErrorKind::IllegalEquip,
            Self::NoTarget { .. }
            | Self::Ambiguous { .. }
            | Self::NotExtractionPoint
            | Self::ExtractionBlocked => ErrorKind::NoTarget,
            Self::InsufficientStamina { .. } | Self::InsufficientFunds { .. } => {
                ErrorKind::InsufficientResource
            }
        }
    }

    /// Whether the failed attempt still costs one raid action.
    pub const fn consumes_turn(&self) -> bool {
        !matches!(self.kind(), ErrorKind::InvalidCommand)
    }
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self.kind() {
            ErrorKind::InvalidCommand => ErrorSeverity::Validation,
            _ => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCommand { .. } => "ACTION_INVALID_COMMAND",
            Self::CapacityExceeded { .. } => "ACTION_CAPACITY_EXCEEDED",
            Self::IllegalEquip { .. } => "ACTION_ILLEGAL_EQUIP",
            Self::NotUsable { .. } => "ACTION_NOT_USABLE",
            Self::NoTarget { .. } => "ACTION_NO_TARGET",
            Self::Ambiguous { .. } => "ACTION_AMBIGUOUS_TARGET",
            Self::NotExtractionPoint => "ACTION_NOT_EXTRACTION_POINT",
            Self::ExtractionBlocked => "ACTION_EXTRACTION_BLOCKED",
            Self::InsufficientStamina { .. } => "ACTION_INSUFFICIENT_STAMINA",
            Self::InsufficientFunds { .. } => "ACTION_INSUFFICIENT_FUNDS",
        }
    }
}
