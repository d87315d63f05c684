//! Error types for subnet planning.
//!
//! Every fallible operation of the engine returns [`Result<T>`], classifying
//! failures into the three [`SubnetError`] kinds.

/// Errors raised while parsing input or allocating subnets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubnetError {
    /// Malformed dotted-decimal (or binary) address text, or an octet
    /// outside `0..=255`.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// The request itself is unusable: zero subnets, an empty or zero host
    /// requirement, a mask outside `1..=32`, or malformed `address/mask` text.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The requested split cannot fit within the base block.
    #[error("Insufficient address space: {0}")]
    InsufficientAddressSpace(String),
}

/// A specialized Result type for subnet planning.
pub type Result<T> = std::result::Result<T, SubnetError>;
