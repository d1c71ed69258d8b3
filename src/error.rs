//! Error types for the Chaum-Pedersen engine and its shells.

/// Main error types for the library.
///
/// A proof that fails verification is not an error: verifiers report it as
/// `false`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A hex-encoded group constant could not be decoded.
    #[error("Failed to decode group parameter '{label}': {source}")]
    ParameterDecode {
        /// Name of the constant being decoded.
        label: &'static str,
        /// Underlying hex error.
        #[source]
        source: hex::FromHexError,
    },

    /// Group parameters violate a structural invariant.
    #[error("Invalid group parameters: {0}")]
    InvalidParams(String),

    /// A nonce, challenge or response lies outside `[0, q)`.
    #[error("Scalar out of range: {0}")]
    InvalidScalarRange(String),

    /// A textual scalar could not be parsed.
    #[error("Invalid scalar input: {0}")]
    ScalarParse(String),

    /// A serialized proof transcript is malformed.
    #[error("Malformed proof: {0}")]
    MalformedProof(String),

    /// The username already has registered credentials.
    #[error("User '{0}' already registered")]
    AlreadyRegistered(String),

    /// The claimed value does not reach the threshold being proven.
    #[error("Value is below the required threshold")]
    BelowThreshold,

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using the library's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
