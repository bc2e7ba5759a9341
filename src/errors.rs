use thiserror::Error;

/// A result type for DOE sampling errors
pub type Result<T> = std::result::Result<T, DoeError>;

/// An error raised while generating an experiment design
///
/// Every error is a deterministic function of the request parameters:
/// the library performs no I/O, so there is no transient failure to retry.
#[derive(Error, Debug)]
pub enum DoeError {
    /// When caller-supplied parameters violate an invariant,
    /// the message names the offending field
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// When the candidate space would outgrow the configured ceiling
    #[error("Resource exceeded: candidate space holds {size} points, ceiling is {limit}")]
    ResourceExceeded {
        /// Number of points the requested grid would enumerate
        size: u128,
        /// Configured ceiling on the candidate space size
        limit: usize,
    },
}
