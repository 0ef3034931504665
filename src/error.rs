/// Error types for the tracker operations
use thiserror::Error;

/// Everything a menu operation can fail with. The display text doubles as
/// the user-facing message, so the shell only has to paint it red.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The lookup service could not be asked: connection failure, non-2xx
    /// status, or a body that was not the expected JSON
    #[error("Network error: {0}")]
    Transport(String),

    /// The lookup service answered but refused the query (reserved range,
    /// invalid address); carries the service's message verbatim
    #[error("Error fetching details: {0}")]
    Lookup(String),

    /// No stored record carries the requested IP
    #[error("No data found for IP: {0}")]
    RecordNotFound(String),

    /// Update or sort targeted a name outside the record's eight fields
    #[error("Invalid field: {0}")]
    InvalidField(String),

    /// A numeric field was given something that is neither a number nor
    /// the N/A sentinel
    #[error("Invalid value for {field}: {value} (expected a number or N/A)")]
    InvalidValue {
        field: &'static str,
        value: String,
    },

    /// The requested ordering is undefined for the current records
    #[error("Error while arranging data: {0}")]
    SortFailure(String),

    /// Chart requested while the store is empty
    #[error("No data available for graphical representation.")]
    NoData,

    /// Load pointed at a path with no saved data
    #[error("No stored data found in {0}.")]
    FileNotFound(String),

    /// Reading or writing the data file failed
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// The data file exists but does not parse as JSON
    #[error("Malformed data file: {0}")]
    Parse(#[from] serde_json::Error),
}
