use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enum column holds a value the domain layer does not recognize.
    ///
    /// Status and severity columns are persisted as strings; this fires when a
    /// row carries a value outside the known set. Results in a 500 Internal
    /// Server Error with a generic message returned to the client.
    #[error("Unknown {field} value '{value}' stored in database")]
    UnknownEnumValue {
        /// The column the value came from
        field: &'static str,
        /// The unrecognized stored value
        value: String,
    },
}
