/// A draft rule violation. Local to the client, never sent over the wire;
/// the `Display` string is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please select an elder to receive care")]
    MissingElder,

    #[error("Please select a date")]
    MissingDate,

    #[error("Please select a time")]
    MissingTime,

    #[error("Please select a duration")]
    MissingDuration,
}

/// A failed call to one of the collaborator services.
///
/// `Service` carries the message the service reported; `Network` hides the
/// transport detail behind a generic retry message but keeps it for logs.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("{0}")]
    Service(String),

    #[error("Network error. Please try again.")]
    Network(String),
}

impl RequestError {
    /// The transport-level detail, if any. Display stays user-facing.
    pub fn detail(&self) -> &str {
        match self {
            RequestError::Service(message) => message,
            RequestError::Network(detail) => detail,
        }
    }
}
