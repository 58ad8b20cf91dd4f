use thiserror::Error;

/// Failures crossing the validator boundary. All of them are caught in the
/// session and turned into a status line; none of them unwinds the grid.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure. Not retried automatically; the user triggers a
    /// fresh submission instead.
    #[error("could not reach the validator: {0}")]
    Network(#[from] reqwest::Error),
    /// The validator answered, but not with anything resembling a verdict.
    #[error("malformed validator response: {0}")]
    MalformedResponse(String),
    /// The validator rejected the word itself; carries the server's own
    /// wording, which is shown to the user verbatim.
    #[error("{0}")]
    InvalidGuess(String),
}

impl From<gridle_protocol::ProtocolError> for ClientError {
    fn from(err: gridle_protocol::ProtocolError) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}
