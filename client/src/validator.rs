use gridle_core::{Coord, Verdict};
use gridle_protocol::{self as protocol, ServerReply};

use crate::ClientError;

/// A scored reply from the validator.
#[derive(Clone, Debug, PartialEq)]
pub struct VerdictReply {
    pub verdict: Verdict,
    /// The server dropped the session (it does so after a winning guess).
    pub session_closed: bool,
}

/// The validator seam: one guess in, one verdict out.
///
/// Single-flight by construction: `submit` borrows the validator mutably
/// and the session awaits it before accepting further events, so a second
/// submission can never start while one is outstanding.
#[allow(async_fn_in_trait)]
pub trait Validator {
    async fn submit(&mut self, guess: &str) -> Result<VerdictReply, ClientError>;
}

/// Talks to the remote validator over HTTP: exactly one GET per submission,
/// the session token attached as a `SESSIONID` cookie, no retries.
#[derive(Clone, Debug)]
pub struct HttpValidator {
    http: reqwest::Client,
    endpoint: String,
    session: String,
    width: Coord,
}

impl HttpValidator {
    pub fn new(endpoint: impl Into<String>, session: impl Into<String>, width: Coord) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            session: session.into(),
            width,
        }
    }
}

impl Validator for HttpValidator {
    async fn submit(&mut self, guess: &str) -> Result<VerdictReply, ClientError> {
        log::debug!("submitting guess {:?} to {}", guess, self.endpoint);

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("guess", guess)])
            .header(
                reqwest::header::COOKIE,
                format!("SESSIONID={}", self.session),
            )
            .send()
            .await?;
        let body = response.text().await?;

        match protocol::parse_reply(&body)? {
            ServerReply::Invalid(reason) => Err(ClientError::InvalidGuess(reason)),
            ServerReply::Verdict {
                symbols,
                session_closed,
                attempts,
            } => {
                let verdict = Verdict::from_symbols(&symbols, self.width).map_err(|_| {
                    ClientError::MalformedResponse(format!("bad verdict string {:?}", symbols))
                })?;
                log::debug!("verdict {}, attempts so far: {:?}", verdict, attempts);
                if session_closed {
                    log::info!("server closed the session");
                }
                Ok(VerdictReply {
                    verdict,
                    session_closed,
                })
            }
        }
    }
}
