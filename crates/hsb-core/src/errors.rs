/// Core error type for the homework status bot.
///
/// Adapter crates map their specific errors into this type so the poll loop
/// can handle every failure at its single recovery boundary. No variant is
/// fatal: the loop reports, sleeps and retries.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    /// Transport failure or a 200 response whose body is not valid JSON.
    #[error("server unavailable: {0}")]
    ServerUnavailable(String),

    /// The API answered with a non-200 status.
    #[error("unexpected http status: {status}")]
    HttpStatus { status: u16 },

    /// The decoded response is not a JSON object at the top level.
    #[error("response is not a JSON object")]
    ResponseShape,

    /// The response object is missing a required key or has the wrong shape.
    #[error("malformed api answer: {0}")]
    CheckApiAnswer(String),

    /// A homework record has no `status` field.
    #[error("homework record has no status")]
    MissingStatus,

    /// A homework record has no `homework_name` field.
    #[error("homework record has no name")]
    MissingName,

    /// A homework record carries a status outside the known set.
    #[error("unknown homework status: {0}")]
    UnknownStatus(String),

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
