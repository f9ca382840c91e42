use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("interest toggle already in flight for event '{0}'")]
    ToggleInFlight(String),
    #[error(transparent)]
    Remote(#[from] anyhow::Error),
}
