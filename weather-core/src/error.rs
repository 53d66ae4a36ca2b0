use thiserror::Error;

/// Failure of a single polling cycle.
///
/// Cycle errors abort the current cycle only: the pipeline logs them and
/// resumes after the configured interval. They never terminate the process.
#[derive(Debug, Error)]
pub enum CycleError {
    /// The geocoding service returned no candidates for the configured city.
    #[error("no geocoding results for '{0}'")]
    LocationNotFound(String),

    /// Network or HTTP-level failure contacting a collaborator.
    #[error("{service} request failed: {message}")]
    Transport {
        service: &'static str,
        message: String,
    },

    /// The weather response was missing a field the normalizer requires.
    #[error("observation is missing required field '{0}'")]
    MalformedObservation(&'static str),
}

impl CycleError {
    pub(crate) fn transport(service: &'static str, err: reqwest::Error) -> Self {
        CycleError::Transport {
            service,
            message: err.to_string(),
        }
    }
}

/// Failure to deliver a record to the broker.
///
/// Always wrapped in [`crate::sink::PublishOutcome::Failed`]; by policy it is
/// logged and swallowed, never propagated past the sink.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("failed to encode record as JSON: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("broker error: {0}")]
    Broker(#[from] lapin::Error),
}
