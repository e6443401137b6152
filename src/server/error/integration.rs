use thiserror::Error;

/// Failures talking to the external traffic, weather, and AI providers.
///
/// Most call sites absorb these into a static fallback value; the variants
/// exist so fallback decisions and provider validation can report what
/// actually went wrong.
#[derive(Error, Debug)]
pub enum IntegrationError {
    /// A provider endpoint or API key has not been configured in settings.
    #[error("Missing setting '{0}' required for provider call")]
    MissingSetting(String),

    /// The outbound HTTP request itself failed (DNS, connect, timeout).
    #[error("{provider} request failed: {source}")]
    RequestFailed {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered with a non-success status code.
    #[error("{provider} returned unexpected status {status}")]
    UnexpectedStatus { provider: &'static str, status: u16 },

    /// The provider answered 200 but the body failed shape validation.
    #[error("{provider} response malformed: {detail}")]
    MalformedResponse {
        provider: &'static str,
        detail: String,
    },
}
