use thiserror::Error;

/// Failures surfaced to page error boundaries or logged by widgets.
#[derive(Debug, Error)]
pub enum AtlasError {
	#[error("Failed to parse embedded data: {0}")]
	Literal(#[from] serde_json::Error),
	#[error("Request failed: {0}")]
	Fetch(String),
	#[error("Server responded with status {0}")]
	Status(u16),
	#[error("Response had no body")]
	EmptyResponse,
}
