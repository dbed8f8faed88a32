use crate::response::ApiError;

/// Everything that can go wrong while talking to a bridge.
///
/// None of these are retried. Each one ends the call it was raised in.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The request body could not be turned into JSON. No request was sent.
	#[error("failed to encode request body: {0}")]
	Encoding(#[source] serde_json::Error),

	/// The bridge could not be reached, or it answered with a non-2xx status.
	#[error("transport error: {0}")]
	Transport(#[from] reqwest::Error),

	/// The response body was not valid JSON of the expected shape.
	#[error("failed to decode response body: {0}")]
	Decoding(#[source] serde_json::Error),

	/// The bridge accepted the request but reported an error entry in its reply.
	///
	/// Only the `*_checked` operations look for these.
	#[error("bridge error {0}")]
	Bridge(ApiError),
}

pub type Result<T> = std::result::Result<T, Error>;
