//! The bridge answers every write with a JSON array of result entries, each
//! either `{"success": {...}}` or `{"error": {...}}`. The plain operations
//! ignore it; the `*_checked` ones run it through [`check`].

use crate::error::{Error, Result};
use serde_json::Value;
use std::fmt;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
/// An error entry reported by the bridge
pub struct ApiError {
	/// Bridge error code, e.g. 3 for an unknown resource or 101 when the
	/// link button has not been pressed
	#[serde(rename = "type")]
	pub kind: u16,
	/// Resource path the error refers to
	#[serde(default)]
	pub address: String,
	#[serde(default)]
	pub description: String,
}

impl fmt::Display for ApiError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.kind, self.description)?;
		if !self.address.is_empty() {
			write!(f, " ({})", self.address)?;
		}
		Ok(())
	}
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseItem {
	Success(Value),
	Error(ApiError),
}

/// Interprets a decoded write response.
///
/// Returns the payloads of all success entries, or the first error entry as
/// [`Error::Bridge`]. A body that is not an array of entries is a
/// [`Error::Decoding`].
pub fn check(body: Value) -> Result<Vec<Value>> {
	let items: Vec<ResponseItem> = serde_json::from_value(body).map_err(Error::Decoding)?;
	let mut successes = Vec::with_capacity(items.len());
	for item in items {
		match item {
			ResponseItem::Success(payload) => successes.push(payload),
			ResponseItem::Error(err) => {
				debug!("bridge reported error {} on {}: {}", err.kind, err.address, err.description);
				return Err(Error::Bridge(err));
			}
		}
	}
	Ok(successes)
}
