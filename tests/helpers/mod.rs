//! Shared setup for the mock bridge tests

#![allow(dead_code)]

use hue_chroma::Bridge;
use mockito::{Matcher, Mock, Server};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

pub const USERNAME: &str = "mySpecialUsername";

/// A bridge session pointed at the mock server
pub fn bridge(server: &Server) -> Bridge {
	Bridge::builder(server.host_with_port(), USERNAME)
		.timeout(Duration::from_secs(5))
		.build()
		.expect("Failed to build bridge")
}

/// Load a bridge response from the fixtures directory
pub fn fixture(filename: &str) -> String {
	let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	path.push("tests/fixtures");
	path.push(filename);

	fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", filename, e))
}

/// Path below the username segment
pub fn api_path(path: &str) -> String {
	format!("/api/{}/{}", USERNAME, path)
}

/// A GET that answers with a JSON body and must be hit exactly once
pub fn mock_get(server: &mut Server, path: &str, body: &str) -> Mock {
	server
		.mock("GET", path)
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(body)
		.expect(1)
		.create()
}

/// A PUT that only matches the exact JSON body and must be hit exactly once
pub fn mock_put(server: &mut Server, path: &str, expected: serde_json::Value, reply: &str) -> Mock {
	server
		.mock("PUT", path)
		.match_header("content-type", "application/json")
		.match_body(Matcher::Json(expected))
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(reply)
		.expect(1)
		.create()
}
