//! Pairing and transport failures against a mock bridge

mod helpers;

use helpers::{bridge, USERNAME};
use hue_chroma::{Bridge, Error, StateChange};
use mockito::{Matcher, Server};
use serde_json::json;
use std::time::Duration;

#[test]
fn test_authorize() {
	let mut server = Server::new();
	let mock = server
		.mock("POST", "/api/")
		.match_header("content-type", "application/json")
		.match_body(Matcher::Json(json!({
			"devicetype": "mySpecialDevice",
			"username": USERNAME,
		})))
		.with_status(200)
		.with_body(r#"[{"success": {"username": "mySpecialUsername"}}]"#)
		.expect(1)
		.create();

	bridge(&server).authorize("mySpecialDevice").expect("Failed to authorize");

	mock.assert();
}

#[test]
fn test_authorize_ignores_link_button_error() {
	let mut server = Server::new();
	let _mock = server
		.mock("POST", "/api/")
		.with_status(200)
		.with_body(r#"[{"error": {"type": 101, "address": "", "description": "link button not pressed"}}]"#)
		.create();

	assert!(bridge(&server).authorize("mySpecialDevice").is_ok());
}

#[test]
fn test_authorize_checked_reports_link_button_error() {
	let mut server = Server::new();
	let mock = server
		.mock("POST", "/api/")
		.with_status(200)
		.with_body(r#"[{"error": {"type": 101, "address": "", "description": "link button not pressed"}}]"#)
		.expect(1)
		.create();

	match bridge(&server).authorize_checked("mySpecialDevice") {
		Err(Error::Bridge(err)) => {
			assert_eq!(err.kind, 101);
			assert_eq!(err.description, "link button not pressed");
		}
		other => panic!("Expected a bridge error, got {:?}", other),
	}
	mock.assert();
}

#[test]
fn test_authorize_checked_success() {
	let mut server = Server::new();
	let _mock = server
		.mock("POST", "/api/")
		.with_status(200)
		.with_body(r#"[{"success": {"username": "mySpecialUsername"}}]"#)
		.create();

	assert!(bridge(&server).authorize_checked("mySpecialDevice").is_ok());
}

#[test]
fn test_authorize_malformed_body() {
	let mut server = Server::new();
	let _mock = server
		.mock("POST", "/api/")
		.with_status(200)
		.with_body("<html>bridge</html>")
		.create();

	let result = bridge(&server).authorize("mySpecialDevice");
	assert!(matches!(result, Err(Error::Decoding(_))));
}

#[test]
fn test_unreachable_bridge_is_transport_error() {
	// Nothing listens on port 1
	let bridge = Bridge::builder("127.0.0.1:1", USERNAME)
		.timeout(Duration::from_secs(2))
		.build()
		.unwrap();

	let result = bridge.lights().set_state("1", &StateChange::new().on(true));
	assert!(matches!(result, Err(Error::Transport(_))));

	let result = bridge.authorize("mySpecialDevice");
	assert!(matches!(result, Err(Error::Transport(_))));
}

#[test]
fn test_explicit_client() {
	let mut server = Server::new();
	let mock = server
		.mock("GET", "/api/mySpecialUsername/lights")
		.with_status(200)
		.with_body("{}")
		.expect(1)
		.create();

	let client = reqwest::blocking::Client::builder()
		.timeout(Duration::from_secs(5))
		.build()
		.unwrap();
	let bridge = Bridge::builder(server.host_with_port(), USERNAME)
		.client(client)
		.build()
		.unwrap();

	assert!(bridge.lights().list().unwrap().is_empty());
	mock.assert();
}
