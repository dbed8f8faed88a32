use crate::error::{Error, Result};
use crate::groups::Groups;
use crate::lights::Lights;
use crate::response;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::time::Duration;

/// A session with one Hue bridge.
///
/// Holds the bridge address, the username the bridge knows this application
/// by, and the HTTP client every request goes through. Cloning is cheap and
/// clones share the client's connection pool, so a `Bridge` can be handed to
/// several threads.
///
/// ```no_run
/// use hue_chroma::{Bridge, StateChange};
///
/// let bridge = Bridge::new("192.168.0.20", "myapplication")?;
/// for light in bridge.lights().list()? {
/// 	println!("{}: {}", light.id, light.name);
/// }
/// bridge.lights().set_state("1", &StateChange::new().on(true).brightness(200))?;
/// # Ok::<(), hue_chroma::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Bridge {
	host: String,
	username: String,
	client: Client,
}

/// Configures a [`Bridge`] before it is created.
#[derive(Debug)]
pub struct BridgeBuilder {
	host: String,
	username: String,
	timeout: Option<Duration>,
	client: Option<Client>,
}

#[derive(Serialize)]
struct AuthorizeRequest<'a> {
	devicetype: &'a str,
	username: &'a str,
}

#[derive(Deserialize)]
struct Named {
	#[serde(default)]
	name: String,
}

impl BridgeBuilder {
	/// Total timeout of each request, connecting included.
	///
	/// Ignored when an explicit client is supplied with [`BridgeBuilder::client`].
	pub fn timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);
		self
	}

	/// Use this HTTP client instead of building one.
	pub fn client(mut self, client: Client) -> Self {
		self.client = Some(client);
		self
	}

	pub fn build(self) -> Result<Bridge> {
		let client = match self.client {
			Some(client) => client,
			None => {
				let mut builder = Client::builder();
				if let Some(timeout) = self.timeout {
					builder = builder.timeout(timeout);
				}
				builder.build()?
			}
		};
		Ok(Bridge {
			host: self.host,
			username: self.username,
			client,
		})
	}
}

impl Bridge {
	/// Session with a default HTTP client.
	///
	/// `host` is an IP address or hostname, optionally with a port.
	pub fn new<H: Into<String>, U: Into<String>>(host: H, username: U) -> Result<Bridge> {
		Bridge::builder(host, username).build()
	}

	pub fn builder<H: Into<String>, U: Into<String>>(host: H, username: U) -> BridgeBuilder {
		BridgeBuilder {
			host: host.into(),
			username: username.into(),
			timeout: None,
			client: None,
		}
	}

	pub fn host(&self) -> &str {
		&self.host
	}

	pub fn username(&self) -> &str {
		&self.username
	}

	pub fn lights(&self) -> Lights<'_> {
		Lights::new(self)
	}

	pub fn groups(&self) -> Groups<'_> {
		Groups::new(self)
	}

	/// Registers the configured username with the bridge.
	///
	/// The bridge only accepts this within its pairing window, i.e. shortly
	/// after its link button was pressed. Any well-formed JSON answer counts as
	/// success, including the bridge's own error entry for an unpressed button;
	/// use [`Bridge::authorize_checked`] to tell those apart.
	pub fn authorize(&self, device_type: &str) -> Result<()> {
		let _: Value = self.post(self.api_url_without_username(""), &self.authorize_request(device_type))?;
		Ok(())
	}

	/// Like [`Bridge::authorize`], but an error entry in the bridge's reply
	/// becomes [`Error::Bridge`].
	pub fn authorize_checked(&self, device_type: &str) -> Result<()> {
		let resp: Value = self.post(self.api_url_without_username(""), &self.authorize_request(device_type))?;
		response::check(resp).map(|_| ())
	}

	fn authorize_request<'a>(&'a self, device_type: &'a str) -> AuthorizeRequest<'a> {
		AuthorizeRequest {
			devicetype: device_type,
			username: &self.username,
		}
	}

	/// `http://{host}/api/{username}/{path}`
	pub fn api_url(&self, path: &str) -> String {
		format!("http://{}/api/{}/{}", self.host, self.username, path)
	}

	/// `http://{host}/api/{path}`, for requests made before a username exists
	pub fn api_url_without_username(&self, path: &str) -> String {
		format!("http://{}/api/{}", self.host, path)
	}

	/// Fetches an id-keyed listing and builds one summary per entry, ordered by id.
	pub(crate) fn list<T, F>(&self, path: &str, summary: F) -> Result<Vec<T>>
	where
		F: Fn(String, String) -> T,
	{
		let listing: HashMap<String, Named> = self.get(self.api_url(path))?;
		Ok(by_id(listing).into_iter().map(|(id, name)| summary(id, name)).collect())
	}

	pub(crate) fn get<T: DeserializeOwned>(&self, url: String) -> Result<T> {
		self.execute(Method::GET, url, None)
	}

	pub(crate) fn post<B: Serialize, T: DeserializeOwned>(&self, url: String, body: &B) -> Result<T> {
		let encoded = encode(body)?;
		self.execute(Method::POST, url, Some(encoded))
	}

	pub(crate) fn put<B: Serialize, T: DeserializeOwned>(&self, url: String, body: &B) -> Result<T> {
		let encoded = encode(body)?;
		self.execute(Method::PUT, url, Some(encoded))
	}

	/// Sends exactly one request and decodes the whole response body.
	fn execute<T: DeserializeOwned>(&self, method: Method, url: String, body: Option<Vec<u8>>) -> Result<T> {
		debug!("{} {}", method, url);
		let mut request = self.client.request(method, &url);
		if let Some(body) = body {
			trace!("request body: {}", String::from_utf8_lossy(&body));
			request = request.header(CONTENT_TYPE, "application/json").body(body);
		}

		let response = request.send()?;
		let status = response.status();
		if !status.is_success() {
			warn!("bridge answered {} for {}", status, url);
		}
		let bytes = response.error_for_status()?.bytes()?;
		trace!("response body: {}", String::from_utf8_lossy(&bytes));
		serde_json::from_slice(&bytes).map_err(Error::Decoding)
	}
}

fn encode<B: Serialize>(body: &B) -> Result<Vec<u8>> {
	serde_json::to_vec(body).map_err(Error::Encoding)
}

/// Flattens an id-keyed listing into `(id, name)` pairs, ordered by id.
fn by_id(listing: HashMap<String, Named>) -> Vec<(String, String)> {
	let mut pairs: Vec<(String, String)> = listing.into_iter().map(|(id, named)| (id, named.name)).collect();
	pairs.sort_by(|a, b| compare_ids(&a.0, &b.0));
	pairs
}

/// Numeric ids compare as numbers and sort before anything else.
fn compare_ids(a: &str, b: &str) -> Ordering {
	match (a.parse::<u64>(), b.parse::<u64>()) {
		(Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
		(Ok(_), Err(_)) => Ordering::Less,
		(Err(_), Ok(_)) => Ordering::Greater,
		(Err(_), Err(_)) => a.cmp(b),
	}
}
