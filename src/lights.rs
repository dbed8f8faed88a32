use crate::bridge::Bridge;
use crate::error::Result;
use crate::response;
use crate::state::LightStateChange;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A light as listed by the bridge
pub struct Light {
	pub id: String,
	pub name: String,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
/// Attributes of a light
///
/// Fields the bridge leaves out decode to their default.
pub struct LightAttributes {
	pub state: LightState,
	#[serde(rename = "type")]
	pub light_type: String,
	pub name: String,
	pub modelid: String,
	pub swversion: String,
	pub uniqueid: String,
	pub manufacturername: String,
	pub productid: String,
	pub swconfigid: String,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
/// Current state of a light
///
/// Bulbs without color support leave out hue, saturation and xy, so those
/// decode to zero.
pub struct LightState {
	pub hue: u16,
	pub on: bool,
	pub effect: String,
	/// Alert mode
	pub alert: String,
	/// Brightness
	pub bri: u8,
	/// Saturation
	pub sat: u8,
	/// Color tone
	pub ct: u16,
	pub xy: [f32; 2],
	pub reachable: bool,
	pub colormode: String,
}

/// The `/lights` resource of a bridge
#[derive(Debug)]
pub struct Lights<'a> {
	bridge: &'a Bridge,
}

impl<'a> Lights<'a> {
	pub(crate) fn new(bridge: &'a Bridge) -> Self {
		Lights { bridge }
	}

	/// All lights known to the bridge, ordered by id.
	pub fn list(&self) -> Result<Vec<Light>> {
		self.bridge.list("lights", |id, name| Light { id, name })
	}

	pub fn get(&self, id: &str) -> Result<LightAttributes> {
		self.bridge.get(self.bridge.api_url(&format!("lights/{}", id)))
	}

	/// Applies a partial state change to one light.
	///
	/// The bridge's reply is not inspected: a rejected change still returns
	/// `Ok` as long as the reply is valid JSON. See [`Lights::set_state_checked`].
	pub fn set_state(&self, id: &str, change: &LightStateChange) -> Result<()> {
		let _: Value = self.bridge.put(self.state_url(id), change)?;
		Ok(())
	}

	/// Applies a partial state change and returns the success entries of the
	/// bridge's reply, or its first error entry as [`crate::Error::Bridge`].
	pub fn set_state_checked(&self, id: &str, change: &LightStateChange) -> Result<Vec<Value>> {
		let resp: Value = self.bridge.put(self.state_url(id), change)?;
		response::check(resp)
	}

	fn state_url(&self, id: &str) -> String {
		self.bridge.api_url(&format!("lights/{}/state", id))
	}
}
