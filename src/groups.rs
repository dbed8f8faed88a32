use crate::bridge::Bridge;
use crate::error::Result;
use crate::response;
use crate::state::GroupStateChange;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A group as listed by the bridge
pub struct Group {
	pub id: String,
	pub name: String,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
/// Attributes of a group
pub struct GroupAttributes {
	pub name: String,
	/// Ids of the member lights
	pub lights: Vec<String>,
	#[serde(rename = "type")]
	pub group_type: String,
	/// The last action sent to the whole group
	pub action: Option<GroupAction>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct GroupAction {
	pub on: bool,
	pub bri: u8,
	pub hue: u16,
	pub sat: u8,
	pub effect: String,
	pub xy: [f32; 2],
	pub ct: u16,
	pub alert: String,
	pub colormode: String,
}

/// The `/groups` resource of a bridge
#[derive(Debug)]
pub struct Groups<'a> {
	bridge: &'a Bridge,
}

impl<'a> Groups<'a> {
	pub(crate) fn new(bridge: &'a Bridge) -> Self {
		Groups { bridge }
	}

	/// All groups known to the bridge, ordered by id.
	pub fn list(&self) -> Result<Vec<Group>> {
		self.bridge.list("groups", |id, name| Group { id, name })
	}

	pub fn get(&self, id: &str) -> Result<GroupAttributes> {
		self.bridge.get(self.bridge.api_url(&format!("groups/{}", id)))
	}

	/// Applies a partial state change to every light of the group.
	///
	/// As with [`crate::lights::Lights::set_state`], the bridge's reply is
	/// only required to be valid JSON.
	pub fn set_state(&self, id: &str, change: &GroupStateChange) -> Result<()> {
		let _: Value = self.bridge.put(self.action_url(id), change)?;
		Ok(())
	}

	/// Like [`Groups::set_state`], but fails with [`crate::Error::Bridge`] on
	/// the first error entry of the reply.
	pub fn set_state_checked(&self, id: &str, change: &GroupStateChange) -> Result<Vec<Value>> {
		let resp: Value = self.bridge.put(self.action_url(id), change)?;
		response::check(resp)
	}

	fn action_url(&self, id: &str) -> String {
		self.bridge.api_url(&format!("groups/{}/action", id))
	}
}
