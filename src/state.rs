/// A partial state update for a light or a group.
///
/// Every field is optional. Fields left at `None` are not sent at all, so the
/// bridge keeps its current value for them. `Some(0)` is sent as `0`.
///
/// ```
/// use hue_chroma::StateChange;
///
/// let change = StateChange::new().on(true).hue(12345);
/// assert_eq!(
/// 	serde_json::to_value(&change).unwrap(),
/// 	serde_json::json!({"on": true, "hue": 12345})
/// );
/// ```
#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
pub struct StateChange {
	pub hue: Option<u16>,
	pub on: Option<bool>,
	/// `"none"` or `"colorloop"`
	pub effect: Option<String>,
	/// `"none"`, `"select"` or `"lselect"`
	pub alert: Option<String>,
	/// Brightness
	pub bri: Option<u8>,
	/// Saturation
	pub sat: Option<u8>,
	/// Color temperature in mired
	pub ct: Option<u16>,
	/// CIE color space coordinates
	pub xy: Option<[f32; 2]>,
	/// Transition duration in multiples of 100ms
	pub transitiontime: Option<u16>,
}

/// Update sent to `/lights/{id}/state`
pub type LightStateChange = StateChange;
/// Update sent to `/groups/{id}/action`
pub type GroupStateChange = StateChange;

impl StateChange {
	pub fn new() -> Self {
		Self::default()
	}

	/// True if no field is set. Sending an empty change is allowed, the
	/// bridge just has nothing to do.
	pub fn is_empty(&self) -> bool {
		*self == Self::default()
	}

	pub fn on(mut self, on: bool) -> Self {
		self.on = Some(on);
		self
	}

	pub fn hue(mut self, hue: u16) -> Self {
		self.hue = Some(hue);
		self
	}

	pub fn effect<S: Into<String>>(mut self, effect: S) -> Self {
		self.effect = Some(effect.into());
		self
	}

	pub fn alert<S: Into<String>>(mut self, alert: S) -> Self {
		self.alert = Some(alert.into());
		self
	}

	pub fn brightness(mut self, bri: u8) -> Self {
		self.bri = Some(bri);
		self
	}

	pub fn saturation(mut self, sat: u8) -> Self {
		self.sat = Some(sat);
		self
	}

	pub fn color_temperature(mut self, ct: u16) -> Self {
		self.ct = Some(ct);
		self
	}

	pub fn xy(mut self, x: f32, y: f32) -> Self {
		self.xy = Some([x, y]);
		self
	}

	pub fn transition_time(mut self, deciseconds: u16) -> Self {
		self.transitiontime = Some(deciseconds);
		self
	}
}
