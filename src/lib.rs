//! Blocking client for the REST API of a Hue bridge.
//!
//! A [`Bridge`] holds the bridge address and the username this application
//! is registered under. From it, [`Bridge::lights`] and [`Bridge::groups`]
//! list resources, fetch their attributes and push partial state changes
//! ([`StateChange`]). Every call is one HTTP round trip; nothing is cached or
//! retried.
//!
//! Write operations come in two flavours. The plain ones only require the
//! bridge to answer with valid JSON, so a change the bridge refuses still
//! returns `Ok`. The `*_checked` ones read the bridge's reply and turn an
//! error entry into [`Error::Bridge`].
//!
//! The crate logs through the `log` facade and installs no logger itself.

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;
extern crate reqwest;
extern crate serde;
extern crate serde_json;
pub mod error;
pub use error::{Error, Result};
pub mod bridge;
pub use bridge::{Bridge, BridgeBuilder};
pub mod groups;
pub use groups::{Group, GroupAction, GroupAttributes, Groups};
pub mod lights;
pub use lights::{Light, LightAttributes, LightState, Lights};
pub mod response;
pub use response::ApiError;
mod state;
pub use state::{GroupStateChange, LightStateChange, StateChange};
