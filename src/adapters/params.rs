//! Platform parameter JSON.
//!
//! The device-management platform exchanges parameter updates as nested
//! objects keyed by device name, then parameter name:
//!
//! ```text
//! {"Home Light": {"Power": true}}
//! {"Door Sensor Status": {"Door Status": "OPENED"}}
//! ```
//!
//! Inbound payloads become [`WriteCommand`]s in document order; outbound
//! [`Property`] updates are rendered in the same shape.

use core::fmt;
use core::marker::PhantomData;

use log::warn;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::{Map, Value};

use crate::app::commands::WriteCommand;
use crate::app::events::Property;

/// Errors decoding an inbound parameter payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamsError {
    /// Not a JSON object of objects.
    Malformed,
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(f, "malformed param payload"),
        }
    }
}

impl std::error::Error for ParamsError {}

// ── Decode ────────────────────────────────────────────────────

/// JSON object kept as an ordered list of entries.
struct Ordered<T>(Vec<(String, T)>);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Ordered<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for OrderedVisitor<T> {
            type Value = Ordered<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::new();
                while let Some(entry) = map.next_entry::<String, T>()? {
                    entries.push(entry);
                }
                Ok(Ordered(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor(PhantomData))
    }
}

/// Decode one inbound payload into write-commands.
///
/// Entries that can never match a handler are skipped and the rest of the
/// payload still applies: non-boolean values (every writable parameter on
/// this node is a power toggle) and names longer than
/// [`NAME_CAP`](crate::app::commands::NAME_CAP).
pub fn decode_writes(json: &str) -> Result<Vec<WriteCommand>, ParamsError> {
    let doc: Ordered<Ordered<Value>> =
        serde_json::from_str(json).map_err(|_| ParamsError::Malformed)?;

    let mut writes = Vec::new();
    for (device, params) in doc.0 {
        for (param, value) in params.0 {
            let Value::Bool(value) = value else {
                warn!("params: skipping non-boolean {}/{} = {}", device, param, value);
                continue;
            };
            match WriteCommand::new(&device, &param, value) {
                Some(cmd) => writes.push(cmd),
                None => warn!("params: skipping oversized name {}/{}", device, param),
            }
        }
    }
    Ok(writes)
}

// ── Encode ────────────────────────────────────────────────────

/// Render one property update as a platform param payload.
pub fn encode_property(property: &Property) -> String {
    let value = match *property {
        Property::LightPower(v) | Property::AlarmPower(v) | Property::AlarmTriggered(v) => {
            Value::Bool(v)
        }
        Property::DoorStatus(door) => Value::String(door.label().to_owned()),
    };

    let mut params = Map::new();
    params.insert(property.param().to_owned(), value);
    let mut doc = Map::new();
    doc.insert(property.device().to_owned(), Value::Object(params));
    Value::Object(doc).to_string()
}
