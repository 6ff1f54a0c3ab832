use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::error::BrightnessOutOfRange;

/// Light level in the closed range 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Brightness(u8);

impl Brightness {
    pub fn new(level: u8) -> Self {
        Brightness(level)
    }

    pub fn level(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Brightness {
    type Error = BrightnessOutOfRange;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map(Brightness)
            .map_err(|_| BrightnessOutOfRange(value))
    }
}

impl From<Brightness> for u8 {
    fn from(brightness: Brightness) -> Self {
        brightness.0
    }
}

/// Full state of a light.
///
/// `id` may be omitted, `null` or empty on create, in which case the store
/// assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Light {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    pub name: String,
    pub room: String,
    #[serde(default)]
    pub on: bool,
    /// Light brightness 0-255
    #[serde(default)]
    #[schema(value_type = u8, minimum = 0, maximum = 255)]
    pub brightness: Brightness,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Projection of a light used by the list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LightSummary {
    pub id: String,
    pub name: String,
    pub room: String,
}

/// Fields included in a light update request. `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LightUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on: Option<bool>,
    /// Light brightness 0-255
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<u8>, minimum = 0, maximum = 255)]
    pub brightness: Option<Brightness>,
}

impl Light {
    pub fn summary(&self) -> LightSummary {
        LightSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            room: self.room.clone(),
        }
    }

    pub fn apply(&mut self, update: LightUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(room) = update.room {
            self.room = room;
        }
        if let Some(on) = update.on {
            self.on = on;
        }
        if let Some(brightness) = update.brightness {
            self.brightness = brightness;
        }
    }
}

impl LightUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.room.is_none()
            && self.on.is_none()
            && self.brightness.is_none()
    }
}
