//! The `{status, message, data}` wrapper around every response body.

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub status: i32,
    #[serde(default)]
    pub message: String,
    #[serde(default = "absent")]
    pub data: Option<T>,
}

fn absent<T>() -> Option<T> {
    None
}

/// Types that can be the `data` of an envelope.
///
/// `absent` decides what a missing (or `null`) `data` means for the type:
/// `None` turns it into a decode failure.
pub trait EnvelopeData: DeserializeOwned {
    fn absent() -> Option<Self> {
        None
    }
}

/// Marker for acknowledgement responses that carry no content.
///
/// Any `data` the server does send is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Empty;

impl<'de> Deserialize<'de> for Empty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IgnoredAny::deserialize(deserializer).map(|_| Empty)
    }
}

impl EnvelopeData for Empty {
    fn absent() -> Option<Self> {
        Some(Empty)
    }
}

impl<T: DeserializeOwned> EnvelopeData for Vec<T> {}

impl EnvelopeData for String {}
impl EnvelopeData for i64 {}
impl EnvelopeData for u32 {}
impl EnvelopeData for serde_json::Value {}

/// Implement `EnvelopeData` for response DTOs whose absence is a failure.
macro_rules! envelope_data {
    ($($ty:ty),+ $(,)?) => {
        $(impl $crate::envelope::EnvelopeData for $ty {})+
    };
}

pub(crate) use envelope_data;
