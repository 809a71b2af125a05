//! Forgiving field decoders for backend graph payloads.

use log::debug;
use serde::{Deserialize, Deserializer, de::IgnoredAny};

use super::{EntityType, NewsDocument, RelationKind};

/// Either a decodable value or something to skip.
#[derive(Deserialize)]
#[serde(untagged)]
enum Item<T> {
    Value(T),
    Junk(IgnoredAny),
}

impl<T> Item<T> {
    fn into_value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Junk(_) => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Text(String),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Other(IgnoredAny),
}

impl RawScalar {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Signed(n) => n.to_string(),
            Self::Unsigned(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
            Self::Other(_) => String::new(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

impl RawNumber {
    fn finite(self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => Some(n),
            Self::Text(text) => text.trim().parse::<f64>().ok(),
            Self::Other(_) => None,
        };
        value.filter(|n| n.is_finite())
    }
}

pub(super) fn one() -> u32 {
    1
}

pub(super) fn unit() -> f32 {
    1.0
}

/// Strings pass through, numbers are stringified, anything else is empty.
pub(super) fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    RawScalar::deserialize(deserializer).map(RawScalar::into_text)
}

pub(super) fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    id(deserializer)
}

pub(super) fn entity_type<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<EntityType, D::Error> {
    text(deserializer).map(EntityType::from)
}

pub(super) fn relation_kind<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<RelationKind, D::Error> {
    text(deserializer).map(RelationKind::from)
}

/// Counts below one, and anything that is not a number, become `1`.
pub(super) fn mention_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let count = RawNumber::deserialize(deserializer)?
        .finite()
        .filter(|n| *n >= 1.0)
        .map(|n| n.min(f64::from(u32::MAX)) as u32);

    Ok(count.unwrap_or_else(|| {
        debug!("Unusable mention count, defaulting to 1");
        1
    }))
}

/// Zero, and anything that is not a finite number, becomes `1`.
pub(super) fn weight<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
    let weight = RawNumber::deserialize(deserializer)?
        .finite()
        .map(|n| n as f32)
        .filter(|n| n.is_finite() && *n != 0.0);

    Ok(weight.unwrap_or(1.0))
}

pub(super) fn document<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<NewsDocument>, D::Error> {
    let document = Option::<Item<NewsDocument>>::deserialize(deserializer)?.and_then(Item::into_value);
    if document.is_none() {
        debug!("Graph payload has no usable news document");
    }
    Ok(document)
}

/// `null` is an empty list; elements that are not objects are skipped.
pub(super) fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Option::<Vec<Item<T>>>::deserialize(deserializer)?.unwrap_or_default();
    let total = items.len();
    let values: Vec<T> = items.into_iter().filter_map(Item::into_value).collect();

    if values.len() < total {
        debug!(skipped = total - values.len(); "Skipped malformed list elements");
    }
    Ok(values)
}
