//! Booking endpoint wire types.

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Named form fields in document order, posted as `multipart/form-data`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    entries: Vec<(String, String)>,
}

impl FormPayload {
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// First value submitted under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for FormPayload {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().map(|(n, v)| (n.into(), v.into())).collect() }
    }
}

/// JSON body returned by the booking endpoint.
///
/// `success` follows script truthiness (`1`, `"yes"` and `{}` all count as success),
/// and `message` is kept only when it would display as something.
///
/// A body that is valid JSON but not an object (`"ok"`, `42`, `[]`) has neither field and
/// reads as an unsuccessful reply. Only `null` is refused, since nothing can be read from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "ResponseBody")]
pub struct BookingResponse {
    pub success: bool,
    pub message: Option<String>,
}

#[derive(Deserialize)]
struct ResponseFields {
    #[serde(default, deserialize_with = "truthy")]
    success: bool,
    #[serde(default, deserialize_with = "displayable")]
    message: Option<String>,
}

/// Arrays come first so they are never read as a struct in sequence form.
#[allow(dead_code)]
#[derive(Deserialize)]
#[serde(untagged)]
enum ResponseBody {
    List(Vec<IgnoredAny>),
    Object(ResponseFields),
    Null(()),
    Scalar(IgnoredAny),
}

impl TryFrom<ResponseBody> for BookingResponse {
    type Error = &'static str;

    fn try_from(body: ResponseBody) -> Result<Self, Self::Error> {
        match body {
            ResponseBody::Object(fields) => {
                Ok(Self { success: fields.success, message: fields.message })
            },
            ResponseBody::List(_) | ResponseBody::Scalar(_) => Ok(Self::default()),
            ResponseBody::Null(()) => Err("booking response is null"),
        }
    }
}

/// A JSON value reduced to its truthiness and its display text (if truthy).
struct Loose {
    truthy: bool,
    text: Option<String>,
}

impl Loose {
    const FALSY: Self = Self { truthy: false, text: None };

    fn text(text: String) -> Self {
        Self { truthy: !text.is_empty(), text: (!text.is_empty()).then_some(text) }
    }
}

struct LooseVisitor;

impl<'de> Visitor<'de> for LooseVisitor {
    type Value = Loose;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Loose, E> {
        Ok(if v { Loose::text("true".to_owned()) } else { Loose::FALSY })
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Loose, E> {
        Ok(if v == 0 { Loose::FALSY } else { Loose::text(v.to_string()) })
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Loose, E> {
        Ok(if v == 0 { Loose::FALSY } else { Loose::text(v.to_string()) })
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Loose, E> {
        Ok(if v == 0.0 || v.is_nan() { Loose::FALSY } else { Loose::text(v.to_string()) })
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Loose, E> {
        Ok(Loose::text(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Loose, E> {
        Ok(Loose::text(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Loose, E> {
        Ok(Loose::FALSY)
    }

    fn visit_none<E: de::Error>(self) -> Result<Loose, E> {
        Ok(Loose::FALSY)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Loose, D::Error> {
        d.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Loose, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Loose { truthy: true, text: None })
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Loose, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Loose { truthy: true, text: None })
    }
}

fn truthy<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(d.deserialize_any(LooseVisitor)?.truthy)
}

fn displayable<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(d.deserialize_any(LooseVisitor)?.text)
}
