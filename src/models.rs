use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A Postman-style collection: metadata plus an ordered list of items.
///
/// Item order is insertion order and doubles as display/execution order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Collection {
    #[serde(default, alias = "Info")]
    pub info: Info,
    #[serde(default, alias = "Item")]
    pub item: Vec<Item>,
}

/// Collection metadata, immutable after load.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Info {
    #[serde(default, alias = "Name")]
    pub name: String,
    #[serde(default, alias = "Schema")]
    pub schema: String,
    #[serde(default, alias = "Description")]
    pub description: String,
}

/// One request definition plus its optional test-script events.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, alias = "Name")]
    pub name: String,
    #[serde(default, alias = "Request")]
    pub request: Request,
    /// Absent is not the same as empty: items added without scripts carry
    /// no `event` key at all when the collection is saved.
    #[serde(default, alias = "Event", skip_serializing_if = "Option::is_none")]
    pub event: Option<Vec<Event>>,
}

/// An HTTP request entry. `header` and `body` are optional (absent != empty).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Request {
    #[serde(default, alias = "Method")]
    pub method: String,
    #[serde(default, alias = "Url")]
    pub url: Url,
    #[serde(default, alias = "Header", skip_serializing_if = "Option::is_none")]
    pub header: Option<Vec<Header>>,
    #[serde(default, alias = "Body", skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
}

/// A request URL, normalized to its raw string form.
///
/// Collections in the wild carry URLs either as a bare string or as an
/// object with a `raw` field (plus protocol/host/path breakdowns). Both
/// shapes decode into `raw`; serialization always emits the bare string,
/// so object-only fields are discarded on load and never round-trip.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Url {
    pub raw: String,
}

impl Url {
    pub fn new(raw: impl Into<String>) -> Self {
        Url { raw: raw.into() }
    }
}

impl Serialize for Url {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Url {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct UrlVisitor;

        impl<'de> Visitor<'de> for UrlVisitor {
            type Value = Url;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a URL string or an object with a \"raw\" field")
            }

            fn visit_str<E>(self, value: &str) -> Result<Url, E>
            where
                E: de::Error,
            {
                Ok(Url::new(value))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Url, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut raw = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key.eq_ignore_ascii_case("raw") {
                        raw = Some(map.next_value::<String>()?);
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
                Ok(Url {
                    raw: raw.unwrap_or_default(),
                })
            }
        }

        // Any other token type (number, bool, null, array) is an error;
        // a URL value is never silently coerced.
        deserializer.deserialize_any(UrlVisitor)
    }
}

/// A single request header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    #[serde(default, alias = "Key")]
    pub key: String,
    #[serde(default, alias = "Value")]
    pub value: String,
}

impl Header {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Header {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A request body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    #[serde(default, alias = "Mode")]
    pub mode: String,
    #[serde(default, alias = "Raw")]
    pub raw: String,
}

/// A script trigger attached to an item; `"test"` is the only listen
/// value the runner acts on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, alias = "Listen")]
    pub listen: String,
    #[serde(default, alias = "Script")]
    pub script: Script,
}

/// Script lines carried by an event. Lines are matched by pattern at
/// evaluation time, never executed as code.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    #[serde(rename = "type", alias = "Type", default)]
    pub script_type: String,
    #[serde(default, alias = "Exec")]
    pub exec: Vec<String>,
}

/// Captured result of executing one request.
#[derive(Clone, Debug)]
pub struct Response {
    pub status: u16,
    pub body: String,
}
