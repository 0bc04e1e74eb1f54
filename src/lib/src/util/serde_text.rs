//! Lenient deserializers for identifiers and codes the API may send either as
//! JSON strings or as numbers. Both end up as a `String` on our side.
//!

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawText {
    Text(String),
    Int(i64),
    Float(f64),
}

impl From<RawText> for String {
    fn from(raw: RawText) -> String {
        match raw {
            RawText::Text(s) => s,
            RawText::Int(n) => n.to_string(),
            RawText::Float(n) => n.to_string(),
        }
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawText::deserialize(deserializer).map(String::from)
}

pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawText>::deserialize(deserializer)?.map(String::from))
}
