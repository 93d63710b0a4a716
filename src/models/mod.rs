use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Number;

/// Whole number of any magnitude read from a path segment or query value.
///
/// Accepts a string holding an optional sign and ASCII digits. Leading zeros are
/// dropped and `-0` becomes `0`. Serializes as a plain JSON number, digits
/// intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Integer(Number);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("input should be a valid integer, unable to parse `{0}` as an integer")]
pub struct ParseIntegerError(String);

impl FromStr for Integer {
    type Err = ParseIntegerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseIntegerError(s.to_string());
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let digits = match digits.trim_start_matches('0') {
            "" => "0",
            trimmed => trimmed,
        };
        let canonical = if negative && digits != "0" {
            format!("-{digits}")
        } else {
            digits.to_string()
        };
        canonical.parse().map(Self).map_err(|_| invalid())
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
impl From<i64> for Integer {
    fn from(n: i64) -> Self {
        Self(n.into())
    }
}

impl<'de> Deserialize<'de> for Integer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IntegerVisitor;

        impl<'de> de::Visitor<'de> for IntegerVisitor {
            type Value = Integer;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an integer")
            }

            fn visit_str<E: de::Error>(self, s: &str) -> Result<Integer, E> {
                s.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(IntegerVisitor)
    }
}

/// Item payload accepted by `POST /item`. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "valor")]
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "concluida", default)]
    pub completed: bool,
}
#[cfg(test)]
impl Task {
    pub(crate) fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            completed: false,
        }
    }
}

// === Responses ===
#[derive(Debug, Clone, Serialize)]
pub struct ItemCreated {
    pub status_code: u16,
    pub content: ItemCreatedContent,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemCreatedContent {
    #[serde(rename = "mensagem")]
    pub message: &'static str,
    pub item: Item,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskCreated {
    #[serde(rename = "mensagem")]
    pub message: &'static str,
    #[serde(rename = "tarefa")]
    pub task: Task,
}
