//! Declared return shapes of intercepted calls.

use std::fmt;
use std::str::FromStr;

/// What the async producer shape yields to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Payload {
    /// The bare cached value.
    Raw,
    /// The value wrapped in a detailed envelope (source, encryption, ...).
    Detailed,
}

/// The return shape an intercepted call declares.
///
/// Only [`ReturnShape::Async`] can be cached; [`ReturnShape::Other`] records
/// whatever else the call declared so the rejection can name it.
///
/// Parses from the tags `"raw"` and `"detailed"`; any other string becomes
/// `Other`:
///
/// ```rust
/// # use cachet::{Payload, ReturnShape};
/// assert_eq!("detailed".parse::<ReturnShape>().unwrap(), ReturnShape::Async(Payload::Detailed));
/// assert_eq!("String".parse::<ReturnShape>().unwrap(), ReturnShape::Other("String".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReturnShape {
    Async(Payload),
    Other(String),
}

impl ReturnShape {
    pub fn raw() -> Self {
        Self::Async(Payload::Raw)
    }

    pub fn detailed() -> Self {
        Self::Async(Payload::Detailed)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Async(Payload::Raw) => "raw",
            Self::Async(Payload::Detailed) => "detailed",
            Self::Other(name) => name.as_str(),
        }
    }
}

impl fmt::Display for ReturnShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReturnShape {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "raw" => Self::raw(),
            "detailed" => Self::detailed(),
            other => Self::Other(other.to_string()),
        })
    }
}
