#![forbid(unsafe_code)]

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

pub const SEPARATOR: char = '/';
pub const ROOT: &str = "/";

/// Absolute, normalized catalog path.
///
/// Every path is rooted at `/`. Parsing never fails: empty and `.` segments are
/// dropped, `..` pops the previous segment (and stops at the root), and a
/// trailing separator is ignored.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CatalogPath(String);

impl CatalogPath {
    pub fn root() -> Self {
        Self(ROOT.to_string())
    }

    pub fn parse(value: &str) -> Self {
        let mut segments: Vec<&str> = Vec::new();
        for segment in value.split(SEPARATOR) {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                other => segments.push(other),
            }
        }
        Self::from_segments(segments)
    }

    fn from_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> Self {
        let mut out = String::new();
        for segment in segments {
            out.push(SEPARATOR);
            out.push_str(segment);
        }
        if out.is_empty() {
            return Self::root();
        }
        Self(out)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == ROOT
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEPARATOR).filter(|segment| !segment.is_empty())
    }

    /// Final segment, `None` for the root.
    pub fn name(&self) -> Option<&str> {
        if self.is_root() {
            return None;
        }
        self.0.rsplit(SEPARATOR).next()
    }

    /// Containing directory, `None` for the root.
    pub fn parent(&self) -> Option<CatalogPath> {
        if self.is_root() {
            return None;
        }
        let cut = self.0.rfind(SEPARATOR).unwrap_or(0);
        if cut == 0 {
            return Some(Self::root());
        }
        Some(Self(self.0[..cut].to_string()))
    }

    /// `(parent, name)` key of the entry describing this path.
    pub fn key(&self) -> Option<(String, String)> {
        let parent = self.parent()?;
        let name = self.name()?;
        Some((parent.0, name.to_string()))
    }

    /// Addressable ancestors ordered root-to-leaf, ending with `self`.
    ///
    /// The root is not addressable, so `CatalogPath::root().ancestors()` is empty.
    pub fn ancestors(&self) -> Vec<CatalogPath> {
        let segments = self.segments().collect::<Vec<_>>();
        (1..=segments.len())
            .map(|len| Self::from_segments(segments[..len].iter().copied()))
            .collect()
    }

    /// True when `self` equals `other` or lies beneath it. Segment-aware:
    /// `/a/bc` is not within `/a/b`.
    pub fn is_within(&self, other: &CatalogPath) -> bool {
        if other.is_root() || self == other {
            return true;
        }
        self.0
            .strip_prefix(other.as_str())
            .is_some_and(|rest| rest.starts_with(SEPARATOR))
    }
}

impl Default for CatalogPath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for CatalogPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CatalogPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for CatalogPath {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<&String> for CatalogPath {
    fn from(value: &String) -> Self {
        Self::parse(value)
    }
}

impl From<&CatalogPath> for CatalogPath {
    fn from(value: &CatalogPath) -> Self {
        value.clone()
    }
}

impl AsRef<str> for CatalogPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for CatalogPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CatalogPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
