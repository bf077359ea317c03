//! Defines primitives for extents, axes and positioning modes.
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;

/// The two layout axes. Widths live on the horizontal axis, heights on the vertical one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        }
    }
}

/// A resolved extent: either a concrete length or `auto`, meaning the renderer should let the
/// element size itself.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Extent {
    #[default]
    Auto,
    Px(f64),
}

impl Extent {
    pub fn px(self) -> Option<f64> {
        match self {
            Extent::Px(v) => Some(v),
            Extent::Auto => None,
        }
    }

    pub fn is_auto(self) -> bool {
        matches!(self, Extent::Auto)
    }

    /// Applies `f` to a concrete length, leaving `auto` untouched.
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Extent {
        match self {
            Extent::Px(v) => Extent::Px(f(v)),
            Extent::Auto => Extent::Auto,
        }
    }
}

impl From<f64> for Extent {
    fn from(v: f64) -> Self {
        Extent::Px(v)
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extent::Auto => f.write_str("auto"),
            Extent::Px(v) => write!(f, "{v:.2}px"),
        }
    }
}

// Serialized the way a stylesheet would read it: a bare number or the string "auto".
impl Serialize for Extent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Extent::Auto => serializer.serialize_str("auto"),
            Extent::Px(v) => serializer.serialize_f64(*v),
        }
    }
}

impl<'de> Deserialize<'de> for Extent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ExtentVisitor;

        impl de::Visitor<'_> for ExtentVisitor {
            type Value = Extent;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a number or the string \"auto\"")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Extent, E> {
                Ok(Extent::Px(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Extent, E> {
                Ok(Extent::Px(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Extent, E> {
                Ok(Extent::Px(v as f64))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Extent, E> {
                if v.eq_ignore_ascii_case("auto") {
                    Ok(Extent::Auto)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(v), &self))
                }
            }
        }

        deserializer.deserialize_any(ExtentVisitor)
    }
}

/// CSS-style positioning mode applied to a node's visual representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Positioning {
    #[default]
    Static,
    Relative,
    Absolute,
}

impl Positioning {
    pub fn as_str(&self) -> &'static str {
        match self {
            Positioning::Static => "static",
            Positioning::Relative => "relative",
            Positioning::Absolute => "absolute",
        }
    }
}

impl fmt::Display for Positioning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_serializes_like_css() {
        assert_eq!(serde_json::to_string(&Extent::Auto).unwrap(), "\"auto\"");
        assert_eq!(serde_json::to_string(&Extent::Px(12.5)).unwrap(), "12.5");
        let parsed: Extent = serde_json::from_str("40").unwrap();
        assert_eq!(parsed, Extent::Px(40.0));
        let parsed: Extent = serde_json::from_str("\"AUTO\"").unwrap();
        assert!(parsed.is_auto());
        assert!(serde_json::from_str::<Extent>("\"wide\"").is_err());
    }

    #[test]
    fn map_leaves_auto_alone() {
        assert_eq!(Extent::Px(10.0).map(|v| v - 4.0), Extent::Px(6.0));
        assert_eq!(Extent::Auto.map(|v| v - 4.0), Extent::Auto);
    }
}
