use std::fmt;

use crate::options::OptionMap;

/// Value attached to a single option key.
///
/// The options loader hands over whatever it merged from defaults, config
/// files and the command line; no schema is enforced at this layer.
#[derive(Clone, Debug, PartialEq)]
pub enum OptionValue {
    /// `--name` when `true`, `--no-name` when `false`.
    Bool(bool),
    /// Whole number.
    Integer(i64),
    /// Fractional or out-of-range number. `NaN` is never emitted.
    Float(f64),
    /// Free-form text.
    String(String),
    /// Repeated option; one `--name value` pair per element.
    List(Vec<OptionValue>),
    /// Nested object, flattened to `name.child` keys on output.
    Map(OptionMap),
    /// Explicit "absent" marker. The key is omitted from the output, which
    /// lets a later configuration layer suppress an inherited default.
    Absent,
}

impl OptionValue {
    /// Reports whether the value is the absent marker.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Short name of the value kind, used in diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Integer(_) | Self::Float(_) => "number",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "object",
            Self::Absent => "null",
        }
    }

    /// Closest single-token string form of a scalar value.
    ///
    /// Returns `None` for the absent marker, `NaN`, lists and maps, none of
    /// which have a single-token rendering.
    #[must_use]
    pub fn scalar_token(&self) -> Option<String> {
        match self {
            Self::Bool(value) => Some(value.to_string()),
            Self::Integer(value) => Some(value.to_string()),
            Self::Float(value) => float_token(*value),
            Self::String(value) => Some(value.clone()),
            Self::List(_) | Self::Map(_) | Self::Absent => None,
        }
    }
}

fn float_token(value: f64) -> Option<String> {
    if value.is_nan() {
        None
    } else if value.is_infinite() {
        Some(if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned())
    } else {
        Some(value.to_string())
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Self::Map(_) => f.write_str("[object]"),
            other => f.write_str(other.scalar_token().as_deref().unwrap_or("")),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<OptionMap> for OptionValue {
    fn from(value: OptionMap) -> Self {
        Self::Map(value)
    }
}

impl<T: Into<Self>> From<Vec<T>> for OptionValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for OptionValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_tokens_use_closest_string_form() {
        assert_eq!(OptionValue::from(true).scalar_token().as_deref(), Some("true"));
        assert_eq!(OptionValue::from(2000).scalar_token().as_deref(), Some("2000"));
        assert_eq!(OptionValue::from(1.5).scalar_token().as_deref(), Some("1.5"));
        assert_eq!(OptionValue::from(2.0).scalar_token().as_deref(), Some("2"));
        assert_eq!(OptionValue::from("spec").scalar_token().as_deref(), Some("spec"));
    }

    #[test]
    fn non_scalar_values_have_no_token() {
        assert_eq!(OptionValue::Absent.scalar_token(), None);
        assert_eq!(OptionValue::Float(f64::NAN).scalar_token(), None);
        assert_eq!(OptionValue::from(vec![1, 2]).scalar_token(), None);
    }

    #[test]
    fn infinities_render_like_the_options_loader() {
        assert_eq!(
            OptionValue::Float(f64::INFINITY).scalar_token().as_deref(),
            Some("Infinity")
        );
        assert_eq!(
            OptionValue::Float(f64::NEG_INFINITY).scalar_token().as_deref(),
            Some("-Infinity")
        );
    }

    #[test]
    fn option_converts_none_to_absent() {
        assert!(OptionValue::from(None::<&str>).is_absent());
        assert_eq!(OptionValue::from(Some("x")), OptionValue::from("x"));
    }

    #[test]
    fn display_joins_lists() {
        assert_eq!(OptionValue::from(vec!["a", "b"]).to_string(), "a,b");
    }
}
