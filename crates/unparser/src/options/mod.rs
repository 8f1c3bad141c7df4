//! The merged options object handed over by the options loader.

mod de;
mod map;

use std::io::Read;

pub use map::OptionMap;

use crate::error::OptionsError;
use crate::value::OptionValue;

/// Reserved key holding the ordered positional arguments (spec files, commands).
pub const POSITIONAL_KEY: &str = "_";

/// Reserved key holding tokens the framework receives after a literal `--`.
pub const PASSTHROUGH_KEY: &str = "--";

/// Flat, merged option set combining framework and host runtime settings.
///
/// Besides ordinary keys it carries the positional list ([`POSITIONAL_KEY`])
/// and the pass-through list ([`PASSTHROUGH_KEY`]). Keys are untyped and keep
/// their insertion order.
///
/// # Examples
///
/// ```
/// use unparser::{LogicalOptions, OptionValue};
///
/// let options = LogicalOptions::new()
///     .with("_", vec!["debug"])
///     .with("timeout", 2000);
///
/// assert_eq!(options.positional(), ["debug"]);
/// assert_eq!(options.get("timeout"), Some(&OptionValue::Integer(2000)));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogicalOptions {
    options: OptionMap,
    positional: Vec<String>,
    passthrough: Vec<String>,
}

impl LogicalOptions {
    /// Creates an empty option set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            options: OptionMap::new(),
            positional: Vec::new(),
            passthrough: Vec::new(),
        }
    }

    /// Parses a JSON object, keeping key order.
    pub fn from_json_str(input: &str) -> Result<Self, OptionsError> {
        let map: OptionMap = serde_json::from_str(input)?;
        Self::try_from(map)
    }

    /// Reads a JSON object from `reader`, keeping key order.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, OptionsError> {
        let map: OptionMap = serde_json::from_reader(reader)?;
        Self::try_from(map)
    }

    /// Builder form of [`LogicalOptions::set`] for literals.
    ///
    /// Values for the reserved keys are converted leniently: every element is
    /// rendered with its closest string form.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        let key = key.into();
        let value = value.into();
        match reserved_slot(&key) {
            Some(_) => *self.reserved_mut(&key) = lossy_tokens(value),
            None => {
                self.options.insert(key, value);
            }
        }
        self
    }

    /// Stores `value` under `key`, routing the reserved keys to their lists.
    ///
    /// Reserved keys only accept a list of scalars, or the absent marker which
    /// clears the list.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Result<(), OptionsError> {
        let key = key.into();
        let value = value.into();
        match reserved_slot(&key) {
            Some(name) => *self.reserved_mut(&key) = strict_tokens(name, value)?,
            None => {
                self.options.insert(key, value);
            }
        }
        Ok(())
    }

    fn reserved_mut(&mut self, key: &str) -> &mut Vec<String> {
        if key == POSITIONAL_KEY {
            &mut self.positional
        } else {
            &mut self.passthrough
        }
    }

    /// Appends a positional argument.
    pub fn push_positional(&mut self, token: impl Into<String>) {
        self.positional.push(token.into());
    }

    /// Appends a pass-through token.
    pub fn push_passthrough(&mut self, token: impl Into<String>) {
        self.passthrough.push(token.into());
    }

    /// Positional arguments in order.
    #[must_use]
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// Tokens forwarded after `--`.
    #[must_use]
    pub fn passthrough(&self) -> &[String] {
        &self.passthrough
    }

    /// Value for an ordinary key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key)
    }

    /// Ordinary keys, without the reserved lists.
    #[must_use]
    pub const fn options(&self) -> &OptionMap {
        &self.options
    }

    /// Reports whether there are no keys and both reserved lists are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty() && self.positional.is_empty() && self.passthrough.is_empty()
    }
}

impl TryFrom<OptionMap> for LogicalOptions {
    type Error = OptionsError;

    fn try_from(map: OptionMap) -> Result<Self, Self::Error> {
        let mut options = Self::new();
        for (key, value) in map {
            options.set(key, value)?;
        }
        Ok(options)
    }
}

fn reserved_slot(key: &str) -> Option<&'static str> {
    match key {
        POSITIONAL_KEY => Some(POSITIONAL_KEY),
        PASSTHROUGH_KEY => Some(PASSTHROUGH_KEY),
        _ => None,
    }
}

fn strict_tokens(key: &'static str, value: OptionValue) -> Result<Vec<String>, OptionsError> {
    match value {
        OptionValue::Absent => Ok(Vec::new()),
        OptionValue::List(items) => items
            .into_iter()
            .enumerate()
            .filter(|(_, item)| !item.is_absent())
            .map(|(index, item)| {
                item.scalar_token().ok_or(OptionsError::NestedToken {
                    key,
                    index,
                    found: item.kind_name(),
                })
            })
            .collect(),
        other => Err(OptionsError::ReservedKey {
            key,
            found: other.kind_name(),
        }),
    }
}

fn lossy_tokens(value: OptionValue) -> Vec<String> {
    match value {
        OptionValue::Absent => Vec::new(),
        OptionValue::List(items) => items
            .into_iter()
            .filter(|item| !item.is_absent())
            .map(|item| item.to_string())
            .collect(),
        other => vec![other.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_keeps_key_order() {
        let options =
            LogicalOptions::from_json_str(r#"{"zeta": 1, "alpha": true, "mid": "x"}"#).unwrap();
        let keys: Vec<_> = options.options().keys().collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn json_routes_reserved_keys() {
        let options = LogicalOptions::from_json_str(
            r#"{"_": ["debug", "test/a.spec.js"], "--": ["--extra"], "timeout": 2000}"#,
        )
        .unwrap();

        assert_eq!(options.positional(), ["debug", "test/a.spec.js"]);
        assert_eq!(options.passthrough(), ["--extra"]);
        assert_eq!(options.options().len(), 1);
    }

    #[test]
    fn json_value_kinds() {
        let options = LogicalOptions::from_json_str(
            r#"{"b": false, "i": -3, "f": 0.5, "s": "x", "l": [1, "a"], "m": {"k": 1}, "n": null}"#,
        )
        .unwrap();

        assert_eq!(options.get("b"), Some(&OptionValue::Bool(false)));
        assert_eq!(options.get("i"), Some(&OptionValue::Integer(-3)));
        assert_eq!(options.get("f"), Some(&OptionValue::Float(0.5)));
        assert_eq!(options.get("s"), Some(&OptionValue::from("x")));
        assert_eq!(
            options.get("l"),
            Some(&OptionValue::List(vec![
                OptionValue::Integer(1),
                OptionValue::from("a")
            ]))
        );
        assert!(matches!(options.get("m"), Some(OptionValue::Map(map)) if map.len() == 1));
        assert_eq!(options.get("n"), Some(&OptionValue::Absent));
    }

    #[test]
    fn numeric_positionals_are_stringified() {
        let options = LogicalOptions::from_json_str(r#"{"_": ["spec", 3]}"#).unwrap();
        assert_eq!(options.positional(), ["spec", "3"]);
    }

    #[test]
    fn rejects_scalar_positional() {
        let error = LogicalOptions::from_json_str(r#"{"_": "debug"}"#).unwrap_err();
        assert!(error.to_string().contains("reserved key '_' must hold a list"));
    }

    #[test]
    fn rejects_nested_positional() {
        let mut options = LogicalOptions::new();
        let error = options
            .set(POSITIONAL_KEY, vec![OptionValue::from("a"), OptionValue::from(vec![1])])
            .unwrap_err();
        assert!(matches!(
            error,
            OptionsError::NestedToken { key: "_", index: 1, found: "list" }
        ));
    }

    #[test]
    fn rejects_non_object_input() {
        assert!(matches!(
            LogicalOptions::from_json_str("[1, 2]"),
            Err(OptionsError::Json(_))
        ));
    }

    #[test]
    fn builder_stringifies_reserved_values() {
        let options = LogicalOptions::new().with("_", "inspect").with("--", vec![1, 2]);
        assert_eq!(options.positional(), ["inspect"]);
        assert_eq!(options.passthrough(), ["1", "2"]);
    }

    #[test]
    fn absent_clears_reserved_list() {
        let mut options = LogicalOptions::new().with("_", vec!["a"]);
        options.set("_", OptionValue::Absent).unwrap();
        assert!(options.positional().is_empty());
        assert!(options.is_empty());
    }
}
