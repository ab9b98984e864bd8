//! Declaration trees: the input model of the compiler.
//!
//! A [`Tree`] is an insertion-ordered list of `(key, Value)` entries. Keys
//! are either property names (`font_weight`) or selector fragments
//! (`li`, `$hover`), and the value decides which: a [`Value::Block`] opens a
//! nested rule, anything else is a declaration.
//!
//! | Value | Compiles to |
//! |-------|-------------|
//! | `Text`, `Number`, `Color` | one declaration |
//! | `List` | one declaration per element, in order |
//! | `Group` | `key-subkey` declarations on the current rule |
//! | `Block` | a nested rule |
//! | `Disabled` | nothing |
//! | `Invalid` | nothing, plus a diagnostic |
//!
//! Trees can be built in code:
//!
//! ```rust
//! use stylecraft::{Tree, Value};
//!
//! let tree = Tree::new().add(
//!     "a",
//!     Tree::new()
//!         .add("font_weight", "bold")
//!         .add("margin", 0)
//!         .add("$hover", Tree::new().add("text_decoration", "underline")),
//! );
//! assert_eq!(tree.len(), 1);
//! assert!(matches!(tree.get("a"), Some(Value::Block(_))));
//! ```
//!
//! or loaded from YAML (`!group` marks a grouped property) and JSON
//! (`{"@group": {...}}`).

use stylecraft_color::Color;

use crate::error::{Result, StyleError};

/// JSON key marking an object as a grouped property.
pub const JSON_GROUP_KEY: &str = "@group";

/// YAML tag marking a mapping as a grouped property.
pub const YAML_GROUP_TAG: &str = "group";

/// A declaration value or nested rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Already-rendered CSS text, emitted verbatim.
    Text(String),
    /// A bare number; non-zero values get the default unit.
    Number(f64),
    /// A color, emitted as CSS text.
    Color(Color),
    /// Repeated declarations of the same property.
    List(Vec<Value>),
    /// A shorthand family (`font: {size, family}` becomes `font-size`,
    /// `font-family`).
    Group(Tree),
    /// A nested rule.
    Block(Tree),
    /// Explicitly switched off.
    Disabled,
    /// Loaded data with no CSS meaning; carries the reason.
    Invalid(String),
}

impl Value {
    pub fn group(tree: Tree) -> Self {
        Value::Group(tree)
    }

    pub fn block(tree: Tree) -> Self {
        Value::Block(tree)
    }

    /// Human-readable name of the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Number(_) => "number",
            Value::Color(_) => "color",
            Value::List(_) => "list",
            Value::Group(_) => "group",
            Value::Block(_) => "block",
            Value::Disabled => "disabled",
            Value::Invalid(_) => "invalid",
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

macro_rules! number_from {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(value as f64)
                }
            }
        )+
    };
}

number_from!(f64, f32, i32, i64, u32, u64, usize);

impl From<Color> for Value {
    fn from(value: Color) -> Self {
        Value::Color(value)
    }
}

impl From<Tree> for Value {
    fn from(value: Tree) -> Self {
        Value::Block(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Disabled, Into::into)
    }
}

/// An insertion-ordered mapping from key to [`Value`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tree {
    entries: Vec<(String, Value)>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Tree::set`].
    pub fn add(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets `key`, replacing an existing value in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Merges every entry of `other` into this tree, `other` winning on
    /// shared keys.
    pub fn extend(&mut self, other: Tree) {
        for (key, value) in other.entries {
            self.set(key, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Loads a tree from a YAML mapping.
    ///
    /// Mappings become blocks, `!group`-tagged mappings groups, sequences
    /// lists and `null` disabled entries.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let doc: serde_yaml::Value =
            serde_yaml::from_str(yaml).map_err(|e| StyleError::Load(e.to_string()))?;
        match doc {
            serde_yaml::Value::Mapping(map) => yaml_tree(map),
            serde_yaml::Value::Null => Ok(Tree::new()),
            other => Err(StyleError::Load(format!(
                "expected a mapping at the top level, found {}",
                yaml_type_name(&other)
            ))),
        }
    }

    /// Loads a tree from a JSON object.
    ///
    /// Objects become blocks; an object whose only key is `"@group"` is a
    /// grouped property.
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: serde_json::Value =
            serde_json::from_str(json).map_err(|e| StyleError::Load(e.to_string()))?;
        match doc {
            serde_json::Value::Object(map) => Ok(json_tree(map)),
            other => Err(StyleError::Load(format!(
                "expected an object at the top level, found {}",
                json_type_name(&other)
            ))),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Tree {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Tree::new();
        for (key, value) in iter {
            tree.set(key, value);
        }
        tree
    }
}

impl IntoIterator for Tree {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// ─── YAML ───────────────────────────────────────────────────────────────────

fn yaml_type_name(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "boolean",
        serde_yaml::Value::Number(_) => "number",
        serde_yaml::Value::String(_) => "string",
        serde_yaml::Value::Sequence(_) => "sequence",
        serde_yaml::Value::Mapping(_) => "mapping",
        serde_yaml::Value::Tagged(_) => "tagged value",
    }
}

fn yaml_key(key: serde_yaml::Value) -> Result<String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        other => Err(StyleError::Load(format!(
            "keys must be strings, found {}",
            yaml_type_name(&other)
        ))),
    }
}

fn yaml_tree(map: serde_yaml::Mapping) -> Result<Tree> {
    let mut tree = Tree::new();
    for (key, value) in map {
        tree.set(yaml_key(key)?, yaml_value(value)?);
    }
    Ok(tree)
}

fn yaml_value(value: serde_yaml::Value) -> Result<Value> {
    Ok(match value {
        serde_yaml::Value::Null => Value::Disabled,
        serde_yaml::Value::String(s) => Value::Text(s),
        serde_yaml::Value::Number(n) => match n.as_f64() {
            Some(f) => Value::Number(f),
            None => Value::Invalid(format!("number {} is out of range", n)),
        },
        serde_yaml::Value::Sequence(items) => Value::List(
            items
                .into_iter()
                .map(yaml_value)
                .collect::<Result<Vec<_>>>()?,
        ),
        serde_yaml::Value::Mapping(map) => Value::Block(yaml_tree(map)?),
        serde_yaml::Value::Tagged(tagged) => {
            let tagged = *tagged;
            match tagged.value {
                serde_yaml::Value::Mapping(map) if tagged.tag == YAML_GROUP_TAG => {
                    Value::Group(yaml_tree(map)?)
                }
                _ => Value::Invalid(format!("unsupported tag {}", tagged.tag)),
            }
        }
        other @ serde_yaml::Value::Bool(_) => {
            Value::Invalid(format!("{} values have no CSS form", yaml_type_name(&other)))
        }
    })
}

// ─── JSON ───────────────────────────────────────────────────────────────────

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

fn json_tree(map: serde_json::Map<String, serde_json::Value>) -> Tree {
    map.into_iter()
        .map(|(key, value)| (key, json_value(value)))
        .collect()
}

fn json_value(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Disabled,
        serde_json::Value::String(s) => Value::Text(s),
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(f) => Value::Number(f),
            None => Value::Invalid(format!("number {} is out of range", n)),
        },
        serde_json::Value::Array(items) => {
            Value::List(items.into_iter().map(json_value).collect())
        }
        serde_json::Value::Object(mut map) => {
            if map.len() == 1 {
                if let Some(inner) = map.remove(JSON_GROUP_KEY) {
                    return match inner {
                        serde_json::Value::Object(group) => Value::Group(json_tree(group)),
                        other => Value::Invalid(format!(
                            "{} must hold an object, found {}",
                            JSON_GROUP_KEY,
                            json_type_name(&other)
                        )),
                    };
                }
            }
            Value::Block(json_tree(map))
        }
        other @ serde_json::Value::Bool(_) => {
            Value::Invalid(format!("{} values have no CSS form", json_type_name(&other)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Building
    // =========================================================================

    #[test]
    fn test_set_replaces_in_place() {
        let mut tree = Tree::new().add("color", "red").add("margin", 0);
        tree.set("color", "blue");
        let keys: Vec<&str> = tree.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["color", "margin"]);
        assert_eq!(tree.get("color"), Some(&Value::Text("blue".into())));
    }

    #[test]
    fn test_extend_merges() {
        let mut tree = Tree::new().add("a", 1).add("b", 2);
        tree.extend(Tree::new().add("b", 3).add("c", 4));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.get("b"), Some(&Value::Number(3.0)));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Value::from(None::<&str>), Value::Disabled);
        assert_eq!(Value::from(Some(5)), Value::Number(5.0));
        assert_eq!(
            Value::from(vec!["a", "b"]),
            Value::List(vec![Value::Text("a".into()), Value::Text("b".into())])
        );
        assert!(matches!(Value::from(Tree::new()), Value::Block(_)));
    }

    // =========================================================================
    // YAML
    // =========================================================================

    #[test]
    fn test_from_yaml_keeps_order_and_shapes() {
        let tree = Tree::from_yaml(
            r#"
ul:
  margin: 0
  display: block
  font: !group
    size: 12
    family: serif
  li:
    float: left
  hidden: ~
"#,
        )
        .unwrap();

        let Some(Value::Block(ul)) = tree.get("ul") else {
            panic!("expected a block");
        };
        let keys: Vec<&str> = ul.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["margin", "display", "font", "li", "hidden"]);
        assert!(matches!(ul.get("font"), Some(Value::Group(_))));
        assert!(matches!(ul.get("li"), Some(Value::Block(_))));
        assert_eq!(ul.get("hidden"), Some(&Value::Disabled));
    }

    #[test]
    fn test_from_yaml_booleans_are_invalid() {
        let tree = Tree::from_yaml("a:\n  bold: true").unwrap();
        let Some(Value::Block(a)) = tree.get("a") else {
            panic!("expected a block");
        };
        assert!(matches!(a.get("bold"), Some(Value::Invalid(_))));
    }

    #[test]
    fn test_from_yaml_rejects_scalars() {
        assert!(matches!(Tree::from_yaml("just text"), Err(StyleError::Load(_))));
        assert!(matches!(Tree::from_yaml("a: [unclosed"), Err(StyleError::Load(_))));
    }

    // =========================================================================
    // JSON
    // =========================================================================

    #[test]
    fn test_from_json_group_marker() {
        let tree = Tree::from_json(
            r#"{"p": {"font": {"@group": {"weight": "bold"}}, "margin": [1, 2]}}"#,
        )
        .unwrap();
        let Some(Value::Block(p)) = tree.get("p") else {
            panic!("expected a block");
        };
        assert!(matches!(p.get("font"), Some(Value::Group(_))));
        assert_eq!(
            p.get("margin"),
            Some(&Value::List(vec![Value::Number(1.0), Value::Number(2.0)]))
        );
    }

    #[test]
    fn test_from_json_keeps_key_order() {
        let tree = Tree::from_json(r#"{"z": {}, "a": {}, "m": {}}"#).unwrap();
        let keys: Vec<&str> = tree.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_from_json_rejects_arrays() {
        assert!(matches!(Tree::from_json("[1, 2]"), Err(StyleError::Load(_))));
    }
}
