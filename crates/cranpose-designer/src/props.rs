//! Flat property maps and the shallow merge used by the resolver.

use indexmap::IndexMap;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum PropValue {
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
}

impl PropValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Str(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_empty_str(&self) -> bool {
        matches!(self, PropValue::Str(value) if value.is_empty())
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Null => f.write_str("null"),
            PropValue::Bool(value) => write!(f, "{value}"),
            PropValue::Number(value) => write!(f, "{value}"),
            PropValue::Str(value) => write!(f, "{value:?}"),
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Str(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Number(value)
    }
}

/// Insertion-ordered property map. Nested structures are never merged, so
/// values stay flat.
pub type PropertyMap = IndexMap<String, PropValue>;

/// Builds a [`PropertyMap`] from `(name, value)` pairs.
pub fn props<K, V, I>(entries: I) -> PropertyMap
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<PropValue>,
{
    entries
        .into_iter()
        .map(|(name, value)| (name.into(), value.into()))
        .collect()
}

/// Shallow merge: each layer overrides the previous one field by field.
pub fn merge_layers<'a>(layers: impl IntoIterator<Item = &'a PropertyMap>) -> PropertyMap {
    let mut merged = PropertyMap::new();
    for layer in layers {
        for (name, value) in layer {
            merged.insert(name.clone(), value.clone());
        }
    }
    merged
}

/// Whitespace-separated class names stored under `property`.
pub fn class_list<'a>(map: &'a PropertyMap, property: &str) -> impl Iterator<Item = &'a str> {
    map.get(property)
        .and_then(PropValue::as_str)
        .unwrap_or_default()
        .split_whitespace()
}

/// Appends `class` to the class list under `property` unless already there.
pub fn with_class(map: &mut PropertyMap, property: &str, class: &str) {
    if class_list(map, property).any(|existing| existing == class) {
        return;
    }
    let joined = match map.get(property).and_then(PropValue::as_str) {
        Some(existing) if !existing.trim().is_empty() => format!("{} {class}", existing.trim()),
        _ => class.to_string(),
    };
    map.insert(property.to_string(), PropValue::Str(joined));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_layers_win_field_by_field() {
        let defaults = props([("label", "Default"), ("class", "base")]);
        let overrides = props([("label", "Override")]);
        let merged = merge_layers([&defaults, &overrides]);

        assert_eq!(merged.get("label"), Some(&PropValue::from("Override")));
        assert_eq!(merged.get("class"), Some(&PropValue::from("base")));
        assert_eq!(
            merged.keys().collect::<Vec<_>>(),
            vec!["label", "class"],
            "first-seen order is kept"
        );
    }

    #[test]
    fn with_class_appends_once() {
        let mut map = props([("class", " card ")]);
        with_class(&mut map, "class", "empty");
        with_class(&mut map, "class", "empty");
        assert_eq!(class_list(&map, "class").collect::<Vec<_>>(), ["card", "empty"]);
    }

    #[test]
    fn with_class_replaces_non_string_value() {
        let mut map = props([("class", PropValue::Null)]);
        with_class(&mut map, "class", "empty");
        assert_eq!(map.get("class"), Some(&PropValue::from("empty")));
    }
}
