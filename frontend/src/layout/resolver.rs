use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use thiserror::Error;

use crate::layout::breakpoint::Breakpoint;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("layout table `{table}` has no entry for breakpoint `{breakpoint}`")]
    MissingBreakpoint { table: String, breakpoint: Breakpoint },
    #[error("layout table `{table}` is malformed: {source}")]
    Parse {
        table: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A number is a pixel length; a string is any CSS value and passes
/// through untouched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LayoutValue {
    Px(f64),
    Raw(String),
}

impl LayoutValue {
    pub fn css(&self) -> String {
        match self {
            LayoutValue::Px(px) => format!("{}px", px),
            LayoutValue::Raw(raw) => raw.clone(),
        }
    }

    #[cfg(test)]
    pub fn as_px(&self) -> Option<f64> {
        match self {
            LayoutValue::Px(px) => Some(*px),
            LayoutValue::Raw(_) => None,
        }
    }
}

impl fmt::Display for LayoutValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LayoutNode {
    Value(LayoutValue),
    Group(BTreeMap<String, LayoutNode>),
}

/// Flat values for one breakpoint, keyed by dotted path (`title.top`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutSet {
    values: BTreeMap<String, LayoutValue>,
}

impl LayoutSet {
    pub fn get(&self, key: &str) -> Option<&LayoutValue> {
        self.values.get(key)
    }

    pub fn css(&self, key: &str) -> Option<String> {
        self.get(key).map(LayoutValue::css)
    }

    /// Inline style from `(property, key)` pairs. Keys with no value are
    /// skipped.
    pub fn style(&self, properties: &[(&str, &str)]) -> String {
        properties
            .iter()
            .filter_map(|(property, key)| {
                self.css(key).map(|value| format!("{}: {};", property, value))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LayoutValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

fn flatten(prefix: &str, node: &LayoutNode, out: &mut BTreeMap<String, LayoutValue>) {
    match node {
        LayoutNode::Value(value) => {
            out.insert(prefix.to_string(), value.clone());
        }
        LayoutNode::Group(children) => {
            for (key, child) in children {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(&path, child, out);
            }
        }
    }
}

/// Layout parameters for one page section, keyed by breakpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutTable {
    name: String,
    entries: BTreeMap<Breakpoint, BTreeMap<String, LayoutNode>>,
}

impl LayoutTable {
    pub fn new(
        name: impl Into<String>,
        entries: BTreeMap<Breakpoint, BTreeMap<String, LayoutNode>>,
    ) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    pub fn from_json(name: &str, source: &str) -> Result<Self, LayoutError> {
        let entries = serde_json::from_str(source).map_err(|source| LayoutError::Parse {
            table: name.to_string(),
            source,
        })?;
        Ok(Self::new(name, entries))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resolve(&self, breakpoint: Breakpoint) -> Result<LayoutSet, LayoutError> {
        let groups = self
            .entries
            .get(&breakpoint)
            .ok_or_else(|| LayoutError::MissingBreakpoint {
                table: self.name.clone(),
                breakpoint,
            })?;
        let mut values = BTreeMap::new();
        for (key, node) in groups {
            flatten(key, node, &mut values);
        }
        Ok(LayoutSet { values })
    }

    /// Like `resolve`, but walks down to the nearest smaller breakpoint the
    /// table defines. The error still names the requested breakpoint.
    pub fn resolve_or_smaller(&self, breakpoint: Breakpoint) -> Result<LayoutSet, LayoutError> {
        let mut candidate = Some(breakpoint);
        while let Some(current) = candidate {
            if self.entries.contains_key(&current) {
                return self.resolve(current);
            }
            candidate = current.smaller();
        }
        Err(LayoutError::MissingBreakpoint {
            table: self.name.clone(),
            breakpoint,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_WIDTHS: &str = r#"{
        "mobile-small": { "width": 10 },
        "desktop": { "width": 20 }
    }"#;

    #[test]
    fn resolves_by_direct_lookup() {
        let table = LayoutTable::from_json("widths", TWO_WIDTHS).unwrap();
        let desktop = table.resolve(Breakpoint::Desktop).unwrap();
        assert_eq!(desktop.len(), 1);
        assert_eq!(desktop.get("width"), Some(&LayoutValue::Px(20.0)));
    }

    #[test]
    fn missing_breakpoint_is_a_configuration_error() {
        let table = LayoutTable::from_json("widths", TWO_WIDTHS).unwrap();
        let err = table.resolve(Breakpoint::Tablet).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::MissingBreakpoint { breakpoint: Breakpoint::Tablet, .. }
        ));
        assert_eq!(
            err.to_string(),
            "layout table `widths` has no entry for breakpoint `tablet`"
        );
    }

    #[test]
    fn fallback_uses_nearest_smaller_breakpoint() {
        let table = LayoutTable::from_json("widths", TWO_WIDTHS).unwrap();
        let tablet = table.resolve_or_smaller(Breakpoint::Tablet).unwrap();
        assert_eq!(tablet.get("width"), Some(&LayoutValue::Px(10.0)));
        let desktop = table.resolve_or_smaller(Breakpoint::Desktop).unwrap();
        assert_eq!(desktop.get("width"), Some(&LayoutValue::Px(20.0)));

        let only_desktop =
            LayoutTable::from_json("wide", r#"{ "desktop": { "width": 1 } }"#).unwrap();
        assert!(only_desktop.resolve_or_smaller(Breakpoint::Tablet).is_err());
    }

    #[test]
    fn numbers_and_strings_keep_their_shape() {
        let table = LayoutTable::from_json(
            "mixed",
            r#"{ "tablet": { "top": 12.5, "left": "calc(50% - 4rem)", "columns": "repeat(2, 1fr)" } }"#,
        )
        .unwrap();
        let set = table.resolve(Breakpoint::Tablet).unwrap();
        assert_eq!(set.css("top").as_deref(), Some("12.5px"));
        assert_eq!(set.get("top").and_then(LayoutValue::as_px), Some(12.5));
        assert_eq!(set.css("left").as_deref(), Some("calc(50% - 4rem)"));
        assert_eq!(set.get("left").and_then(LayoutValue::as_px), None);
        assert_eq!(LayoutValue::Raw("12".into()).css(), "12");
    }

    #[test]
    fn nested_groups_flatten_to_dotted_keys() {
        let table = LayoutTable::from_json(
            "hero",
            r#"{ "desktop": { "title": { "top": 80, "font": { "size": "4rem" } }, "gap": 24 } }"#,
        )
        .unwrap();
        let set = table.resolve(Breakpoint::Desktop).unwrap();
        let keys: Vec<&str> = set.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["gap", "title.font.size", "title.top"]);
        assert_eq!(
            set.style(&[("top", "title.top"), ("font-size", "title.font.size"), ("left", "title.left")]),
            "top: 80px; font-size: 4rem;"
        );
    }

    #[test]
    fn malformed_source_names_the_table() {
        let err = LayoutTable::from_json("broken", r#"{ "huge-screen": {} }"#).unwrap_err();
        assert!(matches!(err, LayoutError::Parse { .. }));
        assert!(err.to_string().starts_with("layout table `broken` is malformed"));
    }
}
