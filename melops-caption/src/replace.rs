//! Ordered, case-insensitive text replacements.

use crate::error::ConfigError;
use regex::{NoExpand, Regex, RegexBuilder};
use serde_json::Value;

/// Single find/replace rule.
#[derive(Clone, Debug)]
struct Rule {
    find: String,
    pattern: Regex,
    replace: String,
}

/// Replacements applied in insertion order.
///
/// Later rules see the output of earlier ones, so order matters.
#[derive(Clone, Debug, Default)]
pub struct ReplaceMap {
    rules: Vec<Rule>,
}

impl ReplaceMap {
    /// Build from a JSON list of `{"find": .., "replace": ..}` objects.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        let items = value.as_array().ok_or(ConfigError::NotAList)?;
        let mut map = Self::default();

        for (index, item) in items.iter().enumerate() {
            let field = |name: &str| item.get(name).and_then(Value::as_str);

            let (Some(find), Some(replace)) = (field("find"), field("replace")) else {
                return Err(ConfigError::InvalidReplaceEntry {
                    index,
                    reason: "expected string 'find' and 'replace' keys",
                });
            };

            if find.is_empty() {
                return Err(ConfigError::InvalidReplaceEntry {
                    index,
                    reason: "'find' must not be empty",
                });
            }

            map.insert(find, replace);
        }

        Ok(map)
    }

    /// Add a rule; a repeated `find` keeps its position and takes the new replacement.
    pub fn insert(&mut self, find: &str, replace: &str) {
        if let Some(rule) = self.rules.iter_mut().find(|r| r.find == find) {
            rule.replace = replace.to_string();
            return;
        }

        let pattern = RegexBuilder::new(&regex::escape(find))
            .case_insensitive(true)
            .build();

        match pattern {
            Ok(pattern) => self.rules.push(Rule {
                find: find.to_string(),
                pattern,
                replace: replace.to_string(),
            }),
            // escaped literals only fail on size limits
            Err(e) => tracing::warn!(find, error = %e, "skipping replacement"),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule in order.
    pub fn apply(&self, text: &str) -> String {
        self.rules.iter().fold(text.to_string(), |acc, rule| {
            rule.pattern
                .replace_all(&acc, NoExpand(&rule.replace))
                .into_owned()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn replaces_case_insensitively() {
        let map =
            ReplaceMap::from_value(&json!([{ "find": "gonna", "replace": "going to" }])).unwrap();
        assert_eq!(map.apply("I'm GONNA win, Gonna!"), "I'm going to win, going to!");
    }

    #[test]
    fn applies_in_order() {
        let map = ReplaceMap::from_value(&json!([
            { "find": "cat", "replace": "dog" },
            { "find": "dog", "replace": "wolf" },
        ]))
        .unwrap();

        assert_eq!(map.apply("cat"), "wolf");
    }

    #[test]
    fn treats_find_literally() {
        let map = ReplaceMap::from_value(&json!([{ "find": "a.b", "replace": "$1" }])).unwrap();
        assert_eq!(map.apply("a.b axb"), "$1 axb");
    }

    #[test]
    fn repeated_find_keeps_position() {
        let map = ReplaceMap::from_value(&json!([
            { "find": "x", "replace": "y" },
            { "find": "y", "replace": "z" },
            { "find": "x", "replace": "q" },
        ]))
        .unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map.apply("x"), "q");
    }

    #[test]
    fn rejects_non_list() {
        let result = ReplaceMap::from_value(&json!({ "find": "a", "replace": "b" }));
        assert!(matches!(result, Err(ConfigError::NotAList)));
    }

    #[test]
    fn rejects_incomplete_entries() {
        let result = ReplaceMap::from_value(&json!([
            { "find": "a", "replace": "b" },
            { "find": "c" },
        ]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidReplaceEntry { index: 1, .. })
        ));
    }

    #[test]
    fn empty_map_is_identity() {
        let map = ReplaceMap::default();
        assert!(map.is_empty());
        assert_eq!(map.apply("Hello"), "Hello");
    }
}
