//! Tag expression parsing and matching.
//!
//! Tag filters arrive in AND-of-OR normal form: a comma-separated list of
//! double-quoted groups, e.g. `"@fast,@smoke","~@wip"`. Each quoted group
//! is one OR-group and the groups are AND-ed together.
//!
//! Matching is a file-level pre-filter, not a scenario-level guarantee: a
//! token is looked up as a literal substring of the feature text, so
//! over-generation is possible but a file containing a matching scenario is
//! never skipped. Scenario-level tag evaluation is left to the generated
//! runner.

use itertools::Itertools;
use lazy_regex::regex;

/// A tag filter in AND-of-OR normal form.
///
/// Group and token order follow the source expression but carry no semantic
/// weight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagExpression {
    groups: Vec<Vec<String>>,
}

impl TagExpression {
    /// Parse a quoted tag filter into its AND-ed OR-groups.
    ///
    /// Each double-quoted run becomes one group; the tokens inside it are
    /// split on commas. Text outside quotes is ignored. An empty input
    /// yields an empty AND, which matches any text.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let groups = regex!(r#""([^"]*?)""#)
            .captures_iter(text)
            .map(|caps| {
                let inner = caps.get(1).map_or("", |m| m.as_str()).replace('"', "");
                inner.split(',').map(str::to_owned).collect()
            })
            .collect();
        Self { groups }
    }

    /// Groups of tokens: outer AND over inner OR.
    #[must_use]
    pub fn groups(&self) -> &[Vec<String>] {
        &self.groups
    }

    /// True when the expression places no constraint at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Decide whether a feature file's text satisfies every OR-group.
    ///
    /// A group holding a negated (`~`-prefixed) token is satisfied
    /// outright: at this scan granularity it cannot be proven that a file
    /// containing an excluded tag has no scenario that still matches.
    #[must_use]
    pub fn matches(&self, feature_text: &str) -> bool {
        self.groups
            .iter()
            .all(|group| group_matches(group, feature_text))
    }
}

fn group_matches(group: &[String], feature_text: &str) -> bool {
    group
        .iter()
        .any(|token| token.starts_with('~') || feature_text.contains(token.as_str()))
}

/// Collect every `@tag` token literally present in the text, in first
/// occurrence order. Duplicates are kept; a tag name ends at the first
/// non-word character, so `@wip-123` yields `@wip`.
#[must_use]
pub fn extract_feature_tags(feature_text: &str) -> Vec<String> {
    regex!(r"@\w+")
        .find_iter(feature_text)
        .map(|m| m.as_str().to_owned())
        .collect()
}

/// Keep the tags whose name, once any leading `@` is stripped, starts with
/// `prefix`. The result preserves first-occurrence order and holds each tag
/// once.
#[must_use]
pub fn filter_tags_by_prefix(tags: &[String], prefix: &str) -> Vec<String> {
    tags.iter()
        .filter(|tag| tag.strip_prefix('@').unwrap_or(tag.as_str()).starts_with(prefix))
        .unique()
        .cloned()
        .collect()
}

/// Render a flat token list in quoted filter form: `"t1","t2"`.
///
/// An empty list renders as the empty string.
#[must_use]
pub fn quote_join<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| format!("\"{}\"", item.as_ref()))
        .join(",")
}
