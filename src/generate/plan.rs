//! Pure generation planning.
//!
//! Resolves the per-runner tag filters for one feature file. The parallel
//! split and the residual filter are computed here as plain values, so the
//! engine never mutates shared configuration between runners and planning
//! stays referentially transparent.

use crate::config::NamingScheme;
use crate::naming::RUNNER_EXTENSION;
use crate::tag::{self, TagExpression};
use itertools::Itertools;

/// One planned runner for a feature file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerSpec {
    /// Global sequence number, unique across the whole run.
    pub sequence: u32,
    /// Resolved tag filter for this runner.
    pub tags: String,
    /// Output file name, extension included.
    pub file_name: String,
    /// Output class name, extension stripped.
    pub class_name: String,
}

/// Outcome of planning one feature file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeaturePlan {
    /// The file matched no required tag and produces no runners.
    Skipped,
    /// Runners to generate, in emission order.
    Runners(Vec<RunnerSpec>),
}

/// Inputs for planning one feature file.
#[derive(Debug, Clone, Copy)]
pub struct PlanRequest<'a> {
    /// File name of the feature, used by the `feature-title` scheme.
    pub feature_file_name: &'a str,
    /// File text, or `None` when reading failed.
    pub feature_text: Option<&'a str>,
    /// Parsed base expression used for the skip decision.
    pub expression: &'a TagExpression,
    /// Original (unsplit) tag filter string.
    pub base_tags: &'a str,
    /// Prefix marking parallel tags, when configured.
    pub parallel_tag_prefix: Option<&'a str>,
    /// Naming scheme for file and class names.
    pub naming_scheme: NamingScheme,
    /// Whether tag-based skipping is enabled.
    pub filter_by_tags: bool,
    /// Sequence number the first emitted runner will take.
    pub next_sequence: u32,
}

/// Plan every runner for one feature file.
///
/// An unreadable file (`feature_text` of `None`) is handled fail-open: the
/// skip check passes and the parallel split is empty, so exactly one
/// defensive runner with the base filter is planned. A readable file that
/// fails the skip check is [`FeaturePlan::Skipped`]; otherwise one runner is
/// planned per parallel tag, in discovery order, followed by the residual
/// runner.
#[must_use]
pub fn plan_feature(request: &PlanRequest<'_>) -> FeaturePlan {
    if request.filter_by_tags {
        if let Some(text) = request.feature_text {
            if !request.expression.matches(text) {
                return FeaturePlan::Skipped;
            }
        }
    }

    let parallel_tags = match (request.parallel_tag_prefix, request.feature_text) {
        (Some(prefix), Some(text)) => {
            tag::filter_tags_by_prefix(&tag::extract_feature_tags(text), prefix)
        }
        _ => Vec::new(),
    };

    let mut sequence = request.next_sequence;
    let mut specs = Vec::new();
    for tags in split_filters(request.base_tags, &parallel_tags) {
        let file_name = request
            .naming_scheme
            .runner_file_name(request.feature_file_name, sequence);
        let class_name = file_name
            .strip_suffix(RUNNER_EXTENSION)
            .unwrap_or(&file_name)
            .to_owned();
        specs.push(RunnerSpec {
            sequence,
            tags,
            file_name,
            class_name,
        });
        sequence += 1;
    }
    FeaturePlan::Runners(specs)
}

/// Resolve the filters for one feature file: one per parallel tag, then the
/// residual filter that excludes every parallel tag again.
///
/// Each parallel tag is prepended as an additional one-token OR-group; the
/// residual appends one negated group per parallel tag so scenarios claimed
/// by a parallel runner are not executed twice. With no parallel tags this
/// is just the base expression.
#[must_use]
pub fn split_filters(base: &str, parallel_tags: &[String]) -> Vec<String> {
    let mut filters: Vec<String> = parallel_tags
        .iter()
        .map(|tag| prepend_group(base, tag))
        .collect();
    filters.push(residual_filter(base, parallel_tags));
    filters
}

fn prepend_group(base: &str, tag: &str) -> String {
    if base.is_empty() {
        format!("\"{tag}\"")
    } else {
        format!("\"{tag}\", {base}")
    }
}

fn residual_filter(base: &str, parallel_tags: &[String]) -> String {
    let negated = parallel_tags
        .iter()
        .map(|tag| format!("\"~{tag}\""))
        .join(", ");
    match (base.is_empty(), negated.is_empty()) {
        (_, true) => base.to_owned(),
        (true, false) => negated,
        (false, false) => format!("{base}, {negated}"),
    }
}
