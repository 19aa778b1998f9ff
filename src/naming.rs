//! Runner class and file naming.
//!
//! Names are deterministic given the feature file name and the global file
//! counter. The counter alone guarantees uniqueness across a run; the
//! `feature-title` stem is merely descriptive.

use crate::config::NamingScheme;
use convert_case::{Boundary, Converter, Pattern};

/// Extension of every generated runner source file.
pub const RUNNER_EXTENSION: &str = ".java";

impl NamingScheme {
    /// Resolve the output file name for a runner, extension included.
    ///
    /// Counters of 100 or more widen the zero-padded field naturally.
    #[must_use]
    pub fn runner_file_name(self, feature_file_name: &str, sequence: u32) -> String {
        match self {
            Self::Simple => format!("Parallel{sequence:02}IT{RUNNER_EXTENSION}"),
            Self::FeatureTitle => feature_title_file_name(feature_file_name, sequence),
        }
    }
}

/// Build an upper-camel class name from the feature file name: extension
/// stripped, underscores hyphenated, spaces removed, each hyphen-delimited
/// segment capitalised and concatenated. A digit-initial result gains a
/// leading underscore because Java identifiers must not start with a digit.
fn feature_title_file_name(feature_file_name: &str, sequence: u32) -> String {
    let stem = feature_file_name
        .rsplit_once('.')
        .map_or(feature_file_name, |(stem, _)| stem);
    let hyphenated = stem.replace('_', "-").replace(' ', "");
    let mut class_name = camel_converter().convert(hyphenated);
    if class_name.starts_with(|c: char| c.is_ascii_digit()) {
        class_name.insert(0, '_');
    }
    format!("{class_name}{sequence:02}IT{RUNNER_EXTENSION}")
}

/// Converter pinned to hyphen boundaries: each hyphen-delimited segment is
/// capitalised (first letter upper, rest lower) and the segments are
/// concatenated without a delimiter.
fn camel_converter() -> Converter {
    Converter::new()
        .set_boundaries(&[Boundary::Hyphen])
        .set_pattern(Pattern::Capital)
        .set_delim("")
}
