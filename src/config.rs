//! Generator configuration.
//!
//! [`GeneratorConfig`] is the owned configuration record consumed by the
//! generation engine, assembled once from the parsed [`crate::cli::Cli`].
//! The engine never reads the CLI directly.

use crate::cli::Cli;
use crate::generate::GenerateError;
use crate::template::TemplateKind;
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Strategy used to derive class and file names for generated runners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamingScheme {
    /// `Parallel<NN>IT`, numbered by the global file counter.
    Simple,
    /// Upper-camel form of the feature file name plus the counter.
    FeatureTitle,
}

impl FromStr for NamingScheme {
    type Err = GenerateError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "simple" => Ok(Self::Simple),
            "feature-title" => Ok(Self::FeatureTitle),
            _ => Err(GenerateError::NamingScheme {
                value: raw.to_owned(),
            }),
        }
    }
}

/// Owned configuration record consumed by [`crate::generate::Generator`].
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory scanned recursively for feature files.
    pub features_directory: Utf8PathBuf,
    /// Directory generated runner sources are written to.
    pub output_directory: Utf8PathBuf,
    /// Directory the generated runners write their Cucumber reports to.
    pub cucumber_output_dir: String,
    /// Naming scheme for generated classes.
    pub naming_scheme: NamingScheme,
    /// Base tag filter expression in quoted AND-of-OR form.
    pub tags: String,
    /// Prefix marking parallel tags, when configured.
    pub parallel_tag_prefix: Option<String>,
    /// Cucumber output formatter names.
    pub format: Vec<String>,
    /// Glue package names.
    pub glue: Vec<String>,
    /// Fail scenarios on undefined or pending steps.
    pub strict: bool,
    /// Disable ANSI colours in Cucumber output.
    pub monochrome: bool,
    /// Template rendered for each runner.
    pub template: TemplateKind,
    /// Whether tag-based file skipping is enabled at all.
    pub filter_features_by_tags: bool,
}

impl GeneratorConfig {
    /// Build the engine configuration from parsed command line options.
    ///
    /// # Errors
    ///
    /// Returns an error when a configured path is not valid UTF-8.
    pub fn from_cli(cli: &Cli) -> Result<Self, GenerateError> {
        Ok(Self {
            features_directory: into_utf8(cli.features_directory.clone())?,
            output_directory: into_utf8(cli.output_directory.clone())?,
            cucumber_output_dir: cli.cucumber_output_dir.clone(),
            naming_scheme: cli.naming_scheme,
            tags: cli.tags.clone(),
            parallel_tag_prefix: cli
                .parallel_tag_prefix
                .clone()
                .filter(|prefix| !prefix.is_empty()),
            format: trimmed(&cli.format),
            glue: trimmed(&cli.glue),
            strict: cli.strict,
            monochrome: cli.monochrome,
            template: if cli.use_testng {
                TemplateKind::Testng
            } else {
                TemplateKind::Junit
            },
            filter_features_by_tags: cli.filter_features_by_tags,
        })
    }
}

fn into_utf8(path: PathBuf) -> Result<Utf8PathBuf, GenerateError> {
    Utf8PathBuf::from_path_buf(path).map_err(|path| GenerateError::NonUtf8Path { path })
}

/// Trim list values and drop entries that end up empty, so `"json, html"`
/// and `"json,html"` configure the same formats.
fn trimmed(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .collect()
}
