//! Runner generation engine.
//!
//! Walks the configured features directory, decides per file whether any
//! runner is generated, splits parallel tags into dedicated runners, and
//! renders and writes one source file per planned runner. Feature files are
//! processed strictly in discovery order: the file counter is global and
//! the generated class names depend on it.

mod error;
pub mod plan;

pub use error::GenerateError;
pub use plan::{FeaturePlan, PlanRequest, RunnerSpec};

use crate::config::GeneratorConfig;
use crate::discovery;
use crate::tag::TagExpression;
use crate::template::{RunnerContext, TemplateEngine};
use camino::Utf8Path;
use std::fs;
use tracing::{debug, info, warn};

/// Counts reported after a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Feature files discovered.
    pub features_seen: usize,
    /// Feature files skipped by the tag filter.
    pub features_skipped: usize,
    /// Runner files written.
    pub runners_written: usize,
}

/// Orchestrates planning, rendering and writing of runner classes.
#[derive(Debug)]
pub struct Generator<'a> {
    config: &'a GeneratorConfig,
    templates: TemplateEngine,
    expression: TagExpression,
    file_counter: u32,
}

impl<'a> Generator<'a> {
    /// Build a generator for one run. The base tag expression is parsed
    /// once and the file counter starts at 1.
    ///
    /// # Errors
    ///
    /// Returns an error when an embedded template fails to compile.
    pub fn new(config: &'a GeneratorConfig) -> Result<Self, GenerateError> {
        Ok(Self {
            config,
            templates: TemplateEngine::new()?,
            expression: TagExpression::parse(&config.tags),
            file_counter: 1,
        })
    }

    /// Generate every runner for the configured features directory.
    ///
    /// # Errors
    ///
    /// Returns an error when discovery fails or a runner cannot be rendered
    /// or written. Feature files that cannot be read are logged and handled
    /// fail-open instead of aborting.
    pub fn generate(&mut self) -> Result<GenerationSummary, GenerateError> {
        let features = discovery::feature_files(&self.config.features_directory)?;
        fs::create_dir_all(&self.config.output_directory).map_err(|source| {
            GenerateError::CreateOutputDir {
                path: self.config.output_directory.clone(),
                source,
            }
        })?;

        let mut summary = GenerationSummary {
            features_seen: features.len(),
            ..GenerationSummary::default()
        };
        for feature in &features {
            match self.process_feature(feature)? {
                0 => summary.features_skipped += 1,
                written => summary.runners_written += written,
            }
        }
        info!(
            features = summary.features_seen,
            skipped = summary.features_skipped,
            runners = summary.runners_written,
            "runner generation complete"
        );
        Ok(summary)
    }

    /// Plan, render and write the runners for one feature file, returning
    /// how many were written. Zero means the file was skipped.
    fn process_feature(&mut self, feature: &Utf8Path) -> Result<usize, GenerateError> {
        let text = match fs::read_to_string(feature) {
            Ok(text) => Some(text),
            Err(err) => {
                warn!(
                    path = %feature,
                    error = %err,
                    "failed to read feature file; runner will be generated anyway"
                );
                None
            }
        };

        let request = PlanRequest {
            feature_file_name: feature.file_name().unwrap_or_default(),
            feature_text: text.as_deref(),
            expression: &self.expression,
            base_tags: &self.config.tags,
            parallel_tag_prefix: self.config.parallel_tag_prefix.as_deref(),
            naming_scheme: self.config.naming_scheme,
            filter_by_tags: self.config.filter_features_by_tags,
            next_sequence: self.file_counter,
        };
        let specs = match plan::plan_feature(&request) {
            FeaturePlan::Skipped => {
                debug!(path = %feature, "feature matches no required tag; skipped");
                return Ok(0);
            }
            FeaturePlan::Runners(specs) => specs,
        };

        let location = self.feature_location(feature);
        for spec in &specs {
            self.write_runner(spec, &location)?;
            self.file_counter += 1;
        }
        Ok(specs.len())
    }

    /// Trim the feature path down to `<features-dir-name>/<relative path>`
    /// with forward-slash separators, the form the generated runner embeds
    /// as its classpath feature location.
    fn feature_location(&self, feature: &Utf8Path) -> String {
        let root = &self.config.features_directory;
        let relative = feature.strip_prefix(root).unwrap_or(feature);
        let location = root.file_name().map_or_else(
            || relative.to_string(),
            |dir_name| format!("{dir_name}/{relative}"),
        );
        location.replace('\\', "/")
    }

    /// Render one planned runner and write it into the output directory.
    fn write_runner(&self, spec: &RunnerSpec, feature_location: &str) -> Result<(), GenerateError> {
        let context = RunnerContext {
            strict: self.config.strict,
            feature_file: feature_location.to_owned(),
            sequence: spec.sequence,
            tags: spec.tags.clone(),
            monochrome: self.config.monochrome,
            cucumber_output_dir: self.config.cucumber_output_dir.clone(),
            formats: self.config.format.clone(),
            glue: self.config.glue.clone(),
            class_name: spec.class_name.clone(),
        };
        let rendered = self.templates.render(self.config.template, &context)?;
        let path = self.config.output_directory.join(&spec.file_name);
        fs::write(&path, rendered).map_err(|source| GenerateError::WriteRunner {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path, tags = %spec.tags, "wrote runner");
        Ok(())
    }
}
