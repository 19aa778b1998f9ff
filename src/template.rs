//! Template rendering boundary.
//!
//! Embeds the JUnit and TestNG runner templates and exposes a single
//! [`TemplateEngine::render`] entry point. All quoting and comma-joining of
//! list-valued context fields happens here, once, rather than being spread
//! through the engine.

use crate::generate::GenerateError;
use itertools::Itertools;
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

/// Template rendered for generated runners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// JUnit 4 runner class.
    Junit,
    /// TestNG runner class.
    Testng,
}

impl TemplateKind {
    /// Identifier of the embedded template.
    #[must_use]
    pub const fn template_name(self) -> &'static str {
        match self {
            Self::Junit => "junit",
            Self::Testng => "testng",
        }
    }
}

/// Typed context for one rendered runner.
///
/// List values stay lists here; they are quoted and joined only while the
/// template values are being serialised.
#[derive(Debug, Clone)]
pub struct RunnerContext {
    /// Fail scenarios on undefined or pending steps.
    pub strict: bool,
    /// Feature file location relative to the features root's parent, with
    /// forward-slash separators.
    pub feature_file: String,
    /// Global sequence number of this runner.
    pub sequence: u32,
    /// Resolved tag filter for this runner.
    pub tags: String,
    /// Disable ANSI colours in Cucumber output.
    pub monochrome: bool,
    /// Directory the runner writes Cucumber reports into.
    pub cucumber_output_dir: String,
    /// Output formatter names.
    pub formats: Vec<String>,
    /// Glue package names.
    pub glue: Vec<String>,
    /// Class name of the runner, extension stripped.
    pub class_name: String,
}

/// Flattened, camel-cased values a template actually sees.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TemplateValues<'a> {
    strict: bool,
    feature_file: &'a str,
    reports: String,
    tags: &'a str,
    monochrome: bool,
    cucumber_output_dir: &'a str,
    glue: String,
    file_counter: String,
    class_name: &'a str,
}

impl<'a> TemplateValues<'a> {
    fn new(ctx: &'a RunnerContext) -> Self {
        Self {
            strict: ctx.strict,
            feature_file: &ctx.feature_file,
            reports: report_specs(&ctx.formats, &ctx.cucumber_output_dir, ctx.sequence),
            tags: &ctx.tags,
            monochrome: ctx.monochrome,
            cucumber_output_dir: &ctx.cucumber_output_dir,
            glue: quote_list(&ctx.glue),
            file_counter: format!("{:02}", ctx.sequence),
            class_name: &ctx.class_name,
        }
    }
}

/// Renders runner sources from the embedded templates.
#[derive(Debug)]
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Build an environment with both runner templates registered.
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded template fails to compile.
    pub fn new() -> Result<Self, GenerateError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.add_template("junit", include_str!("templates/junit-runner.java.jinja"))
            .map_err(|source| GenerateError::Template {
                name: "junit",
                source,
            })?;
        env.add_template("testng", include_str!("templates/testng-runner.java.jinja"))
            .map_err(|source| GenerateError::Template {
                name: "testng",
                source,
            })?;
        Ok(Self { env })
    }

    /// Render one runner source.
    ///
    /// The context keys exposed to the template are `strict`,
    /// `featureFile`, `reports`, `tags`, `monochrome`, `cucumberOutputDir`,
    /// `glue`, `fileCounter` (two-digit zero-padded) and `className`.
    ///
    /// # Errors
    ///
    /// Returns an error when template evaluation fails.
    pub fn render(&self, kind: TemplateKind, ctx: &RunnerContext) -> Result<String, GenerateError> {
        let name = kind.template_name();
        let template = self
            .env
            .get_template(name)
            .map_err(|source| GenerateError::Template { name, source })?;
        template
            .render(TemplateValues::new(ctx))
            .map_err(|source| GenerateError::Template { name, source })
    }
}

/// Format one `"<formatter>:<dir>/<sequence>.<formatter>"` plugin spec per
/// output format. Backslashes in the report directory are normalised so the
/// generated source is identical across platforms.
fn report_specs(formats: &[String], output_dir: &str, sequence: u32) -> String {
    let dir = output_dir.replace('\\', "/");
    formats
        .iter()
        .map(|format| format!("\"{format}:{dir}/{sequence}.{format}\""))
        .join(", ")
}

/// Wrap each package in quotes for the template.
fn quote_list(items: &[String]) -> String {
    items.iter().map(|item| format!("\"{item}\"")).join(", ")
}
