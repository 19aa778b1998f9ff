//! Command line interface definition using clap.
//!
//! This module defines the [`Cli`] structure consumed by [`crate::runner`].
//! Every option can also be supplied through a `CUKEGEN_`-prefixed
//! environment variable, so the tool slots into build scripts without long
//! invocation lines.

use crate::config::NamingScheme;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Generates Cucumber JVM runner classes from Gherkin feature files.
///
/// Feature files are filtered through the configured tag expression; tags
/// sharing the parallel prefix are split into dedicated runners so their
/// scenarios can execute in isolation.
#[derive(Debug, Clone, Parser, Serialize, Deserialize)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory scanned recursively for `.feature` files.
    #[arg(
        long,
        value_name = "DIR",
        default_value = "src/test/resources/features",
        env = "CUKEGEN_FEATURES_DIRECTORY"
    )]
    pub features_directory: PathBuf,

    /// Directory the generated runner sources are written to.
    #[arg(
        long,
        value_name = "DIR",
        default_value = "target/generated-test-sources/cucumber",
        env = "CUKEGEN_OUTPUT_DIRECTORY"
    )]
    pub output_directory: PathBuf,

    /// Directory the generated runners write their Cucumber reports to.
    #[arg(
        long,
        value_name = "DIR",
        default_value = "target/cucumber-parallel",
        env = "CUKEGEN_CUCUMBER_OUTPUT_DIR"
    )]
    pub cucumber_output_dir: String,

    /// Naming scheme for generated classes: `simple` or `feature-title`.
    #[arg(
        long,
        value_name = "SCHEME",
        default_value = "simple",
        value_parser = parse_naming_scheme,
        env = "CUKEGEN_NAMING_SCHEME"
    )]
    pub naming_scheme: NamingScheme,

    /// Tag filter expression in quoted AND-of-OR form, e.g.
    /// `"@smoke,@fast","~@wip"`.
    #[arg(long, value_name = "EXPR", default_value = "", env = "CUKEGEN_TAGS")]
    pub tags: String,

    /// Tags sharing this prefix force their scenarios into dedicated
    /// runners.
    #[arg(long, value_name = "PREFIX", env = "CUKEGEN_PARALLEL_TAG_PREFIX")]
    pub parallel_tag_prefix: Option<String>,

    /// Cucumber output formats, comma separated.
    #[arg(
        long,
        value_name = "FMT",
        value_delimiter = ',',
        default_value = "json",
        env = "CUKEGEN_FORMAT"
    )]
    pub format: Vec<String>,

    /// Glue packages made available to the generated runners, comma
    /// separated.
    #[arg(long, value_name = "PKG", value_delimiter = ',', env = "CUKEGEN_GLUE")]
    pub glue: Vec<String>,

    /// Fail scenarios on undefined or pending steps.
    #[arg(long, env = "CUKEGEN_STRICT")]
    pub strict: bool,

    /// Disable ANSI colours in Cucumber output.
    #[arg(long, env = "CUKEGEN_MONOCHROME")]
    pub monochrome: bool,

    /// Emit TestNG runners instead of JUnit runners.
    #[arg(long, env = "CUKEGEN_USE_TESTNG")]
    pub use_testng: bool,

    /// Skip feature files whose text matches none of the required tags.
    #[arg(long, env = "CUKEGEN_FILTER_FEATURES_BY_TAGS")]
    pub filter_features_by_tags: bool,

    /// Enable verbose diagnostic logging.
    #[arg(short, long, env = "CUKEGEN_VERBOSE")]
    pub verbose: bool,
}

/// Parse the `--naming-scheme` value, rejecting unknown schemes at the CLI
/// boundary so the error surfaces before any file is written.
fn parse_naming_scheme(raw: &str) -> Result<NamingScheme, String> {
    raw.parse().map_err(|err| format!("{err}"))
}
