//! Integration tests for the generation engine.
//!
//! These tests drive [`Generator`] against real feature files in temporary
//! directories and verify runner names, counter behaviour, skip decisions,
//! the parallel split, and output determinism.

use anyhow::{Context, Result, ensure};
use camino::{Utf8Path, Utf8PathBuf};
use cukegen::config::{GeneratorConfig, NamingScheme};
use cukegen::generate::{GenerationSummary, Generator};
use cukegen::template::TemplateKind;
use std::fs;
use tempfile::TempDir;

fn utf8(path: &std::path::Path) -> Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path.to_path_buf())
        .map_err(|path| anyhow::anyhow!("non-UTF-8 temp path {path:?}"))
}

/// Lay out a `features/` directory under a fresh temp dir and return
/// `(guard, features_dir, output_dir)`.
fn workspace(features: &[(&str, &str)]) -> Result<(TempDir, Utf8PathBuf, Utf8PathBuf)> {
    let temp = TempDir::new().context("create temp dir")?;
    let root = utf8(temp.path())?;
    let features_dir = root.join("features");
    fs::create_dir_all(&features_dir).context("create features dir")?;
    for (name, text) in features {
        fs::write(features_dir.join(name), text).with_context(|| format!("write {name}"))?;
    }
    let output_dir = root.join("out");
    Ok((temp, features_dir, output_dir))
}

fn config(features_dir: &Utf8Path, output_dir: &Utf8Path) -> GeneratorConfig {
    GeneratorConfig {
        features_directory: features_dir.to_owned(),
        output_directory: output_dir.to_owned(),
        cucumber_output_dir: "target/cucumber-parallel".to_owned(),
        naming_scheme: NamingScheme::Simple,
        tags: String::new(),
        parallel_tag_prefix: None,
        format: vec!["json".to_owned()],
        glue: vec!["com.example.steps".to_owned()],
        strict: false,
        monochrome: false,
        template: TemplateKind::Junit,
        filter_features_by_tags: false,
    }
}

fn run(config: &GeneratorConfig) -> Result<GenerationSummary> {
    let mut generator = Generator::new(config).context("build generator")?;
    generator.generate().context("run generator")
}

#[test]
fn one_runner_per_feature_without_parallel_tags() -> Result<()> {
    let (_guard, features_dir, output_dir) = workspace(&[
        ("alpha.feature", "Feature: alpha\n"),
        ("beta.feature", "Feature: beta\n"),
    ])?;
    let summary = run(&config(&features_dir, &output_dir))?;

    ensure!(
        summary
            == GenerationSummary {
                features_seen: 2,
                features_skipped: 0,
                runners_written: 2,
            },
        "unexpected summary: {summary:?}"
    );
    let first = fs::read_to_string(output_dir.join("Parallel01IT.java"))?;
    ensure!(
        first.contains("classpath:features/alpha.feature"),
        "first runner should point at alpha.feature: {first}"
    );
    let second = fs::read_to_string(output_dir.join("Parallel02IT.java"))?;
    ensure!(
        second.contains("classpath:features/beta.feature"),
        "second runner should point at beta.feature: {second}"
    );
    Ok(())
}

#[test]
fn non_matching_features_are_skipped_without_consuming_the_counter() -> Result<()> {
    let (_guard, features_dir, output_dir) = workspace(&[
        ("alpha.feature", "@smoke\nFeature: alpha\n"),
        ("beta.feature", "@slow\nFeature: beta\n"),
        ("gamma.feature", "@smoke\nFeature: gamma\n"),
    ])?;
    let mut cfg = config(&features_dir, &output_dir);
    cfg.tags = "\"@smoke\"".to_owned();
    cfg.filter_features_by_tags = true;
    let summary = run(&cfg)?;

    ensure!(
        summary
            == GenerationSummary {
                features_seen: 3,
                features_skipped: 1,
                runners_written: 2,
            },
        "unexpected summary: {summary:?}"
    );
    // beta is skipped entirely; gamma takes the very next counter value.
    let second = fs::read_to_string(output_dir.join("Parallel02IT.java"))?;
    ensure!(
        second.contains("classpath:features/gamma.feature"),
        "runner 02 should cover gamma.feature: {second}"
    );
    ensure!(
        !output_dir.join("Parallel03IT.java").exists(),
        "no third runner should exist"
    );
    Ok(())
}

#[test]
fn parallel_tags_split_into_dedicated_runners_plus_residual() -> Result<()> {
    let text = "@paraone @paratwo @regression\nFeature: checkout\n";
    let (_guard, features_dir, output_dir) = workspace(&[("checkout.feature", text)])?;
    let mut cfg = config(&features_dir, &output_dir);
    cfg.tags = "\"@regression\"".to_owned();
    cfg.parallel_tag_prefix = Some("para".to_owned());
    let summary = run(&cfg)?;

    ensure!(
        summary.runners_written == 3,
        "expected 3 runners, got {summary:?}"
    );
    let first = fs::read_to_string(output_dir.join("Parallel01IT.java"))?;
    ensure!(
        first.contains("tags = { \"@paraone\", \"@regression\" }"),
        "first parallel runner filter wrong: {first}"
    );
    let second = fs::read_to_string(output_dir.join("Parallel02IT.java"))?;
    ensure!(
        second.contains("tags = { \"@paratwo\", \"@regression\" }"),
        "second parallel runner filter wrong: {second}"
    );
    let residual = fs::read_to_string(output_dir.join("Parallel03IT.java"))?;
    ensure!(
        residual.contains("tags = { \"@regression\", \"~@paraone\", \"~@paratwo\" }"),
        "residual runner must exclude both parallel tags: {residual}"
    );
    Ok(())
}

#[test]
fn unreadable_feature_still_generates_a_defensive_runner() -> Result<()> {
    let (_guard, features_dir, output_dir) = workspace(&[])?;
    // Invalid UTF-8 makes the read fail regardless of platform or user.
    fs::write(features_dir.join("broken.feature"), [0xff, 0xfe, 0xfd])?;
    let mut cfg = config(&features_dir, &output_dir);
    cfg.tags = "\"@smoke\"".to_owned();
    cfg.filter_features_by_tags = true;
    let summary = run(&cfg)?;

    ensure!(
        summary.runners_written == 1,
        "fail-open read should still produce a runner: {summary:?}"
    );
    let runner = fs::read_to_string(output_dir.join("Parallel01IT.java"))?;
    ensure!(
        runner.contains("tags = { \"@smoke\" }"),
        "defensive runner keeps the base filter: {runner}"
    );
    Ok(())
}

#[test]
fn feature_title_scheme_names_runners_after_the_feature() -> Result<()> {
    let (_guard, features_dir, output_dir) =
        workspace(&[("my_feature one.feature", "Feature: one\n")])?;
    let mut cfg = config(&features_dir, &output_dir);
    cfg.naming_scheme = NamingScheme::FeatureTitle;
    run(&cfg)?;

    let runner = fs::read_to_string(output_dir.join("MyFeatureone01IT.java"))?;
    ensure!(
        runner.contains("public class MyFeatureone01IT "),
        "class name should match the file name: {runner}"
    );
    Ok(())
}

#[test]
fn nested_feature_locations_use_forward_slashes() -> Result<()> {
    let (_guard, features_dir, output_dir) = workspace(&[])?;
    let nested = features_dir.join("billing");
    fs::create_dir_all(&nested)?;
    fs::write(nested.join("invoice.feature"), "Feature: invoice\n")?;
    run(&config(&features_dir, &output_dir))?;

    let runner = fs::read_to_string(output_dir.join("Parallel01IT.java"))?;
    ensure!(
        runner.contains("classpath:features/billing/invoice.feature"),
        "nested features keep their relative path: {runner}"
    );
    Ok(())
}

#[test]
fn repeated_runs_produce_byte_identical_output() -> Result<()> {
    let text = "@paraone @regression\nFeature: checkout\n";
    let (_guard, features_dir, output_dir) = workspace(&[
        ("checkout.feature", text),
        ("plain.feature", "Feature: plain\n"),
    ])?;
    let mut cfg = config(&features_dir, &output_dir);
    cfg.tags = "\"@regression\"".to_owned();
    cfg.parallel_tag_prefix = Some("para".to_owned());
    run(&cfg)?;

    let rerun_dir = features_dir
        .parent()
        .context("workspace root")?
        .join("out-rerun");
    cfg.output_directory = rerun_dir.clone();
    run(&cfg)?;

    for entry in fs::read_dir(&output_dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let original = fs::read(entry.path())?;
        let rerun = fs::read(rerun_dir.as_std_path().join(&name))?;
        ensure!(
            original == rerun,
            "output {name:?} differs between identical runs"
        );
    }
    Ok(())
}
