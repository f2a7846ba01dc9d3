use super::{UpdateOptions, run_with};
use crate::commands::install;
use crate::error::{DotGetError, Result};
use crate::resolvers::{ResolutionType, Resolver, ResolverFactory, ResolverOptions};
use crate::utils::paths::InstallationPaths;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::tempdir;

struct FixedArtifactResolver {
    artifact: PathBuf,
}

impl Resolver for FixedArtifactResolver {
    fn resolve(&self) -> Result<PathBuf> {
        Ok(self.artifact.clone())
    }
}

struct RecordingFactory {
    artifact: PathBuf,
    calls: Mutex<Vec<(String, ResolverOptions, ResolutionType)>>,
}

impl RecordingFactory {
    fn resolving_to(artifact: &Path) -> Self {
        Self {
            artifact: artifact.to_path_buf(),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl ResolverFactory for RecordingFactory {
    fn get_resolver(
        &self,
        tool: &str,
        options: &ResolverOptions,
        resolution: ResolutionType,
    ) -> Result<Box<dyn Resolver>> {
        self.calls
            .lock()
            .unwrap()
            .push((tool.to_string(), options.clone(), resolution));
        Ok(Box::new(FixedArtifactResolver {
            artifact: self.artifact.clone(),
        }))
    }
}

/// Any resolution attempt is a test failure.
struct UnreachableFactory;

impl ResolverFactory for UnreachableFactory {
    fn get_resolver(
        &self,
        tool: &str,
        _options: &ResolverOptions,
        _resolution: ResolutionType,
    ) -> Result<Box<dyn Resolver>> {
        panic!("update of '{}' must not attempt resolution", tool);
    }
}

fn installed_fixture(root: &Path, artifact: &Path, pairs: &[(&str, &str)]) -> InstallationPaths {
    let paths = InstallationPaths::from_root(root);
    let factory = RecordingFactory::resolving_to(artifact);
    install::run_with(
        &install::InstallOptions {
            tool: "foo".into(),
            options: ResolverOptions::from_pairs(pairs.iter().copied()),
            resolution: ResolutionType::Install,
        },
        &factory,
        &paths,
    )
    .expect("fixture install");
    paths
}

#[test]
fn update_replays_recorded_options_with_update_intent() {
    let work = tempdir().expect("tempdir");
    let artifact = work.path().join("foo.dll");
    fs::write(&artifact, b"").expect("artifact");

    let pairs = [("version", "1.0.0"), ("feed", "https://example.org/v3")];
    let paths = installed_fixture(&work.path().join("root"), &artifact, &pairs);

    let factory = RecordingFactory::resolving_to(&artifact);
    run_with(&UpdateOptions { tool: "foo".into() }, &factory, &paths).expect("update");

    let calls = factory.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (tool, options, resolution) = &calls[0];
    assert_eq!(tool, "foo");
    assert_eq!(*resolution, ResolutionType::Update);
    // Set equality: the update caller supplied no options directly.
    assert_eq!(options, &ResolverOptions::from_pairs(pairs.iter().copied()));
    // The tool key itself is never replayed as an option.
    assert!(options.get("tool").is_none());
}

#[test]
fn update_of_unknown_tool_fails_before_resolution() {
    let work = tempdir().expect("tempdir");
    let root = work.path().join("root");
    let paths = InstallationPaths::from_root(&root);

    let err = run_with(&UpdateOptions { tool: "ghost".into() }, &UnreachableFactory, &paths)
        .expect_err("update should fail");

    assert!(matches!(err, DotGetError::ToolNotInstalled(ref t) if t == "ghost"));
    assert!(!root.exists(), "lookup failure must not create directories");
}

#[test]
fn update_misses_records_for_other_tools() {
    let work = tempdir().expect("tempdir");
    let artifact = work.path().join("foo.dll");
    fs::write(&artifact, b"").expect("artifact");

    let paths = installed_fixture(&work.path().join("root"), &artifact, &[]);

    let err = run_with(&UpdateOptions { tool: "bar".into() }, &UnreachableFactory, &paths)
        .expect_err("update should fail");
    assert!(err.to_string().contains("No tool with name 'bar'"));
}

#[test]
fn update_overwrites_the_same_two_files() {
    let work = tempdir().expect("tempdir");
    let artifact = work.path().join("foo.dll");
    fs::write(&artifact, b"").expect("artifact");

    let paths = installed_fixture(&work.path().join("root"), &artifact, &[("version", "1.0.0")]);
    let factory = RecordingFactory::resolving_to(&artifact);
    run_with(&UpdateOptions { tool: "foo".into() }, &factory, &paths).expect("update");

    let etc_count = fs::read_dir(&paths.etc_dir).expect("etc").count();
    let bin_count = fs::read_dir(&paths.bin_dir).expect("bin").count();
    assert_eq!(etc_count, 1);
    assert_eq!(bin_count, 1);
}
