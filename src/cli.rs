use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::{DEFAULT_MODULE_NAME, DEFAULT_PRIMARY_BRANCH};
use crate::config::ConfigFile;

const DEFAULT_BUILD_FILE: &str = "builds.txt";
const DEFAULT_GO_BINARY: &str = "go";

/// Compute which deployable services of a Go monorepo a git change affects
///
/// Options left unset fall back to `calculate-releases.config.yml` and then
/// to the built-in defaults.
#[derive(Parser, Debug, Default)]
#[command(name = "calculate-releases")]
#[command(version)]
#[command(
    about = "Compute which deployable services of a Go monorepo a git change affects",
    long_about = None
)]
pub struct Args {
    /// Path to the repository root (defaults to current directory)
    #[arg(long, value_name = "PATH")]
    pub repo_root: Option<PathBuf>,

    /// Build manifest output path [default: builds.txt]
    #[arg(long, value_name = "PATH")]
    pub build_file: Option<PathBuf>,

    /// Go module identity prefix [default: github.com/uw-labs/go-mono]
    #[arg(long, value_name = "NAME")]
    pub module_name: Option<String>,

    /// Base revision to diff from [default: the primary branch]
    #[arg(long, value_name = "REV")]
    pub base: Option<String>,

    /// Head revision to diff to [default: HEAD]
    #[arg(long, value_name = "REV")]
    pub head: Option<String>,

    /// Reference used when no base is given or it cannot be found [default: master]
    #[arg(long, value_name = "REF")]
    pub primary_branch: Option<String>,

    /// Go toolchain binary [default: go]
    #[arg(long, value_name = "PATH")]
    pub go_binary: Option<PathBuf>,

    /// Also treat the pre-rename path of a renamed file as changed
    #[arg(long)]
    pub include_rename_sources: bool,

    /// Path to a config file (defaults to calculate-releases.config.yml in the repository root)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Resolve and log releases without writing the build manifest
    #[arg(long)]
    pub dry_run: bool,
}

/// Effective settings after merging command-line options with the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub repo_root: PathBuf,
    pub build_file: PathBuf,
    pub module_name: String,
    pub base: Option<String>,
    pub head: Option<String>,
    pub primary_branch: String,
    pub go_binary: PathBuf,
    pub include_rename_sources: bool,
    pub ignore_folders: Vec<String>,
    pub dry_run: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Repository root the run operates on
    pub fn repo_root(&self) -> PathBuf {
        self.repo_root.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Merges with the config file: command line, then config, then defaults
    pub fn into_settings(self, config: ConfigFile) -> Settings {
        Settings {
            repo_root: self.repo_root(),
            build_file: self
                .build_file
                .or_else(|| config.build_file.map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BUILD_FILE)),
            module_name: self
                .module_name
                .or(config.module_name)
                .unwrap_or_else(|| DEFAULT_MODULE_NAME.to_string()),
            base: self.base.or(config.base),
            head: self.head.or(config.head),
            primary_branch: self
                .primary_branch
                .or(config.primary_branch)
                .unwrap_or_else(|| DEFAULT_PRIMARY_BRANCH.to_string()),
            go_binary: self
                .go_binary
                .or_else(|| config.go_binary.map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_GO_BINARY)),
            // A switch cannot be turned off on the command line, so either source enables it
            include_rename_sources: self.include_rename_sources
                || config.include_rename_sources.unwrap_or(false),
            ignore_folders: config.ignore_folders.unwrap_or_default(),
            dry_run: self.dry_run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("calculate-releases").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_without_config() {
        let settings = parse(&[]).into_settings(ConfigFile::default());

        assert_eq!(settings.repo_root, PathBuf::from("."));
        assert_eq!(settings.build_file, PathBuf::from("builds.txt"));
        assert_eq!(settings.module_name, "github.com/uw-labs/go-mono");
        assert_eq!(settings.base, None);
        assert_eq!(settings.head, None);
        assert_eq!(settings.primary_branch, "master");
        assert_eq!(settings.go_binary, PathBuf::from("go"));
        assert!(!settings.include_rename_sources);
        assert!(settings.ignore_folders.is_empty());
        assert!(!settings.dry_run);
    }

    #[test]
    fn test_all_flags_parse() {
        let args = parse(&[
            "--repo-root",
            "/src/go-mono",
            "--build-file",
            "out/builds.txt",
            "--module-name",
            "example.com/mono",
            "--base",
            "abc123",
            "--head",
            "HEAD~1",
            "--primary-branch",
            "main",
            "--go-binary",
            "/opt/go/bin/go",
            "--include-rename-sources",
            "--config",
            "ci.yml",
            "--dry-run",
        ]);

        assert_eq!(args.repo_root(), PathBuf::from("/src/go-mono"));
        assert_eq!(args.config, Some(PathBuf::from("ci.yml")));
        let settings = args.into_settings(ConfigFile::default());
        assert_eq!(settings.build_file, PathBuf::from("out/builds.txt"));
        assert_eq!(settings.module_name, "example.com/mono");
        assert_eq!(settings.base.as_deref(), Some("abc123"));
        assert_eq!(settings.head.as_deref(), Some("HEAD~1"));
        assert_eq!(settings.primary_branch, "main");
        assert_eq!(settings.go_binary, PathBuf::from("/opt/go/bin/go"));
        assert!(settings.include_rename_sources);
        assert!(settings.dry_run);
    }

    #[test]
    fn test_config_fills_unset_flags() {
        let config = ConfigFile {
            build_file: Some("releases.txt".to_string()),
            module_name: Some("example.com/mono".to_string()),
            base: Some("origin/main".to_string()),
            go_binary: Some("go1.22".to_string()),
            include_rename_sources: Some(true),
            ignore_folders: Some(vec![".buildkite".to_string()]),
            ..ConfigFile::default()
        };

        let settings = parse(&[]).into_settings(config);

        assert_eq!(settings.build_file, PathBuf::from("releases.txt"));
        assert_eq!(settings.module_name, "example.com/mono");
        assert_eq!(settings.base.as_deref(), Some("origin/main"));
        assert_eq!(settings.go_binary, PathBuf::from("go1.22"));
        assert!(settings.include_rename_sources);
        assert_eq!(settings.ignore_folders, vec![".buildkite"]);
    }

    #[test]
    fn test_flags_override_config() {
        let config = ConfigFile {
            module_name: Some("example.com/from-config".to_string()),
            head: Some("release".to_string()),
            primary_branch: Some("main".to_string()),
            ..ConfigFile::default()
        };

        let settings = parse(&["--module-name", "example.com/from-cli", "--head", "HEAD"]).into_settings(config);

        assert_eq!(settings.module_name, "example.com/from-cli");
        assert_eq!(settings.head.as_deref(), Some("HEAD"));
        assert_eq!(settings.primary_branch, "main");
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let result = Args::try_parse_from(["calculate-releases", "--format", "json"]);
        assert!(result.is_err());
    }
}
