use calculate_releases::cli::Args;
use calculate_releases::config::{discover_config, load_config_from_path};
use calculate_releases::prelude::*;
use calculate_releases::shared::security::validate_repository_root;
use calculate_releases::shutdown::cancel_on_signal;
use std::process;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging; stderr only, stdout stays free for callers
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run().await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

async fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate repository directory
    let repo_root = args.repo_root();
    validate_repository_root(&repo_root)?;

    // Merge config file and command line
    let config = match args.config.as_deref() {
        Some(path) => load_config_from_path(path)?,
        None => discover_config(&repo_root)?.unwrap_or_default(),
    };
    let settings = args.into_settings(config);

    // Create request
    let request = ReleaseRequest::builder()
        .repo_root(settings.repo_root.clone())
        .module_name(settings.module_name)
        .base(settings.base)
        .head(settings.head)
        .primary_branch(settings.primary_branch)
        .ignore_folders(settings.ignore_folders)
        .include_rename_sources(settings.include_rename_sources)
        .dry_run(settings.dry_run)
        .build()?;

    // Create adapters (Dependency Injection)
    let use_case = CalculateReleasesUseCase::new(
        GitChangeSource::new(),
        GoPackageLister::new(settings.go_binary),
        FileSystemDescriptorFinder::new(settings.repo_root),
        FileSystemManifestWriter::new(settings.build_file),
        ConsoleProgressReporter::new(),
    );

    let cancel = CancellationToken::new();
    let signals = cancel_on_signal(cancel.clone());

    // Execute use case
    let result = use_case.execute(request, &cancel).await;
    signals.abort();

    result.map(|_| ())
}
