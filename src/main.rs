use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use indexmap::IndexMap;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use version_resolve::config::ResolveConfig;
use version_resolve::manifest::{DependencyKind, PackageManifest};
use version_resolve::version::compare::compare_versions;
use version_resolve::version::constraint::parse_package_spec;
use version_resolve::version::matcher::match_latest;
use version_resolve::version::registries::NpmRegistry;
use version_resolve::version::resolver::VersionResolver;
use version_resolve::version::warning::TracingWarnings;

#[derive(Parser)]
#[command(name = "version-resolve")]
#[command(version, about = "Resolve npm version constraints to concrete versions")]
struct Cli {
    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve constraints (latest, canary, 2.3.*) against the npm registry
    Resolve(ResolveArgs),
    /// Print the highest version matching a wildcard pattern
    Match {
        /// Pattern such as 2.3.* or 1.*.*
        #[arg(long)]
        constraint: String,
        versions: Vec<String>,
    },
    /// Compare two versions, printing -1, 0 or 1
    Compare { a: String, b: String },
}

#[derive(Args)]
struct ResolveArgs {
    /// Packages as name@constraint; a bare name means latest
    packages: Vec<String>,

    /// JSON object mapping package names to constraints
    #[arg(long)]
    input: Option<PathBuf>,

    /// Registry base URL (overrides config)
    #[arg(long)]
    registry: Option<String>,

    /// Per-request timeout in milliseconds (overrides config)
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// package.json to update with the resolved versions
    #[arg(long)]
    write: Option<PathBuf>,

    /// Write to devDependencies instead of dependencies
    #[arg(long, requires = "write")]
    dev: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_file.as_deref())?;

    match cli.command {
        Command::Resolve(args) => tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(run_resolve(args)),
        Command::Match {
            constraint,
            versions,
        } => match match_latest(versions.as_slice(), &constraint) {
            Some(version) => {
                println!("{}", version);
                Ok(ExitCode::SUCCESS)
            }
            None => Ok(ExitCode::FAILURE),
        },
        Command::Compare { a, b } => {
            let result = match compare_versions(&a, &b) {
                Ordering::Less => -1,
                Ordering::Equal => 0,
                Ordering::Greater => 1,
            };
            println!("{}", result);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing(log_file: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid log file path: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        dir, file_name,
    ));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

async fn run_resolve(args: ResolveArgs) -> anyhow::Result<ExitCode> {
    let config = match &args.config {
        Some(path) => ResolveConfig::load(path)?,
        None => ResolveConfig::load_default()?,
    };

    let mut constraints: IndexMap<String, String> = match &args.input {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&content).with_context(|| {
                format!(
                    "Expected a JSON object of name -> constraint in {}",
                    path.display()
                )
            })?
        }
        None => IndexMap::new(),
    };
    constraints.extend(args.packages.iter().map(|spec| parse_package_spec(spec)));

    if constraints.is_empty() {
        anyhow::bail!("No packages given; pass name@constraint arguments or --input");
    }

    let registry_url = args.registry.unwrap_or(config.registry.url);
    let timeout = args
        .timeout_ms
        .or(config.registry.timeout_ms)
        .map(Duration::from_millis);
    let registry = NpmRegistry::new(&registry_url, timeout)?;

    let resolver = VersionResolver::new(Arc::new(registry), Arc::new(TracingWarnings))
        .with_stagger_delay(Duration::from_millis(config.fetch.stagger_delay_ms));
    let resolved = resolver.resolve(&constraints).await;

    println!("{}", serde_json::to_string_pretty(&resolved)?);

    if let Some(path) = &args.write {
        let kind = if args.dev {
            DependencyKind::Dev
        } else {
            DependencyKind::Runtime
        };
        let mut manifest = PackageManifest::load(path)?;
        manifest.add_dependencies(&resolved, kind)?;
        manifest.save()?;
        info!(
            "Wrote {} {} to {}",
            resolved.len(),
            kind.section(),
            path.display()
        );
    }

    Ok(ExitCode::SUCCESS)
}
