use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{debug, error};

use setup_r::config::{Config, ConfigOverrides};
use setup_r::logging::{self, LogFormat};
use setup_r::orchestrator::InstallationOrchestrator;
use setup_r::platform::Platform;
use setup_r::version::catalogs::RVersionsCatalog;
use setup_r::version::resolver::VersionResolver;

#[derive(Parser)]
#[command(name = "setup-r")]
#[command(version, about = "Install a specific R version on a CI runner")]
struct Cli {
    /// Version of R to install, e.g. 4.1.3, 4.1, 4.1.x or 4
    #[arg(long = "r-version", env = "INPUT_R-VERSION", default_value = "", global = true)]
    r_version: String,

    /// Repository URL written to the R profile
    #[arg(long, env = "INPUT_CRAN", global = true)]
    cran: Option<String>,

    /// Base URL of the R version index
    #[arg(long, env = "SETUP_R_VERSIONS_URL", global = true)]
    versions_url: Option<String>,

    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the version specifier and print the result without installing
    Resolve,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = logging::init(cli.log_format);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            // Surfaces as a failed-step annotation on the runner
            println!("::error::{}", escape_annotation(&format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}

/// Encode `%`, CR and LF for a workflow command message
fn escape_annotation(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env(
        Platform::current(),
        ConfigOverrides {
            cran_url: cli.cran,
            versions_url: cli.versions_url,
        },
    );
    debug!("Using configuration {:?}", config);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match cli.command {
        None => {
            let orchestrator = InstallationOrchestrator::from_config(config);
            runtime.block_on(orchestrator.run(&cli.r_version))?;
        }
        Some(Command::Resolve) => {
            let resolver =
                VersionResolver::new(Arc::new(RVersionsCatalog::new(&config.versions_url)));
            let version = runtime.block_on(resolver.resolve(&cli.r_version))?;
            println!("{}", version);
        }
    }

    Ok(())
}
