use clap::{Parser, ValueEnum};
use footerlink::{Config, Outcome, SyncReport, Synchronizer};
use std::path::PathBuf;
use std::process;

/// footerlink — chain every README in a tree with previous/next footer links
#[derive(Parser)]
#[command(name = "footerlink", version, about)]
struct Cli {
    /// Directory to scan (default: $PROJECT_HOME, then the current directory)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Show debug output (same as DEBUG=True)
    #[arg(long, short)]
    verbose: bool,

    /// Report which files would change without writing them
    #[arg(long)]
    dry_run: bool,

    /// Output format for the final report
    #[arg(long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Yaml,
    Json,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("ERROR:{e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::from_env()?;
    if let Some(root) = cli.root {
        config.root = root;
    }
    config.debug |= cli.verbose;
    config.dry_run = cli.dry_run;

    init_logging(&config);
    log::debug!("Scanning {}", config.root.display());

    let mut synchronizer = Synchronizer::open(&config)?;
    let report = synchronizer.run()?;

    print_report(&report, &cli.format)?;
    Ok(())
}

/// `DEBUG` decides the default level; `RUST_LOG` still wins when set.
fn init_logging(config: &Config) {
    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn print_report(
    report: &SyncReport,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Yaml => print!("{}", report.to_yaml()?),
        OutputFormat::Text => {
            if report.dry_run {
                for doc in &report.documents {
                    if doc.outcome == Outcome::WouldWrite {
                        println!("would update: {}", doc.path);
                    }
                }
            }
            println!(
                "{} document(s): {} {}, {} unchanged, {} skipped",
                report.documents.len(),
                report.changed(),
                if report.dry_run { "to update" } else { "updated" },
                report.count(Outcome::Unchanged),
                report.count(Outcome::Skipped),
            );
        }
    }
    Ok(())
}
