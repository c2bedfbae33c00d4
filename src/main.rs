use argus_shield::render::SystemClipboard;
use argus_shield::resolvers::Resolvers;
use argus_shield::view::{
    ReportView, ScannerView, TerminalReportView, TerminalScannerView, Toast, TokioFrameClock, MSG_DEMO_MODE,
};
use argus_shield::{AddressReporter, ArgusConfig, ArgusError, ContractScanner, Mode, Result};
use clap::{Parser, Subcommand};
use url::Url;

/// Argus Shield - scan Ethereum contracts and report suspicious addresses
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Use the live API instead of demo data
    #[arg(long, global = true)]
    live: bool,

    /// Override the API base URL
    #[arg(long, global = true, value_name = "URL")]
    api_base: Option<Url>,

    /// Seed for demo data
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a contract and show its risk score
    Scan {
        #[arg(value_name = "CONTRACT_ADDRESS")]
        address: String,

        /// Copy the text report to the clipboard
        #[arg(long)]
        copy: bool,

        /// Print the final score without the count-up
        #[arg(long)]
        no_animate: bool,
    },
    /// Report a suspicious address
    Report {
        #[arg(value_name = "ADDRESS")]
        address: String,

        /// What happened
        #[arg(short, long, default_value = "")]
        description: String,

        /// Where to reach you (optional)
        #[arg(short, long, default_value = "")]
        email: String,
    },
}

#[tokio::main]
async fn main() {
    // Missing .env is fine
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    let filter = if args.verbose { "argus_shield=debug" } else { "argus_shield=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    let code = match run(args).await {
        Ok(()) => 0,
        Err(e) => {
            if !shown_by_view(&e) {
                eprintln!("\n❌ {}\n", e);
            }
            if matches!(e, ArgusError::ResolutionFailed(_)) {
                eprintln!("\nPossible reasons:");
                eprintln!("  • API unreachable or returned an error");
                eprintln!("  • Wrong ARGUS_API_BASE / ARGUS_REPORT_URL\n");
            }
            1
        }
    };

    std::process::exit(code);
}

/// Errors the pipelines already put in front of the user as a notice or hint
fn shown_by_view(e: &ArgusError) -> bool {
    e.is_field_error() || matches!(e, ArgusError::ResolutionFailed(_) | ArgusError::ClipboardUnavailable(_))
}

async fn run(args: Args) -> Result<()> {
    let mut config = ArgusConfig::from_env()?;
    if args.live {
        config.mode = Mode::Live;
    }
    if let Some(base) = args.api_base {
        config.api_base = base;
    }

    println!("\n🔍 Argus Shield");
    println!("================================\n");

    let resolvers = Resolvers::from_config(&config, args.seed)?;

    match args.command {
        Command::Scan { address, copy, no_animate } => {
            let mut view = TerminalScannerView::new(args.verbose);
            if config.mode == Mode::Demo {
                view.toast(Toast::info(MSG_DEMO_MODE));
            }
            let mut scanner = ContractScanner::new(resolvers.contracts, view, config.explorer_base.clone());

            let outcome = scanner.scan(&address).await?;
            let label = outcome.rendered.risk.label;
            tracing::debug!("Resolved report:\n{}", outcome.report);

            if no_animate {
                scanner.view().score_frame(outcome.animation.target(), label);
            } else {
                let mut clock = TokioFrameClock::new();
                let view = scanner.view();
                outcome.animation.run(&mut clock, |value| view.score_frame(value, label)).await;
            }
            println!("\n");

            if copy {
                scanner.copy_report(&mut SystemClipboard::new())?;
            }
        }
        Command::Report { address, description, email } => {
            let mut view = TerminalReportView;
            if config.mode == Mode::Demo {
                view.toast(Toast::info(MSG_DEMO_MODE));
            }
            let mut reporter = AddressReporter::new(resolvers.reports, view);
            reporter.open();
            reporter.submit(&address, &description, &email).await?;
            reporter.close()?;
        }
    }

    Ok(())
}
