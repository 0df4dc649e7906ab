use clap::Parser;
use scicalc::config::Config;
use scicalc::input::Terminal;
use scicalc::menu;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scicalc")]
#[command(version, about = "Interactive menu-driven scientific calculator", long_about = None)]
struct Cli {
    /// TOML file overriding display and logging defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log more to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(cli: &Cli, config: &Config) {
    let fallback = match cli.verbose {
        0 => config.logging.filter.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };
    init_logging(&cli, &config);

    let stdin = io::stdin();
    let mut term = Terminal::new(stdin.lock(), io::stdout());
    match menu::run(&mut term, &config.number_format()) {
        Ok(()) => {}
        Err(e) => {
            tracing::error!(error = %e, "input lost");
            eprintln!("\nInput error. Exiting.");
            std::process::exit(1);
        }
    }
}
