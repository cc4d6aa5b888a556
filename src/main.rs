use anyhow::Result;
use clap::{Parser, Subcommand};

use taxnet::cli::{
    handle_config_command, handle_explain_command, handle_network_command, handle_rate_command,
    run_menu, NetworkArgs,
};
use taxnet::config::{Settings, TaxnetPaths};

#[derive(Parser)]
#[command(
    name = "taxnet",
    version,
    about = "Household expense calculator with tax charts and a network analysis demo",
    long_about = "taxnet asks for your monthly budget and household expenses, applies \
                  ICMS and ISS to them over a period of months and charts the result. \
                  It also generates a random communication network and shows its node \
                  degrees, LU decomposition and a spring-layout drawing."
)]
struct Cli {
    /// Print charts as text instead of opening full-screen views
    #[arg(long, global = true)]
    text: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu (the default)
    Menu,

    /// Show the real-time ICMS rate
    Rate,

    /// Explain the ICMS and ISS taxes
    Explain,

    /// Analyse a randomly generated communication network
    #[command(alias = "net")]
    Network(NetworkArgs),

    /// Show current configuration and paths
    Config {
        /// Write the settings file with the current values
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = TaxnetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        None | Some(Commands::Menu) => run_menu(&settings, cli.text)?,
        Some(Commands::Rate) => handle_rate_command(&settings)?,
        Some(Commands::Explain) => handle_explain_command(&settings)?,
        Some(Commands::Network(args)) => handle_network_command(&settings, args, cli.text)?,
        Some(Commands::Config { init }) => handle_config_command(&paths, &settings, init)?,
    }

    Ok(())
}
