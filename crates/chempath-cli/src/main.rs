mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use chempath_cli::output::{describe_error, OutputFormat};
use commands::interactive::handle_interactive_command;
use commands::list::handle_list_command;
use commands::pathway::{handle_pathway_command, AlgorithmArg, PathwayCommandArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Chemical reaction pathway utilities")]
struct Cli {
    /// Reaction listing to load, one `<source> <destination> <cost>` per line.
    /// Reads stdin when omitted or `-`.
    #[arg(long, env = "CHEMPATH_REACTIONS", global = true)]
    reactions: Option<PathBuf>,

    /// Output format for results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every reaction in the loaded network.
    List,
    /// Compute a pathway between two compounds.
    Pathway {
        /// Starting compound.
        #[arg(long = "from")]
        from: String,
        /// Target compound.
        #[arg(long = "to")]
        to: String,
        /// Search algorithm.
        #[arg(long, value_enum, default_value_t = AlgorithmArg::Dijkstra)]
        algorithm: AlgorithmArg,
        /// Compound that must not appear in the pathway (repeatable).
        #[arg(long)]
        avoid: Vec<String>,
        /// Maximum cost of any single reaction.
        #[arg(long = "max-cost")]
        max_cost: Option<f64>,
    },
    /// Enter reactions at a prompt, then query a single pathway.
    Interactive,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", describe_error(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let source = cli.reactions.as_deref();

    match cli.command {
        Command::List => handle_list_command(source, cli.format),
        Command::Pathway {
            from,
            to,
            algorithm,
            avoid,
            max_cost,
        } => {
            let args = PathwayCommandArgs {
                from,
                to,
                algorithm,
                avoid,
                max_cost,
            };
            handle_pathway_command(source, cli.format, &args)
        }
        Command::Interactive => handle_interactive_command(),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
