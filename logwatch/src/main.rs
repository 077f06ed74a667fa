use clap::{Parser, Subcommand};
use logwatch_core::cli;
use logwatch_core::cli::play::{PlayArgs, run_play};
use logwatch_core::logging::{LogFormat, default_log_format, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "logwatch",
    version,
    about = "Logwatch: replay HTTP access logs with traffic stats and alerts",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Diagnostic log format on stderr [default: pretty on a terminal, json otherwise]
    #[arg(long, value_enum, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    play: PlayArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay an access log (default)
    Play(PlayArgs),

    /// Config tooling
    Config {
        #[command(subcommand)]
        cmd: cli::conf::ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    let result = match cli.command {
        Some(Command::Play(args)) => run_play(args),
        Some(Command::Config { cmd }) => cli::conf::run(cmd),
        None => run_play(cli.play),
    };

    if let Err(e) = result {
        eprintln!("logwatch error: {e:#}");
        std::process::exit(1);
    }
}
