use clap::Parser;
use tracing_subscriber::EnvFilter;

use chess_referee::board_state::chess_rules::RuleOptions;
use chess_referee::interface::command_loop::{run_stdio_loop, LoopConfig};
use chess_referee::interface::text_display::BoardStyle;

/// Text-mode chess referee: two players, human or computer, under full rules.
#[derive(Debug, Parser)]
#[command(name = "chess_referee", version, about)]
struct Args {
    /// Seed for the computer players' random choices.
    #[arg(long)]
    seed: Option<u64>,

    /// Also refuse castling through an attacked square.
    #[arg(long)]
    strict_castling: bool,

    /// Draw the board with Unicode chess glyphs.
    #[arg(long)]
    unicode: bool,

    /// Log filter, e.g. `debug` or `chess_referee=info`. Overrides RUST_LOG.
    #[arg(long)]
    log: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let filter = match &args.log {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let options = if args.strict_castling {
        RuleOptions::strict()
    } else {
        RuleOptions::default()
    };

    run_stdio_loop(LoopConfig {
        options,
        seed: args.seed,
        style: if args.unicode {
            BoardStyle::Unicode
        } else {
            BoardStyle::Ascii
        },
    })
}
