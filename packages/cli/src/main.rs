use std::path::PathBuf;

use clap::Parser;

use bidstore_cli::terminal::TerminalConsole;
use bidstore_cli::{menu, Backend, Session};

/// bidstore - interactive menu over an in-memory bid store
#[derive(Parser, Debug)]
#[command(name = "bidstore")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// CSV export to load bids from
    #[arg(long, default_value = "eBid_Monthly_Sales_Dec_2016.csv")]
    source: PathBuf,

    /// Default bid id for the find/remove prompts
    #[arg(long, default_value = "98109")]
    key: String,

    /// Backing store strategy
    #[arg(long, value_enum, default_value_t = Backend::Tree)]
    backend: Backend,

    /// Bucket count for the hash backend (a prime spreads ids best)
    #[arg(long, default_value_t = 179)]
    buckets: usize,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let mut session = Session::new(args.backend, args.buckets, args.source, args.key);

    let mut console = match TerminalConsole::new() {
        Ok(console) => console,
        Err(e) => {
            eprintln!("Error: failed to open terminal: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = menu::run(&mut console, &mut session) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
