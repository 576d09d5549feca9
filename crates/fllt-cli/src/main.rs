// crates/fllt-cli/src/main.rs

use clap::Parser;

mod cmd;
mod io;
mod logging;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright (c) 2021 by pic16f877ccs\n",
    "fllt is free software and comes with ABSOLUTELY NO WARRANTY.\n",
    "Distributed under the GPLv3 License.\n\n",
    "Written by Karl Wulfert"
);

#[derive(Parser)]
#[command(name = "fllt", version, long_version = LONG_VERSION)]
#[command(
    about = "Print each line of text padded with a fill character up to the longest line",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub pad: cmd::pad::PadArgs,

    /// Log to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    cmd::pad::run(cli.pad)
}
