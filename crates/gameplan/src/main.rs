use clap::Parser;

use gameplan::{init_logger, run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let stdout = std::io::stdout();
    run(cli, &mut stdout.lock())
}
