use clap::Parser;

fn main() -> anyhow::Result<()> {
    stockline_observability::init();

    let cli = stockline_cli::Cli::parse();
    stockline_cli::run(cli)
}
