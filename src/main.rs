use clap::Parser;
use latency_stats::{cli, logging};

fn main() {
    let args = cli::Cli::parse();
    logging::init_logging(&args.log_level);

    if let Err(e) = cli::run(args) {
        tracing::debug!(error = ?e, "run failed");
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
