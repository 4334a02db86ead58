use clap::Parser;
use env_logger::Env;
use log::{error, info};

mod cli;

use account_matcher::run;
use cli::Cli;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let cfg = cli.run_config();
    let paths = cli.run_paths();

    match run::execute(&paths, &cfg) {
        Ok(summary) => {
            info!(
                "processed {} acquisition record(s) against {} existing row(s)",
                summary.acquisition_total, summary.existing_total
            );
            info!(
                "{} matched pair(s); dataload: {} emitted, {} duplicate(s), {} unclassified",
                summary.matched_pairs,
                summary.dataload.emitted,
                summary.dataload.duplicates,
                summary.dataload.unclassified
            );
            for file in &summary.files {
                info!("wrote {}", file.display());
            }
        }
        Err(err) => {
            error!("{err:#}");
            std::process::exit(1);
        }
    }
}
