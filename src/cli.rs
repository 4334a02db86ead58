use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use account_matcher::config::{RunConfig, ThresholdConfig};
use account_matcher::run::RunPaths;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, ValueEnum, Debug)]
pub enum FormatOpt {
    Csv,
    Xlsx,
    Both,
}

impl FormatOpt {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
            Self::Both => "both",
        }
    }
}

impl std::fmt::Display for FormatOpt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "account_matcher",
    version,
    about = "Deduplicate an acquisition batch against exported accounts and build the new-accounts dataload",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Acquisition batch (CSV)
    #[arg(value_name = "ACQUISITION_CSV")]
    pub acquisition: PathBuf,
    /// Exported existing accounts (CSV)
    #[arg(value_name = "EXISTING_CSV")]
    pub existing: PathBuf,
    /// Directory for the result files
    #[arg(value_name = "OUT_DIR", default_value = ".")]
    pub out_dir: PathBuf,
    /// Address similarity gate, integer percent
    #[arg(long, value_name = "PCT", default_value_t = 80)]
    pub address_threshold: u8,
    /// Name similarity gate, integer percent
    #[arg(long, value_name = "PCT", default_value_t = 80)]
    pub name_threshold: u8,
    /// Currency ISO code stamped on every new account
    #[arg(long, value_name = "ISO", default_value = "USD")]
    pub currency: String,
    /// Take payment terms from the acquisition file instead of NET_30
    #[arg(long)]
    pub use_provided_terms: bool,
    /// Load new accounts under the prospect profile
    #[arg(long)]
    pub prospect: bool,
    /// Output format
    #[arg(long, value_name = "FORMAT", default_value_t = FormatOpt::Csv)]
    pub format: FormatOpt,
}

impl Cli {
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            thresholds: ThresholdConfig {
                address: self.address_threshold,
                name: self.name_threshold,
            },
            currency: self.currency.clone(),
            use_provided_terms: self.use_provided_terms,
            prospect: self.prospect,
            format: self.format.as_str().to_string(),
        }
    }

    pub fn run_paths(&self) -> RunPaths {
        RunPaths {
            acquisition: self.acquisition.clone(),
            existing: self.existing.clone(),
            out_dir: self.out_dir.clone(),
        }
    }
}
