//! One batch run, end to end: ingest both tables, match, build the dataload,
//! export. All intermediate tables are owned by the run; nothing is shared
//! across runs.

use anyhow::{Context, Result};
use chrono::{DateTime, Local, Utc};
use log::{info, warn};
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::RunConfig;
use crate::dataload::{build_dataload, DataloadOptions, DataloadSummary};
use crate::export::{csv_export, xlsx_export};
use crate::ingest;
use crate::matching::match_accounts;
use crate::metrics::memory_stats_mb;

#[derive(Debug, Clone)]
pub struct RunPaths {
    pub acquisition: PathBuf,
    pub existing: PathBuf,
    pub out_dir: PathBuf,
}

#[derive(Debug)]
pub struct RunSummary {
    pub acquisition_total: usize,
    pub existing_total: usize,
    pub matched_pairs: usize,
    pub dataload: DataloadSummary,
    pub files: Vec<PathBuf>,
    pub started_utc: DateTime<Utc>,
    pub ended_utc: DateTime<Utc>,
    pub match_time: Duration,
    pub export_time: Duration,
}

pub fn execute(paths: &RunPaths, cfg: &RunConfig) -> Result<RunSummary> {
    cfg.validate()?;
    let started_utc = Utc::now();

    let acquisitions = ingest::read_acquisition(&paths.acquisition)
        .with_context(|| format!("reading acquisition file {}", paths.acquisition.display()))?;
    info!("loaded {} acquisition records", acquisitions.len());

    let existing = ingest::read_existing(&paths.existing)
        .with_context(|| format!("reading existing accounts file {}", paths.existing.display()))?;
    info!(
        "loaded {} existing account rows (address variants included)",
        existing.len()
    );

    let match_started = Instant::now();
    let matches = match_accounts(&acquisitions, &existing, cfg.thresholds, |u| {
        info!(
            "[match] {}/{} ({:.1}%) | mem used {} MB / avail {} MB",
            u.processed, u.total, u.percent, u.mem_used_mb, u.mem_avail_mb
        );
    });
    let match_time = match_started.elapsed();
    info!(
        "matching finished: {} pair(s) in {:.1}s",
        matches.pair_count(),
        match_time.as_secs_f64()
    );

    let opts = DataloadOptions {
        currency: cfg.currency.clone(),
        use_provided_terms: cfg.use_provided_terms,
        prospect: cfg.prospect,
    };
    let (outputs, dataload) = build_dataload(&acquisitions, &matches, &opts);
    if dataload.unclassified > 0 {
        warn!(
            "{} new record(s) fell outside both statement buckets and were not loaded",
            dataload.unclassified
        );
    }

    let export_started = Instant::now();
    fs::create_dir_all(&paths.out_dir)
        .with_context(|| format!("creating output directory {}", paths.out_dir.display()))?;
    let stamp = Local::now().format("%Y%m%d_%H%M%S_").to_string();
    let mut files = Vec::new();

    if cfg.format == "csv" || cfg.format == "both" {
        let path = paths.out_dir.join(format!("{stamp}Matching_Accounts.csv"));
        csv_export::export_matches_csv(&matches, &path)
            .with_context(|| format!("writing {}", path.display()))?;
        files.push(path);

        let path = paths
            .out_dir
            .join(format!("{stamp}New_Accounts_Dataload.csv"));
        csv_export::export_dataload_csv(&outputs, &path)
            .with_context(|| format!("writing {}", path.display()))?;
        files.push(path);
    }
    if cfg.format == "xlsx" || cfg.format == "both" {
        let path = paths.out_dir.join(format!("{stamp}Matching_Accounts.xlsx"));
        xlsx_export::export_matches_xlsx(&matches, &path)
            .with_context(|| format!("writing {}", path.display()))?;
        files.push(path);

        let path = paths
            .out_dir
            .join(format!("{stamp}New_Accounts_Dataload.xlsx"));
        xlsx_export::export_dataload_xlsx(&outputs, &path)
            .with_context(|| format!("writing {}", path.display()))?;
        files.push(path);
    }
    let export_time = export_started.elapsed();

    let mem = memory_stats_mb();
    info!(
        "run complete: {} new account(s), {} duplicate(s), {} unclassified | mem used {} MB",
        dataload.emitted, dataload.duplicates, dataload.unclassified, mem.used_mb
    );

    Ok(RunSummary {
        acquisition_total: acquisitions.len(),
        existing_total: existing.len(),
        matched_pairs: matches.pair_count(),
        dataload,
        files,
        started_utc,
        ended_utc: Utc::now(),
        match_time,
        export_time,
    })
}
