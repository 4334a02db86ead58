pub mod config;
pub mod dataload;
pub mod error;
pub mod export;
pub mod ingest;
pub mod matching;
pub mod metrics;
pub mod models;
pub mod normalize;
pub mod run;
