use std::process;

use badelogg::scraper::WebScraper;
use badelogg::tsv;
use badelogg::types::Facility;
use chrono::{Datelike, SecondsFormat, Utc};

/// One fetch-and-append cycle per invocation; scheduling is left to
/// whatever triggers the process (cron or similar).
#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Captured once, before any network call, so both facilities log the
    // same timestamp and file year.
    let now = Utc::now();
    let year = now.year();
    let date = now.to_rfc3339_opts(SecondsFormat::Millis, true);

    let scraper = WebScraper::new().unwrap_or_else(|e| {
        log::error!("Error creating scraper: {e}");
        process::exit(1);
    });

    let (ado, nordnes) = tokio::try_join!(
        scraper.fetch_status_fields(Facility::Ado),
        scraper.fetch_status_fields(Facility::Nordnes),
    )
    .unwrap_or_else(|e| {
        log::error!("Error fetching status page: {e}");
        process::exit(1);
    });

    tokio::try_join!(
        tokio::fs::create_dir_all(Facility::Ado.data_dir()),
        tokio::fs::create_dir_all(Facility::Nordnes.data_dir()),
    )
    .unwrap_or_else(|e| {
        log::error!("Error creating data directories: {e}");
        process::exit(1);
    });

    let ado_row = tsv::build_row(Facility::Ado, &ado, &date);
    let nordnes_row = tsv::build_row(Facility::Nordnes, &nordnes, &date);

    let ado_path = Facility::Ado.log_path(year);
    let nordnes_path = Facility::Nordnes.log_path(year);
    tokio::try_join!(
        tsv::append_row(&ado_path, &ado_row),
        tsv::append_row(&nordnes_path, &nordnes_row),
    )
    .unwrap_or_else(|e| {
        log::error!("Error writing log file: {e}");
        process::exit(1);
    });

    log::info!("Run complete at {date}");
}
