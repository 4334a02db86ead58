use anyhow::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::export::{score_text, DATALOAD_HEADERS, MATCH_HEADERS};
use crate::models::{MatchTable, OutputRecord};

pub fn export_matches_csv(table: &MatchTable, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut w = WriterBuilder::new().from_writer(BufWriter::with_capacity(512 * 1024, file));
    w.write_record(MATCH_HEADERS)?;
    for row in table.rows() {
        let score = score_text(row.score);
        w.write_record([
            row.sf_account_id.as_str(),
            row.legacy_customer_id.as_str(),
            row.enterprise_id.as_str(),
            row.account_name.as_str(),
            row.full_address.as_str(),
            row.city.as_str(),
            row.state.as_str(),
            row.postal_code.as_str(),
            row.country.as_str(),
            score.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

pub fn export_dataload_csv(records: &[OutputRecord], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut w = WriterBuilder::new().from_writer(BufWriter::with_capacity(512 * 1024, file));
    w.write_record(DATALOAD_HEADERS)?;
    for r in records {
        w.write_record([
            r.legacy_customer_id.as_str(),
            r.name.as_str(),
            r.record_type_id.as_str(),
            r.customer_status.as_str(),
            r.customer_status_assigned.as_str(),
            r.currency_iso_code.as_str(),
            r.payment_terms.as_str(),
            r.customer_group.as_str(),
            r.customer_category.as_str(),
            r.wd_integrate.as_str(),
            r.publish_to_workday.as_str(),
            r.billing_street.as_str(),
            r.billing_city.as_str(),
            r.billing_state.as_str(),
            r.billing_postal_code.as_str(),
            r.billing_country.as_str(),
            r.tax_id.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
