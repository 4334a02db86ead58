use anyhow::Result;
use rust_xlsxwriter::{Format, FormatAlign, Workbook, Worksheet};
use std::path::Path;

use crate::export::{DATALOAD_HEADERS, MATCH_HEADERS};
use crate::models::{MatchTable, OutputRecord};

fn header_format() -> Format {
    Format::new().set_bold().set_align(FormatAlign::Center)
}

fn write_headers(sheet: &mut Worksheet, headers: &[&str]) -> Result<()> {
    let fmt = header_format();
    for (col, name) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *name, &fmt)?;
    }
    Ok(())
}

pub fn export_matches_xlsx(table: &MatchTable, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Matching Accounts")?;
    write_headers(sheet, &MATCH_HEADERS)?;

    for (i, row) in table.rows().iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write_string(r, 0, &row.sf_account_id)?;
        sheet.write_string(r, 1, &row.legacy_customer_id)?;
        sheet.write_string(r, 2, &row.enterprise_id)?;
        sheet.write_string(r, 3, &row.account_name)?;
        sheet.write_string(r, 4, &row.full_address)?;
        sheet.write_string(r, 5, &row.city)?;
        sheet.write_string(r, 6, &row.state)?;
        sheet.write_string(r, 7, &row.postal_code)?;
        sheet.write_string(r, 8, &row.country)?;
        if let Some(score) = row.score {
            sheet.write_number(r, 9, score)?;
        }
    }
    workbook.save(path)?;
    Ok(())
}

pub fn export_dataload_xlsx(records: &[OutputRecord], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("New Accounts Dataload")?;
    write_headers(sheet, &DATALOAD_HEADERS)?;

    for (i, record) in records.iter().enumerate() {
        let r = (i + 1) as u32;
        let fields = [
            &record.legacy_customer_id,
            &record.name,
            &record.record_type_id,
            &record.customer_status,
            &record.customer_status_assigned,
            &record.currency_iso_code,
            &record.payment_terms,
            &record.customer_group,
            &record.customer_category,
            &record.wd_integrate,
            &record.publish_to_workday,
            &record.billing_street,
            &record.billing_city,
            &record.billing_state,
            &record.billing_postal_code,
            &record.billing_country,
            &record.tax_id,
        ];
        for (col, value) in fields.iter().enumerate() {
            sheet.write_string(r, col as u16, value.as_str())?;
        }
    }
    workbook.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AcquisitionRecord, ExistingRecord, MatchRow};
    use std::fs;

    #[test]
    fn workbooks_are_written_to_disk() {
        let acq = AcquisitionRecord {
            legacy_customer_id: "L1".into(),
            account_name: "Acme Corp".into(),
            full_address: "1 Main St".into(),
            billing_city: "Springfield".into(),
            billing_state: "IL".into(),
            billing_postal_code: "62701".into(),
            billing_country: "USA".into(),
            tax_id: "T1".into(),
            payment_terms: "NET_60".into(),
        };
        let ex = ExistingRecord {
            sf_account_id: "001".into(),
            enterprise_id: "E1".into(),
            name: "ACME Corporation".into(),
            street: "1 Main Street".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            postal_code: "62701".into(),
            country: "USA".into(),
        };
        let mut table = MatchTable::new();
        table.push_pair(
            MatchRow::from_acquisition(&acq),
            MatchRow::from_existing(&ex, 0.9),
        );

        let path = std::env::temp_dir().join(format!(
            "account_matcher_xlsx_{}_matches.xlsx",
            std::process::id()
        ));
        export_matches_xlsx(&table, &path).unwrap();
        assert!(path.exists());
        assert!(fs::metadata(&path).unwrap().len() > 0);
        fs::remove_file(&path).ok();
    }
}
