//! CSV boundary for the two input tables.
//!
//! Schema validation happens here, once, before any matching: a missing
//! required column aborts the run with the column names in the error. Field
//! values are never validated — absent values are coerced to placeholder text
//! so the core stages operate on plain strings throughout.

use csv::ReaderBuilder;
use rayon::prelude::*;
use serde::Deserialize;
use std::path::Path;

use crate::error::IngestError;
use crate::models::{AcquisitionRecord, ExistingRecord};
use crate::normalize::{full_address, text_or_missing};

pub const ACQUISITION_TABLE: &str = "acquisition";
pub const EXISTING_TABLE: &str = "existing accounts";

/// Required acquisition columns. "Payment Terms" is optional.
pub const ACQUISITION_REQUIRED: [&str; 9] = [
    "Legacy Customer ID",
    "Account Name",
    "Billing Street",
    "Billing Address Line 2",
    "Billing City",
    "Billing State/Province",
    "Billing Zip/Postal Code",
    "Billing Country",
    "Tax ID",
];

/// Required columns of the exported account table. The D&B primary and
/// mailing address variant columns are optional.
pub const EXISTING_REQUIRED: [&str; 8] = [
    "Id",
    "Enterprise_ID__c",
    "Name",
    "BillingStreet",
    "BillingCity",
    "BillingState",
    "BillingPostalCode",
    "BillingCountry",
];

#[derive(Debug, Deserialize)]
struct RawAcquisitionRow {
    #[serde(rename = "Legacy Customer ID")]
    legacy_customer_id: Option<String>,
    #[serde(rename = "Account Name")]
    account_name: Option<String>,
    #[serde(rename = "Billing Street")]
    billing_street: Option<String>,
    #[serde(rename = "Billing Address Line 2")]
    billing_address_line2: Option<String>,
    #[serde(rename = "Billing City")]
    billing_city: Option<String>,
    #[serde(rename = "Billing State/Province")]
    billing_state: Option<String>,
    #[serde(rename = "Billing Zip/Postal Code")]
    billing_postal_code: Option<String>,
    #[serde(rename = "Billing Country")]
    billing_country: Option<String>,
    #[serde(rename = "Tax ID")]
    tax_id: Option<String>,
    #[serde(rename = "Payment Terms", default)]
    payment_terms: Option<String>,
}

impl RawAcquisitionRow {
    fn into_record(self) -> AcquisitionRecord {
        let full_address = full_address(
            self.billing_street.as_deref(),
            self.billing_address_line2.as_deref(),
        );
        AcquisitionRecord {
            legacy_customer_id: text_or_missing(self.legacy_customer_id.as_deref()),
            account_name: text_or_missing(self.account_name.as_deref()),
            full_address,
            billing_city: text_or_missing(self.billing_city.as_deref()),
            billing_state: text_or_missing(self.billing_state.as_deref()),
            billing_postal_code: text_or_missing(self.billing_postal_code.as_deref()),
            billing_country: text_or_missing(self.billing_country.as_deref()),
            tax_id: text_or_missing(self.tax_id.as_deref()),
            payment_terms: text_or_missing(self.payment_terms.as_deref()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawAccountRow {
    #[serde(rename = "Id")]
    id: Option<String>,
    #[serde(rename = "Enterprise_ID__c")]
    enterprise_id: Option<String>,
    #[serde(rename = "Name")]
    name: Option<String>,
    #[serde(rename = "BillingStreet")]
    billing_street: Option<String>,
    #[serde(rename = "BillingCity")]
    billing_city: Option<String>,
    #[serde(rename = "BillingState")]
    billing_state: Option<String>,
    #[serde(rename = "BillingPostalCode")]
    billing_postal_code: Option<String>,
    #[serde(rename = "BillingCountry")]
    billing_country: Option<String>,
    #[serde(rename = "primAddr_streetAddr_line1__c", default)]
    prim_street: Option<String>,
    #[serde(rename = "primAddr_AddrLocal_name__c", default)]
    prim_city: Option<String>,
    #[serde(rename = "primAddr_Region_name__c", default)]
    prim_state: Option<String>,
    #[serde(rename = "primAddr_postalCode__c", default)]
    prim_postal: Option<String>,
    #[serde(rename = "primAddr_Cntry_name__c", default)]
    prim_country: Option<String>,
    #[serde(rename = "mailingAddr_streetAddr_line1__c", default)]
    mail_street: Option<String>,
    #[serde(rename = "mailingAddr_AddrLocal_name__c", default)]
    mail_city: Option<String>,
    #[serde(rename = "mailingAddr_Region_name__c", default)]
    mail_state: Option<String>,
    #[serde(rename = "mailingAddr_postalCode__c", default)]
    mail_postal: Option<String>,
    #[serde(rename = "mailingAddr_Cntry_name__c", default)]
    mail_country: Option<String>,
}

impl RawAccountRow {
    fn promote(
        &self,
        street: Option<&str>,
        city: Option<&str>,
        state: Option<&str>,
        postal: Option<&str>,
        country: Option<&str>,
    ) -> Option<ExistingRecord> {
        // A variant only exists if it has a street line.
        let street = street?;
        Some(ExistingRecord {
            sf_account_id: text_or_missing(self.id.as_deref()),
            enterprise_id: text_or_missing(self.enterprise_id.as_deref()),
            name: text_or_missing(self.name.as_deref()),
            street: street.to_string(),
            city: text_or_missing(city),
            state: text_or_missing(state),
            postal_code: text_or_missing(postal),
            country: text_or_missing(country),
        })
    }

    fn billing_record(&self) -> Option<ExistingRecord> {
        self.promote(
            self.billing_street.as_deref(),
            self.billing_city.as_deref(),
            self.billing_state.as_deref(),
            self.billing_postal_code.as_deref(),
            self.billing_country.as_deref(),
        )
    }

    fn primary_record(&self) -> Option<ExistingRecord> {
        self.promote(
            self.prim_street.as_deref(),
            self.prim_city.as_deref(),
            self.prim_state.as_deref(),
            self.prim_postal.as_deref(),
            self.prim_country.as_deref(),
        )
    }

    fn mailing_record(&self) -> Option<ExistingRecord> {
        self.promote(
            self.mail_street.as_deref(),
            self.mail_city.as_deref(),
            self.mail_state.as_deref(),
            self.mail_postal.as_deref(),
            self.mail_country.as_deref(),
        )
    }
}

fn validate_headers(
    headers: &csv::StringRecord,
    required: &[&str],
    table: &'static str,
) -> Result<(), IngestError> {
    let missing: Vec<String> = required
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(IngestError::MissingColumns { table, missing })
    }
}

/// Read the acquisition batch and build each record's comparable address.
pub fn read_acquisition(path: &Path) -> Result<Vec<AcquisitionRecord>, IngestError> {
    let mut reader = ReaderBuilder::new().from_path(path)?;
    validate_headers(reader.headers()?, &ACQUISITION_REQUIRED, ACQUISITION_TABLE)?;
    let raws: Vec<RawAcquisitionRow> = reader.deserialize().collect::<Result<_, _>>()?;
    Ok(raws
        .into_par_iter()
        .map(RawAcquisitionRow::into_record)
        .collect())
}

/// Read the exported account table and promote each non-empty address
/// variant to its own record: all billing-address rows first, then the D&B
/// primary variants, then the mailing variants.
pub fn read_existing(path: &Path) -> Result<Vec<ExistingRecord>, IngestError> {
    let mut reader = ReaderBuilder::new().from_path(path)?;
    validate_headers(reader.headers()?, &EXISTING_REQUIRED, EXISTING_TABLE)?;
    let raws: Vec<RawAccountRow> = reader.deserialize().collect::<Result<_, _>>()?;

    let mut records = Vec::with_capacity(raws.len());
    records.extend(raws.iter().filter_map(RawAccountRow::billing_record));
    records.extend(raws.iter().filter_map(RawAccountRow::primary_record));
    records.extend(raws.iter().filter_map(RawAccountRow::mailing_record));
    Ok(records)
}
