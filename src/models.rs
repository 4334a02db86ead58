use serde::{Deserialize, Serialize};

/// One row of the incoming acquisition batch.
///
/// Every field is plain text: missing values are coerced to the central
/// placeholder at ingestion (see `normalize::text_or_missing`), so matching
/// and output building never have to reason about absence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcquisitionRecord {
    pub legacy_customer_id: String,
    pub account_name: String,
    /// Comparable address built from the two street lines at ingestion.
    pub full_address: String,
    pub billing_city: String,
    pub billing_state: String,
    pub billing_postal_code: String,
    pub billing_country: String,
    pub tax_id: String,
    pub payment_terms: String,
}

/// One row of the system-of-record comparison set, after the three address
/// variants (billing / primary / mailing) have been promoted to this common
/// layout. Read-only reference data for the lifetime of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExistingRecord {
    pub sf_account_id: String,
    pub enterprise_id: String,
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

/// Shared 10-column projection used for both sides of a matched pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRow {
    pub sf_account_id: String,
    pub legacy_customer_id: String,
    pub enterprise_id: String,
    pub account_name: String,
    pub full_address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    /// Raw address similarity, carried only on the existing-record row.
    pub score: Option<f64>,
}

impl MatchRow {
    /// Project an acquisition record into the shared schema. The SF-side
    /// columns and the score stay empty on this row.
    pub fn from_acquisition(record: &AcquisitionRecord) -> Self {
        Self {
            sf_account_id: String::new(),
            legacy_customer_id: record.legacy_customer_id.clone(),
            enterprise_id: String::new(),
            account_name: record.account_name.clone(),
            full_address: record.full_address.clone(),
            city: record.billing_city.clone(),
            state: record.billing_state.clone(),
            postal_code: record.billing_postal_code.clone(),
            country: record.billing_country.clone(),
            score: None,
        }
    }

    /// Project an existing record into the shared schema, attaching the raw
    /// address score that cleared the gates.
    pub fn from_existing(record: &ExistingRecord, score: f64) -> Self {
        Self {
            sf_account_id: record.sf_account_id.clone(),
            legacy_customer_id: String::new(),
            enterprise_id: record.enterprise_id.clone(),
            account_name: record.name.clone(),
            full_address: record.street.clone(),
            city: record.city.clone(),
            state: record.state.clone(),
            postal_code: record.postal_code.clone(),
            country: record.country.clone(),
            score: Some(score),
        }
    }
}

/// Append-only table of matched pairs. Pairs are always two consecutive
/// rows: the acquisition row first, then the existing row carrying the score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchTable {
    rows: Vec<MatchRow>,
}

impl MatchTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_pair(&mut self, acquisition: MatchRow, existing: MatchRow) {
        self.rows.push(acquisition);
        self.rows.push(existing);
    }

    pub fn rows(&self) -> &[MatchRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn pair_count(&self) -> usize {
        self.rows.len() / 2
    }

    /// Exact, case-sensitive membership over the name column of every row,
    /// both acquisition-side and existing-side.
    pub fn contains_name(&self, name: &str) -> bool {
        self.rows.iter().any(|row| row.account_name == name)
    }
}

/// One row of the new-accounts dataload: an acquisition record that matched
/// nothing, shaped into the 17-column upload schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub legacy_customer_id: String,
    pub name: String,
    pub record_type_id: String,
    pub customer_status: String,
    pub customer_status_assigned: String,
    pub currency_iso_code: String,
    pub payment_terms: String,
    pub customer_group: String,
    pub customer_category: String,
    pub wd_integrate: String,
    pub publish_to_workday: String,
    pub billing_street: String,
    pub billing_city: String,
    pub billing_state: String,
    pub billing_postal_code: String,
    pub billing_country: String,
    pub tax_id: String,
}
