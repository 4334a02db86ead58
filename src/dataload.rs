//! Builds the new-accounts dataload from the acquisition batch and the match
//! table: drops records already present in the system of record, classifies
//! the rest into legacy statement buckets and a customer/prospect profile.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::models::{AcquisitionRecord, MatchTable, OutputRecord};
use crate::normalize::title_case;

pub const DEFAULT_PAYMENT_TERMS: &str = "NET_30";
pub const CUSTOMER_CATEGORY: &str = "Trade";

const PROSPECT_RECORD_TYPE_ID: &str = "012a00000018GZk";
const CUSTOMER_RECORD_TYPE_ID: &str = "012a00000018GZgAAM";

/// Legacy statement bucket derived from the first character of the account
/// name. Names starting with anything outside the two listed character sets
/// classify as neither bucket and are not loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerGroup {
    AToM,
    NToZ,
}

impl CustomerGroup {
    pub fn from_name(name: &str) -> Option<Self> {
        let first = name.chars().next()?;
        match first {
            'A'..='M' | 'a'..='m' | '0'..='9' | '(' | 'Đ' | 'Ô' => Some(Self::AToM),
            'N'..='Z' | 'n'..='z' => Some(Self::NToZ),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AToM => "Statement_A-M",
            Self::NToZ => "Statement_N-Z",
        }
    }
}

/// Fixed field profile selected by the prospect flag.
#[derive(Debug, Clone, Copy)]
pub struct RecordProfile {
    pub record_type_id: &'static str,
    pub customer_status: &'static str,
    pub status_assigned: &'static str,
    pub workday: &'static str,
    pub publish: &'static str,
}

impl RecordProfile {
    pub fn for_prospect(prospect: bool) -> Self {
        if prospect {
            Self {
                record_type_id: PROSPECT_RECORD_TYPE_ID,
                customer_status: "Inactive",
                status_assigned: "Prospect",
                workday: "n",
                publish: "n",
            }
        } else {
            Self {
                record_type_id: CUSTOMER_RECORD_TYPE_ID,
                customer_status: "Active",
                status_assigned: "Customer",
                workday: "y",
                publish: "y",
            }
        }
    }
}

/// Flags and constants the builder needs besides the records themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataloadOptions {
    pub currency: String,
    pub use_provided_terms: bool,
    pub prospect: bool,
}

/// Counts for one builder run. `unclassified` records were new but carried a
/// name outside both statement buckets and were therefore not loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DataloadSummary {
    pub emitted: usize,
    pub duplicates: usize,
    pub unclassified: usize,
}

/// Dedup key: a record counts as already present iff its account name occurs
/// anywhere in the match-table name column, either side of any pair. The
/// check is exact and case-sensitive, and deliberately not restricted to
/// pairs involving this record.
pub fn is_already_present(name: &str, matches: &MatchTable) -> bool {
    matches.contains_name(name)
}

/// Shape every acquisition record that matched nothing into an output record,
/// preserving input order. Returns the records plus the run counts.
pub fn build_dataload(
    acquisitions: &[AcquisitionRecord],
    matches: &MatchTable,
    opts: &DataloadOptions,
) -> (Vec<OutputRecord>, DataloadSummary) {
    let profile = RecordProfile::for_prospect(opts.prospect);
    let mut records = Vec::new();
    let mut summary = DataloadSummary::default();

    for acq in acquisitions {
        if is_already_present(&acq.account_name, matches) {
            summary.duplicates += 1;
            continue;
        }
        let Some(group) = CustomerGroup::from_name(&acq.account_name) else {
            summary.unclassified += 1;
            warn!(
                "account {:?} (legacy id {}) starts outside both statement buckets; not loaded",
                acq.account_name, acq.legacy_customer_id
            );
            continue;
        };
        let payment_terms = if opts.use_provided_terms {
            acq.payment_terms.clone()
        } else {
            DEFAULT_PAYMENT_TERMS.to_string()
        };
        records.push(OutputRecord {
            legacy_customer_id: acq.legacy_customer_id.clone(),
            name: title_case(&acq.account_name),
            record_type_id: profile.record_type_id.to_string(),
            customer_status: profile.customer_status.to_string(),
            customer_status_assigned: profile.status_assigned.to_string(),
            currency_iso_code: opts.currency.clone(),
            payment_terms,
            customer_group: group.label().to_string(),
            customer_category: CUSTOMER_CATEGORY.to_string(),
            wd_integrate: profile.workday.to_string(),
            publish_to_workday: profile.publish.to_string(),
            billing_street: title_case(&acq.full_address),
            billing_city: acq.billing_city.clone(),
            billing_state: acq.billing_state.clone(),
            billing_postal_code: acq.billing_postal_code.clone(),
            billing_country: acq.billing_country.clone(),
            tax_id: acq.tax_id.clone(),
        });
        summary.emitted += 1;
    }

    (records, summary)
}
