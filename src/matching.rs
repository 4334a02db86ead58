//! Two-stage fuzzy matching of acquisition records against the comparison set.
//!
//! Every acquisition record is scored against every existing record: first the
//! address gate, then the name gate. Both gates compare the floored integer
//! percentage of a Jaro-Winkler score against the configured threshold. A pair
//! that clears both gates is appended to the match table.

use strsim::jaro_winkler;

use crate::config::ThresholdConfig;
use crate::metrics::memory_stats_mb;
use crate::models::{AcquisitionRecord, ExistingRecord, MatchRow, MatchTable};

/// Normalized string similarity in [0,1], case-folded. Identical strings
/// score 1.0; shared prefixes are rewarded.
pub fn similarity(a: &str, b: &str) -> f64 {
    jaro_winkler(&a.to_lowercase(), &b.to_lowercase())
}

/// Threshold check: the score is floored to an integer percentage before the
/// comparison, so 0.799 fails an 80 gate and 0.800 passes it.
pub fn clears_gate(score: f64, threshold_pct: u8) -> bool {
    (score * 100.0).floor() as i64 >= i64::from(threshold_pct)
}

/// Progress notification emitted after each acquisition record is processed.
#[derive(Debug, Clone, Copy)]
pub struct ProgressUpdate {
    pub processed: usize,
    pub total: usize,
    pub percent: f32,
    pub mem_used_mb: u64,
    pub mem_avail_mb: u64,
    pub stage: &'static str,
}

/// Compare every acquisition record against every existing record under the
/// two sequential gates and collect the qualifying pairs, in input order.
///
/// A single acquisition record may match zero, one, or many existing records;
/// every qualifying pair is emitted independently. The full pairwise sweep is
/// O(N*M) string comparisons with no blocking or early termination; that is
/// the dominant cost of a run.
///
/// `on_progress` is called once per acquisition record and has no effect on
/// the result.
pub fn match_accounts<F>(
    acquisitions: &[AcquisitionRecord],
    existing: &[ExistingRecord],
    thresholds: ThresholdConfig,
    on_progress: F,
) -> MatchTable
where
    F: Fn(ProgressUpdate),
{
    let total = acquisitions.len();
    let mut table = MatchTable::new();

    for (idx, acq) in acquisitions.iter().enumerate() {
        for ex in existing {
            let addr_score = similarity(&acq.full_address, &ex.street);
            if !clears_gate(addr_score, thresholds.address) {
                continue;
            }
            let name_score = similarity(&ex.name, &acq.account_name);
            if !clears_gate(name_score, thresholds.name) {
                continue;
            }
            table.push_pair(
                MatchRow::from_acquisition(acq),
                MatchRow::from_existing(ex, addr_score),
            );
        }
        let mem = memory_stats_mb();
        on_progress(ProgressUpdate {
            processed: idx + 1,
            total,
            percent: (idx + 1) as f32 / total as f32 * 100.0,
            mem_used_mb: mem.used_mb,
            mem_avail_mb: mem.avail_mb,
            stage: "match",
        });
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn acquisition(name: &str, address: &str) -> AcquisitionRecord {
        AcquisitionRecord {
            legacy_customer_id: "L1".into(),
            account_name: name.into(),
            full_address: address.into(),
            billing_city: "Springfield".into(),
            billing_state: "IL".into(),
            billing_postal_code: "62701".into(),
            billing_country: "USA".into(),
            tax_id: "T1".into(),
            payment_terms: "NET_60".into(),
        }
    }

    fn existing(name: &str, street: &str) -> ExistingRecord {
        ExistingRecord {
            sf_account_id: "001".into(),
            enterprise_id: "E1".into(),
            name: name.into(),
            street: street.into(),
            city: "Springfield".into(),
            state: "IL".into(),
            postal_code: "62701".into(),
            country: "USA".into(),
        }
    }

    #[test]
    fn similarity_is_case_insensitive_and_bounded() {
        assert_eq!(similarity("Acme Corp", "acme corp"), 1.0);
        let s = similarity("Acme Corp", "Zzzzz Qqqq");
        assert!((0.0..1.0).contains(&s));
    }

    #[test]
    fn gate_floors_the_percentage() {
        assert!(clears_gate(0.80, 80));
        assert!(!clears_gate(0.799, 80));
        assert!(clears_gate(1.0, 100));
        assert!(clears_gate(0.0, 0));
    }

    #[test]
    fn matching_pair_clears_both_gates_and_is_emitted_in_order() {
        let acq = vec![acquisition("Acme Corp", "1 Main St")];
        let ex = vec![existing("ACME Corporation", "1 Main Street")];
        let thresholds = ThresholdConfig {
            address: 70,
            name: 70,
        };

        let table = match_accounts(&acq, &ex, thresholds, |_| {});
        assert_eq!(table.pair_count(), 1);

        let rows = table.rows();
        assert_eq!(rows[0].account_name, "Acme Corp");
        assert_eq!(rows[0].score, None);
        assert_eq!(rows[1].account_name, "ACME Corporation");

        // The stored score is the raw address similarity and satisfies both
        // gates under the configured thresholds.
        let addr_score = rows[1].score.expect("existing row carries the score");
        assert_eq!(addr_score, similarity("1 Main St", "1 Main Street"));
        assert!(clears_gate(addr_score, thresholds.address));
        let name_score = similarity("ACME Corporation", "Acme Corp");
        assert!(clears_gate(name_score, thresholds.name));
    }

    #[test]
    fn pair_below_address_gate_is_never_emitted() {
        let acq = vec![acquisition("Acme Corp", "1 Main St")];
        let ex = vec![existing("Acme Corp", "99 Totally Different Blvd")];
        let score = similarity("1 Main St", "99 Totally Different Blvd");
        assert!(!clears_gate(score, 80));

        let table = match_accounts(
            &acq,
            &ex,
            ThresholdConfig {
                address: 80,
                name: 0,
            },
            |_| {},
        );
        assert!(table.is_empty());
    }

    #[test]
    fn address_match_alone_is_not_enough() {
        let acq = vec![acquisition("Acme Corp", "1 Main St")];
        let ex = vec![existing("Quuxly Partners BV", "1 Main St")];
        let table = match_accounts(
            &acq,
            &ex,
            ThresholdConfig {
                address: 80,
                name: 80,
            },
            |_| {},
        );
        assert!(table.is_empty());
    }

    #[test]
    fn one_acquisition_record_can_match_many() {
        let acq = vec![acquisition("Acme Corp", "1 Main St")];
        let ex = vec![
            existing("Acme Corp", "1 Main St"),
            existing("Acme Corp.", "1 Main Street"),
        ];
        let table = match_accounts(
            &acq,
            &ex,
            ThresholdConfig {
                address: 70,
                name: 70,
            },
            |_| {},
        );
        assert_eq!(table.pair_count(), 2);
    }

    #[test]
    fn matching_is_idempotent() {
        let acq = vec![
            acquisition("Acme Corp", "1 Main St"),
            acquisition("Zenith Co", "2 Oak Ave"),
        ];
        let ex = vec![
            existing("ACME Corporation", "1 Main Street"),
            existing("Zenith Company", "2 Oak Avenue"),
        ];
        let thresholds = ThresholdConfig {
            address: 70,
            name: 70,
        };
        let first = match_accounts(&acq, &ex, thresholds, |_| {});
        let second = match_accounts(&acq, &ex, thresholds, |_| {});
        assert_eq!(first.rows(), second.rows());
    }

    #[test]
    fn progress_fires_once_per_acquisition_record() {
        let acq = vec![
            acquisition("Acme Corp", "1 Main St"),
            acquisition("Zenith Co", "2 Oak Ave"),
            acquisition("Midway Ltd", "3 Elm Rd"),
        ];
        let calls = AtomicUsize::new(0);
        let table = match_accounts(&acq, &[], ThresholdConfig::default(), |u| {
            calls.fetch_add(1, Ordering::Relaxed);
            assert_eq!(u.total, 3);
            assert!(u.processed >= 1 && u.processed <= 3);
        });
        assert_eq!(calls.load(Ordering::Relaxed), 3);
        assert!(table.is_empty());
    }
}
