//! Filtering and aggregation of launch records.
//!
//! Both functions are pure: they read the immutable [Dataset] and return freshly computed rows.

use crate::dataset::{Dataset, Outcome};
use crate::models::{OutcomeSlice, PayloadPoint, PayloadRange, SiteSelection};

use std::collections::BTreeMap;

/// Aggregate launch outcomes for the pie chart.
///
/// For all sites, returns the success count of each site, ordered by site name. For a single
/// site, returns the number of records with each outcome present at that site, ordered by
/// outcome flag. An unknown site yields no rows.
///
/// # Arguments
///
/// * `dataset`: Launch records
/// * `site`: Site selection
pub fn aggregate_outcomes(dataset: &Dataset, site: &SiteSelection) -> Vec<OutcomeSlice> {
    match site {
        SiteSelection::All => {
            let mut successes: BTreeMap<&str, u64> = BTreeMap::new();
            for record in dataset.records() {
                *successes.entry(record.launch_site.as_str()).or_default() +=
                    u64::from(record.outcome.flag());
            }
            successes
                .into_iter()
                .map(|(site, count)| OutcomeSlice::new(site, count))
                .collect()
        }
        SiteSelection::Site(_) => {
            let mut counts: BTreeMap<Outcome, u64> = BTreeMap::new();
            for record in dataset
                .records()
                .iter()
                .filter(|record| site.matches(&record.launch_site))
            {
                *counts.entry(record.outcome).or_default() += 1;
            }
            counts
                .into_iter()
                .map(|(outcome, count)| OutcomeSlice::new(outcome.to_string(), count))
                .collect()
        }
    }
}

/// Select launch records for the payload scatter chart.
///
/// Returns the payload, outcome and booster category of each selected record whose payload mass
/// lies within `range` (inclusive), in dataset order.
///
/// # Arguments
///
/// * `dataset`: Launch records
/// * `site`: Site selection
/// * `range`: Payload mass bounds
pub fn correlate(
    dataset: &Dataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> Vec<PayloadPoint> {
    dataset
        .records()
        .iter()
        .filter(|record| range.contains(record.payload_mass_kg))
        .filter(|record| site.matches(&record.launch_site))
        .map(|record| PayloadPoint {
            payload_mass_kg: record.payload_mass_kg,
            outcome: record.outcome,
            booster_version_category: record.booster_version_category.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::LaunchRecord;
    use crate::test_utils;

    fn site(name: &str) -> SiteSelection {
        SiteSelection::Site(name.to_string())
    }

    #[test]
    fn aggregate_all_sites() {
        let dataset = test_utils::get_test_dataset();
        let slices = aggregate_outcomes(&dataset, &SiteSelection::All);
        assert_eq!(
            vec![
                OutcomeSlice::new("KSC LC-39A", 1),
                OutcomeSlice::new("VAFB SLC-4E", 1)
            ],
            slices
        );
    }

    #[test]
    fn aggregate_all_sites_includes_site_without_successes() {
        let dataset = Dataset::new(vec![
            LaunchRecord::new("CCAFS LC-40", 0.0, Outcome::Failure, "v1.0"),
            LaunchRecord::new("KSC LC-39A", 5300.0, Outcome::Success, "FT"),
            LaunchRecord::new("CCAFS LC-40", 500.0, Outcome::Failure, "v1.1"),
        ])
        .unwrap();
        let slices = aggregate_outcomes(&dataset, &SiteSelection::All);
        assert_eq!(
            vec![
                OutcomeSlice::new("CCAFS LC-40", 0),
                OutcomeSlice::new("KSC LC-39A", 1)
            ],
            slices
        );
        assert_eq!(
            vec![OutcomeSlice::new("0", 2)],
            aggregate_outcomes(&dataset, &site("CCAFS LC-40"))
        );
    }

    #[test]
    fn aggregate_single_site() {
        let dataset = test_utils::get_test_dataset();
        let slices = aggregate_outcomes(&dataset, &site("KSC LC-39A"));
        assert_eq!(
            vec![OutcomeSlice::new("0", 1), OutcomeSlice::new("1", 1)],
            slices
        );
    }

    #[test]
    fn aggregate_single_site_one_outcome() {
        let dataset = test_utils::get_test_dataset();
        let slices = aggregate_outcomes(&dataset, &site("VAFB SLC-4E"));
        assert_eq!(vec![OutcomeSlice::new("1", 1)], slices);
    }

    #[test]
    fn aggregate_unknown_site() {
        let dataset = test_utils::get_test_dataset();
        assert!(aggregate_outcomes(&dataset, &site("Boca Chica")).is_empty());
    }

    #[test]
    fn aggregate_all_sites_totals() {
        let dataset = test_utils::get_csv_dataset();
        let slices = aggregate_outcomes(&dataset, &SiteSelection::All);
        let sites: Vec<&str> = slices.iter().map(|slice| slice.label.as_str()).collect();
        assert_eq!(dataset.sites(), sites);
        let successes = dataset
            .records()
            .iter()
            .filter(|record| record.outcome == Outcome::Success)
            .count() as u64;
        assert_eq!(successes, slices.iter().map(|slice| slice.value).sum::<u64>());
    }

    #[test]
    fn aggregate_each_site_totals() {
        let dataset = test_utils::get_csv_dataset();
        for name in dataset.sites() {
            let slices = aggregate_outcomes(&dataset, &site(name));
            assert!(slices.len() <= 2);
            let records = dataset
                .records()
                .iter()
                .filter(|record| record.launch_site == name)
                .count() as u64;
            assert_eq!(records, slices.iter().map(|slice| slice.value).sum::<u64>());
        }
    }

    #[test]
    fn correlate_all_sites() {
        let dataset = test_utils::get_test_dataset();
        let points = correlate(
            &dataset,
            &SiteSelection::All,
            PayloadRange::new(4000.0, 10000.0),
        );
        let payloads: Vec<f64> = points.iter().map(|point| point.payload_mass_kg).collect();
        assert_eq!(vec![5000.0, 9000.0], payloads);
        assert_eq!("B4", points[0].booster_version_category);
        assert_eq!(Outcome::Success, points[1].outcome);
    }

    #[test]
    fn correlate_bounds_are_inclusive() {
        let dataset = test_utils::get_test_dataset();
        let points = correlate(
            &dataset,
            &SiteSelection::All,
            PayloadRange::new(3000.0, 5000.0),
        );
        assert_eq!(2, points.len());
    }

    #[test]
    fn correlate_respects_site_and_range() {
        let dataset = test_utils::get_csv_dataset();
        let range = PayloadRange::new(400.0, 6000.0);
        for name in dataset.sites() {
            let selection = site(name);
            let points = correlate(&dataset, &selection, range);
            let expected = dataset
                .records()
                .iter()
                .filter(|record| record.launch_site == name)
                .filter(|record| range.contains(record.payload_mass_kg))
                .count();
            assert_eq!(expected, points.len());
            assert!(points
                .iter()
                .all(|point| range.contains(point.payload_mass_kg)));
        }
    }

    #[test]
    fn correlate_full_range_is_identity() {
        let dataset = test_utils::get_csv_dataset();
        let range = PayloadRange::new(dataset.min_payload(), dataset.max_payload());
        assert_eq!(
            dataset.len(),
            correlate(&dataset, &SiteSelection::All, range).len()
        );
        let points = correlate(&dataset, &site("CCAFS LC-40"), range);
        let expected: Vec<PayloadPoint> = dataset
            .records()
            .iter()
            .filter(|record| record.launch_site == "CCAFS LC-40")
            .map(|record| PayloadPoint {
                payload_mass_kg: record.payload_mass_kg,
                outcome: record.outcome,
                booster_version_category: record.booster_version_category.clone(),
            })
            .collect();
        assert_eq!(expected, points);
    }

    #[test]
    fn correlate_empty_selections() {
        let dataset = test_utils::get_test_dataset();
        // Inverted bounds.
        assert!(correlate(
            &dataset,
            &SiteSelection::All,
            PayloadRange::new(9000.0, 1000.0)
        )
        .is_empty());
        // Bounds beyond the observed payloads.
        assert!(correlate(
            &dataset,
            &SiteSelection::All,
            PayloadRange::new(20000.0, 30000.0)
        )
        .is_empty());
        assert!(correlate(
            &dataset,
            &site("Boca Chica"),
            PayloadRange::new(0.0, 10000.0)
        )
        .is_empty());
    }

    #[test]
    fn idempotent() {
        let dataset = test_utils::get_csv_dataset();
        let selection = site("KSC LC-39A");
        assert_eq!(
            aggregate_outcomes(&dataset, &selection),
            aggregate_outcomes(&dataset, &selection)
        );
        let range = PayloadRange::new(0.0, 5000.0);
        assert_eq!(
            correlate(&dataset, &SiteSelection::All, range),
            correlate(&dataset, &SiteSelection::All, range)
        );
    }
}
