use crate::types::{CaseEntry, RegionTotals};
use std::collections::HashMap;

/// Folds parsed rows into one running total per region.
///
/// Row order does not matter: the three sums are commutative, and the
/// first/last-seen dates are tracked as a running min/max in the same pass as
/// the sums. The nationwide rollup row is dropped on ingest so it can never
/// create or update an entity.
#[derive(Debug)]
pub struct Aggregator {
    rollup_region: String,
    rollup_rows: usize,
    totals: HashMap<String, RegionTotals>,
}

impl Aggregator {
    pub fn new(rollup_region: &str) -> Self {
        Aggregator {
            rollup_region: rollup_region.to_string(),
            rollup_rows: 0,
            totals: HashMap::new(),
        }
    }

    pub fn ingest(&mut self, entry: &CaseEntry) {
        if entry.region == self.rollup_region {
            self.rollup_rows += 1;
            return;
        }
        match self.totals.get_mut(&entry.region) {
            Some(acc) => {
                acc.new_cases += entry.new_cases;
                acc.total_cases += entry.total_cases;
                acc.total_deaths += entry.total_deaths;
                if entry.date < acc.first_seen {
                    acc.first_seen = entry.date;
                }
                if entry.date > acc.last_seen {
                    acc.last_seen = entry.date;
                }
            }
            None => {
                self.totals.insert(
                    entry.region.clone(),
                    RegionTotals {
                        region: entry.region.clone(),
                        first_seen: entry.date,
                        last_seen: entry.date,
                        new_cases: entry.new_cases,
                        total_cases: entry.total_cases,
                        total_deaths: entry.total_deaths,
                    },
                );
            }
        }
    }

    /// How many nationwide rollup rows were seen and dropped.
    pub fn rollup_rows(&self) -> usize {
        self.rollup_rows
    }

    pub fn region_count(&self) -> usize {
        self.totals.len()
    }

    /// Consume the map and return one row per region in report order.
    pub fn into_ranked(self) -> Vec<RegionTotals> {
        rank(self.totals)
    }
}

/// Order regions by total cases, highest first. Ties fall back to the region
/// name so the output is reproducible across runs; HashMap iteration order is
/// never allowed to leak into the report.
fn rank(totals: HashMap<String, RegionTotals>) -> Vec<RegionTotals> {
    let mut ranked: Vec<RegionTotals> = totals.into_values().collect();
    ranked.sort_by(|a, b| {
        b.total_cases
            .cmp(&a.total_cases)
            .then_with(|| a.region.cmp(&b.region))
    });
    ranked
}
