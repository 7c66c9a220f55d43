use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// One CSV row as it comes off disk. Fields are bound by header name, so the
/// column order of the input file does not matter.
#[derive(Debug, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Date")]
    pub date: Option<String>,
    #[serde(rename = "Location")]
    pub location: Option<String>,
    #[serde(rename = "New Cases")]
    pub new_cases: Option<String>,
    #[serde(rename = "Total Cases")]
    pub total_cases: Option<String>,
    #[serde(rename = "Total Deaths")]
    pub total_deaths: Option<String>,
}

/// A row that survived parsing: typed date, non-empty region, clean counts.
#[derive(Debug, Clone)]
pub struct CaseEntry {
    pub date: NaiveDate,
    pub region: String,
    pub new_cases: u64,
    pub total_cases: u64,
    pub total_deaths: u64,
}

/// Running totals for one region across every row that mentions it.
///
/// `first_seen <= last_seen` always holds; both are dates taken from actual
/// contributing rows, tracked as min/max while the sums accumulate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionTotals {
    pub region: String,
    pub first_seen: NaiveDate,
    pub last_seen: NaiveDate,
    pub new_cases: u64,
    pub total_cases: u64,
    pub total_deaths: u64,
}

#[derive(Debug, Tabled, Clone)]
pub struct RankedRow {
    #[tabled(rename = "City")]
    pub city: String,
    #[tabled(rename = "Total Cases")]
    pub total_cases: String,
    #[tabled(rename = "New Cases")]
    pub new_cases: String,
    #[tabled(rename = "Total Deaths")]
    pub total_deaths: String,
    #[tabled(rename = "First Seen")]
    pub first_seen: String,
    #[tabled(rename = "Last Seen")]
    pub last_seen: String,
}

#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub total_rows: usize,
    pub parsed_rows: usize,
    pub skipped_rows: usize,
    pub zero_filled_fields: usize,
    pub rollup_rows: usize,
    pub regions: usize,
    pub first_seen: Option<NaiveDate>,
    pub last_seen: Option<NaiveDate>,
}
