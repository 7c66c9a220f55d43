use crate::config::{Config, NumericPolicy};
use crate::types::{CaseEntry, RawRow};
use crate::util::{parse_count_safe, parse_date_safe};
use csv::ReaderBuilder;
use std::error::Error;
use std::fs::File;
use std::io::Read;

/// Counters describing what happened to every input row. Nothing is dropped
/// silently; the caller decides what to print.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub total_rows: usize,
    pub parsed_rows: usize,
    pub skipped_rows: usize,
    pub zero_filled_fields: usize,
}

pub fn load_and_parse(cfg: &Config) -> Result<(Vec<CaseEntry>, LoadReport), Box<dyn Error>> {
    let file = File::open(&cfg.input_path)?;
    parse_reader(file, cfg)
}

/// Parse every data row from `reader`, skipping the ones that cannot be
/// turned into a `CaseEntry`.
///
/// A row is skipped when it fails CSV deserialization, has a missing or empty
/// region, or has a date not in `M/D/YYYY` form. Numeric cells that fail to
/// parse go through `cfg.numeric_policy`. The nationwide rollup rows are kept
/// here; excluding them is the aggregator's job.
pub fn parse_reader<R: Read>(
    reader: R,
    cfg: &Config,
) -> Result<(Vec<CaseEntry>, LoadReport), Box<dyn Error>> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut report = LoadReport::default();
    let mut entries: Vec<CaseEntry> = Vec::new();

    for result in rdr.deserialize::<RawRow>() {
        report.total_rows += 1;
        let row = match result {
            Ok(r) => r,
            Err(_) => { report.skipped_rows += 1; continue; }
        };

        let region = match row.location.as_deref().map(str::trim) {
            Some(r) if !r.is_empty() => r.to_string(),
            _ => { report.skipped_rows += 1; continue; }
        };

        let date = match parse_date_safe(row.date.as_deref()) {
            Some(d) => d,
            None => { report.skipped_rows += 1; continue; }
        };

        let counts = [
            parse_count_safe(row.new_cases.as_deref()),
            parse_count_safe(row.total_cases.as_deref()),
            parse_count_safe(row.total_deaths.as_deref()),
        ];
        if cfg.numeric_policy == NumericPolicy::SkipRow && counts.iter().any(|c| c.is_none()) {
            report.skipped_rows += 1;
            continue;
        }
        report.zero_filled_fields += counts.iter().filter(|c| c.is_none()).count();
        let [new_cases, total_cases, total_deaths] = counts.map(|c| c.unwrap_or(0));

        report.parsed_rows += 1;
        entries.push(CaseEntry {
            date,
            region,
            new_cases,
            total_cases,
            total_deaths,
        });
    }

    Ok((entries, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const HEADER: &str = "Date,Location ISO Code,Location,New Cases,New Deaths,New Recovered,New Active Cases,Total Cases,Total Deaths\n";

    fn parse(csv_text: &str) -> (Vec<CaseEntry>, LoadReport) {
        parse_reader(csv_text.as_bytes(), &Config::default()).unwrap()
    }

    #[test]
    fn parses_well_formed_rows() {
        let csv_text = format!(
            "{}{}{}",
            HEADER,
            "1/1/2020,ID-JK,Jakarta,10,1,0,9,100,5\n",
            "1/2/2020,ID-JK,Jakarta,5,0,0,5,150,8\n"
        );
        let (entries, report) = parse(&csv_text);
        assert_eq!(report.total_rows, 2);
        assert_eq!(report.parsed_rows, 2);
        assert_eq!(report.skipped_rows, 0);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].region, "Jakarta");
        assert_eq!(entries[0].date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert_eq!(entries[0].new_cases, 10);
        assert_eq!(entries[0].total_cases, 100);
        assert_eq!(entries[0].total_deaths, 5);
        assert_eq!(entries[1].total_cases, 150);
    }

    #[test]
    fn columns_are_found_by_header_name_not_position() {
        // Same fields, shuffled column order.
        let csv_text = "Location,Total Deaths,Date,Total Cases,New Cases\n\
                        Jakarta,5,1/1/2020,100,10\n";
        let (entries, report) = parse(csv_text);
        assert_eq!(report.parsed_rows, 1);
        assert_eq!(entries[0].region, "Jakarta");
        assert_eq!(entries[0].new_cases, 10);
        assert_eq!(entries[0].total_cases, 100);
        assert_eq!(entries[0].total_deaths, 5);
    }

    #[test]
    fn unparseable_date_skips_the_row() {
        let csv_text = format!(
            "{}{}{}",
            HEADER,
            "2020-01-01,ID-JK,Jakarta,10,1,0,9,100,5\n",
            "1/2/2020,ID-JK,Jakarta,5,0,0,5,150,8\n"
        );
        let (entries, report) = parse(&csv_text);
        assert_eq!(report.skipped_rows, 1);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].total_cases, 150);
    }

    #[test]
    fn short_and_regionless_rows_are_skipped() {
        let csv_text = format!(
            "{}{}{}{}",
            HEADER,
            "1/1/2020,ID-JK\n",
            "1/1/2020,ID-JK,,10,1,0,9,100,5\n",
            "1/2/2020,ID-JK,Jakarta,5,0,0,5,150,8\n"
        );
        let (entries, report) = parse(&csv_text);
        assert_eq!(report.total_rows, 3);
        assert_eq!(report.skipped_rows, 2);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].region, "Jakarta");
    }

    #[test]
    fn zero_fill_keeps_rows_with_bad_counts() {
        let csv_text = format!("{}{}", HEADER, "1/1/2020,ID-JK,Jakarta,n/a,1,0,9,,5\n");
        let (entries, report) = parse(&csv_text);
        assert_eq!(report.parsed_rows, 1);
        assert_eq!(report.zero_filled_fields, 2);
        assert_eq!(entries[0].new_cases, 0);
        assert_eq!(entries[0].total_cases, 0);
        assert_eq!(entries[0].total_deaths, 5);
    }

    #[test]
    fn skip_row_policy_drops_rows_with_bad_counts() {
        let cfg = Config {
            numeric_policy: NumericPolicy::SkipRow,
            ..Config::default()
        };
        let csv_text = format!(
            "{}{}{}",
            HEADER,
            "1/1/2020,ID-JK,Jakarta,n/a,1,0,9,100,5\n",
            "1/2/2020,ID-JK,Jakarta,5,0,0,5,150,8\n"
        );
        let (entries, report) = parse_reader(csv_text.as_bytes(), &cfg).unwrap();
        assert_eq!(report.skipped_rows, 1);
        assert_eq!(report.zero_filled_fields, 0);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].total_cases, 150);
    }

    #[test]
    fn rollup_rows_pass_through_untouched() {
        // The loader does not know about the rollup; the aggregator drops it.
        let csv_text = format!("{}{}", HEADER, "1/1/2020,IDN,Indonesia,10,1,0,9,100,5\n");
        let (entries, report) = parse(&csv_text);
        assert_eq!(report.parsed_rows, 1);
        assert_eq!(entries[0].region, "Indonesia");
    }
}
