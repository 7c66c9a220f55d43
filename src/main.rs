// Entry point and high-level flow.
//
// The pipeline runs once per invocation:
// - load and parse the CSV, printing load diagnostics,
// - fold the rows into per-region totals,
// - rank regions by cumulative case count,
// - write the spreadsheet report, then a JSON run summary.
//
// Any I/O failure prints a message and ends the run early; row-level problems
// only show up as counts in the diagnostics.
mod aggregate;
mod config;
mod loader;
mod output;
mod types;
mod util;

use aggregate::Aggregator;
use config::Config;
use types::RunSummary;
use util::format_int;

fn main() {
    let cfg = Config::default();

    let (entries, report) = match loader::load_and_parse(&cfg) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Failed to load {}: {}", cfg.input_path, e);
            return;
        }
    };
    println!(
        "Processing dataset... ({} rows read, {} parsed)",
        format_int(report.total_rows as i64),
        format_int(report.parsed_rows as i64)
    );
    if report.skipped_rows > 0 {
        println!(
            "Note: {} rows skipped due to parse errors.",
            format_int(report.skipped_rows as i64)
        );
    }
    if report.zero_filled_fields > 0 {
        println!(
            "Note: {} numeric fields defaulted to zero.",
            format_int(report.zero_filled_fields as i64)
        );
    }

    let mut aggregator = Aggregator::new(&cfg.rollup_region);
    for entry in &entries {
        aggregator.ingest(entry);
    }
    let rollup_rows = aggregator.rollup_rows();
    let regions = aggregator.region_count();
    let ranked = aggregator.into_ranked();

    println!(
        "Aggregated {} regions ({} nationwide rollup rows excluded).\n",
        format_int(regions as i64),
        format_int(rollup_rows as i64)
    );

    println!("Top Regions by Total Cases\n");
    output::preview_table_rows(&output::ranked_rows(&ranked), 5);

    if let Err(e) = output::write_workbook(&cfg.output_path, &ranked) {
        eprintln!("Failed to write {}: {}", cfg.output_path, e);
        return;
    }
    println!("Report exported to {}", cfg.output_path);

    let summary = RunSummary {
        total_rows: report.total_rows,
        parsed_rows: report.parsed_rows,
        skipped_rows: report.skipped_rows,
        zero_filled_fields: report.zero_filled_fields,
        rollup_rows,
        regions,
        first_seen: ranked.iter().map(|r| r.first_seen).min(),
        last_seen: ranked.iter().map(|r| r.last_seen).max(),
    };
    if let Err(e) = output::write_json(&cfg.summary_path, &summary) {
        eprintln!("Failed to write {}: {}", cfg.summary_path, e);
        return;
    }
    println!("Run summary exported to {}", cfg.summary_path);
}
