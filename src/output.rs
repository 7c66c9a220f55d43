use crate::types::{RankedRow, RegionTotals};
use crate::util::format_int;
use rust_xlsxwriter::{Chart, ChartType, Format, Workbook};
use serde::Serialize;
use std::error::Error;
use tabled::{settings::Style, Table, Tabled};

/// The chart plots the first five ranked rows. The ranges are fixed; with
/// fewer regions the trailing categories are simply blank.
const CHART_ROWS: u32 = 5;

const SHEET: &str = "Sheet1";

/// Write the ranked regions to an `.xlsx` workbook: a header row, one data
/// row per region, and a column chart over the top five by total cases.
pub fn write_workbook(path: &str, ranked: &[RegionTotals]) -> Result<(), Box<dyn Error>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    for (col, title) in ["City", "Total Cases", "New Cases", "Total Deaths"]
        .iter()
        .enumerate()
    {
        worksheet.write_string_with_format(0, col as u16, *title, &bold)?;
    }
    for (i, totals) in ranked.iter().enumerate() {
        let row = i as u32 + 1;
        worksheet.write_string(row, 0, &totals.region)?;
        worksheet.write_number(row, 1, totals.total_cases as f64)?;
        worksheet.write_number(row, 2, totals.new_cases as f64)?;
        worksheet.write_number(row, 3, totals.total_deaths as f64)?;
    }

    let mut chart = Chart::new(ChartType::Column);
    chart
        .add_series()
        .set_name((SHEET, 0, 1))
        .set_categories((SHEET, 1, 0, CHART_ROWS, 0))
        .set_values((SHEET, 1, 1, CHART_ROWS, 1));
    chart.title().set_name("Top 5 Cities with Highest Total Cases");
    worksheet.insert_chart(4, 5, &chart)?;

    workbook.save(path)?;
    Ok(())
}

pub fn write_json<T: Serialize>(path: &str, value: &T) -> Result<(), Box<dyn Error>> {
    let s = serde_json::to_string_pretty(value)?;
    std::fs::write(path, s)?;
    Ok(())
}

/// Pre-format the ranked regions for the console preview, with
/// thousands-separated counts.
pub fn ranked_rows(ranked: &[RegionTotals]) -> Vec<RankedRow> {
    ranked
        .iter()
        .map(|r| RankedRow {
            city: r.region.clone(),
            total_cases: format_int(r.total_cases),
            new_cases: format_int(r.new_cases),
            total_deaths: format_int(r.total_deaths),
            first_seen: r.first_seen.format("%m/%d/%Y").to_string(),
            last_seen: r.last_seen.format("%m/%d/%Y").to_string(),
        })
        .collect()
}

pub fn preview_table_rows<T>(rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    let slice: Vec<T> = rows.iter().cloned().take(max_rows).collect();
    if slice.is_empty() {
        println!("(no rows)\n");
        return;
    }
    let table_str = Table::new(slice).with(Style::markdown()).to_string();
    println!("{}\n", table_str);
}
