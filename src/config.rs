/// What to do with a numeric cell that does not parse as a non-negative
/// integer.
///
/// The dataset this tool was written for ships occasional blank cells, so the
/// default keeps the row and treats the field as zero. `SkipRow` drops the
/// whole row instead; either way the occurrences are counted and surfaced in
/// the load diagnostics, since the choice changes the aggregate sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericPolicy {
    ZeroFill,
    SkipRow,
}

/// Fixed run parameters. There are no CLI flags; the pipeline runs once per
/// invocation with these values.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: String,
    pub output_path: String,
    pub summary_path: String,
    /// Exact-match region name of the nationwide rollup rows, which would
    /// double-count every region if aggregated.
    pub rollup_region: String,
    pub numeric_policy: NumericPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_path: "covid_19_indonesia_time_series_all.csv".to_string(),
            output_path: "output.xlsx".to_string(),
            summary_path: "summary.json".to_string(),
            rollup_region: "Indonesia".to_string(),
            numeric_policy: NumericPolicy::ZeroFill,
        }
    }
}
