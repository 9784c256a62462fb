//! Result report formatting
//!
//! Renders an estimation result the way the results view shows it:
//! headline percentage, grouped head count, a capped bar and an echo of the
//! criteria that produced it.

use crate::domain::criteria::Categorical;
use crate::domain::result::EstimationResult;
use std::fmt;

/// Number of cells in the text bar
pub const DEFAULT_BAR_CELLS: usize = 40;

/// Display wrapper around one result
#[derive(Clone, Copy, Debug)]
pub struct ResultReport<'a> {
    result: &'a EstimationResult,
    bar_cells: usize,
}

impl<'a> ResultReport<'a> {
    pub fn new(result: &'a EstimationResult) -> Self {
        Self {
            result,
            bar_cells: DEFAULT_BAR_CELLS,
        }
    }

    /// Set the text bar length
    pub fn with_bar_cells(mut self, cells: usize) -> Self {
        self.bar_cells = cells;
        self
    }

    /// Percentage with two decimals, e.g. "7.52%"
    pub fn percentage_text(&self) -> String {
        format!("{:.2}%", self.result.percentage)
    }

    /// Head count with thousands separators, e.g. "51,445"
    pub fn count_text(&self) -> String {
        group_thousands(self.result.count as i64)
    }

    /// Text bar filled in proportion to the percentage, capped at full
    pub fn bar(&self) -> String {
        let filled = ((self.result.bar_width() / 100.0) * self.bar_cells as f64).round() as usize;
        let filled = filled.min(self.bar_cells);
        format!(
            "[{}{}]",
            "#".repeat(filled),
            "-".repeat(self.bar_cells - filled)
        )
    }

    /// Label/value rows echoing the criteria used
    pub fn summary_rows(&self) -> Vec<(&'static str, String)> {
        let c = &self.result.criteria;
        vec![
            ("Age Range", format!("{} - {} years", c.min_age, c.max_age)),
            (
                "Height Range",
                format!("{} - {} cm", c.min_height, c.max_height),
            ),
            ("Religion", capitalize(c.religion.code())),
            (
                "Min Salary",
                format!("€{}", group_thousands(c.min_salary as i64)),
            ),
            ("Body Type", capitalize(c.body_type.code())),
            ("Education", capitalize(c.education.code())),
            ("Smoking Status", capitalize(c.smoking_status.code())),
            ("Marital Status", capitalize(c.marital_status.code())),
        ]
    }
}

impl fmt::Display for ResultReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Your Reality Check (based on Cyprus demographics)")?;
        writeln!(f)?;
        writeln!(f, "  {}", self.percentage_text())?;
        writeln!(f, "  Chance of finding your ideal match")?;
        writeln!(
            f,
            "  Approximately {} men in Cyprus match your criteria",
            self.count_text()
        )?;
        writeln!(f, "  {}", self.bar())?;
        writeln!(f)?;
        writeln!(f, "Your Criteria Summary")?;
        for (label, value) in self.summary_rows() {
            writeln!(f, "  {:<15} {}", format!("{}:", label), value)?;
        }
        Ok(())
    }
}

/// Format an integer with comma thousands separators
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Uppercase the first character, e.g. "orthodox" -> "Orthodox"
pub fn capitalize(code: &str) -> String {
    let mut chars = code.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
