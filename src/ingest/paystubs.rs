//! CSV pay-stub loader.
//!
//! Reads the payroll summary export into [`PayPeriodRecord`]s. Malformed data
//! is absorbed: numeric fields coerce to whole non-negative pesos and rows
//! with unparseable dates are excluded, each anomaly counted and reported as
//! an [`AuditWarning`]. Only an unreadable source is an error.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditWarning, BonusFields, MAX_AMOUNT, PayPeriodRecord};

/// Column holding the first day of the pay period.
pub const PERIOD_START_COLUMN: &str = "pay_period_starts";
/// Column holding the last day of the pay period.
pub const PERIOD_END_COLUMN: &str = "pay_period_ends";

const BASE_SALARY_COLUMN: &str = "base_salary";
const AUX_TRANSPORT_COLUMN: &str = "aux_transp";
const SUNDAY_COLUMN: &str = "sunday_bonus";
const HOLIDAY_COLUMN: &str = "holiday_bonus";
const NIGHT_COLUMN: &str = "night_bonus";
const DAY_OVERTIME_COLUMN: &str = "day_overtime";
const NIGHT_OVERTIME_COLUMN: &str = "night_overtime";

/// Every numeric column the loader reads.
pub const AMOUNT_COLUMNS: [&str; 7] = [
    BASE_SALARY_COLUMN,
    AUX_TRANSPORT_COLUMN,
    SUNDAY_COLUMN,
    HOLIDAY_COLUMN,
    NIGHT_COLUMN,
    DAY_OVERTIME_COLUMN,
    NIGHT_OVERTIME_COLUMN,
];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Rows listed by number in a warning before the rest are elided.
const MAX_LISTED_ROWS: usize = 10;

/// The outcome of loading a pay-stub source.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IngestOutcome {
    /// Records in source order.
    pub records: Vec<PayPeriodRecord>,
    /// Data rows read, excluding the header.
    pub rows_read: usize,
    /// Rows excluded for unparseable dates or malformed CSV.
    pub rows_skipped: usize,
    /// Numeric fields that were non-numeric, negative, fractional, or above
    /// [`MAX_AMOUNT`].
    pub coerced_fields: usize,
    /// Anomalies absorbed while loading.
    pub warnings: Vec<AuditWarning>,
}

/// Loads pay stubs from CSV.
///
/// # Example
///
/// ```
/// use liquidacion_engine::ingest::PaystubLoader;
///
/// let csv = "\
/// pay_period_starts,pay_period_ends,base_salary,aux_transp,sunday_bonus,holiday_bonus,night_bonus,day_overtime,night_overtime
/// 2023-04-16,2023-04-30,1050000,70303,,,,,
/// not a date,2023-05-15,1050000,70303,,,,,
/// ";
/// let outcome = PaystubLoader::from_reader(csv.as_bytes(), "inline").unwrap();
/// assert_eq!(outcome.records.len(), 1);
/// assert_eq!(outcome.rows_skipped, 1);
/// assert_eq!(outcome.records[0].base_salary, 1_050_000);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PaystubLoader;

impl PaystubLoader {
    /// Loads pay stubs from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SourceUnavailable`] if the file cannot be opened
    /// or its header row cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<IngestOutcome> {
        let path = path.as_ref();
        let source = path.display().to_string();

        let file = File::open(path).map_err(|e| EngineError::SourceUnavailable {
            path: source.clone(),
            message: e.to_string(),
        })?;

        Self::from_reader(BufReader::new(file), &source)
    }

    /// Loads pay stubs from any reader; `source` names it in errors and logs.
    pub fn from_reader<R: Read>(reader: R, source: &str) -> EngineResult<IngestOutcome> {
        let mut csv_reader = ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| EngineError::SourceUnavailable {
                path: source.to_string(),
                message: format!("unreadable header row: {}", e),
            })?
            .clone();
        let columns = ColumnIndex::new(&headers);

        let mut outcome = IngestOutcome::default();
        for column in columns.missing_amounts() {
            warn!(source, column, "Pay-stub column missing, values default to 0");
            outcome.warnings.push(AuditWarning::new(
                "MISSING_COLUMN",
                format!("Column '{}' is missing; every value defaults to 0", column),
                "medium",
            ));
        }
        for column in columns.missing_dates() {
            warn!(source, column, "Pay-stub date column missing, no row can be used");
            outcome.warnings.push(AuditWarning::new(
                "MISSING_DATE_COLUMN",
                format!("Column '{}' is missing; every row is excluded", column),
                "high",
            ));
        }

        let mut skipped_rows = Vec::new();
        let mut degenerate_rows = Vec::new();

        for (index, result) in csv_reader.records().enumerate() {
            // Header is line 1
            let line = index + 2;
            outcome.rows_read += 1;

            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    warn!(source, line, error = %e, "Malformed pay-stub row skipped");
                    skipped_rows.push(line);
                    continue;
                }
            };

            let dates = (
                columns.get(&record, PERIOD_START_COLUMN).and_then(parse_date),
                columns.get(&record, PERIOD_END_COLUMN).and_then(parse_date),
            );
            let (period_start, period_end) = match dates {
                (Some(start), Some(end)) => (start, end),
                _ => {
                    skipped_rows.push(line);
                    continue;
                }
            };

            let mut amount = |column: &str| {
                let coerced = coerce_amount(columns.get(&record, column).unwrap_or(""));
                if coerced.changed {
                    outcome.coerced_fields += 1;
                }
                coerced.value
            };

            let parsed = PayPeriodRecord {
                period_start,
                period_end,
                base_salary: amount(BASE_SALARY_COLUMN),
                aux_transport: amount(AUX_TRANSPORT_COLUMN),
                bonuses: BonusFields {
                    sunday: amount(SUNDAY_COLUMN),
                    holiday: amount(HOLIDAY_COLUMN),
                    night: amount(NIGHT_COLUMN),
                    day_overtime: amount(DAY_OVERTIME_COLUMN),
                    night_overtime: amount(NIGHT_OVERTIME_COLUMN),
                },
            };

            if parsed.days() == 0 {
                degenerate_rows.push(line);
            }
            outcome.records.push(parsed);
        }

        outcome.rows_skipped = skipped_rows.len();

        if !skipped_rows.is_empty() {
            warn!(source, rows = skipped_rows.len(), "Pay-stub rows excluded");
            outcome.warnings.push(AuditWarning::new(
                "ROWS_SKIPPED",
                format!(
                    "{} rows excluded for unparseable dates or malformed CSV (lines {})",
                    skipped_rows.len(),
                    list_lines(&skipped_rows)
                ),
                "medium",
            ));
        }
        if outcome.coerced_fields > 0 {
            warn!(source, fields = outcome.coerced_fields, "Pay-stub fields coerced");
            outcome.warnings.push(AuditWarning::new(
                "FIELDS_COERCED",
                format!(
                    "{} numeric fields were non-numeric, negative or fractional and were coerced",
                    outcome.coerced_fields
                ),
                "low",
            ));
        }
        if !degenerate_rows.is_empty() {
            outcome.warnings.push(AuditWarning::new(
                "DEGENERATE_PAY_PERIOD",
                format!(
                    "{} pay periods end before they start and contribute nothing (lines {})",
                    degenerate_rows.len(),
                    list_lines(&degenerate_rows)
                ),
                "low",
            ));
        }

        info!(
            source,
            rows_read = outcome.rows_read,
            records = outcome.records.len(),
            rows_skipped = outcome.rows_skipped,
            coerced_fields = outcome.coerced_fields,
            "Loaded pay stubs"
        );

        Ok(outcome)
    }
}

/// Header name to column position.
struct ColumnIndex(HashMap<String, usize>);

impl ColumnIndex {
    fn new(headers: &StringRecord) -> Self {
        Self(
            headers
                .iter()
                .enumerate()
                .map(|(position, name)| (name.trim().to_lowercase(), position))
                .collect(),
        )
    }

    fn get<'r>(&self, record: &'r StringRecord, column: &str) -> Option<&'r str> {
        self.0.get(column).and_then(|&position| record.get(position))
    }

    fn missing_amounts(&self) -> impl Iterator<Item = &'static str> + '_ {
        AMOUNT_COLUMNS
            .into_iter()
            .filter(|column| !self.0.contains_key(*column))
    }

    fn missing_dates(&self) -> impl Iterator<Item = &'static str> + '_ {
        [PERIOD_START_COLUMN, PERIOD_END_COLUMN]
            .into_iter()
            .filter(|column| !self.0.contains_key(*column))
    }
}

fn list_lines(lines: &[usize]) -> String {
    let mut listed: Vec<String> = lines
        .iter()
        .take(MAX_LISTED_ROWS)
        .map(|line| line.to_string())
        .collect();
    if lines.len() > MAX_LISTED_ROWS {
        listed.push("...".to_string());
    }
    listed.join(", ")
}

/// Parses the date formats seen in payroll exports.
///
/// Slash dates with the year last are month-first.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .or_else(|| {
            raw.get(..19)
                .and_then(|prefix| NaiveDateTime::parse_from_str(prefix, "%Y-%m-%dT%H:%M:%S").ok())
                .map(|datetime| datetime.date())
        })
}

/// A numeric field after coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Coerced {
    value: u64,
    /// Set when the source value was not a whole non-negative number.
    changed: bool,
}

/// Coerces a raw field to whole non-negative pesos.
///
/// Thousands separators are stripped, fractions truncated, and negative,
/// non-numeric or out-of-range (above [`MAX_AMOUNT`]) values become 0. An
/// empty field is 0 without counting as coerced.
fn coerce_amount(raw: &str) -> Coerced {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Coerced {
            value: 0,
            changed: false,
        };
    }

    match Decimal::from_str(&cleaned) {
        Ok(amount) if amount.is_sign_negative() && !amount.is_zero() => Coerced {
            value: 0,
            changed: true,
        },
        Ok(amount) => {
            let whole = amount.trunc();
            match whole.to_u64() {
                Some(value) if value <= MAX_AMOUNT => Coerced {
                    value,
                    changed: whole != amount,
                },
                _ => Coerced {
                    value: 0,
                    changed: true,
                },
            }
        }
        Err(_) => Coerced {
            value: 0,
            changed: true,
        },
    }
}
