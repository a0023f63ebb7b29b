//! Request types for the liquidation API.
//!
//! This module defines the JSON request structures for the `/liquidation` endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::CaseConfig;
use crate::models::{BonusFields, MAX_AMOUNT, PayPeriodRecord};

/// Request body for the `/liquidation` endpoint.
///
/// The pay stubs are evaluated against the server's case configuration unless
/// the request carries its own `case`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiquidationRequest {
    /// The pay stubs to evaluate.
    pub pay_periods: Vec<PayPeriodRequest>,
    /// Overrides the configured evaluation date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation_date: Option<NaiveDate>,
    /// Replaces the server's case configuration for this request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case: Option<CaseConfig>,
}

/// One pay stub in a liquidation request.
///
/// Field names follow the payroll export columns. Amounts are whole pesos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPeriodRequest {
    /// First day covered by the pay stub.
    pub pay_period_starts: NaiveDate,
    /// Last day covered by the pay stub.
    pub pay_period_ends: NaiveDate,
    /// Base salary paid.
    #[serde(default)]
    pub base_salary: u64,
    /// Transport subsidy paid.
    #[serde(default)]
    pub aux_transp: u64,
    /// Sunday surcharge.
    #[serde(default)]
    pub sunday_bonus: u64,
    /// Holiday surcharge.
    #[serde(default)]
    pub holiday_bonus: u64,
    /// Night-shift surcharge.
    #[serde(default)]
    pub night_bonus: u64,
    /// Daytime overtime.
    #[serde(default)]
    pub day_overtime: u64,
    /// Night-time overtime.
    #[serde(default)]
    pub night_overtime: u64,
}

impl PayPeriodRequest {
    /// The first amount above [`MAX_AMOUNT`], by JSON field name.
    pub fn oversized_field(&self) -> Option<&'static str> {
        [
            ("base_salary", self.base_salary),
            ("aux_transp", self.aux_transp),
            ("sunday_bonus", self.sunday_bonus),
            ("holiday_bonus", self.holiday_bonus),
            ("night_bonus", self.night_bonus),
            ("day_overtime", self.day_overtime),
            ("night_overtime", self.night_overtime),
        ]
        .into_iter()
        .find(|(_, amount)| *amount > MAX_AMOUNT)
        .map(|(name, _)| name)
    }
}

impl From<PayPeriodRequest> for PayPeriodRecord {
    fn from(req: PayPeriodRequest) -> Self {
        PayPeriodRecord {
            period_start: req.pay_period_starts,
            period_end: req.pay_period_ends,
            base_salary: req.base_salary,
            aux_transport: req.aux_transp,
            bonuses: BonusFields {
                sunday: req.sunday_bonus,
                holiday: req.holiday_bonus,
                night: req.night_bonus,
                day_overtime: req.day_overtime,
                night_overtime: req.night_overtime,
            },
        }
    }
}
