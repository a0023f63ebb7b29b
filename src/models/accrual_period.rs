//! Benefit accrual periods and their payment status.

use serde::{Deserialize, Serialize};

use super::DateRange;

/// The statutory benefit an accrual period feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitKind {
    /// Semi-annual service bonus (prima de servicios).
    ServiceBonus,
    /// Annual severance (cesantías) plus its 12% interest.
    Severance,
    /// Paid vacation, 15 working days per year of service.
    Vacation,
}

/// Whether an entitlement has been paid.
///
/// This is a fact about the case, not something the engine computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Already disbursed to the employee.
    Paid,
    /// Still owed.
    Unpaid,
    /// Owed and past the statutory fund-deposit deadline with no deposit.
    UnpaidUndeposited,
}

impl PaymentStatus {
    /// Returns true if the amount still counts towards the claim.
    pub fn is_owed(&self) -> bool {
        !matches!(self, PaymentStatus::Paid)
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Paid => write!(f, "Paid"),
            PaymentStatus::Unpaid => write!(f, "Unpaid"),
            PaymentStatus::UnpaidUndeposited => write!(f, "Unpaid (not deposited)"),
        }
    }
}

/// A named date range over which one benefit accrues.
///
/// # Example
///
/// ```
/// use liquidacion_engine::models::{AccrualPeriod, BenefitKind, DateRange, PaymentStatus};
/// use chrono::NaiveDate;
///
/// let period = AccrualPeriod {
///     concept: "Prima 1st semester 2023".to_string(),
///     kind: BenefitKind::ServiceBonus,
///     range: DateRange::new(
///         NaiveDate::from_ymd_opt(2023, 4, 17).unwrap(),
///         NaiveDate::from_ymd_opt(2023, 6, 30).unwrap(),
///     ),
///     status: PaymentStatus::Paid,
///     interest_status: None,
/// };
/// assert_eq!(period.range.days(), 75);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualPeriod {
    /// Human-readable name of the entitlement.
    pub concept: String,
    /// Which benefit this period accrues.
    pub kind: BenefitKind,
    /// The accrual dates.
    #[serde(flatten)]
    pub range: DateRange,
    /// Payment status of the benefit itself.
    pub status: PaymentStatus,
    /// Payment status of the severance interest line; defaults to `status`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_status: Option<PaymentStatus>,
}

impl AccrualPeriod {
    /// Status to report for the severance interest derived from this period.
    pub fn effective_interest_status(&self) -> PaymentStatus {
        self.interest_status.unwrap_or(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_deserialize_flattened_range() {
        let yaml = r#"
concept: "Cesantías 2023"
kind: severance
start: 2023-04-17
end: 2023-12-31
status: unpaid_undeposited
interest_status: unpaid
"#;
        let period: AccrualPeriod = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(period.kind, BenefitKind::Severance);
        assert_eq!(
            period.range.start,
            NaiveDate::from_ymd_opt(2023, 4, 17).unwrap()
        );
        assert_eq!(period.range.days(), 259);
        assert_eq!(period.status, PaymentStatus::UnpaidUndeposited);
        assert_eq!(period.effective_interest_status(), PaymentStatus::Unpaid);
    }

    #[test]
    fn test_interest_status_defaults_to_status() {
        let yaml = r#"
concept: "Cesantías 2024"
kind: severance
start: 2024-01-01
end: 2024-02-17
status: unpaid
"#;
        let period: AccrualPeriod = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(period.interest_status, None);
        assert_eq!(period.effective_interest_status(), PaymentStatus::Unpaid);
    }

    #[test]
    fn test_only_paid_is_not_owed() {
        assert!(!PaymentStatus::Paid.is_owed());
        assert!(PaymentStatus::Unpaid.is_owed());
        assert!(PaymentStatus::UnpaidUndeposited.is_owed());
    }

    #[test]
    fn test_payment_status_serialization() {
        let json = serde_json::to_string(&PaymentStatus::UnpaidUndeposited).unwrap();
        assert_eq!(json, "\"unpaid_undeposited\"");
    }
}
