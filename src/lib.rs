//! Liquidation engine for Colombian labor-law settlements
//!
//! This crate apportions pay-stub earnings across benefit accrual periods,
//! computes the statutory benefits (prima, cesantías and their interest,
//! vacation) and the indemnities owed on termination, and assembles the
//! resulting claim into an auditable report.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod report;
