//! HTTP API module for the liquidation engine.
//!
//! This module provides the REST endpoint that evaluates a case against
//! submitted pay stubs.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{LiquidationRequest, PayPeriodRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
