//! Pricing and validation engine for WanderWise trip requests.
//!
//! Everything here is pure computation: quotes, booking windows, form
//! validation, and the submission lifecycle of a trip request up to the
//! hand-off to the host application's booking store. Persistence, rendering,
//! and auth live in the host, not in this crate.

pub mod models;
pub mod services;
