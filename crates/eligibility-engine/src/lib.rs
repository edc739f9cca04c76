//! Eligibility and scoring rules for entrepreneurship-support programmes.
//!
//! The decision core lives in [`workflows::programmes`]; `config`, `telemetry`, and
//! `error` carry the ambient concerns shared with the API service.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
