//! Leave and on-duty leave status handling for the campus ERP.
//!
//! The heart of the crate is [`leave::status`], which turns the free-text status and approver
//! metadata returned by the ERP backend into one of four lifecycle states under the two-tier
//! HOD/Principal approval policy. Everything else (payload ingestion, filters, statistics, CSV
//! export, the HTTP router) consumes that classification.

pub mod config;
pub mod error;
pub mod leave;
pub mod telemetry;
