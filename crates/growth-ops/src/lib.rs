//! Domain library for the AIFORJR growth tooling.
//!
//! Two independent, pure components back the internal dashboards:
//!
//! - [`markets`] — the weighted market-prioritization scoring engine behind
//!   the `/data` dashboard (normalization, category scores, weighted ranking,
//!   TAM/SAM/SOM sizing).
//! - [`leads`] — the dual-format lead-text parser behind the `/wa` utility
//!   (tab-separated batch rows or a single concatenated string), plus the
//!   WhatsApp outreach message and deep-link builder.
//!
//! Both components are synchronous and deterministic: identical inputs always
//! produce identical outputs, so callers may recompute freely on every input
//! change. All I/O, rendering, and state live in the service crate.

pub mod config;
pub mod error;
pub mod leads;
pub mod markets;
pub mod telemetry;
