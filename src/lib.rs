//! Periscope - Passive Web Reconnaissance Scanner
//!
//! Crawls a target site's reachable attack surface (pages, forms, script
//! sources), probes the live responses for missing hardening headers, CORS
//! misconfiguration and exposed sensitive files, and renders the findings
//! as a severity-ranked, client-readable report.

pub mod advisor;
pub mod config;
pub mod crawler;
pub mod error;
pub mod http;
pub mod models;
pub mod report;
pub mod scanner;
