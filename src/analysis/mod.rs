// src/analysis/mod.rs
pub mod ratios;

pub use ratios::{PeriodSummary, ReportRow};
