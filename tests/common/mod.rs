//! Shared helpers for integration tests.

use slot_estimator::config::SiteConfig;
use slot_estimator::report::EstimateReport;

/// Builds the office-preset site used across integration tests.
pub fn office_site() -> SiteConfig {
    SiteConfig::office()
}

/// Builds a full report from a site config.
pub fn report_for(site: &SiteConfig) -> EstimateReport {
    EstimateReport::from_inputs(&site.slot_configs(), &site.power_kw(), &site.hours())
        .expect("preset inputs are well-formed")
}
