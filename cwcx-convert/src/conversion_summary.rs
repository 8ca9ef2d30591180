use serde::Serialize;

use crate::model::ConfigModel;
use crate::normalize::{ConversionWarning, ParseOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    pub svis: usize,
    pub lags: usize,
    pub ports: usize,
    pub vlans: usize,
    pub unmapped: usize,
}

pub fn summarize(outcome: &ParseOutcome) -> ConversionSummary {
    summarize_model(&outcome.model, &outcome.warnings)
}

pub fn summarize_model(model: &ConfigModel, warnings: &[ConversionWarning]) -> ConversionSummary {
    ConversionSummary {
        svis: model.svis.len(),
        lags: model.lags.len(),
        ports: model.ports.len(),
        vlans: model.vlans.len(),
        unmapped: warnings
            .iter()
            .filter(|w| matches!(w, ConversionWarning::UnmappedPort { .. }))
            .count(),
    }
}

pub fn render(summary: ConversionSummary) -> String {
    format!(
        "convert_summary svis={} lags={} ports={} vlans={} unmapped={}",
        summary.svis, summary.lags, summary.ports, summary.vlans, summary.unmapped
    )
}
