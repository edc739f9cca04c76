use chrono::NaiveDate;
use eligibility_engine::error::AppError;
use eligibility_engine::workflows::programmes::{
    Beneficiary, Programme, QuestionnaireResponses,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// File payload accepted by the `assess` command.
#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentInput {
    pub(crate) beneficiary: Beneficiary,
    pub(crate) programmes: Vec<Programme>,
    #[serde(default)]
    pub(crate) responses: Option<Value>,
}

impl AssessmentInput {
    pub(crate) fn from_path(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub(crate) fn from_json(raw: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub(crate) fn responses(&self) -> Option<QuestionnaireResponses> {
        self.responses
            .as_ref()
            .filter(|value| !value.is_null())
            .map(QuestionnaireResponses::from_json)
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
