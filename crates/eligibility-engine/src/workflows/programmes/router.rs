use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::domain::{
    Beneficiary, EligibilityCriteria, EligibilityVerdict, Programme, QuestionnaireResponses,
    Recommendation, Score,
};
use super::engine::{ApplicationAssessment, EligibilityEngine};
use super::scoring::ScoreBreakdown;
use crate::error::AppError;

/// Router exposing the decision operations over JSON.
pub fn eligibility_router(engine: Arc<EligibilityEngine>) -> Router {
    Router::new()
        .route("/api/v1/eligibility/check", post(eligibility_handler))
        .route("/api/v1/questionnaire/score", post(score_handler))
        .route(
            "/api/v1/recommendations/:score",
            get(recommendation_handler),
        )
        .route("/api/v1/programmes/eligible", post(selection_handler))
        .route("/api/v1/assessments", post(assessment_handler))
        .with_state(engine)
}

fn lenient_responses(raw: Option<&Value>) -> Option<QuestionnaireResponses> {
    raw.filter(|value| !value.is_null())
        .map(QuestionnaireResponses::from_json)
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EligibilityRequest {
    pub beneficiary: Beneficiary,
    pub programme: Programme,
    #[serde(default)]
    pub responses: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub responses: Value,
    #[serde(default)]
    pub criteria: Option<EligibilityCriteria>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub score: Score,
    pub recommendation: Recommendation,
    pub breakdown: ScoreBreakdown,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProgrammeSelectionRequest {
    pub beneficiary: Beneficiary,
    pub programmes: Vec<Programme>,
    #[serde(default)]
    pub responses: Option<Value>,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct ProgrammeSelectionResponse {
    pub today: NaiveDate,
    pub programmes: Vec<Programme>,
}

pub(crate) async fn eligibility_handler(
    State(engine): State<Arc<EligibilityEngine>>,
    payload: Result<Json<EligibilityRequest>, JsonRejection>,
) -> Result<Json<EligibilityVerdict>, AppError> {
    let Json(request) = payload?;
    let responses = lenient_responses(request.responses.as_ref());
    Ok(Json(engine.check_eligibility(
        &request.beneficiary,
        &request.programme,
        responses.as_ref(),
    )))
}

pub(crate) async fn score_handler(
    State(engine): State<Arc<EligibilityEngine>>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreResponse>, AppError> {
    let Json(request) = payload?;
    let responses = QuestionnaireResponses::from_json(&request.responses);
    let breakdown = engine.scorer().breakdown(&responses);
    let score = breakdown.score;

    Ok(Json(ScoreResponse {
        score,
        recommendation: engine.recommend(score),
        breakdown,
    }))
}

pub(crate) async fn recommendation_handler(
    State(engine): State<Arc<EligibilityEngine>>,
    score: Result<Path<u32>, PathRejection>,
) -> Result<Json<Recommendation>, AppError> {
    let Path(score) = score?;
    Ok(Json(engine.recommend(Score::new(score))))
}

pub(crate) async fn selection_handler(
    State(engine): State<Arc<EligibilityEngine>>,
    payload: Result<Json<ProgrammeSelectionRequest>, JsonRejection>,
) -> Result<Json<ProgrammeSelectionResponse>, AppError> {
    let Json(request) = payload?;
    let today = request.today.unwrap_or_else(|| Local::now().date_naive());
    let responses = lenient_responses(request.responses.as_ref());
    let programmes = engine.filter_eligible(
        &request.programmes,
        &request.beneficiary,
        responses.as_ref(),
        today,
    );

    Ok(Json(ProgrammeSelectionResponse { today, programmes }))
}

pub(crate) async fn assessment_handler(
    State(engine): State<Arc<EligibilityEngine>>,
    payload: Result<Json<EligibilityRequest>, JsonRejection>,
) -> Result<Json<ApplicationAssessment>, AppError> {
    let Json(request) = payload?;
    let responses = lenient_responses(request.responses.as_ref());
    Ok(Json(engine.assess(
        &request.beneficiary,
        &request.programme,
        responses.as_ref(),
    )))
}
