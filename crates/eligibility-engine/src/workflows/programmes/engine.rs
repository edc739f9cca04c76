use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use super::domain::{
    Beneficiary, EligibilityCriteria, EligibilityVerdict, Programme, ProgrammeId,
    QuestionnaireResponses, Recommendation, Score,
};
use super::eligibility::CriteriaEvaluator;
use super::recommendation::recommend;
use super::scoring::{QuestionnaireScorer, ScoreBreakdown};
use super::selection::ProgrammeFilter;
use crate::config::EngineConfig;

/// Owns the criteria registry and the rubric, and exposes every decision
/// operation. Holds no per-call state, so one instance can be shared freely.
#[derive(Debug, Default)]
pub struct EligibilityEngine {
    evaluator: CriteriaEvaluator,
    scorer: QuestionnaireScorer,
}

impl EligibilityEngine {
    pub fn new(evaluator: CriteriaEvaluator, scorer: QuestionnaireScorer) -> Self {
        Self { evaluator, scorer }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        let evaluator = if config.extended_criteria {
            CriteriaEvaluator::extended()
        } else {
            CriteriaEvaluator::standard()
        };
        Self::new(evaluator, QuestionnaireScorer::default())
    }

    pub fn evaluator(&self) -> &CriteriaEvaluator {
        &self.evaluator
    }

    pub fn scorer(&self) -> &QuestionnaireScorer {
        &self.scorer
    }

    pub fn check_eligibility(
        &self,
        beneficiary: &Beneficiary,
        programme: &Programme,
        responses: Option<&QuestionnaireResponses>,
    ) -> EligibilityVerdict {
        self.evaluator.check(beneficiary, programme, responses)
    }

    pub fn calculate_score(
        &self,
        responses: &QuestionnaireResponses,
        criteria: Option<&EligibilityCriteria>,
    ) -> Score {
        self.scorer.calculate(responses, criteria)
    }

    pub fn recommend(&self, score: Score) -> Recommendation {
        recommend(score)
    }

    pub fn filter_eligible(
        &self,
        programmes: &[Programme],
        beneficiary: &Beneficiary,
        responses: Option<&QuestionnaireResponses>,
        today: NaiveDate,
    ) -> Vec<Programme> {
        ProgrammeFilter::new(&self.evaluator).filter_eligible(
            programmes,
            beneficiary,
            responses,
            today,
        )
    }

    /// Verdict, score, and recommendation for one beneficiary and programme.
    /// Missing responses score as an empty questionnaire.
    pub fn assess(
        &self,
        beneficiary: &Beneficiary,
        programme: &Programme,
        responses: Option<&QuestionnaireResponses>,
    ) -> ApplicationAssessment {
        let verdict = self.evaluator.check(beneficiary, programme, responses);
        let empty = QuestionnaireResponses::default();
        let breakdown = self.scorer.breakdown(responses.unwrap_or(&empty));
        let recommendation = recommend(breakdown.score);

        debug!(
            programme = %programme.id.0,
            eligible = verdict.is_eligible(),
            score = breakdown.score.value(),
            decision = recommendation.decision.label(),
            "application assessed"
        );

        ApplicationAssessment {
            programme_id: programme.id.clone(),
            verdict,
            score: breakdown.score,
            recommendation,
            breakdown,
        }
    }
}

/// Combined decision trail for a single application.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationAssessment {
    pub programme_id: ProgrammeId,
    pub verdict: EligibilityVerdict,
    pub score: Score,
    pub recommendation: Recommendation,
    pub breakdown: ScoreBreakdown,
}

impl ApplicationAssessment {
    pub fn summary(&self) -> String {
        let eligibility = if self.verdict.is_eligible() {
            "eligible".to_string()
        } else {
            format!("not eligible ({})", self.verdict.summary())
        };
        format!(
            "{eligibility}; score {}/100, {} ({})",
            self.score,
            self.recommendation.label,
            self.recommendation.decision.label()
        )
    }
}
