//! Programme eligibility, questionnaire scoring, and recommendations.
//!
//! Every operation here is a pure function of its inputs. Structural criteria run
//! through [`CriteriaEvaluator`], questionnaire answers through
//! [`QuestionnaireScorer`], scores through [`recommend`], and programme lists
//! through [`ProgrammeFilter`]. [`EligibilityEngine`] bundles them for services.

pub mod domain;
pub mod eligibility;
pub mod engine;
pub mod recommendation;
pub mod router;
pub mod scoring;
pub mod selection;

#[cfg(test)]
mod tests;

pub use domain::{
    Answer, Beneficiary, EligibilityCriteria, EligibilityVerdict, Gender, Programme, ProgrammeId,
    ProgrammeStatus, QuestionnaireResponses, Recommendation, RecommendationDecision, Score,
};
pub use eligibility::{
    check_eligibility, CriteriaEvaluator, CriterionOutcome, EligibilityContext,
    EligibilityCriterion,
};
pub use engine::{ApplicationAssessment, EligibilityEngine};
pub use recommendation::recommend;
pub use router::eligibility_router;
pub use scoring::{
    calculate_score, QuestionnaireScorer, Rubric, RubricCategory, RubricError, ScoreBreakdown,
};
pub use selection::{filter_eligible, ExclusionGate, ProgrammeFilter};
