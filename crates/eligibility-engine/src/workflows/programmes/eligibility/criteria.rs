use super::super::domain::EligibilityCriteria;
use super::super::scoring::QuestionnaireScorer;
use super::{CriterionOutcome, EligibilityContext, EligibilityCriterion};

fn failed_when(failed: bool, reason: impl FnOnce() -> String) -> CriterionOutcome {
    if failed {
        CriterionOutcome::Failed(reason())
    } else {
        CriterionOutcome::Satisfied
    }
}

fn criteria<'a>(context: &EligibilityContext<'a>) -> &'a EligibilityCriteria {
    &context.programme.criteria
}

/// Beneficiary region must be one of the programme's target regions.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionCriterion;

impl EligibilityCriterion for RegionCriterion {
    fn name(&self) -> &'static str {
        "region"
    }

    fn evaluate(&self, context: &EligibilityContext<'_>) -> CriterionOutcome {
        let targets = &context.programme.target_regions;
        if targets.is_empty() {
            return CriterionOutcome::NotApplicable;
        }

        let region = &context.beneficiary.region_id;
        failed_when(!targets.iter().any(|target| target == region), || {
            "Region not eligible".to_string()
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SectorCriterion;

impl EligibilityCriterion for SectorCriterion {
    fn name(&self) -> &'static str {
        "sector"
    }

    fn evaluate(&self, context: &EligibilityContext<'_>) -> CriterionOutcome {
        let sectors = &criteria(context).sectors;
        if sectors.is_empty() {
            return CriterionOutcome::NotApplicable;
        }

        let sector = &context.beneficiary.sector;
        failed_when(!sectors.iter().any(|allowed| allowed == sector), || {
            "Activity sector not eligible".to_string()
        })
    }
}

/// Either a NINEA or an RCCM number satisfies the requirement.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormalisationCriterion;

impl EligibilityCriterion for FormalisationCriterion {
    fn name(&self) -> &'static str {
        "formalisation"
    }

    fn evaluate(&self, context: &EligibilityContext<'_>) -> CriterionOutcome {
        if !criteria(context).formalisation_required {
            return CriterionOutcome::NotApplicable;
        }

        failed_when(!context.beneficiary.is_formalised(), || {
            "Formalization required (NINEA or RCCM)".to_string()
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MinimumEmployeesCriterion;

impl EligibilityCriterion for MinimumEmployeesCriterion {
    fn name(&self) -> &'static str {
        "minimum_employees"
    }

    fn evaluate(&self, context: &EligibilityContext<'_>) -> CriterionOutcome {
        let Some(minimum) = criteria(context).minimum_employees else {
            return CriterionOutcome::NotApplicable;
        };

        failed_when(context.beneficiary.employee_count < minimum, || {
            format!("Insufficient employee count (minimum: {minimum})")
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MinimumRevenueCriterion;

impl EligibilityCriterion for MinimumRevenueCriterion {
    fn name(&self) -> &'static str {
        "minimum_revenue"
    }

    fn evaluate(&self, context: &EligibilityContext<'_>) -> CriterionOutcome {
        let Some(minimum) = criteria(context).minimum_revenue else {
            return CriterionOutcome::NotApplicable;
        };

        failed_when(context.beneficiary.revenue < minimum, || {
            "Insufficient revenue".to_string()
        })
    }
}

/// Gates on the questionnaire score when the programme declares a minimum and
/// responses are supplied. Not part of the standard rule set.
#[derive(Debug, Default)]
pub struct MinimumScoreCriterion {
    scorer: QuestionnaireScorer,
}

impl MinimumScoreCriterion {
    pub fn with_scorer(scorer: QuestionnaireScorer) -> Self {
        Self { scorer }
    }
}

impl EligibilityCriterion for MinimumScoreCriterion {
    fn name(&self) -> &'static str {
        "minimum_score"
    }

    fn evaluate(&self, context: &EligibilityContext<'_>) -> CriterionOutcome {
        let (Some(minimum), Some(responses)) = (criteria(context).minimum_score, context.responses)
        else {
            return CriterionOutcome::NotApplicable;
        };

        let score = self.scorer.score(responses);
        failed_when(score.value() < minimum, || {
            format!("Insufficient questionnaire score (minimum: {minimum})")
        })
    }
}

/// Requires the beneficiary's declared gender to match. Not part of the standard
/// rule set.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredGenderCriterion;

impl EligibilityCriterion for RequiredGenderCriterion {
    fn name(&self) -> &'static str {
        "required_gender"
    }

    fn evaluate(&self, context: &EligibilityContext<'_>) -> CriterionOutcome {
        let Some(required) = criteria(context).required_gender else {
            return CriterionOutcome::NotApplicable;
        };

        failed_when(context.beneficiary.gender != Some(required), || {
            "Gender requirement not met".to_string()
        })
    }
}
