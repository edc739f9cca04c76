mod criteria;

pub use criteria::{
    FormalisationCriterion, MinimumEmployeesCriterion, MinimumRevenueCriterion,
    MinimumScoreCriterion, RegionCriterion, RequiredGenderCriterion, SectorCriterion,
};

use super::domain::{Beneficiary, EligibilityVerdict, Programme, QuestionnaireResponses};

/// Inputs shared by every criterion handler.
#[derive(Debug, Clone, Copy)]
pub struct EligibilityContext<'a> {
    pub beneficiary: &'a Beneficiary,
    pub programme: &'a Programme,
    pub responses: Option<&'a QuestionnaireResponses>,
}

/// Result of a single criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriterionOutcome {
    /// The programme does not declare this restriction.
    NotApplicable,
    Satisfied,
    Failed(String),
}

/// Named, independently pluggable eligibility rule.
pub trait EligibilityCriterion: Send + Sync {
    fn name(&self) -> &'static str;
    fn evaluate(&self, context: &EligibilityContext<'_>) -> CriterionOutcome;
}

/// Registry of criterion handlers evaluated in registration order.
///
/// Every handler runs; the verdict lists each failure so applicants see all the
/// gaps at once.
pub struct CriteriaEvaluator {
    criteria: Vec<Box<dyn EligibilityCriterion>>,
}

impl CriteriaEvaluator {
    pub fn empty() -> Self {
        Self {
            criteria: Vec::new(),
        }
    }

    /// Region, sector, formalisation, employee count, revenue.
    pub fn standard() -> Self {
        Self::empty()
            .with_criterion(RegionCriterion)
            .with_criterion(SectorCriterion)
            .with_criterion(FormalisationCriterion)
            .with_criterion(MinimumEmployeesCriterion)
            .with_criterion(MinimumRevenueCriterion)
    }

    /// Standard rules followed by the minimum-score and required-gender handlers.
    pub fn extended() -> Self {
        Self::standard()
            .with_criterion(MinimumScoreCriterion::default())
            .with_criterion(RequiredGenderCriterion)
    }

    pub fn with_criterion(mut self, criterion: impl EligibilityCriterion + 'static) -> Self {
        self.criteria.push(Box::new(criterion));
        self
    }

    pub fn criterion_names(&self) -> Vec<&'static str> {
        self.criteria.iter().map(|criterion| criterion.name()).collect()
    }

    pub fn check(
        &self,
        beneficiary: &Beneficiary,
        programme: &Programme,
        responses: Option<&QuestionnaireResponses>,
    ) -> EligibilityVerdict {
        let context = EligibilityContext {
            beneficiary,
            programme,
            responses,
        };

        let failures = self
            .criteria
            .iter()
            .filter_map(|criterion| match criterion.evaluate(&context) {
                CriterionOutcome::Failed(reason) => {
                    tracing::trace!(
                        criterion = criterion.name(),
                        programme = %programme.id.0,
                        %reason,
                        "eligibility criterion failed"
                    );
                    Some(reason)
                }
                CriterionOutcome::Satisfied | CriterionOutcome::NotApplicable => None,
            })
            .collect();

        EligibilityVerdict::from_failures(failures)
    }
}

impl Default for CriteriaEvaluator {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for CriteriaEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CriteriaEvaluator")
            .field("criteria", &self.criterion_names())
            .finish()
    }
}

/// Check a beneficiary against a programme using the standard rule set.
pub fn check_eligibility(
    beneficiary: &Beneficiary,
    programme: &Programme,
    responses: Option<&QuestionnaireResponses>,
) -> EligibilityVerdict {
    CriteriaEvaluator::standard().check(beneficiary, programme, responses)
}
