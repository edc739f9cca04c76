use chrono::{Local, NaiveDate};
use tracing::debug;

use super::domain::{Beneficiary, Programme, QuestionnaireResponses};
use super::eligibility::CriteriaEvaluator;

/// Gate that kept a programme out of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionGate {
    Status,
    Window,
    Criteria,
}

/// Selects the programmes a beneficiary may apply to.
#[derive(Debug, Clone, Copy)]
pub struct ProgrammeFilter<'e> {
    evaluator: &'e CriteriaEvaluator,
}

impl<'e> ProgrammeFilter<'e> {
    pub fn new(evaluator: &'e CriteriaEvaluator) -> Self {
        Self { evaluator }
    }

    /// First gate a programme fails on `today`, or `None` when it is selectable.
    /// Gates are checked in order status, window, criteria.
    pub fn exclusion(
        &self,
        programme: &Programme,
        beneficiary: &Beneficiary,
        responses: Option<&QuestionnaireResponses>,
        today: NaiveDate,
    ) -> Option<ExclusionGate> {
        if !programme.status.accepts_applications() {
            return Some(ExclusionGate::Status);
        }
        if !programme.is_running_on(today) {
            return Some(ExclusionGate::Window);
        }
        if !self
            .evaluator
            .check(beneficiary, programme, responses)
            .is_eligible()
        {
            return Some(ExclusionGate::Criteria);
        }
        None
    }

    /// Programmes that are accepting applications, running on `today`, and whose
    /// criteria the beneficiary meets, in input order. The input is left untouched.
    pub fn filter_eligible(
        &self,
        programmes: &[Programme],
        beneficiary: &Beneficiary,
        responses: Option<&QuestionnaireResponses>,
        today: NaiveDate,
    ) -> Vec<Programme> {
        programmes
            .iter()
            .filter(|programme| {
                match self.exclusion(programme, beneficiary, responses, today) {
                    Some(gate) => {
                        debug!(programme = %programme.id.0, ?gate, "programme excluded");
                        false
                    }
                    None => true,
                }
            })
            .cloned()
            .collect()
    }

    /// [`Self::filter_eligible`] evaluated against the local calendar date.
    pub fn filter_eligible_today(
        &self,
        programmes: &[Programme],
        beneficiary: &Beneficiary,
        responses: Option<&QuestionnaireResponses>,
    ) -> Vec<Programme> {
        self.filter_eligible(
            programmes,
            beneficiary,
            responses,
            Local::now().date_naive(),
        )
    }
}

/// Filter with the standard criteria.
pub fn filter_eligible(
    programmes: &[Programme],
    beneficiary: &Beneficiary,
    responses: Option<&QuestionnaireResponses>,
    today: NaiveDate,
) -> Vec<Programme> {
    let evaluator = CriteriaEvaluator::standard();
    ProgrammeFilter::new(&evaluator).filter_eligible(programmes, beneficiary, responses, today)
}
