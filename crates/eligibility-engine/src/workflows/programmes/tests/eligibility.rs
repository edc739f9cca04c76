use super::common::*;
use crate::workflows::programmes::domain::{EligibilityVerdict, Gender};
use crate::workflows::programmes::eligibility::{
    check_eligibility, CriteriaEvaluator, CriterionOutcome, EligibilityContext,
    EligibilityCriterion,
};

#[test]
fn region_outside_targets_is_reported() {
    let mut programme = unrestricted_programme("region");
    programme.target_regions = vec!["Thiès".to_string()];

    let verdict = check_eligibility(&beneficiary(), &programme, None);

    assert!(!verdict.is_eligible());
    assert_eq!(verdict.reasons(), ["Region not eligible"]);
}

#[test]
fn ninea_alone_satisfies_formalisation() {
    let mut programme = unrestricted_programme("formal");
    programme.criteria.formalisation_required = true;
    let mut candidate = beneficiary();
    candidate.ninea = Some("123".to_string());
    candidate.rccm = Some(String::new());

    let verdict = check_eligibility(&candidate, &programme, None);

    assert!(verdict.is_eligible());
    assert_eq!(verdict.reasons(), [EligibilityVerdict::ELIGIBLE_REASON]);
}

#[test]
fn blank_identifiers_do_not_count_as_formalised() {
    let mut programme = unrestricted_programme("formal-blank");
    programme.criteria.formalisation_required = true;
    let mut candidate = beneficiary();
    candidate.ninea = Some("   ".to_string());
    candidate.rccm = None;

    let verdict = check_eligibility(&candidate, &programme, None);

    assert_eq!(verdict.reasons(), ["Formalization required (NINEA or RCCM)"]);
}

#[test]
fn programme_without_restrictions_accepts_anyone() {
    let programme = unrestricted_programme("open-to-all");
    let candidate = crate::workflows::programmes::domain::Beneficiary {
        region_id: "Kédougou".to_string(),
        sector: "Fishing".to_string(),
        ninea: None,
        rccm: None,
        employee_count: 0,
        revenue: 0.0,
        gender: None,
    };

    let verdict = check_eligibility(&candidate, &programme, None);

    assert!(verdict.is_eligible());
    assert_eq!(verdict.reasons(), ["Eligible"]);
}

#[test]
fn every_failed_criterion_is_reported_in_order() {
    let programme = restricted_programme("strict");
    let candidate = crate::workflows::programmes::domain::Beneficiary {
        region_id: "Ziguinchor".to_string(),
        sector: "Textile".to_string(),
        ninea: None,
        rccm: Some(String::new()),
        employee_count: 2,
        revenue: 1_500_000.0,
        gender: None,
    };

    let verdict = check_eligibility(&candidate, &programme, None);

    assert!(!verdict.is_eligible());
    assert_eq!(
        verdict.reasons(),
        [
            "Region not eligible",
            "Activity sector not eligible",
            "Formalization required (NINEA or RCCM)",
            "Insufficient employee count (minimum: 5)",
            "Insufficient revenue",
        ]
    );
}

#[test]
fn thresholds_are_inclusive() {
    let programme = restricted_programme("edge");
    let mut candidate = beneficiary();
    candidate.employee_count = 5;
    candidate.revenue = 10_000_000.0;

    assert!(check_eligibility(&candidate, &programme, None).is_eligible());

    candidate.employee_count = 4;
    let verdict = check_eligibility(&candidate, &programme, None);
    assert_eq!(verdict.reasons(), ["Insufficient employee count (minimum: 5)"]);
}

#[test]
fn declared_but_unwired_criteria_do_not_gate_by_default() {
    let mut programme = unrestricted_programme("declared");
    programme.criteria.minimum_score = Some(90);
    programme.criteria.required_gender = Some(Gender::Female);

    let verdict = check_eligibility(&beneficiary(), &programme, Some(&partial_responses()));

    assert!(verdict.is_eligible());
}

#[test]
fn extended_evaluator_applies_score_and_gender_criteria() {
    let mut programme = unrestricted_programme("extended");
    programme.criteria.minimum_score = Some(50);
    programme.criteria.required_gender = Some(Gender::Female);
    let evaluator = CriteriaEvaluator::extended();

    let verdict = evaluator.check(&beneficiary(), &programme, Some(&partial_responses()));
    assert_eq!(
        verdict.reasons(),
        [
            "Insufficient questionnaire score (minimum: 50)",
            "Gender requirement not met",
        ]
    );

    let mut candidate = beneficiary();
    candidate.gender = Some(Gender::Female);
    let verdict = evaluator.check(&candidate, &programme, Some(&complete_responses()));
    assert!(verdict.is_eligible());
}

#[test]
fn minimum_score_is_not_applicable_without_responses() {
    let mut programme = unrestricted_programme("no-answers");
    programme.criteria.minimum_score = Some(50);

    let verdict = CriteriaEvaluator::extended().check(&beneficiary(), &programme, None);

    assert!(verdict.is_eligible());
}

struct ClosedSectorCriterion;

impl EligibilityCriterion for ClosedSectorCriterion {
    fn name(&self) -> &'static str {
        "closed_sector"
    }

    fn evaluate(&self, context: &EligibilityContext<'_>) -> CriterionOutcome {
        if context.beneficiary.sector == "Mining" {
            CriterionOutcome::Failed("Sector closed to new applicants".to_string())
        } else {
            CriterionOutcome::Satisfied
        }
    }
}

#[test]
fn custom_criteria_plug_in_after_the_standard_rules() {
    let evaluator = CriteriaEvaluator::standard().with_criterion(ClosedSectorCriterion);
    let mut programme = unrestricted_programme("custom");
    programme.target_regions = vec!["Thiès".to_string()];
    let mut candidate = beneficiary();
    candidate.sector = "Mining".to_string();

    let verdict = evaluator.check(&candidate, &programme, None);

    assert_eq!(
        evaluator.criterion_names(),
        vec![
            "region",
            "sector",
            "formalisation",
            "minimum_employees",
            "minimum_revenue",
            "closed_sector",
        ]
    );
    assert_eq!(
        verdict.reasons(),
        ["Region not eligible", "Sector closed to new applicants"]
    );
}

#[test]
fn eligible_flag_and_reasons_stay_consistent() {
    let programmes = [
        unrestricted_programme("a"),
        restricted_programme("b"),
        {
            let mut programme = restricted_programme("c");
            programme.target_regions = vec!["Louga".to_string()];
            programme
        },
    ];

    for programme in &programmes {
        let verdict = check_eligibility(&beneficiary(), programme, None);
        let only_eligible = verdict.reasons() == [EligibilityVerdict::ELIGIBLE_REASON];
        assert_eq!(verdict.is_eligible(), only_eligible);
        assert!(!verdict.reasons().is_empty());
    }
}
