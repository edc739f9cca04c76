use super::common::*;
use crate::config::EngineConfig;
use crate::workflows::programmes::domain::{Gender, RecommendationDecision};
use crate::workflows::programmes::engine::EligibilityEngine;

#[test]
fn assessment_combines_verdict_score_and_recommendation() {
    let engine = EligibilityEngine::default();
    let programme = restricted_programme("assess");

    let assessment = engine.assess(&beneficiary(), &programme, Some(&complete_responses()));

    assert_eq!(assessment.programme_id, programme.id);
    assert!(assessment.verdict.is_eligible());
    assert_eq!(assessment.score.value(), 100);
    assert_eq!(assessment.breakdown.score, assessment.score);
    assert_eq!(
        assessment.recommendation.decision,
        RecommendationDecision::Accepted
    );
    assert!(assessment.summary().starts_with("eligible; score 100/100"));
}

#[test]
fn assessment_without_responses_scores_zero() {
    let engine = EligibilityEngine::default();
    let mut programme = unrestricted_programme("no-answers");
    programme.target_regions = vec!["Thiès".to_string()];

    let assessment = engine.assess(&beneficiary(), &programme, None);

    assert!(!assessment.verdict.is_eligible());
    assert_eq!(assessment.score.value(), 0);
    assert_eq!(
        assessment.recommendation.decision,
        RecommendationDecision::Rejected
    );
    assert!(assessment.summary().contains("Region not eligible"));
}

#[test]
fn configuration_selects_the_extended_rule_set() {
    let standard = EligibilityEngine::from_config(&EngineConfig::default());
    let extended = EligibilityEngine::from_config(&EngineConfig {
        extended_criteria: true,
    });
    let mut programme = unrestricted_programme("gendered");
    programme.criteria.required_gender = Some(Gender::Male);

    assert_eq!(standard.evaluator().criterion_names().len(), 5);
    assert_eq!(extended.evaluator().criterion_names().len(), 7);
    assert!(standard
        .check_eligibility(&beneficiary(), &programme, None)
        .is_eligible());
    assert_eq!(
        extended
            .check_eligibility(&beneficiary(), &programme, None)
            .reasons(),
        ["Gender requirement not met"]
    );
}

#[test]
fn engine_filter_uses_its_own_rule_set() {
    let engine = EligibilityEngine::from_config(&EngineConfig {
        extended_criteria: true,
    });
    let mut gated = unrestricted_programme("score-gated");
    gated.criteria.minimum_score = Some(60);
    let programmes = vec![gated, unrestricted_programme("open")];

    let with_weak_answers =
        engine.filter_eligible(&programmes, &beneficiary(), Some(&partial_responses()), today());
    let with_strong_answers = engine.filter_eligible(
        &programmes,
        &beneficiary(),
        Some(&complete_responses()),
        today(),
    );

    assert_eq!(with_weak_answers.len(), 1);
    assert_eq!(with_weak_answers[0].id.0, "open");
    assert_eq!(with_strong_answers.len(), 2);
}
