use chrono::NaiveDate;
use eligibility_engine::workflows::programmes::{
    calculate_score, check_eligibility, filter_eligible, recommend, Beneficiary,
    EligibilityCriteria, EligibilityEngine, Programme, ProgrammeId, ProgrammeStatus,
    QuestionnaireResponses, RecommendationDecision,
};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn catalogue() -> Vec<Programme> {
    let programme = |id: &str, status: ProgrammeStatus| Programme {
        id: ProgrammeId(id.to_string()),
        name: id.replace('-', " "),
        status,
        start_date: day(2025, 2, 1),
        end_date: day(2025, 11, 30),
        target_regions: Vec::new(),
        criteria: EligibilityCriteria::default(),
    };

    vec![
        Programme {
            target_regions: vec!["Saint-Louis".to_string(), "Louga".to_string()],
            criteria: EligibilityCriteria {
                sectors: vec!["Agriculture".to_string()],
                ..EligibilityCriteria::default()
            },
            ..programme("northern-agri", ProgrammeStatus::Open)
        },
        Programme {
            criteria: EligibilityCriteria {
                formalisation_required: true,
                minimum_employees: Some(10),
                ..EligibilityCriteria::default()
            },
            ..programme("scale-up", ProgrammeStatus::InProgress)
        },
        programme("women-led-pilot", ProgrammeStatus::Planned),
        Programme {
            criteria: EligibilityCriteria {
                minimum_revenue: Some(5_000_000.0),
                ..EligibilityCriteria::default()
            },
            ..programme("growth-fund", ProgrammeStatus::Open)
        },
    ]
}

fn candidate() -> Beneficiary {
    Beneficiary {
        region_id: "Saint-Louis".to_string(),
        sector: "Agriculture".to_string(),
        ninea: None,
        rccm: Some("SN-STL-2020-A-77".to_string()),
        employee_count: 4,
        revenue: 8_000_000.0,
        gender: None,
    }
}

#[test]
fn beneficiary_sees_only_programmes_they_can_join() {
    let programmes = catalogue();

    let selected = filter_eligible(&programmes, &candidate(), None, day(2025, 6, 1));

    let ids: Vec<&str> = selected.iter().map(|p| p.id.0.as_str()).collect();
    assert_eq!(ids, vec!["northern-agri", "growth-fund"]);

    let scale_up = &programmes[1];
    let verdict = check_eligibility(&candidate(), scale_up, None);
    assert_eq!(
        verdict.reasons(),
        ["Insufficient employee count (minimum: 10)"]
    );
}

#[test]
fn nothing_is_selectable_outside_the_operative_window() {
    let selected = filter_eligible(&catalogue(), &candidate(), None, day(2025, 12, 1));
    assert!(selected.is_empty());
}

#[test]
fn questionnaire_drives_the_recommendation() {
    let responses = QuestionnaireResponses::new()
        .with_choice("A1", "GIE")
        .with_choice("A3", "YES")
        .with_choice("B1", "YES")
        .with_choice("B2", "WEEKLY")
        .with_choices("B3", ["GENERAL_ASSEMBLY"])
        .with_choice("C2", "YES")
        .with_choice("C3", "YES")
        .with_choice("D1", "YES")
        .with_choice("E1", "YES");

    let score = calculate_score(&responses, None);
    assert_eq!(score.value(), 49);
    assert_eq!(recommend(score).decision, RecommendationDecision::UnderReview);

    let engine = EligibilityEngine::default();
    let assessment = engine.assess(&candidate(), &catalogue()[0], Some(&responses));
    assert!(assessment.verdict.is_eligible());
    assert_eq!(assessment.score, score);
    assert_eq!(assessment.recommendation.label, "Application needs improvement");
}
