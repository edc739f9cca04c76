use crate::infra::parse_date;
use crate::report::render_assessment_report;
use chrono::{Duration, Local, NaiveDate};
use clap::Args;
use eligibility_engine::config::EngineConfig;
use eligibility_engine::error::AppError;
use eligibility_engine::workflows::programmes::{
    Beneficiary, EligibilityCriteria, EligibilityEngine, Gender, Programme, ProgrammeId,
    ProgrammeStatus, QuestionnaireResponses,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the evaluation date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Also apply the minimum-score and required-gender criteria
    #[arg(long)]
    pub(crate) extended_criteria: bool,
    /// Skip the questionnaire and score an empty response set
    #[arg(long)]
    pub(crate) skip_questionnaire: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        today,
        extended_criteria,
        skip_questionnaire,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let engine = EligibilityEngine::from_config(&EngineConfig { extended_criteria });
    let beneficiary = demo_beneficiary();
    let programmes = demo_catalogue(today);
    let responses = if skip_questionnaire {
        None
    } else {
        Some(demo_responses())
    };

    println!("Eligibility engine demo");
    render_assessment_report(
        &engine,
        &beneficiary,
        &programmes,
        responses.as_ref(),
        today,
        true,
    );

    if let Some(programme) = programmes.first() {
        let assessment = engine.assess(&beneficiary, programme, responses.as_ref());
        match serde_json::to_string_pretty(&assessment) {
            Ok(json) => println!("\nAssessment payload for {}:\n{}", programme.id.0, json),
            Err(err) => println!("\nAssessment payload unavailable: {}", err),
        }
    }

    Ok(())
}

fn demo_beneficiary() -> Beneficiary {
    Beneficiary {
        region_id: "Thiès".to_string(),
        sector: "Agro-industry".to_string(),
        ninea: Some("007845120".to_string()),
        rccm: None,
        employee_count: 8,
        revenue: 32_000_000.0,
        gender: Some(Gender::Female),
    }
}

fn demo_catalogue(today: NaiveDate) -> Vec<Programme> {
    let window = |id: &str, name: &str, status: ProgrammeStatus| Programme {
        id: ProgrammeId(id.to_string()),
        name: name.to_string(),
        status,
        start_date: today - Duration::days(30),
        end_date: today + Duration::days(90),
        target_regions: Vec::new(),
        criteria: EligibilityCriteria::default(),
    };

    vec![
        Programme {
            target_regions: vec!["Thiès".to_string(), "Diourbel".to_string()],
            criteria: EligibilityCriteria {
                sectors: vec!["Agro-industry".to_string(), "Agriculture".to_string()],
                formalisation_required: true,
                minimum_employees: Some(5),
                minimum_score: Some(60),
                ..EligibilityCriteria::default()
            },
            ..window("agro-accelerator", "Agro Accelerator", ProgrammeStatus::Open)
        },
        Programme {
            criteria: EligibilityCriteria {
                minimum_revenue: Some(50_000_000.0),
                ..EligibilityCriteria::default()
            },
            ..window("export-ready", "Export Readiness", ProgrammeStatus::InProgress)
        },
        Programme {
            criteria: EligibilityCriteria {
                required_gender: Some(Gender::Female),
                ..EligibilityCriteria::default()
            },
            ..window("women-founders", "Women Founders Fund", ProgrammeStatus::Open)
        },
        window("digital-2026", "Digital Launchpad", ProgrammeStatus::Planned),
        Programme {
            end_date: today - Duration::days(1),
            ..window("seed-grant", "Seed Grant", ProgrammeStatus::Open)
        },
    ]
}

fn demo_responses() -> QuestionnaireResponses {
    QuestionnaireResponses::new()
        .with_choice("A1", "SARL")
        .with_choice("A2", "3_5_YEARS")
        .with_choice("A3", "YES")
        .with_choice("B1", "YES")
        .with_choice("B2", "MONTHLY")
        .with_choices("B3", ["GENERAL_ASSEMBLY"])
        .with_choice("C1", "ACCOUNTING_SOFTWARE")
        .with_choice("C2", "YES")
        .with_choices("C4", ["MICROFINANCE", "EQUITY"])
        .with_choice("D1", "YES")
        .with_choices("D2", ["WHOLESALE"])
        .with_choice("D3", "REGIONAL")
        .with_choice("E1", "YES")
        .with_choice("F1", "YES")
}
