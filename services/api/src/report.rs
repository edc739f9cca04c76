use crate::infra::{parse_date, AssessmentInput};
use chrono::{Local, NaiveDate};
use clap::Args;
use eligibility_engine::config::EngineConfig;
use eligibility_engine::error::AppError;
use eligibility_engine::workflows::programmes::{
    Beneficiary, EligibilityEngine, ExclusionGate, Programme, ProgrammeFilter,
    QuestionnaireResponses,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// JSON file holding `beneficiary`, `programmes`, and optional `responses`
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Evaluation date for the operative-window check (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Also apply the minimum-score and required-gender criteria
    #[arg(long)]
    pub(crate) extended_criteria: bool,
    /// Print the per-category score breakdown
    #[arg(long)]
    pub(crate) breakdown: bool,
}

pub(crate) fn run_assessment(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        input,
        today,
        extended_criteria,
        breakdown,
    } = args;

    let input = AssessmentInput::from_path(&input)?;
    let responses = input.responses();
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let engine = EligibilityEngine::from_config(&EngineConfig { extended_criteria });

    render_assessment_report(
        &engine,
        &input.beneficiary,
        &input.programmes,
        responses.as_ref(),
        today,
        breakdown,
    );
    Ok(())
}

pub(crate) fn render_assessment_report(
    engine: &EligibilityEngine,
    beneficiary: &Beneficiary,
    programmes: &[Programme],
    responses: Option<&QuestionnaireResponses>,
    today: NaiveDate,
    show_breakdown: bool,
) {
    println!("Programme eligibility report (evaluated {today})");
    println!(
        "Beneficiary: region {}, sector {}, {} employees",
        beneficiary.region_id, beneficiary.sector, beneficiary.employee_count
    );

    let empty = QuestionnaireResponses::default();
    let score_breakdown = engine.scorer().breakdown(responses.unwrap_or(&empty));
    let recommendation = engine.recommend(score_breakdown.score);
    println!(
        "\nQuestionnaire score: {}/100 -> {} [{}]",
        score_breakdown.score,
        recommendation.label,
        recommendation.decision.label()
    );

    if show_breakdown {
        for category in &score_breakdown.categories {
            println!(
                "- {}: {}/{} points",
                category.label, category.earned, category.available
            );
        }
    }

    println!("\nProgrammes");
    let filter = ProgrammeFilter::new(engine.evaluator());
    for programme in programmes {
        let status = match filter.exclusion(programme, beneficiary, responses, today) {
            None => "open to this beneficiary".to_string(),
            Some(ExclusionGate::Status) => {
                format!("not accepting applications ({})", programme.status.label())
            }
            Some(ExclusionGate::Window) => format!(
                "outside operative window {} -> {}",
                programme.start_date, programme.end_date
            ),
            Some(ExclusionGate::Criteria) => {
                let verdict = engine.check_eligibility(beneficiary, programme, responses);
                format!("not eligible: {}", verdict.summary())
            }
        };
        let display_name = if programme.name.is_empty() {
            programme.id.0.as_str()
        } else {
            programme.name.as_str()
        };
        println!("- {} ({}): {}", display_name, programme.id.0, status);
    }

    let eligible = engine.filter_eligible(programmes, beneficiary, responses, today);
    if eligible.is_empty() {
        println!("\nEligible programmes: none");
    } else {
        let names: Vec<&str> = eligible
            .iter()
            .map(|programme| programme.id.0.as_str())
            .collect();
        println!("\nEligible programmes: {}", names.join(", "));
    }
}
