use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::programmes::domain::{
    Beneficiary, EligibilityCriteria, Programme, ProgrammeId, ProgrammeStatus,
    QuestionnaireResponses,
};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn today() -> NaiveDate {
    date(2025, 3, 15)
}

pub(super) fn beneficiary() -> Beneficiary {
    Beneficiary {
        region_id: "Dakar".to_string(),
        sector: "Agriculture".to_string(),
        ninea: Some("004512378".to_string()),
        rccm: Some("SN-DKR-2021-B-1234".to_string()),
        employee_count: 12,
        revenue: 45_000_000.0,
        gender: None,
    }
}

pub(super) fn unrestricted_programme(id: &str) -> Programme {
    Programme {
        id: ProgrammeId(id.to_string()),
        name: format!("Programme {id}"),
        status: ProgrammeStatus::Open,
        start_date: date(2025, 1, 1),
        end_date: date(2025, 12, 31),
        target_regions: Vec::new(),
        criteria: EligibilityCriteria::default(),
    }
}

pub(super) fn restricted_programme(id: &str) -> Programme {
    Programme {
        target_regions: vec!["Dakar".to_string(), "Thiès".to_string()],
        criteria: EligibilityCriteria {
            sectors: vec!["Agriculture".to_string(), "Agro-industry".to_string()],
            formalisation_required: true,
            minimum_employees: Some(5),
            minimum_revenue: Some(10_000_000.0),
            minimum_score: None,
            required_gender: None,
        },
        ..unrestricted_programme(id)
    }
}

/// Answers earning every rubric line.
pub(super) fn complete_responses() -> QuestionnaireResponses {
    QuestionnaireResponses::new()
        .with_choice("A1", "SARL")
        .with_choice("A2", "OVER_5_YEARS")
        .with_choice("A3", "YES")
        .with_choice("A4", "YES")
        .with_choice("B1", "YES")
        .with_choice("B2", "MONTHLY")
        .with_choices("B3", ["GENERAL_ASSEMBLY", "BOARD"])
        .with_choice("B4", "YES")
        .with_choice("C1", "CHARTERED_ACCOUNTANT")
        .with_choice("C2", "YES")
        .with_choice("C3", "YES")
        .with_choices("C4", ["EQUITY", "BANK_LOAN"])
        .with_choice("D1", "YES")
        .with_choices("D2", ["SHOP", "ONLINE"])
        .with_choice("D3", "NATIONAL")
        .with_choice("E1", "YES")
        .with_choice("E2", "YES")
        .with_choice("E3", "YES")
        .with_choice("F1", "YES")
        .with_choices("F2", ["RECYCLING"])
}

/// Answers worth 31 points: A1 (5), B1 (7), C1 (8), C4 (6), D2 (5).
pub(super) fn partial_responses() -> QuestionnaireResponses {
    QuestionnaireResponses::new()
        .with_choice("A1", "SARL")
        .with_choice("A2", "UNDER_1_YEAR")
        .with_choice("B1", "YES")
        .with_choice("B2", "NEVER")
        .with_choice("C1", "ACCOUNTING_SOFTWARE")
        .with_choices("C4", ["MICROFINANCE"])
        .with_choices("D2", ["MARKET"])
        .with_choice("E1", "NO")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
