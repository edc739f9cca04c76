use serde::Serialize;

use super::super::domain::Answer;

/// Questionnaire sections, each carrying a share of the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RubricCategory {
    GeneralInformation,
    Governance,
    FinancialManagement,
    Commercialisation,
    HumanResources,
    EnvironmentalPractices,
}

impl RubricCategory {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::GeneralInformation,
            Self::Governance,
            Self::FinancialManagement,
            Self::Commercialisation,
            Self::HumanResources,
            Self::EnvironmentalPractices,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::GeneralInformation => "General information",
            Self::Governance => "Governance",
            Self::FinancialManagement => "Financial management",
            Self::Commercialisation => "Commercialisation",
            Self::HumanResources => "Human resources",
            Self::EnvironmentalPractices => "Environmental practices",
        }
    }

    /// Weight of the category in the standard rubric.
    pub const fn standard_weight(self) -> u16 {
        match self {
            Self::GeneralInformation => 20,
            Self::Governance => 25,
            Self::FinancialManagement => 25,
            Self::Commercialisation => 15,
            Self::HumanResources => 10,
            Self::EnvironmentalPractices => 5,
        }
    }
}

/// Condition an answer must meet to earn a rubric line's points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerPredicate {
    /// Single-choice answer equal to the code.
    Equals(&'static str),
    /// Single-choice answer within the allowed codes.
    OneOf(&'static [&'static str]),
    /// Multi-select answer with at least one choice.
    AnySelected,
}

impl AnswerPredicate {
    pub fn matches(&self, answer: Option<&Answer>) -> bool {
        let Some(answer) = answer else {
            return false;
        };

        match self {
            AnswerPredicate::Equals(expected) => answer.as_single() == Some(*expected),
            AnswerPredicate::OneOf(allowed) => answer
                .as_single()
                .is_some_and(|choice| allowed.iter().any(|code| *code == choice)),
            AnswerPredicate::AnySelected => answer.has_selection(),
        }
    }
}

/// One point contribution: `points` are earned when `question`'s answer meets
/// `predicate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RubricEntry {
    pub category: RubricCategory,
    pub question: &'static str,
    pub predicate: AnswerPredicate,
    pub points: u16,
}

impl RubricEntry {
    pub const fn new(
        category: RubricCategory,
        question: &'static str,
        predicate: AnswerPredicate,
        points: u16,
    ) -> Self {
        Self {
            category,
            question,
            predicate,
            points,
        }
    }
}

use AnswerPredicate::{AnySelected, Equals, OneOf};
use RubricCategory::*;

const STANDARD_ENTRIES: [RubricEntry; 20] = [
    // A: legal form, seniority, business plan, premises.
    RubricEntry::new(
        GeneralInformation,
        "A1",
        OneOf(&["SA", "SARL", "SUARL", "SAS", "GIE"]),
        5,
    ),
    RubricEntry::new(GeneralInformation, "A2", OneOf(&["3_5_YEARS", "OVER_5_YEARS"]), 5),
    RubricEntry::new(GeneralInformation, "A3", Equals("YES"), 5),
    RubricEntry::new(GeneralInformation, "A4", Equals("YES"), 5),
    // B: statutes, management meetings, governing bodies, strategic plan.
    RubricEntry::new(Governance, "B1", Equals("YES"), 7),
    RubricEntry::new(Governance, "B2", OneOf(&["WEEKLY", "MONTHLY"]), 6),
    RubricEntry::new(Governance, "B3", AnySelected, 6),
    RubricEntry::new(Governance, "B4", Equals("YES"), 6),
    // C: bookkeeping, bank account, financial statements, funding sources.
    RubricEntry::new(
        FinancialManagement,
        "C1",
        OneOf(&["CHARTERED_ACCOUNTANT", "ACCOUNTING_SOFTWARE"]),
        8,
    ),
    RubricEntry::new(FinancialManagement, "C2", Equals("YES"), 5),
    RubricEntry::new(FinancialManagement, "C3", Equals("YES"), 6),
    RubricEntry::new(FinancialManagement, "C4", AnySelected, 6),
    // D: marketing strategy, sales channels, market reach.
    RubricEntry::new(Commercialisation, "D1", Equals("YES"), 5),
    RubricEntry::new(Commercialisation, "D2", AnySelected, 5),
    RubricEntry::new(
        Commercialisation,
        "D3",
        OneOf(&["REGIONAL", "NATIONAL", "INTERNATIONAL"]),
        5,
    ),
    // E: written contracts, training plan, social security registration.
    RubricEntry::new(HumanResources, "E1", Equals("YES"), 4),
    RubricEntry::new(HumanResources, "E2", Equals("YES"), 3),
    RubricEntry::new(HumanResources, "E3", Equals("YES"), 3),
    // F: waste handling, environmental measures.
    RubricEntry::new(EnvironmentalPractices, "F1", Equals("YES"), 3),
    RubricEntry::new(EnvironmentalPractices, "F2", AnySelected, 2),
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RubricError {
    #[error("rubric lines for {category:?} total {found} points but the category weight is {weight}")]
    CategoryMismatch {
        category: RubricCategory,
        weight: u16,
        found: u16,
    },
    #[error("rubric lines reference {0:?}, which has no declared weight")]
    UndeclaredCategory(RubricCategory),
    #[error("rubric category weights must total more than zero")]
    EmptyRubric,
}

/// Weighted table of point contributions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rubric {
    weights: Vec<(RubricCategory, u16)>,
    entries: Vec<RubricEntry>,
}

impl Rubric {
    /// Build a rubric, checking that each category's lines add up to its weight.
    pub fn new(
        weights: Vec<(RubricCategory, u16)>,
        entries: Vec<RubricEntry>,
    ) -> Result<Self, RubricError> {
        if let Some(entry) = entries
            .iter()
            .find(|entry| !weights.iter().any(|(category, _)| *category == entry.category))
        {
            return Err(RubricError::UndeclaredCategory(entry.category));
        }

        for &(category, weight) in &weights {
            let found: u16 = entries
                .iter()
                .filter(|entry| entry.category == category)
                .map(|entry| entry.points)
                .sum();
            if found != weight {
                return Err(RubricError::CategoryMismatch {
                    category,
                    weight,
                    found,
                });
            }
        }

        let rubric = Self { weights, entries };
        if rubric.max_points() == 0 {
            return Err(RubricError::EmptyRubric);
        }
        Ok(rubric)
    }

    /// The six-category, 100-point rubric.
    pub fn standard() -> Self {
        Self {
            weights: RubricCategory::ordered()
                .into_iter()
                .map(|category| (category, category.standard_weight()))
                .collect(),
            entries: STANDARD_ENTRIES.to_vec(),
        }
    }

    pub fn weights(&self) -> &[(RubricCategory, u16)] {
        &self.weights
    }

    pub fn entries(&self) -> &[RubricEntry] {
        &self.entries
    }

    pub fn max_points(&self) -> u16 {
        self.weights.iter().map(|(_, weight)| *weight).sum()
    }
}

impl Default for Rubric {
    fn default() -> Self {
        Self::standard()
    }
}
