use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Identifier wrapper for programmes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProgrammeId(pub String);

/// Structural attributes of a candidate enterprise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beneficiary {
    #[serde(alias = "region")]
    pub region_id: String,
    #[serde(alias = "secteur_activite")]
    pub sector: String,
    #[serde(default)]
    pub ninea: Option<String>,
    #[serde(default)]
    pub rccm: Option<String>,
    #[serde(default, alias = "nombre_employes", deserialize_with = "null_as_default")]
    pub employee_count: u32,
    #[serde(default, alias = "chiffre_affaires", deserialize_with = "null_as_default")]
    pub revenue: f64,
    #[serde(default, alias = "genre")]
    pub gender: Option<Gender>,
}

impl Beneficiary {
    /// At least one registration number (NINEA or RCCM) is present and non-blank.
    pub fn is_formalised(&self) -> bool {
        [&self.ninea, &self.rccm]
            .into_iter()
            .any(|id| id.as_deref().is_some_and(|value| !value.trim().is_empty()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    #[serde(alias = "M", alias = "HOMME")]
    Male,
    #[serde(alias = "F", alias = "FEMME")]
    Female,
}

/// Lifecycle status of a programme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProgrammeStatus {
    Draft,
    Planned,
    Open,
    InProgress,
    Closed,
    Archived,
    #[serde(other)]
    Unknown,
}

impl ProgrammeStatus {
    pub const fn accepts_applications(self) -> bool {
        matches!(self, ProgrammeStatus::Open | ProgrammeStatus::InProgress)
    }

    pub const fn label(self) -> &'static str {
        match self {
            ProgrammeStatus::Draft => "draft",
            ProgrammeStatus::Planned => "planned",
            ProgrammeStatus::Open => "open",
            ProgrammeStatus::InProgress => "in_progress",
            ProgrammeStatus::Closed => "closed",
            ProgrammeStatus::Archived => "archived",
            ProgrammeStatus::Unknown => "unknown",
        }
    }
}

/// Support programme with its operative window and eligibility restrictions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Programme {
    pub id: ProgrammeId,
    #[serde(default, alias = "nom", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(alias = "statut")]
    pub status: ProgrammeStatus,
    #[serde(alias = "date_debut")]
    pub start_date: NaiveDate,
    #[serde(alias = "date_fin")]
    pub end_date: NaiveDate,
    #[serde(default, alias = "regions_cibles", deserialize_with = "null_as_default")]
    pub target_regions: Vec<String>,
    #[serde(
        default,
        alias = "criteres_eligibilite",
        deserialize_with = "null_as_default"
    )]
    pub criteria: EligibilityCriteria,
}

impl Programme {
    /// Whether `date` falls inside the inclusive `[start_date, end_date]` window.
    pub fn is_running_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Eligibility restrictions declared by a programme. Empty sets and `None` mean
/// the restriction is not declared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EligibilityCriteria {
    #[serde(default, alias = "secteurs", deserialize_with = "null_as_default")]
    pub sectors: Vec<String>,
    #[serde(
        default,
        alias = "formalisation_requise",
        deserialize_with = "null_as_default"
    )]
    pub formalisation_required: bool,
    #[serde(default, alias = "nombre_employes_min")]
    pub minimum_employees: Option<u32>,
    #[serde(default, alias = "chiffre_affaires_min")]
    pub minimum_revenue: Option<f64>,
    #[serde(default, alias = "score_minimum", deserialize_with = "clamped_score")]
    pub minimum_score: Option<u8>,
    #[serde(default, alias = "genre_requis")]
    pub required_gender: Option<Gender>,
}

/// Explicit `null` reads as the field's default, like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Any numeric threshold, rounded and clamped into `0..=100`.
fn clamped_score<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?;
    Ok(raw
        .filter(|value| value.is_finite())
        .map(|value| value.round().clamp(0.0, f64::from(Score::MAX)) as u8))
}

/// Answer to a single questionnaire question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Single(String),
    Multiple(Vec<String>),
}

impl Answer {
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Answer::Single(choice) => Some(choice.as_str()),
            Answer::Multiple(_) => None,
        }
    }

    /// Multi-select answer with at least one non-blank choice.
    pub fn has_selection(&self) -> bool {
        match self {
            Answer::Multiple(choices) => choices.iter().any(|choice| !choice.trim().is_empty()),
            Answer::Single(_) => false,
        }
    }
}

/// Sparse questionnaire answers keyed by question code (e.g. `B1`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionnaireResponses(BTreeMap<String, Answer>);

impl QuestionnaireResponses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answer(mut self, question: impl Into<String>, answer: Answer) -> Self {
        self.0.insert(question.into(), answer);
        self
    }

    pub fn with_choice(self, question: impl Into<String>, choice: impl Into<String>) -> Self {
        self.with_answer(question, Answer::Single(choice.into()))
    }

    pub fn with_choices<I, S>(self, question: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let choices = choices.into_iter().map(Into::into).collect();
        self.with_answer(question, Answer::Multiple(choices))
    }

    pub fn get(&self, question: &str) -> Option<&Answer> {
        self.0.get(question)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lenient conversion from untyped JSON. Anything other than an object yields
    /// an empty set; entries that are neither a string nor an array are dropped, and
    /// non-string array items are ignored.
    pub fn from_json(value: &Value) -> Self {
        let Value::Object(entries) = value else {
            return Self::default();
        };

        let answers = entries
            .iter()
            .filter_map(|(question, raw)| {
                let answer = match raw {
                    Value::String(choice) => Answer::Single(choice.clone()),
                    Value::Array(items) => Answer::Multiple(
                        items
                            .iter()
                            .filter_map(Value::as_str)
                            .map(str::to_string)
                            .collect(),
                    ),
                    _ => return None,
                };
                Some((question.clone(), answer))
            })
            .collect();

        Self(answers)
    }
}

impl FromIterator<(String, Answer)> for QuestionnaireResponses {
    fn from_iter<T: IntoIterator<Item = (String, Answer)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Normalized questionnaire score, always within `0..=100`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    pub const MAX: u8 = 100;

    /// Clamp any raw value into the valid range.
    pub fn new(value: u32) -> Self {
        Self(value.min(Self::MAX as u32) as u8)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of the structural eligibility check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityVerdict {
    eligible: bool,
    reasons: Vec<String>,
}

impl EligibilityVerdict {
    pub const ELIGIBLE_REASON: &'static str = "Eligible";

    pub fn eligible() -> Self {
        Self {
            eligible: true,
            reasons: vec![Self::ELIGIBLE_REASON.to_string()],
        }
    }

    /// Verdict from the ordered failure reasons; no failures means eligible.
    pub fn from_failures(failures: Vec<String>) -> Self {
        if failures.is_empty() {
            Self::eligible()
        } else {
            Self {
                eligible: false,
                reasons: failures,
            }
        }
    }

    pub fn is_eligible(&self) -> bool {
        self.eligible
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    pub fn summary(&self) -> String {
        self.reasons.join("; ")
    }
}

/// Decision band attached to a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationDecision {
    Accepted,
    UnderReview,
    Rejected,
}

impl RecommendationDecision {
    pub const fn label(self) -> &'static str {
        match self {
            RecommendationDecision::Accepted => "accepted",
            RecommendationDecision::UnderReview => "under_review",
            RecommendationDecision::Rejected => "rejected",
        }
    }
}

/// Reviewer-facing recommendation derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub label: &'static str,
    pub color: &'static str,
    pub decision: RecommendationDecision,
}
