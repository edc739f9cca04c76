mod rubric;

pub use rubric::{AnswerPredicate, Rubric, RubricCategory, RubricEntry, RubricError};

use serde::Serialize;

use super::domain::{EligibilityCriteria, QuestionnaireResponses, Score};

/// Stateless scorer applying a rubric to questionnaire responses.
#[derive(Debug, Clone, Default)]
pub struct QuestionnaireScorer {
    rubric: Rubric,
}

impl QuestionnaireScorer {
    pub fn new(rubric: Rubric) -> Self {
        Self { rubric }
    }

    pub fn rubric(&self) -> &Rubric {
        &self.rubric
    }

    pub fn score(&self, responses: &QuestionnaireResponses) -> Score {
        self.breakdown(responses).score
    }

    /// Score with the programme criteria in hand. The programme's minimum score is
    /// not applied here; callers gate on it.
    pub fn calculate(
        &self,
        responses: &QuestionnaireResponses,
        _criteria: Option<&EligibilityCriteria>,
    ) -> Score {
        self.score(responses)
    }

    /// Per-category totals and the rubric lines that earned points.
    pub fn breakdown(&self, responses: &QuestionnaireResponses) -> ScoreBreakdown {
        let awarded: Vec<AwardedPoints> = self
            .rubric
            .entries()
            .iter()
            .filter(|entry| entry.predicate.matches(responses.get(entry.question)))
            .map(|entry| AwardedPoints {
                category: entry.category,
                question: entry.question,
                points: entry.points,
            })
            .collect();

        let categories: Vec<CategoryScore> = self
            .rubric
            .weights()
            .iter()
            .map(|&(category, available)| CategoryScore {
                category,
                label: category.label(),
                earned: awarded
                    .iter()
                    .filter(|line| line.category == category)
                    .map(|line| line.points)
                    .sum(),
                available,
            })
            .collect();

        let earned: u16 = categories.iter().map(|category| category.earned).sum();
        let available = self.rubric.max_points();
        let score = normalize(earned, available);

        tracing::trace!(
            answered = responses.len(),
            earned,
            available,
            score = score.value(),
            "questionnaire scored"
        );

        ScoreBreakdown {
            score,
            earned,
            available,
            categories,
            awarded,
        }
    }
}

/// `earned / available` scaled to 0..=100 and rounded half up.
fn normalize(earned: u16, available: u16) -> Score {
    if available == 0 {
        return Score::default();
    }

    let ratio = f64::from(earned) / f64::from(available);
    Score::new((ratio * f64::from(Score::MAX)).round() as u32)
}

/// Audit view of how a score was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub score: Score,
    pub earned: u16,
    pub available: u16,
    pub categories: Vec<CategoryScore>,
    pub awarded: Vec<AwardedPoints>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub category: RubricCategory,
    pub label: &'static str,
    pub earned: u16,
    pub available: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AwardedPoints {
    pub category: RubricCategory,
    pub question: &'static str,
    pub points: u16,
}

/// Score responses against the standard rubric.
pub fn calculate_score(
    responses: &QuestionnaireResponses,
    criteria: Option<&EligibilityCriteria>,
) -> Score {
    QuestionnaireScorer::default().calculate(responses, criteria)
}
