use super::domain::{Recommendation, RecommendationDecision, Score};

struct Band {
    floor: u8,
    recommendation: Recommendation,
}

/// Score bands from highest floor to lowest. The last band catches every
/// remaining score.
const BANDS: [Band; 4] = [
    Band {
        floor: 80,
        recommendation: Recommendation {
            label: "Excellent application",
            color: "green",
            decision: RecommendationDecision::Accepted,
        },
    },
    Band {
        floor: 60,
        recommendation: Recommendation {
            label: "Good application",
            color: "blue",
            decision: RecommendationDecision::Accepted,
        },
    },
    Band {
        floor: 40,
        recommendation: Recommendation {
            label: "Application needs improvement",
            color: "orange",
            decision: RecommendationDecision::UnderReview,
        },
    },
    Band {
        floor: 0,
        recommendation: Recommendation {
            label: "Insufficient application",
            color: "red",
            decision: RecommendationDecision::Rejected,
        },
    },
];

/// Map a score to its reviewer recommendation.
pub fn recommend(score: Score) -> Recommendation {
    let [excellent, good, improvable, insufficient] = &BANDS;
    match score.value() {
        value if value >= excellent.floor => excellent.recommendation,
        value if value >= good.floor => good.recommendation,
        value if value >= improvable.floor => improvable.recommendation,
        _ => insufficient.recommendation,
    }
}
