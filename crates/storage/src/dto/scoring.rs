use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A judge's individual score submission.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitJudgeScoreRequest {
    #[validate(range(min = 0.0, max = 10.0, message = "Score must be between 0 and 10"))]
    pub score: f64,

    #[validate(length(max = 2000))]
    pub justification: Option<String>,
}

/// The head judge's official score and rank for a competitor.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitFinalScoreRequest {
    #[validate(range(min = 0.0, max = 10.0, message = "Score must be between 0 and 10"))]
    pub score: f64,

    #[validate(range(min = 1, message = "Rank must be at least 1"))]
    pub rank: i32,
}

/// One competitor on an event's judging dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CompetitorEntry {
    pub registration_id: Uuid,
    pub performance_order: i32,
    pub registrant_name: String,
    pub school_or_club: Option<String>,
    pub is_checked_in: bool,
    pub is_disqualified: bool,
    pub is_completed: bool,
    pub final_score: Option<f64>,
    pub final_rank: Option<i32>,
}

/// An ordered event on the tournament judging dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ScheduledEventEntry {
    pub tournament_event_id: Uuid,
    pub event_order: i32,
    pub mat_or_location: String,
    pub english_name: String,
    pub chinese_name: String,
    pub skill_level: String,
    pub sex: String,
}

/// Ordered events grouped by the mat they run on.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MatSchedule {
    pub mat_or_location: String,
    pub events: Vec<ScheduledEventEntry>,
}

impl MatSchedule {
    /// Group a flat, ordered event list by mat, preserving order within each.
    pub fn group(entries: Vec<ScheduledEventEntry>) -> Vec<MatSchedule> {
        let mut mats: Vec<MatSchedule> = Vec::new();
        for entry in entries {
            match mats
                .iter_mut()
                .find(|m| m.mat_or_location == entry.mat_or_location)
            {
                Some(mat) => mat.events.push(entry),
                None => mats.push(MatSchedule {
                    mat_or_location: entry.mat_or_location.clone(),
                    events: vec![entry],
                }),
            }
        }
        mats
    }
}

/// Another judge's submitted score, visible to the head judge only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct JudgeScoreEntry {
    pub judge_id: Uuid,
    pub judge_name: String,
    pub score: f64,
    pub justification: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FinalScoreInfo {
    pub score: Option<f64>,
    pub rank: Option<i32>,
}

/// Everything a judge sees when scoring one competitor.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoringSheetResponse {
    pub tournament_event_id: Uuid,
    pub competitor: CompetitorEntry,
    pub is_head_judge: bool,
    /// The caller's own previously submitted score, if any.
    pub own_score: Option<JudgeScoreEntry>,
    /// Other judges' scores; head judge only.
    pub other_scores: Option<Vec<JudgeScoreEntry>>,
    /// Current official result; head judge only.
    pub final_score: Option<FinalScoreInfo>,
    pub previous_competitor_order: Option<i32>,
    pub next_competitor_order: Option<i32>,
    pub previous_tournament_event_id: Option<Uuid>,
    pub next_tournament_event_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(mat: &str, order: i32) -> ScheduledEventEntry {
        ScheduledEventEntry {
            tournament_event_id: Uuid::new_v4(),
            event_order: order,
            mat_or_location: mat.to_string(),
            english_name: "Compulsory Southern Fist".to_string(),
            chinese_name: "规定南拳".to_string(),
            skill_level: "advanced".to_string(),
            sex: "male".to_string(),
        }
    }

    #[test]
    fn group_splits_by_mat_and_keeps_order() {
        let grouped = MatSchedule::group(vec![
            entry("Mat 1", 1),
            entry("Mat 2", 2),
            entry("Mat 1", 3),
        ]);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].mat_or_location, "Mat 1");
        assert_eq!(grouped[0].events.len(), 2);
        assert_eq!(grouped[0].events[0].event_order, 1);
        assert_eq!(grouped[0].events[1].event_order, 3);
        assert_eq!(grouped[1].mat_or_location, "Mat 2");
        assert_eq!(grouped[1].events.len(), 1);
    }

    #[test]
    fn score_range_validation() {
        use validator::Validate;

        let ok = SubmitJudgeScoreRequest {
            score: 9.5,
            justification: None,
        };
        assert!(ok.validate().is_ok());

        let high = SubmitJudgeScoreRequest {
            score: 10.5,
            justification: None,
        };
        assert!(high.validate().is_err());

        let negative = SubmitFinalScoreRequest {
            score: -0.5,
            rank: 1,
        };
        assert!(negative.validate().is_err());

        let bad_rank = SubmitFinalScoreRequest {
            score: 8.0,
            rank: 0,
        };
        assert!(bad_rank.validate().is_err());
    }
}
