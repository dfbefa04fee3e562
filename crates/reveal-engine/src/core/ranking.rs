//! Turns received team records into ranked cards.

use crate::api::config::PageVariant;
use crate::api::types::TeamRecord;

/// Nickname used when no keyword matches the problem statement.
pub const DEFAULT_NICKNAME: &str = "Innovation";

/// Score shown for rank 1 in the full variant.
pub const TOP_DISPLAY_SCORE: f32 = 98.0;
/// Score drop per rank.
pub const DISPLAY_SCORE_STEP: f32 = 1.5;

/// Keyword (lowercase) → project nickname. First match wins.
const NICKNAMES: &[(&str, &str)] = &[
    ("waste", "EcoTrack"),
    ("attendance", "PresenceIQ"),
    ("mental health", "MindHaven"),
    ("security", "SafeGuard"),
    ("library", "ShelfSense"),
    ("food", "FoodFleet"),
    ("study", "StudySync"),
    ("event", "EventHub"),
    ("transport", "GreenRoute"),
    ("collaboration", "CoLab"),
];

/// Extra data shown only by the full variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Showcase {
    pub score: f32,
    pub nickname: &'static str,
}

/// One rendered entry of the results list.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamCard {
    /// 1-based position in the list as received.
    pub rank: usize,
    pub record: TeamRecord,
    pub showcase: Option<Showcase>,
}

/// Look up the nickname for a problem statement.
pub fn nickname_for(problem: &str) -> &'static str {
    let problem = problem.to_lowercase();
    NICKNAMES
        .iter()
        .find(|(keyword, _)| problem.contains(keyword))
        .map(|&(_, nickname)| nickname)
        .unwrap_or(DEFAULT_NICKNAME)
}

/// Display score for a 1-based rank, never below zero.
pub fn display_score(rank: usize) -> f32 {
    let drop = DISPLAY_SCORE_STEP * rank.saturating_sub(1) as f32;
    (TOP_DISPLAY_SCORE - drop).max(0.0)
}

/// Rank records in the order received.
pub fn rank_teams(records: Vec<TeamRecord>, variant: PageVariant) -> Vec<TeamCard> {
    records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| {
            let rank = idx + 1;
            let showcase = match variant {
                PageVariant::Simple => None,
                PageVariant::Full => Some(Showcase {
                    score: display_score(rank),
                    nickname: nickname_for(&record.problem),
                }),
            };
            TeamCard { rank, record, showcase }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(team: &str, problem: &str) -> TeamRecord {
        TeamRecord { team: team.into(), problem: problem.into(), tech: vec![] }
    }

    #[test]
    fn nickname_matches_case_insensitively() {
        assert_eq!(nickname_for("Campus WASTE management system"), "EcoTrack");
        assert_eq!(nickname_for("Student mental health platform"), "MindHaven");
    }

    #[test]
    fn nickname_falls_back_to_innovation() {
        assert_eq!(nickname_for("Quantum knitting"), DEFAULT_NICKNAME);
        assert_eq!(nickname_for(""), DEFAULT_NICKNAME);
    }

    #[test]
    fn first_keyword_wins() {
        // "study" comes before "collaboration" in the table
        assert_eq!(nickname_for("Study collaboration tool"), "StudySync");
    }

    #[test]
    fn score_decreases_per_rank_and_floors() {
        assert_eq!(display_score(1), 98.0);
        assert_eq!(display_score(2), 96.5);
        assert_eq!(display_score(10), 84.5);
        assert_eq!(display_score(1000), 0.0);
    }

    #[test]
    fn simple_variant_has_no_showcase() {
        let cards = rank_teams(vec![record("A", "waste"), record("B", "food")], PageVariant::Simple);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].rank, 1);
        assert_eq!(cards[1].rank, 2);
        assert!(cards.iter().all(|c| c.showcase.is_none()));
    }

    #[test]
    fn full_variant_keeps_order_and_derives_showcase() {
        let cards = rank_teams(
            vec![record("Zeta", "Library resource optimization"), record("Alpha", "unknown")],
            PageVariant::Full,
        );
        assert_eq!(cards[0].record.team, "Zeta");
        assert_eq!(
            cards[0].showcase,
            Some(Showcase { score: 98.0, nickname: "ShelfSense" })
        );
        assert_eq!(cards[1].showcase.as_ref().map(|s| s.nickname), Some("Innovation"));
    }
}
