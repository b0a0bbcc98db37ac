#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AccountView {
    pub puuid: String,
}

pub mod match_review;
pub use match_review::{
    MapPoint, MatchReview, MomentKind, ReviewMoment, ReviewParticipant, Scoreboard,
    ScoreboardPlayer,
};
