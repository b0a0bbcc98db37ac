#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MatchReview {
    pub match_id: String,
    pub duration_seconds: u64,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub scoreboard: Scoreboard,
    pub player: ReviewParticipant,
    pub used_fallback: bool,
    pub moments: Vec<ReviewMoment>,
    pub points: Vec<MapPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Scoreboard {
    pub teams: Vec<(u32, Vec<ScoreboardPlayer>)>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScoreboardPlayer {
    pub puuid: String,
    pub champion: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReviewParticipant {
    pub puuid: String,
    pub champion: String,
    pub participant_id: u32,
    pub team_id: u32,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MomentKind {
    Kill,
    Death,
    Objective,
    ItemPurchase,
    Unclassified,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReviewMoment {
    pub timestamp_millis: u64,
    pub kind: MomentKind,
    pub description: String,
    pub raw_type: String,
    pub position: Option<(i64, i64)>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
    pub highlighted: bool,
    pub timestamp_millis: u64,
}
