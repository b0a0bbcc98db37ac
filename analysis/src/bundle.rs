#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MatchRecord {
    pub metadata: MatchMetadata,
    pub info: MatchInfo,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadata {
    pub match_id: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    pub participants: Vec<Participant>,
    pub game_duration: u64,
    #[serde(default)]
    pub game_start_timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub puuid: String,
    pub champion_name: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub team_id: u32,
    pub participant_id: u32,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelineRecord {
    pub info: TimelineInfo,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelineInfo {
    #[serde(default)]
    pub frames: Vec<Frame>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub timestamp: u64,
    #[serde(default)]
    pub participant_frames: std::collections::HashMap<String, ParticipantFrame>,
    #[serde(default)]
    pub events: Vec<RawEvent>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParticipantFrame {
    #[serde(default)]
    pub position: Option<RawPosition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawPosition {
    #[serde(default)]
    pub x: Option<i64>,
    #[serde(default)]
    pub y: Option<i64>,
}

impl RawPosition {
    pub fn resolved(&self) -> Option<Position> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Some(Position { x, y }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub timestamp: u64,
    #[serde(default)]
    pub participant_id: Option<u32>,
    #[serde(default)]
    pub killer_id: Option<u32>,
    #[serde(default)]
    pub victim_id: Option<u32>,
    #[serde(default)]
    pub position: Option<RawPosition>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MatchPayload {
    Bare(MatchRecord),
    Bundle {
        record: MatchRecord,
        timeline: Option<TimelineRecord>,
    },
}

impl MatchPayload {
    pub fn record(&self) -> &MatchRecord {
        match self {
            Self::Bare(record) => record,
            Self::Bundle { record, .. } => record,
        }
    }

    pub fn frames(&self) -> &[Frame] {
        match self {
            Self::Bundle {
                timeline: Some(timeline),
                ..
            } => &timeline.info.frames,
            _ => &[],
        }
    }
}

#[derive(Debug)]
pub enum BundleError {
    UnrecognizedShape,
    Match(serde_json::Error),
    Timeline(serde_json::Error),
}

impl core::fmt::Display for BundleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnrecognizedShape => write!(f, "response is neither a match nor a match bundle"),
            Self::Match(e) => write!(f, "malformed match record: {}", e),
            Self::Timeline(e) => write!(f, "malformed timeline: {}", e),
        }
    }
}

pub fn classify(value: serde_json::Value) -> Result<MatchPayload, BundleError> {
    let obj = match value.as_object() {
        Some(o) => o,
        None => return Err(BundleError::UnrecognizedShape),
    };

    if obj.contains_key("metadata") && obj.contains_key("info") {
        let record = serde_json::from_value(value).map_err(BundleError::Match)?;
        return Ok(MatchPayload::Bare(record));
    }

    if let Some(match_value) = obj.get("match") {
        let record: MatchRecord =
            serde_json::from_value(match_value.clone()).map_err(BundleError::Match)?;
        let timeline = match obj.get("timeline") {
            Some(timeline_value) => decode_timeline(timeline_value)?,
            None => None,
        };

        tracing::debug!(
            match_id = %record.metadata.match_id,
            has_timeline = timeline.is_some(),
            "Classified match bundle"
        );

        return Ok(MatchPayload::Bundle { record, timeline });
    }

    Err(BundleError::UnrecognizedShape)
}

// A timeline object without a frame list is treated as absent, not invalid.
fn decode_timeline(value: &serde_json::Value) -> Result<Option<TimelineRecord>, BundleError> {
    let has_frames = value
        .get("info")
        .and_then(|info| info.get("frames"))
        .map(|frames| frames.is_array())
        .unwrap_or(false);
    if !has_frames {
        return Ok(None);
    }

    serde_json::from_value(value.clone())
        .map(Some)
        .map_err(BundleError::Timeline)
}
