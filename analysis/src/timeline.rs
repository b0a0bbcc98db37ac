use crate::bundle::{MatchPayload, Participant};
use crate::moments::{self, Moment};
use crate::roster::{self, FallbackPolicy};
use crate::trace::{self, TracePoint};

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerTimeline {
    pub participant: Participant,
    pub used_fallback: bool,
    pub moments: Vec<Moment>,
    pub trace: Vec<TracePoint>,
}

#[tracing::instrument(name = "BuildTimeline", skip(payload))]
pub fn build(
    payload: &MatchPayload,
    puuid: Option<&str>,
    policy: FallbackPolicy,
) -> Option<PlayerTimeline> {
    let resolution = roster::resolve(payload.record(), puuid, policy)?;
    let participant_id = resolution.participant.participant_id;

    let frames = payload.frames();

    Some(PlayerTimeline {
        participant: resolution.participant.clone(),
        used_fallback: resolution.used_fallback,
        moments: moments::extract(frames, participant_id),
        trace: trace::build(frames, participant_id),
    })
}
