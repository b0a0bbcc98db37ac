use crate::bundle::{Frame, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracePoint {
    pub timestamp: u64,
    pub position: Position,
}

// Upstream frames are supposed to arrive in timestamp order, but that is not
// enforced at the boundary, so every consumer sorts before correlating.
pub(crate) fn ordered(frames: &[Frame]) -> Vec<&Frame> {
    let mut ordered: Vec<&Frame> = frames.iter().collect();
    ordered.sort_by_key(|frame| frame.timestamp);
    ordered
}

pub fn build(frames: &[Frame], participant_id: u32) -> Vec<TracePoint> {
    let key = participant_id.to_string();

    let mut points = Vec::new();
    for frame in ordered(frames) {
        let position = frame
            .participant_frames
            .get(&key)
            .and_then(|pf| pf.position.as_ref())
            .and_then(|pos| pos.resolved());

        // A frame without a full position for the participant is a true gap.
        let position = match position {
            Some(p) => p,
            None => continue,
        };

        points.push(TracePoint {
            timestamp: frame.timestamp,
            position,
        });
    }

    tracing::trace!(
        participant = participant_id,
        frames = frames.len(),
        points = points.len(),
        "Built position trace"
    );

    points
}
