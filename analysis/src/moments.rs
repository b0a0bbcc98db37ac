use crate::bundle::{Frame, Position, RawEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MomentKind {
    Kill,
    Death,
    Objective,
    ItemPurchase,
    Unclassified,
}

impl MomentKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Kill => "Kill",
            Self::Death => "Death",
            Self::Objective => "Objective",
            Self::ItemPurchase => "Item Purchase",
            Self::Unclassified => "Unclassified",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EventCategory {
    Kill,
    Objective,
    ItemPurchase,
}

// https://developer.riotgames.com/apis#match-v5/GET_getTimeline
static EVENT_CATEGORIES: phf::Map<&'static str, EventCategory> = phf::phf_map! {
    "CHAMPION_KILL" => EventCategory::Kill,
    "CHAMPION_SPECIAL_KILL" => EventCategory::Kill,
    "ELITE_MONSTER_KILL" => EventCategory::Objective,
    "BUILDING_KILL" => EventCategory::Objective,
    "TURRET_PLATE_DESTROYED" => EventCategory::Objective,
    "ITEM_PURCHASED" => EventCategory::ItemPurchase,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Actor,
    Subject,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Moment {
    pub timestamp: u64,
    pub kind: MomentKind,
    pub raw_type: String,
    pub position: Option<Position>,
}

impl Moment {
    pub fn description(&self) -> &str {
        match self.kind {
            MomentKind::Unclassified => &self.raw_type,
            kind => kind.label(),
        }
    }
}

fn role_of(event: &RawEvent, participant_id: u32) -> Option<Role> {
    if event.killer_id == Some(participant_id) || event.participant_id == Some(participant_id) {
        return Some(Role::Actor);
    }
    if event.victim_id == Some(participant_id) {
        return Some(Role::Subject);
    }

    None
}

fn classify(raw_type: &str, role: Role) -> MomentKind {
    match (EVENT_CATEGORIES.get(raw_type), role) {
        (Some(EventCategory::Kill), Role::Actor) => MomentKind::Kill,
        (Some(EventCategory::Kill), Role::Subject) => MomentKind::Death,
        (Some(EventCategory::Objective), _) => MomentKind::Objective,
        (Some(EventCategory::ItemPurchase), Role::Actor) => MomentKind::ItemPurchase,
        _ => MomentKind::Unclassified,
    }
}

pub fn extract(frames: &[Frame], participant_id: u32) -> Vec<Moment> {
    let mut moments = Vec::new();

    for frame in crate::trace::ordered(frames) {
        for event in frame.events.iter() {
            let role = match role_of(event, participant_id) {
                Some(r) => r,
                None => continue,
            };

            moments.push(Moment {
                timestamp: event.timestamp,
                kind: classify(&event.event_type, role),
                raw_type: event.event_type.clone(),
                position: event.position.as_ref().and_then(|pos| pos.resolved()),
            });
        }
    }

    // Stable, so simultaneous events keep their frame/declaration order.
    moments.sort_by_key(|moment| moment.timestamp);

    tracing::trace!(
        participant = participant_id,
        moments = moments.len(),
        "Extracted player moments"
    );

    moments
}
