use crate::bundle::{MatchRecord, Participant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    #[default]
    LowestSlot,
    FirstListed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<'m> {
    pub participant: &'m Participant,
    pub used_fallback: bool,
}

pub fn resolve<'m>(
    record: &'m MatchRecord,
    puuid: Option<&str>,
    policy: FallbackPolicy,
) -> Option<Resolution<'m>> {
    let participants = &record.info.participants;

    if let Some(puuid) = puuid {
        if let Some(participant) = participants.iter().find(|p| p.puuid == puuid) {
            return Some(Resolution {
                participant,
                used_fallback: false,
            });
        }
    }

    let fallback = match policy {
        FallbackPolicy::LowestSlot => participants.iter().min_by_key(|p| p.participant_id),
        FallbackPolicy::FirstListed => participants.first(),
    }?;

    tracing::debug!(
        requested = ?puuid,
        slot = fallback.participant_id,
        "Player not on roster, falling back"
    );

    Some(Resolution {
        participant: fallback,
        used_fallback: true,
    })
}
