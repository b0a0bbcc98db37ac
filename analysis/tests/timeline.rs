use analysis::bundle;
use analysis::moments::MomentKind;
use analysis::roster::FallbackPolicy;
use analysis::timeline;
use pretty_assertions::assert_eq;
use serde_json::json;
use tracing_test::traced_test;

fn bundle_value() -> serde_json::Value {
    let participants: Vec<_> = (1..=10)
        .map(|slot| {
            json!({
                "puuid": format!("puuid-{}", slot),
                "championName": "Ahri",
                "kills": 3,
                "deaths": 1,
                "assists": 7,
                "teamId": if slot <= 5 { 100 } else { 200 },
                "participantId": slot,
            })
        })
        .collect();

    json!({
        "match": {
            "metadata": { "matchId": "EUW1_123" },
            "info": {
                "participants": participants,
                "gameDuration": 1893,
                "gameStartTimestamp": 1700000000000_i64,
            },
        },
        "timeline": {
            "info": {
                "frames": [
                    {
                        "timestamp": 0,
                        "participantFrames": { "3": { "position": { "x": 560, "y": 581 } } },
                        "events": [
                            { "type": "CHAMPION_KILL", "timestamp": 0, "killerId": 3, "victimId": 7 },
                        ],
                    },
                    {
                        "timestamp": 500,
                        "participantFrames": { "3": { "position": { "x": 600, "y": 620 } } },
                        "events": [
                            { "type": "ITEM_PURCHASED", "timestamp": 500, "participantId": 3 },
                        ],
                    },
                ],
            },
        },
    })
}

#[test]
#[traced_test]
fn resolved_player_timeline() {
    let payload = bundle::classify(bundle_value()).unwrap();

    let result = timeline::build(&payload, Some("puuid-3"), FallbackPolicy::LowestSlot).unwrap();

    assert_eq!(3, result.participant.participant_id);
    assert_eq!(false, result.used_fallback);
    assert_eq!(
        vec![MomentKind::Kill, MomentKind::ItemPurchase],
        result.moments.iter().map(|m| m.kind).collect::<Vec<_>>()
    );
    assert_eq!(2, result.trace.len());
}

#[test]
fn deterministic_for_identical_input() {
    let payload = bundle::classify(bundle_value()).unwrap();

    let first = timeline::build(&payload, Some("puuid-3"), FallbackPolicy::LowestSlot).unwrap();
    let second = timeline::build(&payload, Some("puuid-3"), FallbackPolicy::LowestSlot).unwrap();

    assert_eq!(first, second);
}

#[test]
fn bare_record_degrades_to_empty_sequences() {
    let mut raw = bundle_value();
    let match_value = raw["match"].take();
    let payload = bundle::classify(match_value).unwrap();

    let result = timeline::build(&payload, Some("puuid-3"), FallbackPolicy::LowestSlot).unwrap();

    assert_eq!(3, result.participant.participant_id);
    assert_eq!(0, result.moments.len());
    assert_eq!(0, result.trace.len());
}

#[test]
fn unknown_player_is_flagged() {
    let payload = bundle::classify(bundle_value()).unwrap();

    let result = timeline::build(&payload, Some("stranger"), FallbackPolicy::LowestSlot).unwrap();

    assert_eq!(true, result.used_fallback);
    assert_eq!(1, result.participant.participant_id);
}
