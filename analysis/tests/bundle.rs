use analysis::bundle::{self, BundleError, MatchPayload};
use pretty_assertions::assert_eq;
use serde_json::json;

fn participant(slot: u32, puuid: &str) -> serde_json::Value {
    json!({
        "puuid": puuid,
        "championName": "Ahri",
        "kills": 3,
        "deaths": 1,
        "assists": 7,
        "teamId": 100,
        "participantId": slot,
    })
}

fn match_value() -> serde_json::Value {
    json!({
        "metadata": { "matchId": "EUW1_123" },
        "info": {
            "participants": (1..=10).map(|slot| participant(slot, &format!("puuid-{}", slot))).collect::<Vec<_>>(),
            "gameDuration": 1893,
            "gameStartTimestamp": 1700000000000_i64,
        },
    })
}

#[test]
fn bare_match() {
    let result = bundle::classify(match_value()).unwrap();

    let record = match result {
        MatchPayload::Bare(record) => record,
        other => panic!("Expected bare match, got {:?}", other),
    };

    assert_eq!("EUW1_123", record.metadata.match_id);
    assert_eq!(10, record.info.participants.len());
    assert_eq!(1893, record.info.game_duration);
}

#[test]
fn bundle_with_timeline() {
    let raw = json!({
        "match": match_value(),
        "timeline": {
            "info": {
                "frames": [
                    {
                        "timestamp": 0,
                        "participantFrames": { "1": { "position": { "x": 560, "y": 581 } } },
                        "events": [],
                    },
                ],
            },
        },
    });

    let result = bundle::classify(raw).unwrap();

    match &result {
        MatchPayload::Bundle { timeline, .. } => assert!(timeline.is_some()),
        other => panic!("Expected bundle, got {:?}", other),
    };
    assert_eq!(1, result.frames().len());
    assert_eq!("EUW1_123", result.record().metadata.match_id);
}

#[test]
fn timeline_without_frames_is_absent() {
    let raw = json!({
        "match": match_value(),
        "timeline": { "info": {} },
    });

    let result = bundle::classify(raw).unwrap();

    match &result {
        MatchPayload::Bundle { timeline, .. } => assert!(timeline.is_none()),
        other => panic!("Expected bundle, got {:?}", other),
    };
    assert_eq!(0, result.frames().len());
}

#[test]
fn bundle_without_timeline() {
    let raw = json!({ "match": match_value() });

    let result = bundle::classify(raw).unwrap();

    match &result {
        MatchPayload::Bundle { timeline, .. } => assert!(timeline.is_none()),
        other => panic!("Expected bundle, got {:?}", other),
    };
}

#[test]
fn unrecognized_shapes() {
    for raw in [json!(null), json!([1, 2, 3]), json!("nope"), json!({ "unrelated": true })] {
        let result = bundle::classify(raw.clone());
        assert!(
            matches!(result, Err(BundleError::UnrecognizedShape)),
            "Input: {:?} - Result: {:?}",
            raw,
            result
        );
    }
}

#[test]
fn recognized_shape_with_missing_fields_is_malformed() {
    let raw = json!({
        "metadata": { "matchId": "EUW1_123" },
        "info": { "gameDuration": 1893 },
    });

    let result = bundle::classify(raw);
    assert!(matches!(result, Err(BundleError::Match(_))), "{:?}", result);
}

#[test]
fn extra_fields_are_ignored() {
    let mut raw = match_value();
    raw["info"]["gameMode"] = json!("CLASSIC");
    raw["info"]["participants"][0]["goldEarned"] = json!(12345);

    let result = bundle::classify(raw).unwrap();
    assert_eq!(10, result.record().info.participants.len());
}
