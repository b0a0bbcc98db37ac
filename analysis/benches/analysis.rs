fn main() {
    divan::main();
}

fn synthetic_payload(frames: usize) -> analysis::bundle::MatchPayload {
    let participants: Vec<_> = (1..=10)
        .map(|slot| {
            serde_json::json!({
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

    let frames: Vec<_> = (0..frames)
        .map(|i| {
            let timestamp = i as u64 * 60_000;
            serde_json::json!({
                "timestamp": timestamp,
                "participantFrames": {
                    "3": { "position": { "x": (i % 14_000) as i64, "y": ((i * 7) % 14_000) as i64 } },
                },
                "events": [
                    { "type": "CHAMPION_KILL", "timestamp": timestamp, "killerId": (i % 10) + 1, "victimId": ((i + 5) % 10) + 1 },
                    { "type": "ITEM_PURCHASED", "timestamp": timestamp + 100, "participantId": (i % 10) + 1 },
                ],
            })
        })
        .collect();

    analysis::bundle::classify(serde_json::json!({
        "match": {
            "metadata": { "matchId": "EUW1_bench" },
            "info": { "participants": participants, "gameDuration": 1893 },
        },
        "timeline": { "info": { "frames": frames } },
    }))
    .unwrap()
}

#[divan::bench(args = [60, 600, 2400])]
fn build_timeline(bencher: divan::Bencher, frames: usize) {
    let payload = synthetic_payload(frames);

    bencher.bench(|| {
        analysis::timeline::build(
            divan::black_box(&payload),
            divan::black_box(Some("puuid-3")),
            analysis::roster::FallbackPolicy::LowestSlot,
        )
    });
}

#[divan::bench(args = [60, 600, 2400])]
fn project_full_trace(bencher: divan::Bencher, frames: usize) {
    let payload = synthetic_payload(frames);
    let timeline = analysis::timeline::build(
        &payload,
        Some("puuid-3"),
        analysis::roster::FallbackPolicy::LowestSlot,
    )
    .unwrap();

    bencher.bench(|| {
        analysis::projection::project(
            divan::black_box(&timeline.trace),
            divan::black_box(Some(600_000)),
            560.0,
            560.0,
            false,
        )
    });
}

#[divan::bench(args = [60, 600, 2400])]
fn classify_bundle(bencher: divan::Bencher, frames: usize) {
    bencher
        .with_inputs(|| {
            serde_json::json!({
                "match": {
                    "metadata": { "matchId": "EUW1_bench" },
                    "info": {
                        "participants": (1..=10).map(|slot| serde_json::json!({
                            "puuid": format!("puuid-{}", slot),
                            "championName": "Ahri",
                            "kills": 3,
                            "deaths": 1,
                            "assists": 7,
                            "teamId": 100,
                            "participantId": slot,
                        })).collect::<Vec<_>>(),
                        "gameDuration": 1893,
                    },
                },
                "timeline": {
                    "info": {
                        "frames": (0..frames).map(|i| serde_json::json!({
                            "timestamp": i as u64 * 60_000,
                            "participantFrames": {},
                            "events": [],
                        })).collect::<Vec<_>>(),
                    },
                },
            })
        })
        .bench_values(|value| analysis::bundle::classify(divan::black_box(value)));
}
