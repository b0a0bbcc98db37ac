use crate::upstream::StatsApi;
use std::sync::Arc;

pub struct ApiState {
    pub upstream: Arc<dyn StatsApi>,
    pub default_count: u32,
}

#[derive(Debug, serde::Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_prefix: Option<String>,
}

impl ErrorBody {
    fn bad_request<IS>(error: IS) -> (axum::http::StatusCode, axum::Json<Self>)
    where
        IS: Into<String>,
    {
        (
            axum::http::StatusCode::BAD_REQUEST,
            axum::Json(Self {
                error: error.into(),
                body_prefix: None,
            }),
        )
    }
}

fn fetch_error(error: crate::upstream::FetchError) -> (axum::http::StatusCode, axum::Json<ErrorBody>) {
    use crate::upstream::FetchError;

    tracing::error!("Upstream fetch: {}", error);

    match error {
        FetchError::Request(_) => (
            axum::http::StatusCode::BAD_GATEWAY,
            axum::Json(ErrorBody {
                error: "Upstream request failed".to_owned(),
                body_prefix: None,
            }),
        ),
        FetchError::Status {
            status,
            body_prefix,
        } => (
            axum::http::StatusCode::from_u16(status)
                .unwrap_or(axum::http::StatusCode::BAD_GATEWAY),
            axum::Json(ErrorBody {
                error: format!("Upstream returned status {}", status),
                body_prefix: Some(body_prefix),
            }),
        ),
        FetchError::NotJson {
            status,
            body_prefix,
        } => (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            axum::Json(ErrorBody {
                error: format!("Upstream not JSON (status {})", status),
                body_prefix: Some(body_prefix),
            }),
        ),
    }
}

pub mod account {
    use super::{ApiState, ErrorBody};
    use crate::upstream::AccountIdentifier;
    use axum::extract::{Query, State};
    use std::sync::Arc;

    pub fn router(state: Arc<ApiState>) -> axum::Router {
        axum::Router::new()
            .route("/account", axum::routing::get(lookup))
            .with_state(state)
    }

    #[derive(Debug, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct AccountParams {
        riot_id: Option<String>,
        game_name: Option<String>,
        tag_line: Option<String>,
    }

    #[tracing::instrument(skip(state))]
    async fn lookup(
        State(state): State<Arc<ApiState>>,
        Query(params): Query<AccountParams>,
    ) -> Result<axum::Json<common::AccountView>, (axum::http::StatusCode, axum::Json<ErrorBody>)>
    {
        let identifier = match (params.riot_id, params.game_name, params.tag_line) {
            (Some(riot_id), _, _) => AccountIdentifier::RiotId(riot_id),
            (None, Some(game_name), Some(tag_line)) => AccountIdentifier::NameTag {
                game_name,
                tag_line,
            },
            _ => return Err(ErrorBody::bad_request("Missing riotId or gameName+tagLine")),
        };

        let account = state
            .upstream
            .account(&identifier)
            .await
            .map_err(super::fetch_error)?;

        Ok(axum::Json(common::AccountView {
            puuid: account.puuid,
        }))
    }
}

pub mod matches {
    use super::{ApiState, ErrorBody};
    use axum::extract::{Query, State};
    use std::sync::Arc;

    pub fn router(state: Arc<ApiState>) -> axum::Router {
        axum::Router::new()
            .route("/matches", axum::routing::get(list))
            .with_state(state)
    }

    #[derive(Debug, serde::Deserialize)]
    struct ListParams {
        puuid: Option<String>,
        count: Option<u32>,
    }

    #[tracing::instrument(skip(state))]
    async fn list(
        State(state): State<Arc<ApiState>>,
        Query(params): Query<ListParams>,
    ) -> Result<axum::Json<Vec<String>>, (axum::http::StatusCode, axum::Json<ErrorBody>)> {
        let puuid = match params.puuid {
            Some(p) => p,
            None => return Err(ErrorBody::bad_request("Missing puuid")),
        };
        let count = params.count.unwrap_or(state.default_count);

        let ids = state
            .upstream
            .matches(&puuid, count)
            .await
            .map_err(super::fetch_error)?;

        Ok(axum::Json(ids))
    }
}

pub mod review {
    use super::{ApiState, ErrorBody};
    use analysis::bundle::Participant;
    use analysis::roster::FallbackPolicy;
    use axum::extract::{Query, State};
    use std::sync::Arc;

    pub fn router(state: Arc<ApiState>) -> axum::Router {
        axum::Router::new()
            .route("/match", axum::routing::get(fetch))
            .route("/match/review", axum::routing::get(review))
            .with_state(state)
    }

    #[derive(Debug, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct MatchParams {
        match_id: Option<String>,
        timeline: Option<String>,
    }

    // Pass-through of the upstream payload, gated on it actually being a
    // readable match or match bundle.
    #[tracing::instrument(skip(state))]
    async fn fetch(
        State(state): State<Arc<ApiState>>,
        Query(params): Query<MatchParams>,
    ) -> Result<axum::Json<serde_json::Value>, (axum::http::StatusCode, axum::Json<ErrorBody>)>
    {
        let match_id = match params.match_id {
            Some(id) => id,
            None => return Err(ErrorBody::bad_request("Missing matchId")),
        };
        let include_timeline = params.timeline.as_deref().unwrap_or("1") != "0";

        let value = state
            .upstream
            .match_bundle(&match_id, include_timeline)
            .await
            .map_err(super::fetch_error)?;

        if let Err(e) = analysis::bundle::classify(value.clone()) {
            tracing::warn!("Unreadable match {}: {}", match_id, e);
            return Err((
                axum::http::StatusCode::NOT_FOUND,
                axum::Json(ErrorBody {
                    error: format!("{}", e),
                    body_prefix: None,
                }),
            ));
        }

        Ok(axum::Json(value))
    }

    #[derive(Debug, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct ReviewParams {
        match_id: Option<String>,
        puuid: Option<String>,
        selected: Option<u64>,
        canvas_width: Option<f64>,
        canvas_height: Option<f64>,
        filtered_only: Option<bool>,
    }

    #[tracing::instrument(skip(state))]
    async fn review(
        State(state): State<Arc<ApiState>>,
        Query(params): Query<ReviewParams>,
    ) -> Result<axum::Json<common::MatchReview>, (axum::http::StatusCode, axum::Json<ErrorBody>)>
    {
        let match_id = match params.match_id {
            Some(id) => id,
            None => return Err(ErrorBody::bad_request("Missing matchId")),
        };

        let value = state
            .upstream
            .match_bundle(&match_id, true)
            .await
            .map_err(super::fetch_error)?;

        let payload = analysis::bundle::classify(value).map_err(|e| {
            tracing::warn!("Unreadable match {}: {}", match_id, e);
            (
                axum::http::StatusCode::NOT_FOUND,
                axum::Json(ErrorBody {
                    error: format!("{}", e),
                    body_prefix: None,
                }),
            )
        })?;

        let timeline = analysis::timeline::build(
            &payload,
            params.puuid.as_deref(),
            FallbackPolicy::LowestSlot,
        )
        .ok_or_else(|| {
            (
                axum::http::StatusCode::NOT_FOUND,
                axum::Json(ErrorBody {
                    error: "Match has no participants".to_owned(),
                    body_prefix: None,
                }),
            )
        })?;

        let canvas_width = params.canvas_width.unwrap_or(560.0);
        let canvas_height = params.canvas_height.unwrap_or(560.0);
        let points = analysis::projection::project(
            &timeline.trace,
            params.selected,
            canvas_width,
            canvas_height,
            params.filtered_only.unwrap_or(false),
        );

        let record = payload.record();

        Ok(axum::Json(common::MatchReview {
            match_id: record.metadata.match_id.clone(),
            duration_seconds: record.info.game_duration,
            started_at: chrono::DateTime::from_timestamp_millis(record.info.game_start_timestamp)
                .unwrap_or_default(),
            scoreboard: scoreboard(&record.info.participants),
            player: participant_view(&timeline.participant),
            used_fallback: timeline.used_fallback,
            moments: timeline.moments.iter().map(moment_view).collect(),
            points: points
                .into_iter()
                .map(|p| common::MapPoint {
                    x: p.x,
                    y: p.y,
                    highlighted: p.highlighted,
                    timestamp_millis: p.source_timestamp,
                })
                .collect(),
        }))
    }

    fn scoreboard(participants: &[Participant]) -> common::Scoreboard {
        let mut teams = std::collections::BTreeMap::<u32, Vec<common::ScoreboardPlayer>>::new();
        for participant in participants.iter() {
            teams
                .entry(participant.team_id)
                .or_default()
                .push(common::ScoreboardPlayer {
                    puuid: participant.puuid.clone(),
                    champion: participant.champion_name.clone(),
                    kills: participant.kills,
                    deaths: participant.deaths,
                    assists: participant.assists,
                });
        }

        common::Scoreboard {
            teams: teams.into_iter().collect(),
        }
    }

    fn participant_view(participant: &Participant) -> common::ReviewParticipant {
        common::ReviewParticipant {
            puuid: participant.puuid.clone(),
            champion: participant.champion_name.clone(),
            participant_id: participant.participant_id,
            team_id: participant.team_id,
            kills: participant.kills,
            deaths: participant.deaths,
            assists: participant.assists,
        }
    }

    fn moment_view(moment: &analysis::moments::Moment) -> common::ReviewMoment {
        common::ReviewMoment {
            timestamp_millis: moment.timestamp,
            kind: moment_kind(moment.kind),
            description: moment.description().to_owned(),
            raw_type: moment.raw_type.clone(),
            position: moment.position.map(|p| (p.x, p.y)),
        }
    }

    fn moment_kind(kind: analysis::moments::MomentKind) -> common::MomentKind {
        use analysis::moments::MomentKind;

        match kind {
            MomentKind::Kill => common::MomentKind::Kill,
            MomentKind::Death => common::MomentKind::Death,
            MomentKind::Objective => common::MomentKind::Objective,
            MomentKind::ItemPurchase => common::MomentKind::ItemPurchase,
            MomentKind::Unclassified => common::MomentKind::Unclassified,
        }
    }
}

pub fn router(state: Arc<ApiState>) -> axum::Router {
    axum::Router::new()
        .merge(account::router(state.clone()))
        .merge(matches::router(state.clone()))
        .merge(review::router(state))
}
