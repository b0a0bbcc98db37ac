use serde::Deserialize;

#[derive(Debug)]
pub enum FetchError {
    Request(reqwest::Error),
    Status { status: u16, body_prefix: String },
    NotJson { status: u16, body_prefix: String },
}

impl core::fmt::Display for FetchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Request(e) => write!(f, "Upstream request failed: {}", e),
            Self::Status { status, .. } => write!(f, "Upstream returned status {}", status),
            Self::NotJson { status, .. } => write!(f, "Upstream not JSON (status {})", status),
        }
    }
}

#[derive(Debug, Clone)]
pub enum AccountIdentifier {
    RiotId(String),
    NameTag { game_name: String, tag_line: String },
}

#[derive(Debug, Deserialize)]
pub struct AccountResponse {
    pub puuid: String,
}

#[async_trait::async_trait]
pub trait StatsApi: Send + Sync {
    async fn account(&self, identifier: &AccountIdentifier) -> Result<AccountResponse, FetchError>;

    async fn matches(&self, puuid: &str, count: u32) -> Result<Vec<String>, FetchError>;

    async fn match_bundle(
        &self,
        match_id: &str,
        include_timeline: bool,
    ) -> Result<serde_json::Value, FetchError>;
}

pub struct HttpStatsApi {
    http: reqwest::Client,
    base: String,
}

impl HttpStatsApi {
    pub fn new<IS>(base: IS) -> Self
    where
        IS: Into<String>,
    {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }

        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    async fn get_json(
        &self,
        path: &str,
        args: &[(&str, &str)],
    ) -> Result<serde_json::Value, FetchError> {
        let response = self
            .http
            .get(format!("{}{}", self.base, path))
            .query(args)
            .send()
            .await
            .map_err(FetchError::Request)?;

        let status = response.status();
        let text = response.text().await.map_err(FetchError::Request)?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body_prefix: body_prefix(&text),
            });
        }

        serde_json::from_str(&text).map_err(|_| FetchError::NotJson {
            status: status.as_u16(),
            body_prefix: body_prefix(&text),
        })
    }
}

fn body_prefix(body: &str) -> String {
    body.chars().take(400).collect()
}

#[async_trait::async_trait]
impl StatsApi for HttpStatsApi {
    #[tracing::instrument(skip(self))]
    async fn account(&self, identifier: &AccountIdentifier) -> Result<AccountResponse, FetchError> {
        let value = match identifier {
            AccountIdentifier::RiotId(riot_id) => {
                self.get_json("/account", &[("riotId", riot_id.as_str())])
                    .await?
            }
            AccountIdentifier::NameTag {
                game_name,
                tag_line,
            } => {
                self.get_json(
                    "/account",
                    &[
                        ("gameName", game_name.as_str()),
                        ("tagLine", tag_line.as_str()),
                    ],
                )
                .await?
            }
        };

        serde_json::from_value(value.clone()).map_err(|_| FetchError::NotJson {
            status: 200,
            body_prefix: body_prefix(&value.to_string()),
        })
    }

    #[tracing::instrument(skip(self))]
    async fn matches(&self, puuid: &str, count: u32) -> Result<Vec<String>, FetchError> {
        let value = self
            .get_json(
                "/matches",
                &[("puuid", puuid), ("count", &format!("{}", count))],
            )
            .await?;

        serde_json::from_value(value.clone()).map_err(|_| FetchError::NotJson {
            status: 200,
            body_prefix: body_prefix(&value.to_string()),
        })
    }

    #[tracing::instrument(skip(self))]
    async fn match_bundle(
        &self,
        match_id: &str,
        include_timeline: bool,
    ) -> Result<serde_json::Value, FetchError> {
        self.get_json(
            "/match",
            &[
                ("matchId", match_id),
                ("timeline", if include_timeline { "1" } else { "0" }),
            ],
        )
        .await
    }
}
