//! reqwest-backed JustTCG API client

use crate::cache::TtlCache;
use crate::error::{ClientError, ClientResult};
use crate::{PricingApi, SearchQuery};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tcgsearch_config::UpstreamConfig;
use tcgsearch_core::{Card, Envelope, Game};

/// Header carrying the API key on every upstream request
pub const API_KEY_HEADER: &str = "x-api-key";

const GAMES_PATH: &str = "/v1/games";
const CARDS_PATH: &str = "/v1/cards";

pub struct JustTcgClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    games: TtlCache<Vec<Game>>,
}

impl JustTcgClient {
    pub fn new(config: &UpstreamConfig) -> ClientResult<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if reqwest::Url::parse(&base_url).is_err() {
            return Err(ClientError::InvalidBaseUrl { url: base_url });
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key.clone(),
            games: TtlCache::new(Duration::from_secs(config.games_ttl_secs)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base_url}{path}` and unwrap the `{ data: [...] }` envelope
    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ClientResult<Vec<T>> {
        let url = format!("{}{}", self.base_url, path);
        let transport = |source: reqwest::Error| ClientError::Transport {
            endpoint: path.to_string(),
            source,
        };

        let mut request = self.http.get(&url).header(API_KEY_HEADER, &self.api_key);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        let envelope: Envelope<T> =
            serde_json::from_slice(&body).map_err(|source| ClientError::Decode {
                endpoint: path.to_string(),
                source,
            })?;
        Ok(envelope.into_data())
    }
}

#[async_trait]
impl PricingApi for JustTcgClient {
    async fn games(&self) -> ClientResult<Vec<Game>> {
        self.games
            .get_or_try_fetch(|| async {
                log::debug!(target: "tcgsearch::upstream", "Fetching games list");
                let games: Vec<Game> = self.get_list(GAMES_PATH, &[]).await?;
                log::info!(target: "tcgsearch::upstream", "Loaded {} games", games.len());
                Ok::<_, ClientError>(games)
            })
            .await
    }

    async fn search_cards(&self, query: &SearchQuery) -> ClientResult<Vec<Card>> {
        let mut params: Vec<(&str, &str)> = vec![("q", query.text())];
        if let Some(game) = query.game() {
            params.push(("game", game));
        }

        log::debug!(target: "tcgsearch::upstream", "Searching cards: {:?}", params);
        let cards: Vec<Card> = self.get_list(CARDS_PATH, &params).await?;
        log::debug!(target: "tcgsearch::upstream", "Search returned {} cards", cards.len());
        Ok(cards)
    }
}
