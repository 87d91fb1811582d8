//! HTTP transport against a real game server.

use std::time::Duration;

use crate::common::Direction;
use crate::protocol::GameMessage;
use crate::transport::Transport;

/// Default timeout for a single request; the server holds the connection
/// open while other seats move, so this is generous.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// How a game is entered: ranked arena or a private training game.
#[derive(Debug, Clone)]
pub enum Mode {
    Arena,
    Training {
        /// Turns per seat requested from the server.
        turns: i32,
        /// Named map, or let the server pick.
        map: Option<String>,
    },
}

pub struct HttpTransport {
    client: reqwest::Client,
    server: String,
    key: String,
    mode: Mode,
    play_url: Option<String>,
}

impl HttpTransport {
    pub fn new(
        server: impl Into<String>,
        key: impl Into<String>,
        mode: Mode,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            server: server.into(),
            key: key.into(),
            mode,
            play_url: None,
        })
    }

    async fn post(&self, url: &str, params: &[(&str, String)]) -> anyhow::Result<GameMessage> {
        let response = self.client.post(url).form(params).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("server replied {}: {}", status, body.trim());
        }
        Ok(response.json().await?)
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn start(&mut self) -> anyhow::Result<GameMessage> {
        let (end_point, params) = match &self.mode {
            Mode::Arena => ("api/arena", vec![("key", self.key.clone())]),
            Mode::Training { turns, map } => {
                let mut params = vec![("key", self.key.clone()), ("turns", turns.to_string())];
                if let Some(map) = map {
                    params.push(("map", map.clone()));
                }
                ("api/training", params)
            }
        };

        let url = format!("{}/{}", self.server.trim_end_matches('/'), end_point);
        let message = self.post(&url, &params).await?;
        self.play_url = Some(message.play_url.clone());
        Ok(message)
    }

    async fn play(&mut self, direction: Direction) -> anyhow::Result<GameMessage> {
        let play_url = self
            .play_url
            .clone()
            .ok_or_else(|| anyhow::anyhow!("no game in progress; call start first"))?;
        let params = [
            ("key", self.key.clone()),
            ("dir", direction.as_str().to_string()),
        ];
        self.post(&play_url, &params).await
    }
}
