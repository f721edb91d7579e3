use crate::{Broadcast, GameInfo, GameLookup, GameSource, Record, Team, espn, nba, preview};
use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, warn};
use reqwest::{Client, Response, StatusCode, redirect};
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

pub const NBA_BASE: &str = "http://www.nba.com";
pub const ESPN_BASE: &str = "http://espn.go.com";
pub const PREVIEW_BASE: &str = "https://www.cbssports.com";

const USER_AGENT: &str = "gamethread/0.1 (r/nba game thread generator)";

/// Base URLs of the three scraped sites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub nba: String,
    pub espn: String,
    pub preview: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            nba: NBA_BASE.into(),
            espn: ESPN_BASE.into(),
            preview: PREVIEW_BASE.into(),
        }
    }
}

/// Scraping client for the league, profile and preview sites.
#[derive(Debug, Clone)]
pub struct NbaApi {
    client: Client,
    /// The preview site answers a missing or moved game with a redirect,
    /// which must surface instead of being followed.
    no_redirect: Client,
    endpoints: Endpoints,
    timeout: Duration,
}

#[derive(Debug)]
pub enum ApiError {
    Client(reqwest::Error),
    Network(reqwest::Error, String),
    Status(StatusCode, String),
    Parsing(reqwest::Error, String),
    /// The page loaded but no longer has the shape the selectors expect.
    Layout { page: &'static str, detail: String },
    NotFound(String),
    Other(String),
}

impl ApiError {
    pub fn is_layout(&self) -> bool {
        matches!(self, ApiError::Layout { .. })
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Client(e) => write!(f, "Could not build HTTP client: {e}"),
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Status(status, url) => write!(f, "Unexpected status {status} for {url}"),
            ApiError::Parsing(e, url) => write!(f, "Could not read body of {url}: {e}"),
            ApiError::Layout { page, detail } => write!(f, "Unexpected {page} page layout: {detail}"),
            ApiError::NotFound(msg) => write!(f, "Not found: {msg}"),
            ApiError::Other(msg) => write!(f, "Error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Client(e) | ApiError::Network(e, _) | ApiError::Parsing(e, _) => Some(e),
            _ => None,
        }
    }
}

impl NbaApi {
    pub fn new(endpoints: Endpoints, timeout: Duration) -> ApiResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(ApiError::Client)?;
        let no_redirect = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(redirect::Policy::none())
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self { client, no_redirect, endpoints, timeout })
    }

    async fn send(&self, client: &Client, url: &str) -> ApiResult<Response> {
        debug!("GET {url}");
        client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))
    }
}

/// Body of a 2xx response; any other status, redirects included, is an error.
async fn html_body(response: Response, url: &str) -> ApiResult<String> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status, url.to_owned()));
    }
    response
        .text()
        .await
        .map_err(|e| ApiError::Parsing(e, url.to_owned()))
}

#[async_trait]
impl GameSource for NbaApi {
    async fn fetch_game_info(
        &self,
        date: NaiveDate,
        away: &'static Team,
        home: &'static Team,
    ) -> ApiResult<GameLookup> {
        let url = nba::game_info_url(&self.endpoints.nba, date, away, home);
        let response = self.send(&self.client, &url).await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!("no game page for {}@{} on {date}", away.shortcode, home.shortcode);
            return Ok(GameLookup::NotPlaying);
        }

        let html = html_body(response, &url).await?;
        Ok(match nba::parse_game_info(&html)? {
            Some(page) => GameLookup::Scheduled(GameInfo {
                tip_off: page.tip_off,
                stadium: page.stadium,
                source_url: url,
                records: page.records,
            }),
            None => GameLookup::Reversed,
        })
    }

    async fn fetch_record(&self, team: &'static Team) -> ApiResult<Record> {
        let url = team
            .profile_url(&self.endpoints.espn)
            .ok_or_else(|| ApiError::NotFound(format!("no profile page for {}", team.shortcode)))?;
        let response = self.send(&self.client, &url).await?;
        let html = html_body(response, &url).await?;
        espn::parse_record(&html)
    }

    async fn fetch_broadcast(
        &self,
        date: NaiveDate,
        away: &'static Team,
        home: &'static Team,
    ) -> ApiResult<Broadcast> {
        let url = preview::preview_url(&self.endpoints.preview, date, away, home);
        let response = self.send(&self.no_redirect, &url).await?;
        if response.status().is_redirection() {
            warn!("preview page for {}@{} redirected; game moved or missing", away.shortcode, home.shortcode);
        }
        let html = html_body(response, &url).await?;
        preview::parse_broadcast(&html)
    }
}
