pub mod client;
pub mod espn;
mod html;
pub mod nba;
pub mod preview;
pub mod teams;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, TimeDelta};
use std::fmt;

pub use client::{ApiError, ApiResult, Endpoints, NbaApi};
pub use teams::{DIVISIONS, find_team};

// ---------------------------------------------------------------------------
// Domain types: clean model, independent of the scraped page layouts
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct Division {
    pub name: &'static str,
    pub teams: &'static [Team],
}

#[derive(Debug, PartialEq, Eq)]
pub struct Team {
    pub name: &'static str,      // "Boston Celtics"
    pub shortcode: &'static str, // "BOS"
    pub subreddit: Option<&'static str>,
    /// Path of the team page on the profile site, e.g. "bos/boston-celtics".
    pub profile_path: Option<&'static str>,
}

impl Team {
    /// Absolute profile page URL on the given site base.
    pub fn profile_url(&self, base: &str) -> Option<String> {
        self.profile_path
            .map(|path| format!("{}/nba/team/_/name/{path}", base.trim_end_matches('/')))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.wins, self.losses)
    }
}

/// Tip-off and venue as read from the league's game-info page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInfo {
    pub tip_off: NaiveTime,
    pub stadium: String,
    pub source_url: String,
    /// (away, home) records, only present on pages that embed them.
    pub records: Option<(Record, Record)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameLookup {
    Scheduled(GameInfo),
    /// The league has no page for this matchup today.
    NotPlaying,
    /// The page exists but has no tip-off block; usually home and away were swapped.
    Reversed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Broadcast {
    pub feeds: Vec<String>, // "National: ESPN", "Away: CSN", "Home: MSG"
}

impl Broadcast {
    pub fn is_empty(&self) -> bool {
        self.feeds.is_empty()
    }
}

impl fmt::Display for Broadcast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.feeds.join(", "))
    }
}

/// Tip-off shown in the four mainland zones.
///
/// Zones are fixed offsets from Eastern; daylight saving is not taken into account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTimes {
    pub eastern: String,
    pub central: String,
    pub mountain: String,
    pub pacific: String,
}

impl GameTimes {
    pub fn from_eastern(tip_off: NaiveTime) -> Self {
        Self {
            eastern: sub_hours(tip_off, 0),
            central: sub_hours(tip_off, 1),
            mountain: sub_hours(tip_off, 2),
            pacific: sub_hours(tip_off, 3),
        }
    }
}

/// Shift back by whole hours (wrapping past midnight) and format as 12-hour `hh:mm`.
fn sub_hours(time: NaiveTime, hours: i64) -> String {
    (time - TimeDelta::hours(hours)).format("%I:%M").to_string()
}

// ---------------------------------------------------------------------------
// Scraper seam
// ---------------------------------------------------------------------------

/// The three external pages a game thread is assembled from.
///
/// Each site's selectors live behind this trait so they can change without
/// touching the request flow, and so the flow can be tested against fixtures.
#[async_trait]
pub trait GameSource: Send + Sync {
    async fn fetch_game_info(
        &self,
        date: NaiveDate,
        away: &'static Team,
        home: &'static Team,
    ) -> ApiResult<GameLookup>;

    async fn fetch_record(&self, team: &'static Team) -> ApiResult<Record>;

    async fn fetch_broadcast(
        &self,
        date: NaiveDate,
        away: &'static Team,
        home: &'static Team,
    ) -> ApiResult<Broadcast>;
}
