//! Request flow for `POST /generate/`.
//!
//! resolve teams -> game-info page -> records -> broadcast -> templates.
//! Everything is fetched in sequence and a request either yields a whole
//! thread or a single error message.
use crate::render::{self, Thread, ThreadFields};
use crate::report::ErrorReporter;
use crate::state::messages::Reply;
use chrono::{NaiveDate, Utc};
use chrono_tz::America::Denver;
use log::{debug, info};
use nba_api::{ApiError, GameLookup, GameSource, GameTimes, find_team};
use std::sync::Arc;

pub const SELECT_TEAM: &str = "Please select a team.";
pub const NOT_PLAYING: &str = "These teams don't seem to be playing each other tonight.";
pub const REVERSED: &str = "Looks like you reversed home and away. Try swapping them.";
pub const SOMETHING_WENT_WRONG: &str =
    "Uh oh. Something went wrong on our end. We've dispatched trained monkeys to investigate.";

#[derive(Debug)]
pub enum ThreadError {
    UnknownTeam,
    NotPlaying,
    Reversed,
    Upstream(ApiError),
}

impl From<ApiError> for ThreadError {
    fn from(e: ApiError) -> Self {
        ThreadError::Upstream(e)
    }
}

pub struct Generator {
    source: Arc<dyn GameSource>,
    reporter: Arc<dyn ErrorReporter>,
}

impl Generator {
    pub fn new(source: Arc<dyn GameSource>, reporter: Arc<dyn ErrorReporter>) -> Self {
        Self { source, reporter }
    }

    /// Build tonight's thread. Game day follows Mountain time.
    pub async fn generate(&self, away: &str, home: &str) -> Reply {
        self.generate_on(today(), away, home).await
    }

    /// Every failure is turned into a reply here; upstream faults are reported
    /// and replaced with a generic message.
    pub async fn generate_on(&self, date: NaiveDate, away: &str, home: &str) -> Reply {
        match self.try_generate(date, away, home).await {
            Ok(thread) => {
                info!("generated thread for {away}@{home} on {date}");
                Reply::Thread(thread)
            }
            Err(ThreadError::UnknownTeam) => Reply::error(SELECT_TEAM),
            Err(ThreadError::NotPlaying) => {
                info!("{away}@{home} not scheduled on {date}");
                Reply::error(NOT_PLAYING)
            }
            Err(ThreadError::Reversed) => {
                info!("{away}@{home} on {date} looks reversed");
                Reply::error(REVERSED)
            }
            Err(ThreadError::Upstream(e)) => {
                self.reporter.report(&format!("{away}@{home} on {date}"), &e);
                Reply::error(SOMETHING_WENT_WRONG)
            }
        }
    }

    pub async fn try_generate(
        &self,
        date: NaiveDate,
        away: &str,
        home: &str,
    ) -> Result<Thread, ThreadError> {
        let (Some(away), Some(home)) = (find_team(away), find_team(home)) else {
            return Err(ThreadError::UnknownTeam);
        };

        let info = match self.source.fetch_game_info(date, away, home).await? {
            GameLookup::Scheduled(info) => info,
            GameLookup::NotPlaying => return Err(ThreadError::NotPlaying),
            GameLookup::Reversed => return Err(ThreadError::Reversed),
        };

        let (away_record, home_record) = match info.records {
            Some(records) => {
                debug!("using records from the game-info page");
                records
            }
            None => (
                self.source.fetch_record(away).await?,
                self.source.fetch_record(home).await?,
            ),
        };

        let broadcast = self.source.fetch_broadcast(date, away, home).await?;

        Ok(render::render(&ThreadFields {
            date,
            away,
            home,
            away_record,
            home_record,
            times: GameTimes::from_eastern(info.tip_off),
            stadium: &info.stadium,
            broadcast: &broadcast,
            source_url: &info.source_url,
        }))
    }
}

/// Current date in Mountain time.
pub fn today() -> NaiveDate {
    Utc::now().with_timezone(&Denver).date_naive()
}
