//! Title and body templates for a game thread.
use chrono::NaiveDate;
use nba_api::{Broadcast, GameTimes, Record, Team};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thread {
    pub title: String,
    pub body: String,
}

/// Everything the templates read.
#[derive(Debug, Clone)]
pub struct ThreadFields<'a> {
    pub date: NaiveDate,
    pub away: &'a Team,
    pub home: &'a Team,
    pub away_record: Record,
    pub home_record: Record,
    pub times: GameTimes,
    pub stadium: &'a str,
    pub broadcast: &'a Broadcast,
    pub source_url: &'a str,
}

pub fn render(fields: &ThreadFields<'_>) -> Thread {
    Thread {
        title: render_title(fields),
        body: render_body(fields),
    }
}

pub fn render_title(f: &ThreadFields<'_>) -> String {
    format!(
        "GAME THREAD: {} ({}) @ {} ({}) - ({})",
        f.away.name,
        f.away_record,
        f.home.name,
        f.home_record,
        f.date.format("%B %-d, %Y"),
    )
}

pub fn render_body(f: &ThreadFields<'_>) -> String {
    let media = if f.broadcast.is_empty() {
        "No TV listing".to_owned()
    } else {
        f.broadcast.to_string()
    };

    let mut body = String::new();
    let _ = writeln!(body, "**{} ({})** @ **{} ({})**", f.away.name, f.away_record, f.home.name, f.home_record);
    body.push('\n');
    body.push_str("##General Information\n\n");
    body.push_str("|**TIME**|**MEDIA**|**LOCATION**|\n");
    body.push_str("|:--|:--|:--|\n");
    let _ = writeln!(body, "|{} Eastern|{media}|{}|", f.times.eastern, f.stadium);
    let _ = writeln!(body, "|{} Central| | |", f.times.central);
    let _ = writeln!(body, "|{} Mountain| | |", f.times.mountain);
    let _ = writeln!(body, "|{} Pacific| | |", f.times.pacific);
    body.push('\n');

    let subreddits: Vec<&str> = [f.away, f.home].iter().filter_map(|t| t.subreddit).collect();
    if !subreddits.is_empty() {
        body.push_str("|**Team Subreddits**|\n|:--|\n");
        for sub in subreddits {
            let _ = writeln!(body, "|[/r/{sub}](/r/{sub})|");
        }
        body.push('\n');
    }

    body.push_str("-----\n\n");
    let _ = writeln!(body, "[Game info]({})", f.source_url);
    body
}
