//! League game-info page.
//!
//! URL: `{base}/games/{YYYYMMDD}/{AWAY}{HOME}/gameinfo.html`. The tip-off block
//! reads `"7:30 pm - Example Arena"`. On game day the scoreboard header also
//! carries each side's record, which saves two profile-page fetches.
use crate::html::{select_text, selector};
use crate::{ApiError, ApiResult, Record, Team};
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use scraper::Html;
use std::sync::LazyLock;

const PAGE: &str = "game info";
const TIP_OFF: &str = "#nbaGIStation .nbaGITime";
const AWAY_RECORD: &str = ".nbaGIAwayRecord";
const HOME_RECORD: &str = ".nbaGIHomeRecord";

static RECORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)-(\d+)").expect("record pattern compiles"));

pub fn game_info_url(base: &str, date: NaiveDate, away: &Team, home: &Team) -> String {
    format!(
        "{}/games/{}/{}{}/gameinfo.html",
        base.trim_end_matches('/'),
        date.format("%Y%m%d"),
        away.shortcode,
        home.shortcode,
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInfoPage {
    pub tip_off: NaiveTime,
    pub stadium: String,
    pub records: Option<(Record, Record)>,
}

/// `Ok(None)` when the tip-off block is missing from an otherwise valid page.
pub fn parse_game_info(html: &str) -> ApiResult<Option<GameInfoPage>> {
    let document = Html::parse_document(html);
    let Some(info) = select_text(&document, &selector(TIP_OFF)?) else {
        return Ok(None);
    };

    let (time, stadium) = info.split_once('-').ok_or_else(|| ApiError::Layout {
        page: PAGE,
        detail: format!("expected \"<time> - <stadium>\" in {TIP_OFF}, got {info:?}"),
    })?;

    let stadium = stadium.trim();
    if stadium.is_empty() {
        return Err(ApiError::Layout {
            page: PAGE,
            detail: format!("no stadium in {info:?}"),
        });
    }

    Ok(Some(GameInfoPage {
        tip_off: parse_tip_off(time)?,
        stadium: stadium.to_owned(),
        records: embedded_records(&document)?,
    }))
}

/// Parse a tip-off such as `7:30 pm`, `7:30PM`, `7:30 p.m. ET` or `19:30`.
pub fn parse_tip_off(raw: &str) -> ApiResult<NaiveTime> {
    let upper = raw.replace('.', "").to_ascii_uppercase();
    let cleaned = upper
        .split_whitespace()
        .filter(|token| !matches!(*token, "ET" | "EST" | "EDT"))
        .collect::<Vec<_>>()
        .join(" ");

    ["%I:%M %p", "%I:%M%p", "%H:%M"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(&cleaned, fmt).ok())
        .ok_or_else(|| ApiError::Layout {
            page: PAGE,
            detail: format!("unrecognised tip-off time {raw:?}"),
        })
}

/// Pull `W-L` out of text like `"(12-3)"` or `"Record: 12-3"`.
pub fn parse_record(text: &str) -> Option<Record> {
    let caps = RECORD_PATTERN.captures(text)?;
    Some(Record {
        wins: caps[1].parse().ok()?,
        losses: caps[2].parse().ok()?,
    })
}

/// Both header records, or `None` unless both are present and readable.
fn embedded_records(document: &Html) -> ApiResult<Option<(Record, Record)>> {
    let away = select_text(document, &selector(AWAY_RECORD)?).and_then(|t| parse_record(&t));
    let home = select_text(document, &selector(HOME_RECORD)?).and_then(|t| parse_record(&t));
    Ok(away.zip(home))
}
