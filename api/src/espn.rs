//! Team profile page on the stats site.
//!
//! The record is the first thing in the branding sub-title:
//! `"41-9, 1st in Atlantic Division"`.
use crate::html::{select_text, selector};
use crate::{ApiError, ApiResult, Record};
use scraper::Html;

const PAGE: &str = "team profile";
const SUB_TITLE: &str = "#sub-branding .sub-title";

pub fn parse_record(html: &str) -> ApiResult<Record> {
    let document = Html::parse_document(html);
    let text = select_text(&document, &selector(SUB_TITLE)?).ok_or_else(|| ApiError::Layout {
        page: PAGE,
        detail: format!("{SUB_TITLE} not found"),
    })?;

    let record = text.split(',').next().unwrap_or_default();
    parse_wins_losses(record).ok_or_else(|| ApiError::Layout {
        page: PAGE,
        detail: format!("no W-L record in {text:?}"),
    })
}

fn parse_wins_losses(record: &str) -> Option<Record> {
    let (wins, losses) = record.split_once('-')?;
    Some(Record {
        wins: wins.trim().parse().ok()?,
        losses: losses.trim().parse().ok()?,
    })
}
