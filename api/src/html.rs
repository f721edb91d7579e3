use crate::{ApiError, ApiResult};
use scraper::{ElementRef, Html, Selector};

pub(crate) fn selector(css: &str) -> ApiResult<Selector> {
    Selector::parse(css).map_err(|e| ApiError::Other(format!("invalid selector {css}: {e:?}")))
}

/// All text under `element`, whitespace runs collapsed to single spaces.
pub(crate) fn text_of(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text of the first match, or `None` when nothing matches or the match is blank.
pub(crate) fn select_text(document: &Html, selector: &Selector) -> Option<String> {
    let text = text_of(document.select(selector).next()?);
    if text.is_empty() { None } else { Some(text) }
}
