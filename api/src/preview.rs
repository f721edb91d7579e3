//! Broadcast preview page.
//!
//! URL: `{base}/nba/gametracker/preview/NBA_{YYYYMMDD}_{AWAY}@{HOME}/`. TV feeds
//! sit in table cells led by a bold label: `<td><b>National:</b> ESPN</td>`.
use crate::html::{selector, text_of};
use crate::{ApiResult, Broadcast, Team};
use chrono::NaiveDate;
use scraper::{ElementRef, Html};

/// Feed labels in the order they are listed in a thread.
pub const LABELS: [&str; 3] = ["National", "Away", "Home"];

/// Teams whose code on the preview site differs from the league shortcode.
const SITE_CODES: [(&str, &str); 4] = [("GSW", "GS"), ("NYK", "NY"), ("NOH", "NO"), ("SAS", "SA")];

pub fn site_code(shortcode: &str) -> &str {
    SITE_CODES
        .iter()
        .find(|(league, _)| *league == shortcode)
        .map_or(shortcode, |&(_, site)| site)
}

pub fn preview_url(base: &str, date: NaiveDate, away: &Team, home: &Team) -> String {
    format!(
        "{}/nba/gametracker/preview/NBA_{}_{}@{}/",
        base.trim_end_matches('/'),
        date.format("%Y%m%d"),
        site_code(away.shortcode),
        site_code(home.shortcode),
    )
}

pub fn parse_broadcast(html: &str) -> ApiResult<Broadcast> {
    let document = Html::parse_document(html);
    let bold = selector("td > b")?;

    let labelled: Vec<(String, ElementRef<'_>)> = document
        .select(&bold)
        .filter_map(|b| {
            let cell = b.parent().and_then(ElementRef::wrap)?;
            Some((text_of(b), cell))
        })
        .collect();

    let feeds = LABELS
        .iter()
        .filter_map(|label| {
            let prefix = format!("{label}:");
            labelled
                .iter()
                .find(|(text, _)| text.starts_with(&prefix))
                .map(|(_, cell)| text_of(*cell))
        })
        .collect();

    Ok(Broadcast { feeds })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::find_team;

    fn listing(cells: &[&str]) -> String {
        let cells: String = cells.iter().map(|c| format!("<tr><td>{c}</td></tr>")).collect();
        format!("<html><body><table class=\"tv\">{cells}</table></body></html>")
    }

    #[test]
    fn overridden_codes_are_swapped_and_others_pass_through() {
        assert_eq!(site_code("GSW"), "GS");
        assert_eq!(site_code("SAS"), "SA");
        assert_eq!(site_code("BOS"), "BOS");
        assert_eq!(site_code("LAL"), "LAL");
    }

    #[test]
    fn url_uses_site_codes() {
        let date = NaiveDate::from_ymd_opt(2012, 1, 5).unwrap();
        let url = preview_url(
            "https://www.cbssports.com",
            date,
            find_team("GSW").unwrap(),
            find_team("LAL").unwrap(),
        );
        assert_eq!(url, "https://www.cbssports.com/nba/gametracker/preview/NBA_20120105_GS@LAL/");
    }

    #[test]
    fn all_three_feeds_in_label_order() {
        let html = listing(&["<b>National:</b> ESPN", "<b>Away:</b> CSN Bay Area", "<b>Home:</b> KCAL 9"]);
        let broadcast = parse_broadcast(&html).unwrap();
        assert_eq!(broadcast.feeds, vec!["National: ESPN", "Away: CSN Bay Area", "Home: KCAL 9"]);
        assert_eq!(broadcast.to_string(), "National: ESPN, Away: CSN Bay Area, Home: KCAL 9");
    }

    #[test]
    fn label_order_wins_over_page_order() {
        let html = listing(&["<b>Home:</b> MSG", "<b>National:</b> TNT"]);
        assert_eq!(parse_broadcast(&html).unwrap().feeds, vec!["National: TNT", "Home: MSG"]);
    }

    #[test]
    fn missing_labels_are_skipped() {
        let html = listing(&["<b>Venue:</b> Oracle Arena", "<b>Home:</b> CSN Bay Area"]);
        assert_eq!(parse_broadcast(&html).unwrap().feeds, vec!["Home: CSN Bay Area"]);
        assert!(parse_broadcast("<html></html>").unwrap().is_empty());
    }
}
