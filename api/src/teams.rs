//! The league's thirty teams, grouped by division as they appear on the picker page.
use crate::{Division, Team};

const fn team(
    name: &'static str,
    shortcode: &'static str,
    subreddit: Option<&'static str>,
    profile_path: Option<&'static str>,
) -> Team {
    Team { name, shortcode, subreddit, profile_path }
}

pub static DIVISIONS: [Division; 6] = [
    Division {
        name: "Atlantic",
        teams: &[
            team("Boston Celtics", "BOS", Some("bostonceltics"), Some("bos/boston-celtics")),
            team("New Jersey Nets", "NJN", Some("GoNets"), Some("nj/new-jersey-nets")),
            team("New York Knicks", "NYK", Some("NYKnicks"), Some("ny/new-york-knicks")),
            team("Philadelphia 76ers", "PHI", Some("sixers"), Some("phi/philadelphia-76ers")),
            team("Toronto Raptors", "TOR", Some("torontoraptors"), Some("tor/toronto-raptors")),
        ],
    },
    Division {
        name: "Central",
        teams: &[
            team("Chicago Bulls", "CHI", Some("chicagobulls"), Some("chi/chicago-bulls")),
            team("Cleveland Cavaliers", "CLE", Some("clevelandcavs"), Some("cle/cleveland-cavaliers")),
            team("Detroit Pistons", "DET", Some("DetroitPistons"), Some("det/detroit-pistons")),
            team("Indiana Pacers", "IND", Some("pacers"), Some("ind/indiana-pacers")),
            team("Milwaukee Bucks", "MIL", Some("MkeBucks"), Some("mil/milwaukee-bucks")),
        ],
    },
    Division {
        name: "Southeast",
        teams: &[
            team("Atlanta Hawks", "ATL", Some("AtlantaHawks"), Some("atl/atlanta-hawks")),
            team("Charlotte Bobcats", "CHA", Some("CharlotteBobcats"), Some("cha/charlotte-bobcats")),
            team("Miami Heat", "MIA", Some("heat"), Some("mia/miami-heat")),
            team("Orlando Magic", "ORL", Some("OrlandoMagic"), Some("orl/orlando-magic")),
            team("Washington Wizards", "WAS", Some("washingtonwizards"), Some("wsh/washington-wizards")),
        ],
    },
    Division {
        name: "Pacific",
        teams: &[
            team("Golden State Warriors", "GSW", Some("warriors"), Some("gs/golden-state-warriors")),
            team("Los Angeles Clippers", "LAC", Some("LAClippers"), Some("lac/los-angeles-clippers")),
            team("Los Angeles Lakers", "LAL", Some("lakers"), Some("lal/los-angeles-lakers")),
            team("Phoenix Suns", "PHX", Some("suns"), Some("phx/phoenix-suns")),
            team("Sacramento Kings", "SAC", Some("kings"), Some("sac/sacramento-kings")),
        ],
    },
    Division {
        name: "Southwest",
        teams: &[
            team("Dallas Mavericks", "DAL", Some("Mavericks"), Some("dal/dallas-mavericks")),
            team("Houston Rockets", "HOU", Some("rockets"), Some("hou/houston-rockets")),
            team("Memphis Grizzlies", "MEM", Some("memphisgrizzlies"), Some("mem/memphis-grizzlies")),
            team("New Orleans Hornets", "NOH", Some("Hornets"), Some("no/new-orleans-hornets")),
            team("San Antonio Spurs", "SAS", Some("NBASpurs"), Some("sa/san-antonio-spurs")),
        ],
    },
    Division {
        name: "Northwest",
        teams: &[
            team("Denver Nuggets", "DEN", Some("denvernuggets"), Some("den/denver-nuggets")),
            team("Minnesota Timberwolves", "MIN", Some("timberwolves"), Some("min/minnesota-timberwolves")),
            team("Oklahoma City Thunder", "OKC", Some("Thunder"), Some("okc/oklahoma-city-thunder")),
            team("Portland Trail Blazers", "POR", Some("ripcity"), Some("por/portland-trail-blazers")),
            team("Utah Jazz", "UTA", Some("UtahJazz"), Some("utah/utah-jazz")),
        ],
    },
];

pub fn all_teams() -> impl Iterator<Item = &'static Team> {
    DIVISIONS.iter().flat_map(|division| division.teams.iter())
}

/// Look up a team by its three-letter shortcode.
pub fn find_team(shortcode: &str) -> Option<&'static Team> {
    let shortcode = shortcode.trim();
    all_teams().find(|team| team.shortcode == shortcode)
}
