use nba_api::Division;
use std::fmt::Write;

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>r/nba Game Thread Generator</title>
<style>
body { font-family: sans-serif; max-width: 48em; margin: 2em auto; }
select, button { font-size: 1em; margin: 0 .5em .5em 0; }
textarea { width: 100%; font-family: monospace; }
#error { color: #b00; }
</style>
</head>
<body>
<h1>Game Thread Generator</h1>
<form id="matchup" method="post" action="/generate/">
"#;

const TAIL: &str = r#"<button type="submit">Generate</button>
</form>
<p id="error"></p>
<label>Title<br><input id="title" size="80" readonly></label>
<p><label>Body<br><textarea id="body" rows="24" readonly></textarea></label></p>
<p>Drag <a href="javascript:location.href='/reddit-stream/'">reddit-stream</a> to your bookmarks bar
and click it from a game thread to follow the comments live.</p>
<script>
document.getElementById("matchup").addEventListener("submit", async (event) => {
  event.preventDefault();
  const form = new URLSearchParams(new FormData(event.target));
  const reply = await (await fetch("/generate/", { method: "POST", body: form })).json();
  document.getElementById("error").textContent = reply.error || "";
  document.getElementById("title").value = reply.title || "";
  document.getElementById("body").value = reply.body || "";
});
</script>
</body>
</html>
"#;

/// Team picker: one `<select>` per side, teams grouped by division.
pub fn render_home(divisions: &[Division]) -> String {
    let mut page = String::from(HEAD);
    for (field, label) in [("away", "Away"), ("home", "Home")] {
        let _ = writeln!(page, "<label>{label} <select name=\"{field}\">");
        page.push_str("<option value=\"\">Select a team</option>\n");
        for division in divisions {
            let _ = writeln!(page, "<optgroup label=\"{}\">", division.name);
            for team in division.teams {
                let _ = writeln!(page, "<option value=\"{}\">{}</option>", team.shortcode, team.name);
            }
            page.push_str("</optgroup>\n");
        }
        page.push_str("</select></label>\n");
    }
    page.push_str(TAIL);
    page
}
