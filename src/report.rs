//! Where request faults go before the caller gets the generic apology.
use log::error;
use nba_api::ApiError;

pub trait ErrorReporter: Send + Sync {
    fn report(&self, context: &str, error: &ApiError);
}

/// Reports through the `log` facade, tagged with the tracking project's host when a DSN is set.
#[derive(Debug, Default)]
pub struct LogReporter {
    dsn_host: Option<String>,
}

impl LogReporter {
    pub fn new(dsn: Option<&str>) -> Self {
        Self { dsn_host: dsn.and_then(dsn_host) }
    }

    fn line(&self, context: &str, err: &ApiError) -> String {
        let sink = self.dsn_host.as_deref().unwrap_or("local");
        if err.is_layout() {
            format!("[{sink}] {context}: page layout changed: {err}")
        } else {
            format!("[{sink}] {context}: {err}")
        }
    }
}

impl ErrorReporter for LogReporter {
    fn report(&self, context: &str, err: &ApiError) {
        error!(target: "gamethread::report", "{}", self.line(context, err));
    }
}

/// Host part of a DSN such as `https://public@o1.ingest.example.io/42`.
fn dsn_host(dsn: &str) -> Option<String> {
    let (_, rest) = dsn.split_once("://")?;
    let rest = rest.rsplit_once('@').map_or(rest, |(_, host)| host);
    let host = rest.split(['/', '?']).next()?;
    (!host.is_empty()).then(|| host.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dsn_host_drops_key_and_project() {
        assert_eq!(
            dsn_host("https://abc123@o99.ingest.example.io/4501").as_deref(),
            Some("o99.ingest.example.io")
        );
        assert_eq!(dsn_host("http://sentry.local:9000/2").as_deref(), Some("sentry.local:9000"));
    }

    #[test]
    fn malformed_dsn_has_no_host() {
        assert_eq!(dsn_host("not a dsn"), None);
        assert_eq!(dsn_host("https:///1"), None);
    }

    #[test]
    fn reporter_without_dsn_tags_lines_local() {
        let reporter = LogReporter::new(None);
        assert_eq!(
            reporter.line("BOS@NYK", &ApiError::Other("boom".into())),
            "[local] BOS@NYK: Error: boom"
        );
    }

    #[test]
    fn reporter_with_dsn_tags_lines_with_its_host() {
        let reporter = LogReporter::new(Some("https://abc123@o99.ingest.example.io/4501"));
        let line = reporter.line("GSW@LAL", &ApiError::NotFound("no profile page for GSW".into()));
        assert_eq!(line, "[o99.ingest.example.io] GSW@LAL: Not found: no profile page for GSW");
    }

    #[test]
    fn layout_faults_are_called_out() {
        let reporter = LogReporter::new(None);
        let err = ApiError::Layout { page: "preview", detail: "no td > b cells".into() };
        let line = reporter.line("GSW@LAL", &err);
        assert!(line.starts_with("[local] GSW@LAL: page layout changed: "), "{line}");
        assert!(line.contains("Unexpected preview page layout: no td > b cells"));
        assert!(!reporter.line("GSW@LAL", &ApiError::Other("x".into())).contains("layout"));
    }
}
