use crate::render::Thread;
use serde::{Deserialize, Serialize};

/// Form body of `POST /generate/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub away: String,
    #[serde(default)]
    pub home: String,
}

/// JSON body of `POST /generate/`: either `{title, body}` or `{error}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Thread(Thread),
    Error { error: String },
}

impl Reply {
    pub fn error(message: impl Into<String>) -> Self {
        Reply::Error { error: message.into() }
    }
}
