// SPDX-License-Identifier: Apache-2.0

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The provider has no credentials; no request was sent.
    NotConfigured(&'static str),
    Transport(String),
    Status(u16),
    Decode(String),
    Timeout,
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotConfigured(provider) => write!(f, "{provider} api key is not configured"),
            Self::Transport(msg) => write!(f, "transport error: {msg}"),
            Self::Status(code) => write!(f, "upstream returned http {code}"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
            Self::Timeout => write!(f, "upstream timed out"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<reqwest::Error> for EngineError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if let Some(status) = e.status() {
            Self::Status(status.as_u16())
        } else if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}
