//! Fixed replies used when the AI guide cannot answer.

use serde::Serialize;

/// Why the assistant answered with a canned reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReply {
    /// No API credential was configured at startup
    NoCredential,
    /// The request failed (network, quota, malformed response, ...)
    RequestFailed,
    /// The model returned no text
    EmptyResponse,
}

impl FallbackReply {
    pub fn text(&self) -> &'static str {
        match self {
            FallbackReply::NoCredential => {
                "I'm sorry, but I cannot connect to the Prague Guide AI at the moment. Please check your connection or API key."
            }
            FallbackReply::RequestFailed => {
                "Sorry, I'm having trouble accessing the guide database right now."
            }
            FallbackReply::EmptyResponse => "I couldn't generate a response. Please try again.",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackReply::NoCredential => "no_credential",
            FallbackReply::RequestFailed => "request_failed",
            FallbackReply::EmptyResponse => "empty_response",
        }
    }
}
