//! Invocation response envelope
//!
//! Every invocation answers with an HTTP-style status and a JSON body
//! serialized to a string: `{"message": ...}` on success and
//! `{"error": ...}` on failure.

use serde::{Deserialize, Serialize};

/// Response returned to the runtime for every invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

#[derive(Serialize)]
struct MessageBody<'a> {
    message: &'a str,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl InvocationResponse {
    pub const STATUS_OK: u16 = 200;
    pub const STATUS_ERROR: u16 = 500;

    pub fn success(message: &str) -> Self {
        Self {
            status_code: Self::STATUS_OK,
            body: encode_body(&MessageBody { message }),
        }
    }

    pub fn failure(error: &str) -> Self {
        Self {
            status_code: Self::STATUS_ERROR,
            body: encode_body(&ErrorBody { error }),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == Self::STATUS_OK
    }
}

fn encode_body<T: Serialize>(body: &T) -> String {
    // A struct of string fields always serializes; keep a valid body regardless.
    serde_json::to_string(body).unwrap_or_else(|_| String::from("{}"))
}
