//! Registration submission backend
//!
//! One awaited async call returning an outcome variant. The default backend
//! simulates the registration endpoint with a fixed latency; setting
//! `DEMANDGENX_REGISTER_URL` switches to a real HTTP POST carrying the
//! JSON-encoded registration. Every failure mode is folded into
//! `SubmissionOutcome::Failure` so nothing propagates past the submit
//! boundary.

use crate::constants::SUBMIT_LATENCY_MS;
use crate::form::{self, RegistrationInput};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Terminal result of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success { user_id: String },
    Failure { reason: String },
}

/// Expected response body from a real registration endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegisterResponse {
    success: bool,
    message: Option<String>,
    user_id: Option<String>,
}

#[derive(Debug, Clone)]
pub enum RegistrationApi {
    /// In-process stand-in for the registration endpoint.
    Simulated { latency: Duration },
    /// Real deployment path: JSON POST to `endpoint`.
    Http {
        client: reqwest::Client,
        endpoint: String,
    },
}

impl RegistrationApi {
    pub fn simulated() -> Self {
        Self::Simulated {
            latency: Duration::from_millis(SUBMIT_LATENCY_MS),
        }
    }

    pub fn http(endpoint: String) -> Self {
        Self::Http {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    pub async fn submit(&self, input: &RegistrationInput) -> SubmissionOutcome {
        match self {
            Self::Simulated { latency } => submit_simulated(input, *latency).await,
            Self::Http { client, endpoint } => submit_http(client, endpoint, input).await,
        }
    }
}

async fn submit_simulated(input: &RegistrationInput, latency: Duration) -> SubmissionOutcome {
    tokio::time::sleep(latency).await;

    if input.first_name.is_empty() || input.last_name.is_empty() || input.email.is_empty() {
        return SubmissionOutcome::Failure {
            reason: "Missing required fields".to_string(),
        };
    }
    if !form::is_valid_email(&input.email) {
        return SubmissionOutcome::Failure {
            reason: "Invalid email address".to_string(),
        };
    }

    SubmissionOutcome::Success {
        user_id: generate_user_id(),
    }
}

async fn submit_http(
    client: &reqwest::Client,
    endpoint: &str,
    input: &RegistrationInput,
) -> SubmissionOutcome {
    debug!(endpoint, "Posting registration");
    let response = match client.post(endpoint).json(input).send().await {
        Ok(response) => response,
        Err(e) => {
            return SubmissionOutcome::Failure {
                reason: format!("Registration failed: {}", e),
            }
        }
    };

    if !response.status().is_success() {
        return SubmissionOutcome::Failure {
            reason: format!("Registration failed (HTTP {})", response.status()),
        };
    }

    match response.json::<RegisterResponse>().await {
        Ok(body) if body.success => SubmissionOutcome::Success {
            user_id: body.user_id.unwrap_or_else(generate_user_id),
        },
        Ok(body) => SubmissionOutcome::Failure {
            reason: body
                .message
                .unwrap_or_else(|| "Registration failed".to_string()),
        },
        Err(e) => SubmissionOutcome::Failure {
            reason: format!("Registration failed: {}", e),
        },
    }
}

/// Opaque 9-character base-36 identifier for newly registered users.
fn generate_user_id() -> String {
    use std::collections::hash_map::RandomState;
    use std::hash::{BuildHasher, Hasher};
    use std::time::{SystemTime, UNIX_EPOCH};

    const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    let mut hasher = RandomState::new().build_hasher();
    hasher.write_u128(
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos(),
    );
    let mut n = hasher.finish();

    let mut id = String::with_capacity(9);
    for _ in 0..9 {
        id.push(ALPHABET[(n % 36) as usize] as char);
        n /= 36;
    }
    id
}
