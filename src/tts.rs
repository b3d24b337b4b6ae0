use reqwest::header::USER_AGENT;
use tracing::{debug, info};

use crate::error::ConvertError;
use crate::lang;

const ENDPOINT: &str = "https://translate.google.com/translate_tts";

const UA: &str = "speakfile/0.1";

// The endpoint reads this as a playback-speed multiplier; anything well below
// 1 selects the provider's slowed narration. Normal speed is always requested.
const NORMAL_SPEED: &str = "1";

/// Thin adapter around the remote synthesis endpoint. One request per call,
/// no retries; whatever the provider answers is surfaced as-is.
pub struct SynthesisClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SynthesisClient {
    pub fn new() -> Self {
        Self::with_endpoint(ENDPOINT)
    }

    /// Point the client at a different endpoint. Tests use this to stand up
    /// a local provider.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        SynthesisClient {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Request narration audio for `text`. The language code is checked
    /// against the registry before any request goes out.
    pub async fn synthesize(&self, text: &str, lang_code: &str) -> Result<Vec<u8>, ConvertError> {
        if !lang::supports(lang_code) {
            return Err(unsupported_language(lang_code));
        }

        info!(
            "Requesting synthesis ({} chars, language {})",
            text.chars().count(),
            lang_code
        );
        let response = self
            .http
            .get(&self.endpoint)
            .header(USER_AGENT, UA)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", lang_code),
                ("ttsspeed", NORMAL_SPEED),
                ("q", text),
            ])
            .send()
            .await?
            .error_for_status()?;

        let audio = response.bytes().await?;
        debug!("Provider returned {} bytes of audio", audio.len());
        Ok(audio.to_vec())
    }
}

fn unsupported_language(code: &str) -> ConvertError {
    let known = lang::all()
        .map(|(code, name)| format!("{code} ({name})"))
        .collect::<Vec<_>>()
        .join(", ");
    ConvertError::Validation(format!(
        "Language code '{code}' is not supported. Supported languages: {known}"
    ))
}
