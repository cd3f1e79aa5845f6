//! Speech round-trip: text to audio and audio to text.
//!
//! The orchestrator only sees [`SpeechProvider`]. The shipped provider is
//! [`NullSpeechProvider`], which returns fixed placeholder output.

mod data_uri;
mod null;

pub use data_uri::DataUri;
pub use null::{
    NullSpeechProvider, SILENT_WAV_DATA_URI, SILENT_WAV_TRANSCRIPTION, TRANSCRIPTION_PLACEHOLDER,
};

use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizeSpeechInput {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechAudio {
    pub audio_data_uri: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscribeSpeechInput {
    pub audio_data_uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_hint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transcript {
    pub transcription: String,
}

#[async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    async fn synthesize(&self, input: SynthesizeSpeechInput) -> Result<SpeechAudio>;

    async fn transcribe(&self, input: TranscribeSpeechInput) -> Result<Transcript>;
}
