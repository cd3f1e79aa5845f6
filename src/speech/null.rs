use super::{
    DataUri, SpeechAudio, SpeechProvider, SynthesizeSpeechInput, TranscribeSpeechInput, Transcript,
};
use crate::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// A header-only mono 8-bit PCM WAV: valid audio with zero samples.
pub const SILENT_WAV_DATA_URI: &str =
    "data:audio/wav;base64,UklGRiQAAABXQVZFZm10IBAAAAABAAEAVFYAAFRWAAABAAgAZGF0YQAAAAA=";

/// Returned when the input is exactly [`SILENT_WAV_DATA_URI`].
pub const SILENT_WAV_TRANSCRIPTION: &str = "This is a simulated transcription of your spoken answer. \
    Please replace this with actual speech-to-text functionality.";

/// Returned for any other well-formed audio.
pub const TRANSCRIPTION_PLACEHOLDER: &str = "User response successfully transcribed.";

/// Placeholder provider: synthesis always yields the silent WAV and
/// transcription yields a canned sentence after a simulated delay.
#[derive(Debug, Clone, Default)]
pub struct NullSpeechProvider {
    transcription_delay: Duration,
}

impl NullSpeechProvider {
    pub fn new(transcription_delay: Duration) -> Self {
        Self {
            transcription_delay,
        }
    }
}

#[async_trait]
impl SpeechProvider for NullSpeechProvider {
    fn name(&self) -> &'static str {
        "null"
    }

    async fn synthesize(&self, input: SynthesizeSpeechInput) -> Result<SpeechAudio> {
        if input.text.trim().is_empty() {
            return Err(Error::speech("Text to synthesize cannot be empty."));
        }

        debug!(
            "Synthesizing {} characters of text (voice: {:?})",
            input.text.chars().count(),
            input.voice
        );

        Ok(SpeechAudio {
            audio_data_uri: SILENT_WAV_DATA_URI.to_string(),
        })
    }

    async fn transcribe(&self, input: TranscribeSpeechInput) -> Result<Transcript> {
        let uri = DataUri::parse(&input.audio_data_uri)?;
        if !uri.is_audio() {
            return Err(Error::speech(format!(
                "Expected audio data, got '{}'",
                uri.media_type
            )));
        }

        debug!(
            "Transcribing {} audio ({} base64 chars, language hint: {:?})",
            uri.media_type,
            uri.payload.len(),
            input.language_hint
        );

        if !self.transcription_delay.is_zero() {
            tokio::time::sleep(self.transcription_delay).await;
        }

        let transcription = if input.audio_data_uri == SILENT_WAV_DATA_URI {
            SILENT_WAV_TRANSCRIPTION
        } else {
            TRANSCRIPTION_PLACEHOLDER
        };

        Ok(Transcript {
            transcription: transcription.to_string(),
        })
    }
}
