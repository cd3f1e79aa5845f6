use crate::{Error, Result};

/// A parsed `data:<media-type>;base64,<payload>` URI. The payload is kept
/// encoded; only its alphabet is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri<'a> {
    pub media_type: &'a str,
    pub payload: &'a str,
}

impl<'a> DataUri<'a> {
    pub fn parse(uri: &'a str) -> Result<Self> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| Error::speech("audio must be a data URI starting with 'data:'"))?;

        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| Error::speech("data URI is missing the ',' before its payload"))?;

        let media_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| Error::speech("data URI payload must be base64 encoded"))?;

        if media_type.is_empty() || !media_type.contains('/') {
            return Err(Error::speech(format!(
                "data URI has an invalid media type '{media_type}'"
            )));
        }

        if payload.is_empty() {
            return Err(Error::speech("data URI payload is empty"));
        }

        if !is_base64(payload) {
            return Err(Error::speech("data URI payload is not valid base64"));
        }

        Ok(Self {
            media_type,
            payload,
        })
    }

    pub fn is_audio(&self) -> bool {
        self.media_type.starts_with("audio/")
    }
}

fn is_base64(payload: &str) -> bool {
    let body = payload.trim_end_matches('=');
    payload.len() % 4 == 0
        && payload.len() - body.len() <= 2
        && body
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_parse_audio_uri() {
        let uri = DataUri::parse("data:audio/webm;base64,GkXfo59ChoEBQveBAULygQRC").unwrap();
        assert_eq!(uri.media_type, "audio/webm");
        assert_eq!(uri.payload, "GkXfo59ChoEBQveBAULygQRC");
        assert!(uri.is_audio());
    }

    #[test]
    fn test_parse_non_audio_uri() {
        let uri = DataUri::parse("data:image/png;base64,iVBORw0K").unwrap();
        assert!(!uri.is_audio());
    }

    #[rstest]
    #[case("audio/wav;base64,AAAA")]
    #[case("data:audio/wav;base64")]
    #[case("data:audio/wav,AAAA")]
    #[case("data:;base64,AAAA")]
    #[case("data:audio/wav;base64,")]
    #[case("data:audio/wav;base64,AAA")]
    #[case("data:audio/wav;base64,AA*A")]
    #[case("data:audio/wav;base64,A===")]
    fn test_parse_rejects_malformed(#[case] uri: &str) {
        assert!(DataUri::parse(uri).is_err(), "accepted {uri}");
    }
}
