//! Media type and fiscal quarter of a discovered earnings-call link
//!
//! Both enums round-trip through the same lowercase/label strings in the
//! database and in the JSON export.

use serde::Serialize;
use std::fmt;

/// The kind of media an earnings-call link points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CallType {
    /// Live or archived webcast page (the fallback when nothing else matches)
    #[default]
    Webcast,

    /// Direct audio file (.mp3, .wav, .m4a)
    Audio,

    /// Direct video file (.mp4, .webm)
    Video,

    /// Written transcript of the call
    Transcript,
}

impl CallType {
    /// Converts the call type to its database string representation
    pub fn to_db_string(&self) -> &'static str {
        match self {
            Self::Webcast => "webcast",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::Transcript => "transcript",
        }
    }

    /// Parses a call type from its database string representation
    ///
    /// Returns None if the string doesn't match any known call type.
    pub fn from_db_string(s: &str) -> Option<Self> {
        match s {
            "webcast" => Some(Self::Webcast),
            "audio" => Some(Self::Audio),
            "video" => Some(Self::Video),
            "transcript" => Some(Self::Transcript),
            _ => None,
        }
    }
}

impl fmt::Display for CallType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_string())
    }
}

/// Fiscal quarter named in the anchor text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
    /// No `Qn` token was present
    Unknown,
}

impl Quarter {
    /// Maps a quarter digit (1-4) to its quarter
    pub fn from_digit(digit: char) -> Self {
        match digit {
            '1' => Self::Q1,
            '2' => Self::Q2,
            '3' => Self::Q3,
            '4' => Self::Q4,
            _ => Self::Unknown,
        }
    }

    pub fn to_db_string(&self) -> &'static str {
        match self {
            Self::Q1 => "Q1",
            Self::Q2 => "Q2",
            Self::Q3 => "Q3",
            Self::Q4 => "Q4",
            Self::Unknown => "Unknown",
        }
    }

    pub fn from_db_string(s: &str) -> Option<Self> {
        match s {
            "Q1" => Some(Self::Q1),
            "Q2" => Some(Self::Q2),
            "Q3" => Some(Self::Q3),
            "Q4" => Some(Self::Q4),
            "Unknown" => Some(Self::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_type_default_is_webcast() {
        assert_eq!(CallType::default(), CallType::Webcast);
    }

    #[test]
    fn test_call_type_db_strings() {
        for call_type in [
            CallType::Webcast,
            CallType::Audio,
            CallType::Video,
            CallType::Transcript,
        ] {
            assert_eq!(
                CallType::from_db_string(call_type.to_db_string()),
                Some(call_type)
            );
        }
        assert_eq!(CallType::from_db_string("podcast"), None);
    }

    #[test]
    fn test_quarter_from_digit() {
        assert_eq!(Quarter::from_digit('1'), Quarter::Q1);
        assert_eq!(Quarter::from_digit('4'), Quarter::Q4);
        assert_eq!(Quarter::from_digit('5'), Quarter::Unknown);
    }

    #[test]
    fn test_quarter_display() {
        assert_eq!(Quarter::Q3.to_string(), "Q3");
        assert_eq!(Quarter::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_serialized_labels_match_db_strings() {
        assert_eq!(
            serde_json::to_string(&CallType::Transcript).unwrap(),
            "\"transcript\""
        );
        assert_eq!(serde_json::to_string(&Quarter::Q2).unwrap(), "\"Q2\"");
        assert_eq!(
            serde_json::to_string(&Quarter::Unknown).unwrap(),
            "\"Unknown\""
        );
    }
}
