//! Metro line codes and their signage colors.

use std::fmt;

use serde::Serialize;

/// A metro line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LineCode {
    #[serde(rename = "RD")]
    Red,
    #[serde(rename = "OR")]
    Orange,
    #[serde(rename = "BL")]
    Blue,
    #[serde(rename = "GR")]
    Green,
    #[serde(rename = "YL")]
    Yellow,
    #[serde(rename = "SV")]
    Silver,
}

/// Background and text color for a line badge, as CSS hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineColor {
    pub station: &'static str,
    pub text: &'static str,
}

/// Badge color for codes that aren't a known line.
const NEUTRAL: LineColor = LineColor {
    station: "#919D9D",
    text: "#000",
};

impl LineCode {
    /// Parse a two-letter line code. Returns `None` for unknown codes.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "RD" => Some(LineCode::Red),
            "OR" => Some(LineCode::Orange),
            "BL" => Some(LineCode::Blue),
            "GR" => Some(LineCode::Green),
            "YL" => Some(LineCode::Yellow),
            "SV" => Some(LineCode::Silver),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineCode::Red => "RD",
            LineCode::Orange => "OR",
            LineCode::Blue => "BL",
            LineCode::Green => "GR",
            LineCode::Yellow => "YL",
            LineCode::Silver => "SV",
        }
    }

    pub fn color(&self) -> LineColor {
        match self {
            LineCode::Red => LineColor {
                station: "#BF0D3E",
                text: "#FFF",
            },
            LineCode::Orange => LineColor {
                station: "#ED8B00",
                text: "#000",
            },
            LineCode::Blue => LineColor {
                station: "#009CDE",
                text: "#FFF",
            },
            LineCode::Green => LineColor {
                station: "#00B140",
                text: "#FFF",
            },
            LineCode::Yellow => LineColor {
                station: "#FFD100",
                text: "#000",
            },
            // Silver signage uses the same grey as the neutral badge
            LineCode::Silver => NEUTRAL,
        }
    }
}

impl fmt::Display for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Badge color for a raw line code, falling back to neutral grey.
///
/// Predictions carry codes like `"No"` or `"--"` for trains not in service,
/// so this never fails.
pub fn line_color(code: &str) -> LineColor {
    LineCode::parse(code).map_or(NEUTRAL, |line| line.color())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_lines() {
        assert_eq!(LineCode::parse("RD"), Some(LineCode::Red));
        assert_eq!(LineCode::parse("OR"), Some(LineCode::Orange));
        assert_eq!(LineCode::parse("BL"), Some(LineCode::Blue));
        assert_eq!(LineCode::parse("GR"), Some(LineCode::Green));
        assert_eq!(LineCode::parse("YL"), Some(LineCode::Yellow));
        assert_eq!(LineCode::parse("SV"), Some(LineCode::Silver));
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(LineCode::parse("rd"), None);
        assert_eq!(LineCode::parse("No"), None);
        assert_eq!(LineCode::parse(""), None);
    }

    #[test]
    fn as_str_roundtrip() {
        for code in ["RD", "OR", "BL", "GR", "YL", "SV"] {
            assert_eq!(LineCode::parse(code).unwrap().as_str(), code);
        }
    }

    #[test]
    fn colors() {
        assert_eq!(line_color("RD").station, "#BF0D3E");
        assert_eq!(line_color("RD").text, "#FFF");
        assert_eq!(line_color("OR").text, "#000");
        assert_eq!(line_color("YL").station, "#FFD100");
    }

    #[test]
    fn unknown_code_is_neutral() {
        assert_eq!(line_color("--"), NEUTRAL);
        assert_eq!(line_color("SV"), NEUTRAL);
    }

    #[test]
    fn serializes_as_code() {
        assert_eq!(serde_json::to_string(&LineCode::Green).unwrap(), r#""GR""#);
    }
}
