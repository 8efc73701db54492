use once_cell::sync::Lazy;
use regex::Regex;
use shared_types::Position;
use thiserror::Error;

static TRANSLATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"translate\((-?\d+(?:\.\d*)?)px, (-?\d+(?:\.\d*)?)px\)")
        .expect("translate pattern is valid")
});

#[derive(Debug, Error, PartialEq)]
pub enum TransformParseError {
    #[error("no translate(<x>px, <y>px) in style: {0:?}")]
    Unmatched(String),
    #[error("invalid offset {0:?}")]
    InvalidNumber(String),
}

/// Inline transform for a window offset, in the form drag gestures render.
pub fn format_translate(position: Position) -> String {
    format!("translate({}px, {}px)", position.x, position.y)
}

/// Recover the window offset from a rendered style or transform string.
pub fn parse_translate(style: &str) -> Result<Position, TransformParseError> {
    let captures = TRANSLATE_RE
        .captures(style)
        .ok_or_else(|| TransformParseError::Unmatched(style.to_string()))?;

    let x = parse_offset(&captures[1])?;
    let y = parse_offset(&captures[2])?;
    Ok(Position::new(x, y))
}

fn parse_offset(raw: &str) -> Result<f64, TransformParseError> {
    raw.parse::<f64>()
        .map_err(|_| TransformParseError::InvalidNumber(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_signed_decimal_offsets() {
        assert_eq!(
            parse_translate("translate(12.5px, -40px)"),
            Ok(Position::new(12.5, -40.0))
        );
    }

    #[test]
    fn finds_transform_inside_full_style() {
        let style = "z-index: 50; transform: translate(-3px, 7.25px); top: 32px;";
        assert_eq!(parse_translate(style), Ok(Position::new(-3.0, 7.25)));
    }

    #[test]
    fn trailing_dot_is_accepted() {
        assert_eq!(parse_translate("translate(5.px, 0px)"), Ok(Position::new(5.0, 0.0)));
    }

    #[test]
    fn missing_px_is_rejected() {
        assert!(matches!(
            parse_translate("translate(12.5, -40)"),
            Err(TransformParseError::Unmatched(_))
        ));
        assert!(parse_translate("translate(12.5px,-40px)").is_err());
        assert!(parse_translate("").is_err());
    }

    #[test]
    fn formatted_transform_parses_back() {
        let rendered = format_translate(Position::new(-120.0, 33.5));
        assert_eq!(rendered, "translate(-120px, 33.5px)");
        assert_eq!(parse_translate(&rendered), Ok(Position::new(-120.0, 33.5)));
    }
}
