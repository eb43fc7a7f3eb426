//! Word classification for the tokenizer.
//!
//! Every run of word characters the lexer produces is classified here. The
//! tables are plain `match` arms, so they are compiled into the binary and
//! shared read-only by every lexer instance.

use super::syntax_kind::SyntaxKind;

/// Short terrain codes that are not also directions.
///
/// `SW` is both "southwest" and "swamp"; it lexes as a direction and the
/// grammar accepts it wherever terrain is expected.
pub const TERRAIN_CODES: &[&str] = &[
    "ALPS", "AH", "AR", "BF", "BH", "CH", "D", "DE", "DH", "GH", "GHP", "HSM", "JG", "JH", "L",
    "LAM", "LCM", "LJM", "LSM", "LVM", "O", "PI", "PR", "RH", "SH", "TU",
];

/// Compass directions used for movement and borders.
pub const DIRECTIONS: &[&str] = &["N", "NE", "SE", "S", "SW", "NW"];

/// Classify a word run into a keyword, a classified word, or plain text.
pub fn classify_word(text: &str) -> SyntaxKind {
    if let Some(kind) = keyword_kind(text) {
        return kind;
    }
    if is_number(text) {
        return SyntaxKind::NUMBER;
    }
    if is_unit_id(text) {
        return SyntaxKind::UNIT_ID;
    }
    match text {
        "Winter" | "Spring" | "Summer" | "Fall" | "Autumn" => SyntaxKind::SEASON,
        "FINE" | "RAIN" | "SNOW" | "STORM" | "FOG" => SyntaxKind::WEATHER,
        "CALM" | "MILD" | "STRONG" | "GALE" => SyntaxKind::WIND,
        _ if DIRECTIONS.contains(&text) => SyntaxKind::DIRECTION,
        _ if TERRAIN_CODES.contains(&text) => SyntaxKind::TERRAIN_CODE,
        _ => SyntaxKind::TEXT,
    }
}

/// Keyword lookup. Keywords are case sensitive except `to`, which the
/// reports write in both cases.
pub fn keyword_kind(text: &str) -> Option<SyntaxKind> {
    let kind = match text {
        "Current" => SyntaxKind::CURRENT_KW,
        "Previous" => SyntaxKind::PREVIOUS_KW,
        "Hex" => SyntaxKind::HEX_KW,
        "Turn" => SyntaxKind::TURN_KW,
        "Next" => SyntaxKind::NEXT_KW,
        "Tribe" => SyntaxKind::TRIBE_KW,
        "Courier" => SyntaxKind::COURIER_KW,
        "Element" => SyntaxKind::ELEMENT_KW,
        "Fleet" => SyntaxKind::FLEET_KW,
        "Garrison" => SyntaxKind::GARRISON_KW,
        "Scout" => SyntaxKind::SCOUT_KW,
        "Move" => SyntaxKind::MOVE_KW,
        "Movement" => SyntaxKind::MOVEMENT_KW,
        "Follows" => SyntaxKind::FOLLOWS_KW,
        "Goes" => SyntaxKind::GOES_KW,
        "to" | "To" => SyntaxKind::TO_KW,
        "Status" => SyntaxKind::STATUS_KW,
        "Scry" => SyntaxKind::SCRY_KW,
        "Still" => SyntaxKind::STILL_KW,
        _ => return None,
    };
    Some(kind)
}

fn is_number(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// `dddd` followed by a unit suffix letter and a 1-9 sequence digit.
fn is_unit_id(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 6
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && matches!(bytes[4], b'c' | b'e' | b'f' | b'g')
        && (b'1'..=b'9').contains(&bytes[5])
}
