/// Numeral utilities for episode number resolution
///
/// This module converts the number token of an episode heading, either
/// decimal digits ("12") or Chinese numerals ("十二", "九十九"), into an
/// integer episode number. Tokens may still carry the 第/集 marker
/// characters; they are stripped before resolution.
/// Value of a single Chinese digit character (一..九)
fn chinese_digit(c: char) -> Option<u32> {
    match c {
        '一' => Some(1),
        '二' => Some(2),
        '三' => Some(3),
        '四' => Some(4),
        '五' => Some(5),
        '六' => Some(6),
        '七' => Some(7),
        '八' => Some(8),
        '九' => Some(9),
        _ => None,
    }
}

/// Resolve an episode number token to its numeric value
///
/// Accepts the raw token captured by the heading scanner, e.g. "第1集",
/// "第十二集", "一集" or a bare "23". Marker characters 第 and 集 are
/// stripped first. Decimal tokens are parsed as base 10; anything else is
/// treated as a Chinese numeral. Resolution never fails: unparseable
/// tokens resolve to 1.
pub fn resolve_episode_number(token: &str) -> u32 {
    let stripped = token.replace(['第', '集'], "");
    let stripped = stripped.trim();

    if !stripped.is_empty() && stripped.bytes().all(|b| b.is_ascii_digit()) {
        return stripped.parse().unwrap_or(1);
    }

    chinese_to_number(stripped)
}

/// Convert a Chinese numeral string to an integer
///
/// Supports digits 一..九 and the multipliers 十 (×10) and 百 (×100),
/// covering 一 through 九十九 plus bare 百 forms. The conversion is a
/// left-to-right fold with two accumulators: `temp` holds the most recent
/// digit, and hitting a multiplier folds `temp` (implicitly 1 when unset,
/// so a leading 十 means 10) into `result`. A trailing digit is added
/// after the scan (二十三 = 2×10 + 3). A value of 0 after the scan means
/// the token was unparseable and resolves to 1.
pub fn chinese_to_number(numeral: &str) -> u32 {
    let chars: Vec<char> = numeral.chars().collect();

    // Single character: direct lookup, multipliers stand for themselves
    if chars.len() == 1 {
        return match chars[0] {
            '十' => 10,
            '百' => 100,
            c => chinese_digit(c).unwrap_or(1),
        };
    }

    let mut result = 0u32;
    let mut temp = 0u32;

    for &c in &chars {
        match c {
            '十' => {
                // 十 with no pending digit means 10, not 0
                result += if temp == 0 { 1 } else { temp } * 10;
                temp = 0;
            }
            '百' => {
                result += if temp == 0 { 1 } else { temp } * 100;
                temp = 0;
            }
            c => {
                // A plain digit overwrites the pending value; unknown
                // characters clear it
                temp = chinese_digit(c).unwrap_or(0);
            }
        }
    }

    // Trailing units digit
    result += temp;

    if result == 0 { 1 } else { result }
}
