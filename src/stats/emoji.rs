use std::collections::BTreeMap;

/// Inclusive codepoint ranges counted as emoji
pub const EMOJI_RANGES: [(u32, u32); 8] = [
    (0x1F600, 0x1F64F), // emoticons
    (0x1F300, 0x1F5FF), // symbols & pictographs
    (0x1F680, 0x1F6FF), // transport & map symbols
    (0x2600, 0x26FF),   // miscellaneous symbols
    (0x2700, 0x27BF),   // dingbats
    (0xFE00, 0xFE0F),   // variation selectors
    (0x1F900, 0x1F9FF), // supplemental symbols & pictographs
    (0x1F1E0, 0x1F1FF), // regional indicators
];

pub fn is_emoji(c: char) -> bool {
    let cp = c as u32;
    EMOJI_RANGES.iter().any(|&(start, end)| (start..=end).contains(&cp))
}

/// Add one to `counts` for every emoji codepoint in `text`
pub fn count_emojis(text: &str, counts: &mut BTreeMap<String, usize>) {
    for c in text.chars().filter(|c| is_emoji(*c)) {
        *counts.entry(c.to_string()).or_insert(0) += 1;
    }
}
