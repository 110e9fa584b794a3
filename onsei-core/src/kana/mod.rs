//! Katakana classification and romanization
//!
//! [`romanize`] converts a katakana reading into the compact phoneme code
//! consumed by the statistics engine. Matching is greedy and leftmost: a
//! katakana followed by a combining small kana is looked up as a pair first,
//! then as a single character; anything without an entry passes through.

pub mod table;

pub use table::{KanaTable, COMBINING_KANA, KANA_TABLE};

/// Prolonged sound mark (長音符)
pub const PROLONGED_SOUND_MARK: char = 'ー';

/// Check if `ch` belongs to the Katakana script
///
/// The prolonged sound mark and the middle dot are shared with hiragana and
/// are not included.
#[inline]
pub fn is_katakana(ch: char) -> bool {
    matches!(
        ch,
        '\u{30A1}'..='\u{30FA}'
            | '\u{30FD}'..='\u{30FF}'
            | '\u{31F0}'..='\u{31FF}'
            | '\u{32D0}'..='\u{32FE}'
            | '\u{3300}'..='\u{3357}'
            | '\u{FF66}'..='\u{FF6F}'
            | '\u{FF71}'..='\u{FF9D}'
            | '\u{1B000}'
    )
}

/// Check if the last character of `text` is katakana or the prolonged sound mark
pub fn ends_with_katakana(text: &str) -> bool {
    text.chars()
        .next_back()
        .is_some_and(|ch| ch == PROLONGED_SOUND_MARK || is_katakana(ch))
}

/// Romanize a katakana reading into a phoneme code string
pub fn romanize(reading: &str) -> String {
    romanize_with(KanaTable::global(), reading)
}

/// Romanize using an explicit table
pub fn romanize_with(table: &KanaTable, reading: &str) -> String {
    let mut out = String::with_capacity(reading.len());
    let mut chars = reading.chars().peekable();

    while let Some(ch) = chars.next() {
        if let Some(&next) = chars.peek() {
            if let Some(code) = table.pair(ch, next) {
                out.push_str(code);
                chars.next();
                continue;
            }
        }

        match table.single(ch) {
            Some(code) => out.push_str(code),
            None => out.push(ch),
        }
    }

    out
}
