//! Reading time estimation

use serde::Serialize;

/// Estimated reading time of a piece of text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingTime {
    /// Human readable estimate, e.g. `"4 min read"`
    pub text: String,
    /// Exact minutes, not rounded
    pub minutes: f64,
    /// Milliseconds
    pub time: u64,
    /// Counted words
    pub words: usize,
}

impl ReadingTime {
    /// Estimate reading time of plain text at `words_per_minute`
    pub fn estimate(text: &str, words_per_minute: usize) -> Self {
        let words = count_words(text);
        let wpm = words_per_minute.max(1) as f64;
        let minutes = words as f64 / wpm;
        let time = (minutes * 60_000.0).round() as u64;

        // Two decimals before the ceiling, float noise must not add a minute
        let displayed = ((minutes * 100.0).round() / 100.0).ceil() as u64;

        Self {
            text: format!("{} min read", displayed),
            minutes,
            time,
            words,
        }
    }
}

/// Count words: whitespace separated runs, each CJK character is one word
pub fn count_words(text: &str) -> usize {
    let mut count = 0;

    for token in text.split_whitespace() {
        let mut in_word = false;
        for c in token.chars() {
            if is_cjk(c) {
                count += 1;
                in_word = false;
            } else if !in_word {
                count += 1;
                in_word = true;
            }
        }
    }

    count
}

fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{30ff}'
        | '\u{3400}'..='\u{4dbf}'
        | '\u{4e00}'..='\u{9fff}'
        | '\u{ac00}'..='\u{d7af}'
        | '\u{f900}'..='\u{faff}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words() {
        assert_eq!(count_words("hello  world\nagain"), 3);
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("第二条内容"), 5);
        assert_eq!(count_words("rust是好的"), 4);
    }

    #[test]
    fn test_estimate() {
        let text = vec!["word"; 800].join(" ");
        let rt = ReadingTime::estimate(&text, 200);
        assert_eq!(rt.words, 800);
        assert_eq!(rt.text, "4 min read");
        assert_eq!(rt.time, 240_000);
    }

    #[test]
    fn test_estimate_rounds_up() {
        let text = vec!["word"; 210].join(" ");
        assert_eq!(ReadingTime::estimate(&text, 200).text, "2 min read");

        let short = ReadingTime::estimate("just a few words", 200);
        assert_eq!(short.text, "1 min read");
    }

    #[test]
    fn test_estimate_empty() {
        assert_eq!(ReadingTime::estimate("", 200).text, "0 min read");
    }
}
