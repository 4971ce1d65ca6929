//! String ordering following the Korean (`ko-KR`) collation used by the name
//! lists: Hangul and Han sort ahead of Latin, Latin compares case-insensitively
//! with lowercase first on ties, and compatibility jamo (ㄱ, ㄴ, ...) sort just
//! ahead of the syllables that start with them.

use std::cmp::Ordering;

const HANGUL_SYLLABLES_START: u32 = 0xAC00;
const HANGUL_SYLLABLES_END: u32 = 0xD7A3;
const SYLLABLES_PER_INITIAL: u32 = 21 * 28;

/// Compatibility jamo for the 19 initial consonants, in initial order.
const INITIAL_JAMO: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Script {
    Space,
    Punctuation,
    Digit,
    Hangul,
    Han,
    Latin,
    Other,
}

pub(crate) fn compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(primary_key)
        .cmp(b.chars().map(primary_key))
        .then_with(|| a.chars().map(tertiary_key).cmp(b.chars().map(tertiary_key)))
        .then_with(|| a.cmp(b))
}

fn primary_key(c: char) -> (Script, u32) {
    let code = c as u32;
    if c.is_whitespace() {
        (Script::Space, code)
    } else if c.is_ascii_digit() {
        (Script::Digit, code)
    } else if (HANGUL_SYLLABLES_START..=HANGUL_SYLLABLES_END).contains(&code) {
        (Script::Hangul, (code - HANGUL_SYLLABLES_START) * 2 + 1)
    } else if let Some(i) = INITIAL_JAMO.iter().position(|j| *j == c) {
        (Script::Hangul, i as u32 * SYLLABLES_PER_INITIAL * 2)
    } else if is_other_jamo(code) {
        // After every syllable.
        (Script::Hangul, 0x10000 + code)
    } else if (0x4E00..=0x9FFF).contains(&code) {
        (Script::Han, code)
    } else if c.is_alphabetic() && is_latin(code) {
        let folded = c.to_lowercase().next().unwrap_or(c);
        (Script::Latin, folded as u32)
    } else if c.is_ascii_punctuation() || (!c.is_alphanumeric() && code < 0x3000) {
        (Script::Punctuation, code)
    } else {
        (Script::Other, code)
    }
}

/// Lowercase before uppercase.
fn tertiary_key(c: char) -> bool {
    c.is_uppercase()
}

fn is_latin(code: u32) -> bool {
    code < 0x0250 || (0x1E00..=0x1EFF).contains(&code)
}

fn is_other_jamo(code: u32) -> bool {
    (0x1100..=0x11FF).contains(&code) || (0x3131..=0x318E).contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut v: Vec<&str>) -> Vec<&str> {
        v.sort_by(|a, b| compare(a, b));
        v
    }

    #[test]
    fn hangul_in_dictionary_order() {
        assert_eq!(sorted(vec!["다", "가", "나"]), vec!["가", "나", "다"]);
        assert_eq!(
            sorted(vec!["한국씨티", "하나", "국민", "기업"]),
            vec!["국민", "기업", "하나", "한국씨티"]
        );
    }

    #[test]
    fn hangul_before_latin() {
        assert_eq!(sorted(vec!["Kim", "김철수", "Lee"]), vec!["김철수", "Kim", "Lee"]);
        assert_eq!(sorted(vec!["SC제일", "우리"]), vec!["우리", "SC제일"]);
    }

    #[test]
    fn latin_is_case_insensitive_with_lowercase_first() {
        assert_eq!(sorted(vec!["lee", "Kim", "kim"]), vec!["kim", "Kim", "lee"]);
        assert_eq!(compare("apple", "Banana"), Ordering::Less);
    }

    #[test]
    fn initial_jamo_sorts_before_its_syllables() {
        assert_eq!(sorted(vec!["까", "가", "ㄲ", "ㄱ"]), vec!["ㄱ", "가", "ㄲ", "까"]);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(compare("김", "김철수"), Ordering::Less);
        assert_eq!(compare("김철수", "김철수"), Ordering::Equal);
    }

    #[test]
    fn digits_before_letters() {
        assert_eq!(sorted(vec!["김", "a", "1"]), vec!["1", "김", "a"]);
    }
}
