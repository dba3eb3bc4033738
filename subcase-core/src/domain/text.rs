//! Character-level helpers shared by the engines
//!
//! Case mapping is single code point only: characters whose mapping expands
//! to several code points are left unchanged so indices stay aligned.

/// Upper-case a single code point
#[inline]
pub fn to_upper(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => ch,
    }
}

/// Lower-case a single code point
#[inline]
pub fn to_lower(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => ch,
    }
}

/// Upper-case the first character of `text`
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(text.len());
            out.push(to_upper(first));
            out.extend(chars);
            out
        }
        None => String::new(),
    }
}

/// True if `text` is unchanged by upper-casing ("HELLO", "123", "")
pub fn is_all_upper(text: &str) -> bool {
    text == text.to_uppercase()
}

/// True if `text` is unchanged by lower-casing
pub fn is_all_lower(text: &str) -> bool {
    text == text.to_lowercase()
}

/// Unicode punctuation approximation (ASCII punctuation excluding symbols, general punctuation block)
pub fn is_punctuation(ch: char) -> bool {
    match ch {
        '$' | '+' | '<' | '=' | '>' | '^' | '`' | '|' | '~' => false,
        c if c.is_ascii_punctuation() => true,
        '¡' | '§' | '«' | '¶' | '·' | '»' | '¿' => true,
        '\u{2010}'..='\u{2027}' | '\u{2030}'..='\u{205E}' => true,
        '\u{3001}'..='\u{3003}' | '\u{3008}'..='\u{3011}' => true,
        _ => false,
    }
}

/// Case-insensitive (single code point) prefix test on a char slice
pub fn starts_with_ignore_case(text: &[char], prefix: &str) -> bool {
    let mut it = text.iter();
    prefix
        .chars()
        .all(|p| it.next().is_some_and(|&c| to_lower(c) == to_lower(p)))
}

/// Find `pattern` (already lower-cased) in `text` ignoring case, starting at `from`
pub fn find_ignore_case(text: &[char], pattern: &[char], from: usize) -> Option<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return None;
    }

    (from..=text.len() - pattern.len()).find(|&start| {
        text[start..start + pattern.len()]
            .iter()
            .zip(pattern)
            .all(|(&c, &p)| to_lower(c) == p)
    })
}

/// Case-insensitive containment test
pub fn contains_ignore_case(text: &str, needle: &str) -> bool {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = needle.chars().map(to_lower).collect();
    find_ignore_case(&text, &pattern, 0).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_code_point_mapping() {
        assert_eq!(to_upper('a'), 'A');
        assert_eq!(to_upper('ø'), 'Ø');
        assert_eq!(to_upper('1'), '1');
        // 'ß' upper-cases to "SS": left alone
        assert_eq!(to_upper('ß'), 'ß');
        assert_eq!(to_lower('Ä'), 'ä');
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("hello there"), "Hello there");
        assert_eq!(capitalize_first("élan"), "Élan");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("_@0_ went"), "_@0_ went");
    }

    #[test]
    fn test_is_all_upper() {
        assert!(is_all_upper("HELLO, WORLD!"));
        assert!(is_all_upper("123"));
        assert!(!is_all_upper("Hello"));
    }

    #[test]
    fn test_punctuation() {
        assert!(is_punctuation('.'));
        assert!(is_punctuation('…'));
        assert!(is_punctuation('¿'));
        assert!(!is_punctuation('a'));
        assert!(!is_punctuation('<'));
    }

    #[test]
    fn test_find_ignore_case() {
        let text: Vec<char> = "Hello JOHN and john".chars().collect();
        let pattern: Vec<char> = "john".chars().collect();
        assert_eq!(find_ignore_case(&text, &pattern, 0), Some(6));
        assert_eq!(find_ignore_case(&text, &pattern, 7), Some(15));
        assert_eq!(find_ignore_case(&text, &pattern, 16), None);
        assert_eq!(find_ignore_case(&text, &[], 0), None);
    }

    #[test]
    fn test_starts_with_ignore_case() {
        let text: Vec<char> = "WWW.example.com".chars().collect();
        assert!(starts_with_ignore_case(&text, "www."));
        assert!(!starts_with_ignore_case(&text, "http"));
        assert!(!starts_with_ignore_case(&['w'], "www."));
    }
}
