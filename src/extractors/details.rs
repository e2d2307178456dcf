//! Regex extraction steps over the details blob.
//!
//! The blob mixes Portuguese and English labels, so every step tries an
//! ordered list of patterns and takes the first hit.

use regex::Regex;
use std::sync::LazyLock;

static ISBN10_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ISBN-10[:\s]+([0-9X]{10})").unwrap());

static ISBN13_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ISBN-13[:\s]+([0-9\-]{13,17})").unwrap());

static ASIN_RES: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)ASIN[:\s]+([A-Z0-9]{10})(?:\s|$)").unwrap(),
        Regex::new(r"(?i)\bASIN[:\s]*([A-Z0-9]{10})\b").unwrap(),
    ]
});

static ASIN_FORMAT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z0-9]{10}$").unwrap());

static ALL_ALPHA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]+$").unwrap());

static PUBLISHER_RES: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)editora\s+([a-zà-ÿ\s&\-\.]+?)\s+data\s+da\s+publicação").unwrap(),
        Regex::new(r"(?i)editora\s+([a-zà-ÿ\s&\-\.]+?)\s+dimensões").unwrap(),
        Regex::new(r"(?i)editora\s+([a-zà-ÿ\s&\-\.]+?)\s+(?:isbn|asin)").unwrap(),
        Regex::new(r"(?i)publisher\s+([a-z\s&\-\.]+?)\s+publication\s+date").unwrap(),
    ]
});

static PAGES_RES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)(\d+)\s*páginas").unwrap(),
        Regex::new(r"(?i)Comprimento[:\s]+(\d+)\s*páginas").unwrap(),
        Regex::new(r"(?i)Length[:\s]+(\d+)\s*pages").unwrap(),
    ]
});

static LANGUAGE_RES: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)Idioma[:\s]+([^\n;]+)").unwrap(),
        Regex::new(r"(?i)Language[:\s]+([^\n;]+)").unwrap(),
    ]
});

/// Label substring to locale code, ordered: the first containment wins.
const LANGUAGE_MAP: &[(&str, &str)] = &[
    ("português", "pt-BR"),
    ("portuguese", "pt-BR"),
    ("inglês", "en"),
    ("english", "en"),
    ("espanhol", "es"),
    ("spanish", "es"),
    ("francês", "fr"),
    ("french", "fr"),
    ("alemão", "de"),
    ("german", "de"),
    ("italiano", "it"),
    ("italian", "it"),
];

/// ISBN-10 after its label.
pub fn extract_isbn10(details: &str) -> Option<String> {
    ISBN10_RE.captures(details).map(|caps| caps[1].to_string())
}

/// ISBN-13 after its label, interior hyphens stripped.
pub fn extract_isbn13(details: &str) -> Option<String> {
    ISBN13_RE.captures(details).map(|caps| caps[1].replace('-', ""))
}

/// Catalog code: exactly 10 uppercase alphanumerics. All-letter matches
/// are rejected, the character class would otherwise pick up ordinary
/// words next to the label.
pub fn extract_asin(details: &str) -> Option<String> {
    for re in ASIN_RES.iter() {
        if let Some(caps) = re.captures(details) {
            let candidate = caps[1].to_uppercase();
            if ASIN_FORMAT_RE.is_match(&candidate) && !ALL_ALPHA_RE.is_match(&candidate) {
                return Some(candidate);
            }
        }
    }

    None
}

/// Publisher name, capitalized word by word. Purely numeric or
/// single-character matches are rejected.
pub fn extract_publisher(details: &str) -> Option<String> {
    let haystack = details.to_lowercase();

    for re in PUBLISHER_RES.iter() {
        if let Some(caps) = re.captures(&haystack) {
            let publisher = title_case(caps[1].trim());
            if publisher.chars().count() > 1 && !publisher.chars().all(|c| c.is_ascii_digit()) {
                return Some(publisher);
            }
        }
    }

    None
}

/// Page count from the first matching numeric pattern.
pub fn extract_page_count(details: &str) -> Option<u32> {
    PAGES_RES
        .iter()
        .find_map(|re| re.captures(details).and_then(|caps| caps[1].parse().ok()))
}

/// Locale code from the language label. Stops at the first label pattern
/// that yields a mapped language.
pub fn extract_language(details: &str) -> Option<String> {
    for re in LANGUAGE_RES.iter() {
        if let Some(caps) = re.captures(details) {
            let text = caps[1].trim().to_lowercase();
            for (needle, code) in LANGUAGE_MAP {
                if text.contains(needle) {
                    return Some((*code).to_string());
                }
            }
        }
    }

    None
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isbn13_hyphens_are_stripped() {
        let details = " ISBN-13: 978-85-565-1266-2 ";
        assert_eq!(extract_isbn13(details), Some("9788556512662".to_string()));
    }

    #[test]
    fn isbn10_with_check_x() {
        let details = " ISBN-10: 855651266X ";
        assert_eq!(extract_isbn10(details), Some("855651266X".to_string()));
    }

    #[test]
    fn asin_rejects_all_alphabetic_matches() {
        assert_eq!(
            extract_asin(" ASIN: B07FK8MJYR "),
            Some("B07FK8MJYR".to_string())
        );
        // 10 letters in the right spot, but no digits: not an ASIN.
        assert_eq!(extract_asin(" ASIN: PORTUGUESA "), None);
    }

    #[test]
    fn asin_is_uppercased() {
        assert_eq!(
            extract_asin(" asin: b07fk8mjyr "),
            Some("B07FK8MJYR".to_string())
        );
    }

    #[test]
    fn publisher_is_title_cased() {
        let details = " Editora intrínseca ltda Data da publicação 15 março 2021 ";
        assert_eq!(
            extract_publisher(details),
            Some("Intrínseca Ltda".to_string())
        );
    }

    #[test]
    fn publisher_english_label() {
        let details = " Publisher penguin books Publication date March 2019 ";
        assert_eq!(extract_publisher(details), Some("Penguin Books".to_string()));
    }

    #[test]
    fn page_count_portuguese_and_english() {
        assert_eq!(extract_page_count(" 408 páginas "), Some(408));
        assert_eq!(extract_page_count(" Length: 256 pages "), Some(256));
        assert_eq!(extract_page_count(" sem contagem "), None);
    }

    #[test]
    fn language_maps_to_locale_codes() {
        assert_eq!(
            extract_language(" Idioma: Português "),
            Some("pt-BR".to_string())
        );
        assert_eq!(
            extract_language(" Language: English "),
            Some("en".to_string())
        );
        assert_eq!(extract_language(" Idioma: Klingon "), None);
    }
}
