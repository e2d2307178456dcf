//! Document-level extraction steps (CSS selectors).

use scraper::Html;

use crate::selectors;

/// Fixed vocabulary mapping breadcrumb text to category names. Ordered:
/// containment is checked entry by entry.
const CATEGORY_MAP: &[(&str, &str)] = &[
    ("ficção", "Fiction"),
    ("fiction", "Fiction"),
    ("romance", "Romance"),
    ("fantasia", "Fantasy"),
    ("fantasy", "Fantasy"),
    ("mistério", "Mystery"),
    ("mystery", "Mystery"),
    ("terror", "Horror"),
    ("horror", "Horror"),
];

/// Product title, trimmed.
pub fn extract_title(document: &Html) -> Option<String> {
    let el = document.select(&selectors::TITLE).next()?;
    let title = el.text().collect::<String>().trim().to_string();
    (!title.is_empty()).then_some(title)
}

/// Author names in byline order. An entry is kept only if it is
/// non-empty, contains no parenthesis (role annotations like
/// "(Narrator)") and has not been seen before.
pub fn extract_authors(document: &Html) -> Option<Vec<String>> {
    let mut authors: Vec<String> = Vec::new();

    for el in document.select(&selectors::AUTHORS) {
        let author = el.text().collect::<String>().trim().to_string();
        if !author.is_empty() && !author.contains('(') && !authors.contains(&author) {
            authors.push(author);
        }
    }

    (!authors.is_empty()).then_some(authors)
}

/// Cover image URL.
///
/// Attribute fallback chain: `data-old-hires`, then `src`, then
/// `data-a-dynamic-image`. The dynamic-image attribute is a JSON object
/// mapping URL to pixel dimensions; its first key is the URL. A value
/// that looks like JSON but fails to decode is returned as-is.
pub fn extract_image_url(document: &Html) -> Option<String> {
    let el = document.select(&selectors::COVER_IMAGE).next()?;
    let src = el
        .value()
        .attr("data-old-hires")
        .or_else(|| el.value().attr("src"))
        .or_else(|| el.value().attr("data-a-dynamic-image"))?;

    if src.starts_with('{') {
        match serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(src) {
            Ok(map) => map.keys().next().cloned(),
            Err(_) => Some(src.to_string()),
        }
    } else {
        Some(src.to_string())
    }
}

/// First description block longer than 50 characters, tried across three
/// locations in priority order. The length floor filters out stub text.
pub fn extract_description(document: &Html) -> Option<String> {
    for selector in selectors::DESCRIPTION.iter() {
        if let Some(el) = document.select(selector).next() {
            let desc = el.text().collect::<String>().trim().to_string();
            if desc.chars().count() > 50 {
                return Some(desc);
            }
        }
    }

    None
}

/// Breadcrumb categories mapped through the fixed vocabulary.
///
/// Only anchors whose text length is strictly between 3 and 50
/// characters are considered. First-seen order is preserved, duplicates
/// are dropped, and a single crumb may contribute several categories.
pub fn extract_categories(document: &Html) -> Option<Vec<String>> {
    let mut categories: Vec<String> = Vec::new();

    for el in document.select(&selectors::BREADCRUMBS) {
        let text = el.text().collect::<String>().trim().to_string();
        let len = text.chars().count();
        if len <= 3 || len >= 50 {
            continue;
        }

        let normalized = text.to_lowercase();
        for (needle, category) in CATEGORY_MAP {
            if normalized.contains(needle) && !categories.iter().any(|c| c == category) {
                categories.push((*category).to_string());
            }
        }
    }

    (!categories.is_empty()).then_some(categories)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_and_authors() {
        let html = r#"
        <html><body>
            <span id="productTitle"> O Poder do Hábito </span>
            <div class="author">
                <a class="a-link-normal" href="/author">Charles Duhigg</a>
            </div>
            <div class="author">
                <a class="a-link-normal" href="/author">Charles Duhigg</a>
            </div>
            <div class="author">
                <a class="a-link-normal" href="/narrator">Rafael Sussumu (Narrator)</a>
            </div>
        </body></html>
        "#;

        let document = Html::parse_document(html);
        assert_eq!(
            extract_title(&document),
            Some("O Poder do Hábito".to_string())
        );

        // Duplicate collapsed, narrator annotation excluded.
        assert_eq!(
            extract_authors(&document),
            Some(vec!["Charles Duhigg".to_string()])
        );
    }

    #[test]
    fn missing_title_is_none() {
        let document = Html::parse_document("<html><body></body></html>");
        assert_eq!(extract_title(&document), None);
        assert_eq!(extract_authors(&document), None);
    }

    #[test]
    fn image_prefers_old_hires() {
        let html = r#"
        <img id="landingImage"
             data-old-hires="https://img.example/hires.jpg"
             src="https://img.example/small.jpg">
        "#;
        let document = Html::parse_document(html);
        assert_eq!(
            extract_image_url(&document),
            Some("https://img.example/hires.jpg".to_string())
        );
    }

    #[test]
    fn image_dynamic_json_takes_first_key() {
        let html = r#"
        <img id="imgBlkFront"
             src='{"https://img.example/a.jpg":[300,400],"https://img.example/b.jpg":[600,800]}'>
        "#;
        let document = Html::parse_document(html);
        assert_eq!(
            extract_image_url(&document),
            Some("https://img.example/a.jpg".to_string())
        );
    }

    #[test]
    fn image_malformed_json_falls_back_to_raw() {
        let html = r#"<img id="landingImage" src="{not json">"#;
        let document = Html::parse_document(html);
        assert_eq!(extract_image_url(&document), Some("{not json".to_string()));
    }

    #[test]
    fn description_skips_short_stubs() {
        let html = r#"
        <div id="bookDescription_feature_div">
            <noscript>Too short.</noscript>
            <div class="a-expander-content">
                Um estudo fascinante sobre como os hábitos funcionam e como
                eles podem ser transformados em qualquer vida.
            </div>
        </div>
        "#;
        let document = Html::parse_document(html);
        let desc = extract_description(&document).unwrap();
        assert!(desc.starts_with("Um estudo fascinante"));
    }

    #[test]
    fn categories_preserve_first_seen_order_without_duplicates() {
        let html = r#"
        <div id="wayfinding-breadcrumbs_feature_div">
            <a href="/b1">Literatura e Ficção</a>
            <a href="/b2">Fantasia Épica</a>
            <a href="/b3">Ficção Científica</a>
            <a href="/b4">Li</a>
        </div>
        "#;
        let document = Html::parse_document(html);
        assert_eq!(
            extract_categories(&document),
            Some(vec!["Fiction".to_string(), "Fantasy".to_string()])
        );
    }
}
