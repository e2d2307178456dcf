//! CSS selectors for Amazon product pages.
//!
//! All selectors live here so there is one place to update when Amazon
//! changes its HTML structure.

use scraper::Selector;
use std::sync::LazyLock;

/// Product title.
pub static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"#productTitle, span[id="productTitle"]"#).unwrap());

/// Author byline links.
pub static AUTHORS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".author a.a-link-normal, .author .contributorNameID").unwrap()
});

/// Cover image, print and ebook layouts.
pub static COVER_IMAGE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#landingImage, #imgBlkFront, #ebooksImgBlkFront").unwrap());

/// Description blocks, in priority order.
pub static DESCRIPTION: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    [
        "#bookDescription_feature_div noscript",
        "#bookDescription_feature_div .a-expander-content",
        "#feature-bullets ul.a-unordered-list",
    ]
    .iter()
    .map(|s| Selector::parse(s).unwrap())
    .collect()
});

/// Product-detail containers whose text makes up the details blob,
/// in concatenation order.
pub static DETAIL_CONTAINERS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    [
        "#detailBullets_feature_div",
        "#detail_bullets_id",
        "#productDetailsTable",
        "#detailBulletsWrapper_feature_div",
        ".detail-bullet-list",
    ]
    .iter()
    .map(|s| Selector::parse(s).unwrap())
    .collect()
});

/// Breadcrumb anchors used for category extraction.
pub static BREADCRUMBS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("#wayfinding-breadcrumbs_feature_div a, .a-breadcrumb a").unwrap()
});
