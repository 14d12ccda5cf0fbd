//! Download-link scraping for package index pages.

use reqwest::Url;
use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::error::FetchError;

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("static selector"));

/// Every anchor href on the page containing `marker`, in document order.
pub fn find_links(html: &str, marker: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|a| a.value().attr("href"))
        .filter(|href| href.contains(marker))
        .map(str::to_string)
        .collect()
}

/// The first link containing `marker`, resolved against `page_url`.
pub fn first_link(html: &str, page_url: &str, marker: &str) -> Result<Option<String>, FetchError> {
    let Some(href) = find_links(html, marker).into_iter().next() else {
        return Ok(None);
    };

    let base = Url::parse(page_url).map_err(|e| FetchError::InvalidUrl {
        url: page_url.to_string(),
        reason: e.to_string(),
    })?;
    let resolved = base.join(&href).map_err(|e| FetchError::InvalidUrl {
        url: href.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(resolved.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SOURCE_PAGE: &str = r#"
        <html><body>
          <div id="pdownload">
            <table>
              <tr><td><a href="http://deb.debian.org/debian/pool/main/z/zlib/zlib_1.3.dfsg-3.dsc">[zlib_1.3.dfsg-3.dsc]</a></td></tr>
              <tr><td><a href="http://deb.debian.org/debian/pool/main/z/zlib/zlib_1.3.dfsg.orig.tar.gz">[zlib_1.3.dfsg.orig.tar.gz]</a></td></tr>
              <tr><td><a href="http://deb.debian.org/debian/pool/main/z/zlib/zlib_1.3.dfsg-3.debian.tar.xz">[zlib_1.3.dfsg-3.debian.tar.xz]</a></td></tr>
              <tr><td><a href="/mirror/zlib_1.3.dfsg.orig.tar.gz">[mirror]</a></td></tr>
            </table>
          </div>
          <a name="anchor-without-href">x</a>
        </body></html>
    "#;

    #[test]
    fn test_find_links_in_order() {
        let links = find_links(SOURCE_PAGE, "orig.tar.gz");
        assert_eq!(
            links,
            vec![
                "http://deb.debian.org/debian/pool/main/z/zlib/zlib_1.3.dfsg.orig.tar.gz",
                "/mirror/zlib_1.3.dfsg.orig.tar.gz",
            ]
        );
    }

    #[test]
    fn test_first_link_absolute() {
        let link = first_link(SOURCE_PAGE, "https://packages.debian.org/source/sid/zlib", "orig.tar.gz")
            .unwrap();
        assert_eq!(
            link.as_deref(),
            Some("http://deb.debian.org/debian/pool/main/z/zlib/zlib_1.3.dfsg.orig.tar.gz")
        );
    }

    #[test]
    fn test_first_link_relative_is_resolved() {
        let html = r#"<a href="../pool/zlib1g_1.3_amd64.deb">zlib1g</a>"#;
        let link = first_link(html, "https://mirror.example.org/sid/amd64/zlib1g/download", "pool/")
            .unwrap();
        assert_eq!(
            link.as_deref(),
            Some("https://mirror.example.org/sid/amd64/pool/zlib1g_1.3_amd64.deb")
        );
    }

    #[test]
    fn test_first_link_none() {
        let html = r#"<a href="zlib_1.3.dsc">dsc</a>"#;
        let link = first_link(html, "https://packages.debian.org/source/sid/zlib", "orig.tar.gz")
            .unwrap();
        assert_eq!(link, None);
    }

    #[test]
    fn test_first_link_bad_page_url() {
        let html = r#"<a href="zlib.orig.tar.gz">x</a>"#;
        assert!(first_link(html, "not a url", "orig.tar.gz").is_err());
    }
}
