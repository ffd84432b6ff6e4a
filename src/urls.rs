//! URL construction for site assets, docs and pages.
//!
//! Every URL is `base_url`, then a fixed prefix (`img/`, `docs/` or nothing),
//! then `language/` when a language is given, then the target. An empty
//! language omits the segment entirely.
//!
//! Nothing is escaped or validated: these are templating helpers, so a
//! malformed input simply yields a malformed URL.

/// URL helpers bound to a site's base path.
#[derive(Debug, Clone, Copy)]
pub struct UrlBuilder<'a> {
    base_url: &'a str,
}

impl<'a> UrlBuilder<'a> {
    pub fn new(base_url: &'a str) -> Self {
        Self { base_url }
    }

    /// `{base}img/{name}`
    pub fn image_url(&self, name: &str) -> String {
        format!("{}img/{}", self.base_url, name)
    }

    /// `{base}docs/{language}/{doc}`, or `{base}docs/{doc}` without a language.
    pub fn doc_url(&self, doc: &str, language: &str) -> String {
        format!("{}docs/{}{}", self.base_url, language_segment(language), doc)
    }

    /// `{base}{language}/{page}`, or `{base}{page}` without a language.
    pub fn page_url(&self, page: &str, language: &str) -> String {
        format!("{}{}{}", self.base_url, language_segment(language), page)
    }
}

fn language_segment(language: &str) -> String {
    if language.is_empty() {
        String::new()
    } else {
        format!("{language}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_url_joins_base_and_name() {
        let urls = UrlBuilder::new("/");
        assert_eq!(urls.image_url("docusaurus.svg"), "/img/docusaurus.svg");
    }

    #[test]
    fn image_url_under_subdirectory_base() {
        let urls = UrlBuilder::new("/project/");
        assert_eq!(urls.image_url("logo.png"), "/project/img/logo.png");
    }

    #[test]
    fn doc_url_without_language() {
        let urls = UrlBuilder::new("/");
        assert_eq!(urls.doc_url("doc1.html", ""), "/docs/doc1.html");
    }

    #[test]
    fn doc_url_with_language() {
        let urls = UrlBuilder::new("/");
        for lang in ["en", "fr", "zh-CN", "pt_BR"] {
            assert_eq!(
                urls.doc_url("doc1.html", lang),
                format!("/docs/{lang}/doc1.html")
            );
        }
    }

    #[test]
    fn page_url_without_language() {
        let urls = UrlBuilder::new("/");
        assert_eq!(urls.page_url("users.html", ""), "/users.html");
    }

    #[test]
    fn page_url_with_language() {
        let urls = UrlBuilder::new("/");
        assert_eq!(urls.page_url("users.html", "fr"), "/fr/users.html");
    }

    #[test]
    fn language_is_used_verbatim() {
        let urls = UrlBuilder::new("/base/");
        assert_eq!(urls.page_url("p.html", "a b"), "/base/a b/p.html");
        assert_eq!(urls.doc_url("d.html", "../x"), "/base/docs/../x/d.html");
    }

    #[test]
    fn malformed_input_is_passed_through() {
        let urls = UrlBuilder::new("");
        assert_eq!(urls.image_url("https://cdn/x.png"), "img/https://cdn/x.png");
    }
}
