use scraper::{Html, Selector};
use std::collections::HashSet;
use tracing::debug;
use url::Url;

/// Discovers the external resources referenced by a document: images,
/// stylesheets and scripts. References are resolved against the page URL and
/// deduplicated, so a resource linked twice is measured once.
pub struct ScraperService;

impl ScraperService {
    pub fn new() -> Self {
        Self
    }

    pub fn discover_resources(&self, html: &str, base: &Url) -> HashSet<Url> {
        let document = Html::parse_document(html);
        let mut resources = HashSet::new();

        self.collect(&document, "img[src]", "src", base, &mut resources);
        self.collect(
            &document,
            "link[rel=\"stylesheet\"][href]",
            "href",
            base,
            &mut resources,
        );
        self.collect(&document, "script[src]", "src", base, &mut resources);

        debug!("Discovered {} unique resources", resources.len());
        resources
    }

    fn collect(
        &self,
        document: &Html,
        selector_str: &str,
        attr: &str,
        base: &Url,
        out: &mut HashSet<Url>,
    ) {
        if let Ok(selector) = Selector::parse(selector_str) {
            for element in document.select(&selector) {
                if let Some(value) = element.value().attr(attr) {
                    if let Ok(resolved) = base.join(value) {
                        out.insert(resolved);
                    }
                }
            }
        }
    }
}

impl Default for ScraperService {
    fn default() -> Self {
        Self::new()
    }
}
