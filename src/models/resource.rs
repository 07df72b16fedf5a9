use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

lazy_static! {
    static ref IMAGE_EXTENSION: Regex =
        Regex::new(r"(?i)\.(jpg|jpeg|png|gif|webp|svg)$").unwrap();
}

/// Category of a discovered resource, inferred from the resolved URL's path
/// extension. Recomputed on demand, never stored alongside the resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceCategory {
    Image,
    Script,
    Stylesheet,
    Other,
}

impl ResourceCategory {
    /// Classification looks at the URL path only, so `app.js?v=2` still
    /// counts as a script.
    pub fn from_url(url: &Url) -> Self {
        let path = url.path();

        if IMAGE_EXTENSION.is_match(path) {
            Self::Image
        } else if path.to_ascii_lowercase().ends_with(".js") {
            Self::Script
        } else if path.to_ascii_lowercase().ends_with(".css") {
            Self::Stylesheet
        } else {
            Self::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn category(raw: &str) -> ResourceCategory {
        ResourceCategory::from_url(&Url::parse(raw).unwrap())
    }

    #[test]
    fn classifies_image_extensions() {
        for ext in ["jpg", "jpeg", "png", "gif", "webp", "svg"] {
            let url = format!("https://example.com/assets/pic.{}", ext);
            assert_eq!(category(&url), ResourceCategory::Image, "{}", ext);
        }
    }

    #[test]
    fn classifies_scripts_and_stylesheets() {
        assert_eq!(category("https://example.com/app.js"), ResourceCategory::Script);
        assert_eq!(category("https://example.com/site.css"), ResourceCategory::Stylesheet);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(category("https://example.com/HERO.PNG"), ResourceCategory::Image);
        assert_eq!(category("https://example.com/BUNDLE.JS"), ResourceCategory::Script);
    }

    #[test]
    fn query_string_does_not_hide_the_extension() {
        assert_eq!(
            category("https://example.com/app.js?v=2"),
            ResourceCategory::Script
        );
        assert_eq!(
            category("https://example.com/theme.css?cache=none"),
            ResourceCategory::Stylesheet
        );
    }

    #[test]
    fn unknown_extensions_fall_back_to_other() {
        assert_eq!(category("https://example.com/font.woff2"), ResourceCategory::Other);
        assert_eq!(category("https://example.com/api/data"), ResourceCategory::Other);
    }
}
