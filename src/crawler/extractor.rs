//! HTML extraction for the crawler: links, script sources and forms
//!
//! Parsing is permissive. Missing tags or attributes yield empty results,
//! never an error.

use crate::models::{Form, FormInput};
use scraper::{Html, Selector};
use url::Url;

/// Everything the crawler needs from one parsed page
#[derive(Debug, Default)]
pub struct PageExtract {
    /// Absolute http(s) links with fragments stripped
    pub links: Vec<String>,
    /// Absolute script source URLs, in document order
    pub scripts: Vec<String>,
    /// Forms with their named input fields
    pub forms: Vec<Form>,
}

/// Parses an HTML body and extracts links, script sources and forms,
/// resolved against the page URL.
pub fn extract(page_url: &Url, html: &str) -> PageExtract {
    let document = Html::parse_document(html);
    let mut out = PageExtract::default();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(link) = resolve_link(page_url, href) {
                    out.links.push(link);
                }
            }
        }
    }

    if let Ok(selector) = Selector::parse("script[src]") {
        for element in document.select(&selector) {
            if let Some(src) = element.value().attr("src") {
                if let Ok(resolved) = page_url.join(src.trim()) {
                    out.scripts.push(resolved.to_string());
                }
            }
        }
    }

    if let Ok(form_selector) = Selector::parse("form") {
        let field_selector = Selector::parse("input, textarea, select").ok();
        for form in document.select(&form_selector) {
            let action = match form.value().attr("action") {
                Some(action) => page_url
                    .join(action.trim())
                    .map(|u| u.to_string())
                    .unwrap_or_else(|_| page_url.to_string()),
                None => page_url.to_string(),
            };

            let method = form
                .value()
                .attr("method")
                .unwrap_or("get")
                .to_lowercase();

            let mut inputs = Vec::new();
            if let Some(ref fields) = field_selector {
                for field in form.select(fields) {
                    // Unnamed fields cannot be referenced in a submission
                    let Some(name) = field.value().attr("name") else {
                        continue;
                    };
                    inputs.push(FormInput {
                        name: name.to_string(),
                        field_type: field.value().attr("type").unwrap_or("text").to_string(),
                    });
                }
            }

            out.forms.push(Form {
                page: page_url.to_string(),
                action,
                method,
                inputs,
            });
        }
    }

    out
}

/// Resolves an anchor href against the page URL, keeping only http(s)
/// links and stripping any fragment.
fn resolve_link(page_url: &Url, raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut resolved = page_url.join(trimmed).ok()?;
    if resolved.scheme() != "http" && resolved.scheme() != "https" {
        return None;
    }
    resolved.set_fragment(None);
    Some(resolved.to_string())
}
