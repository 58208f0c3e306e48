//! Scraper for the server-rendered month page.
//!
//! The page is the server's authoritative view of the form: one input per
//! field, named `{field}_{date}`. Attribute order varies between templates,
//! so name and value are pulled out of each input tag independently.

use crate::models::form::Form;
use regex::Regex;
use std::sync::OnceLock;

fn input_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"<input\b[^>]*>"#).unwrap())
}

fn attr_re(attr: &str) -> Regex {
    Regex::new(&format!(r#"{attr}\s*=\s*"([^"]*)""#)).unwrap()
}

/// Extract `(name, value)` pairs from every `<input>` tag. Inputs without a
/// name are skipped; a missing value attribute reads as empty.
pub fn scrape_inputs(html: &str) -> Vec<(String, String)> {
    let name_re = attr_re("name");
    let value_re = attr_re("value");

    input_re()
        .find_iter(html)
        .filter_map(|tag| {
            let tag = tag.as_str();
            let name = name_re.captures(tag)?.get(1)?.as_str().to_string();
            let value = value_re
                .captures(tag)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            Some((name, value))
        })
        .collect()
}

/// Build a form view-model from the page HTML.
pub fn form_from_page(html: &str) -> Form {
    Form::from_inputs(scrape_inputs(html))
}
