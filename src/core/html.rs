// src/core/html.rs
// Small helpers over `scraper` so the specs read as selector + field.

use scraper::{ ElementRef, Selector };

/// Parse a selector that is known at compile time.
///
/// All selectors in this crate are string literals covered by tests, so a
/// failure here is a programming error, not bad input.
pub fn sel(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e:?}"))
}

/// First descendant matching `selector`.
pub fn first<'a>(el: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    el.select(selector).next()
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

/// All descendant text, concatenated, then trimmed.
pub fn text_trimmed(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Each text node trimmed on its own, then concatenated without separator.
/// Note "01.03. <b> - </b> 15.03." reads as "01.03.-15.03." here.
pub fn text_stripped(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn text_helpers_differ_on_nested_nodes() {
        let doc = Html::parse_fragment("<p>  Lidl <b> Prospekt </b>  </p>");
        let p = doc.select(&sel("p")).next().unwrap();
        assert_eq!(text_trimmed(p), "Lidl  Prospekt");
        assert_eq!(text_stripped(p), "LidlProspekt");
    }

    #[test]
    fn attr_and_first() {
        let doc = Html::parse_fragment(r#"<div><a title="x">1</a><a title="y">2</a></div>"#);
        let div = doc.select(&sel("div")).next().unwrap();
        let a = first(div, &sel("a")).unwrap();
        assert_eq!(attr(a, "title"), Some("x"));
        assert_eq!(attr(a, "href"), None);
        assert!(first(div, &sel("img")).is_none());
    }
}
