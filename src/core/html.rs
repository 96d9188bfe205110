// src/core/html.rs
// Small helpers over the parsed tree. Everything here looks at *direct*
// children only; the page nests tables inside cells and we must not
// pick up their rows or links.

use scraper::ElementRef;

/// Direct element children of `el` with tag name `tag`, in document order.
pub fn child_elements<'a>(el: ElementRef<'a>, tag: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.children()
        .filter_map(ElementRef::wrap)
        .filter(move |child| child.value().name() == tag)
}

/// Text of `el` and its descendants, exactly as parsed (`&nbsp;` is U+00A0).
pub fn raw_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// First whitespace-separated value of the `class` attribute, if any.
pub fn first_class<'a>(el: ElementRef<'a>) -> Option<&'a str> {
    el.value().attr("class")?.split_whitespace().next()
}
