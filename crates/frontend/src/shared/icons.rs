use leptos::prelude::*;

/// Bootstrap Icons glyph, e.g. `icon("inbox")` -> `<i class="bi bi-inbox">`.
pub fn icon(name: &str) -> AnyView {
    let class = format!("bi bi-{}", name);
    view! { <i class=class aria-hidden="true"></i> }.into_any()
}

/// Glyph with extra utility classes (spacing, colour, size).
pub fn icon_with(name: &str, extra: &str) -> AnyView {
    let class = format!("bi bi-{} {}", name, extra);
    view! { <i class=class aria-hidden="true"></i> }.into_any()
}
