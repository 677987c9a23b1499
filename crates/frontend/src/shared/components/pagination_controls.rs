use crate::shared::icons::icon_with;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLinkKind {
    Previous,
    Number(u32),
    Next,
}

/// One entry of the page-link list. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    pub kind: PageLinkKind,
    /// Page this link points at
    pub page: u32,
    pub disabled: bool,
    pub active: bool,
}

impl PageLink {
    /// Page to request on click. Disabled and active links request nothing.
    pub fn target(&self) -> Option<u32> {
        if self.disabled || self.active {
            None
        } else {
            Some(self.page)
        }
    }

    pub fn label(&self) -> String {
        match self.kind {
            PageLinkKind::Previous => "Trước".to_string(),
            PageLinkKind::Number(n) => n.to_string(),
            PageLinkKind::Next => "Sau".to_string(),
        }
    }
}

/// Builds Prev, 1..=total, Next. A single page needs no controls.
pub fn page_links(current: u32, total: u32) -> Vec<PageLink> {
    if total <= 1 {
        return Vec::new();
    }
    let current = current.clamp(1, total);

    let mut links = Vec::with_capacity(total as usize + 2);
    links.push(PageLink {
        kind: PageLinkKind::Previous,
        page: current.saturating_sub(1).max(1),
        disabled: current == 1,
        active: false,
    });
    links.extend((1..=total).map(|n| PageLink {
        kind: PageLinkKind::Number(n),
        page: n,
        disabled: false,
        active: n == current,
    }));
    links.push(PageLink {
        kind: PageLinkKind::Next,
        page: (current + 1).min(total),
        disabled: current == total,
        active: false,
    });
    links
}

/// Bootstrap page-link list (`ul.pagination`)
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Called with the requested page; never for disabled or active links
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let links = move || page_links(current_page.get(), total_pages.get());

    view! {
        <nav aria-label="Phân trang">
            <ul class="pagination pagination-sm justify-content-end mb-0">
                {move || {
                    links()
                        .into_iter()
                        .map(|link| {
                            let mut class = String::from("page-item");
                            if link.disabled {
                                class.push_str(" disabled");
                            }
                            if link.active {
                                class.push_str(" active");
                            }
                            let content = match link.kind {
                                PageLinkKind::Previous => {
                                    view! { <>{icon_with("chevron-left", "me-1")}{link.label()}</> }.into_any()
                                }
                                PageLinkKind::Next => {
                                    view! { <>{link.label()}{icon_with("chevron-right", "ms-1")}</> }.into_any()
                                }
                                PageLinkKind::Number(_) => view! { <>{link.label()}</> }.into_any(),
                            };
                            view! {
                                <li class=class>
                                    <a
                                        class="page-link"
                                        href="#"
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            if let Some(page) = link.target() {
                                                on_page_change.run(page);
                                            }
                                        }
                                    >
                                        {content}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </nav>
    }
}
