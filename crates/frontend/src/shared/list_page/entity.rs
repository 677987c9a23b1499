use crate::shared::list_utils::SortState;
use leptos::prelude::*;
use serde::de::DeserializeOwned;

/// Where a select filter gets its choices
#[derive(Debug, Clone, Copy)]
pub enum OptionSource {
    /// `(value, label)` pairs known at compile time
    Static(&'static [(&'static str, &'static str)]),
    /// Seeded by the host page, see `AdminConfig::filter_options`
    Host,
}

#[derive(Debug, Clone, Copy)]
pub enum FilterKind {
    /// Free text, debounced while typing
    Keyword { placeholder: &'static str },
    /// Fetches immediately on change
    Select {
        all_label: &'static str,
        options: OptionSource,
    },
}

/// One control of the filter bar
#[derive(Debug, Clone, Copy)]
pub struct FilterField {
    /// Query parameter name sent to the search endpoint
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FilterKind,
}

impl FilterField {
    pub const fn keyword(placeholder: &'static str) -> Self {
        Self {
            key: "keyword",
            label: "Tìm kiếm",
            kind: FilterKind::Keyword { placeholder },
        }
    }

    pub const fn select(
        key: &'static str,
        label: &'static str,
        all_label: &'static str,
        options: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            key,
            label,
            kind: FilterKind::Select {
                all_label,
                options: OptionSource::Static(options),
            },
        }
    }

    pub const fn host_select(key: &'static str, label: &'static str, all_label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FilterKind::Select {
                all_label,
                options: OptionSource::Host,
            },
        }
    }

    pub fn is_keyword(&self) -> bool {
        matches!(self.kind, FilterKind::Keyword { .. })
    }
}

/// Table header cell
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub label: &'static str,
    pub class: &'static str,
    /// Set for columns that sort the loaded page client-side
    pub sort_key: Option<&'static str>,
}

impl Column {
    pub const fn new(label: &'static str) -> Self {
        Self {
            label,
            class: "",
            sort_key: None,
        }
    }

    pub const fn with_class(label: &'static str, class: &'static str) -> Self {
        Self {
            label,
            class,
            sort_key: None,
        }
    }

    pub const fn sortable(label: &'static str, sort_key: &'static str) -> Self {
        Self {
            label,
            class: "",
            sort_key: Some(sort_key),
        }
    }

    pub const fn sort_by(self, sort_key: &'static str) -> Self {
        Self {
            sort_key: Some(sort_key),
            ..self
        }
    }
}

/// Everything the generic list page needs to know about one admin table.
pub trait ListEntity: 'static {
    type Row: DeserializeOwned + Clone + Send + Sync + 'static;

    /// Search endpoint path, e.g. `/admin/orders/api/search`
    const ENDPOINT: &'static str;
    const TITLE: &'static str;
    /// Noun used by the result caption ("đơn hàng", "sản phẩm", ...)
    const NOUN: &'static str;
    const EMPTY_TEXT: &'static str;
    const EMPTY_ICON: &'static str = "inbox";
    /// Keyword quiescence delay
    const DEBOUNCE_MS: u32 = 500;

    fn filters() -> Vec<FilterField>;

    fn columns() -> Vec<Column>;

    fn render_row(row: &Self::Row) -> AnyView;

    /// Reorders the loaded page for sortable columns. Server order by default.
    fn sort_rows(_rows: &mut [Self::Row], _sort: &SortState) {}

    fn filter_keys() -> Vec<&'static str> {
        Self::filters().iter().map(|f| f.key).collect()
    }
}
