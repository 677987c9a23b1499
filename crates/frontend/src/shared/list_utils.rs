/// Client-side sorting of an already loaded page
use std::cmp::Ordering;

/// Rows that can be ordered by a named column
pub trait Sortable {
    /// Compares two rows by the given field
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sorts the list by the given field
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Numeric comparison where NaN sorts last
pub fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

/// Active sort column and direction. No column means server order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    pub field: Option<String>,
    pub ascending: bool,
}

impl SortState {
    /// Clicking the active column flips direction; a new column starts ascending.
    pub fn toggle(&mut self, field: &str) {
        if self.field.as_deref() == Some(field) {
            self.ascending = !self.ascending;
        } else {
            self.field = Some(field.to_string());
            self.ascending = true;
        }
    }

    pub fn is_active(&self, field: &str) -> bool {
        self.field.as_deref() == Some(field)
    }

    pub fn apply<T: Sortable>(&self, items: &mut [T]) {
        if let Some(field) = &self.field {
            sort_list(items, field, self.ascending);
        }
    }
}

/// Bootstrap icon class for a sortable header
pub fn sort_icon_class(state: &SortState, field: &str) -> &'static str {
    match (state.is_active(field), state.ascending) {
        (true, true) => "bi bi-caret-up-fill",
        (true, false) => "bi bi-caret-down-fill",
        (false, _) => "bi bi-arrow-down-up text-muted",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(f64);

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, _field: &str) -> Ordering {
            compare_f64(self.0, other.0)
        }
    }

    fn values(rows: &[Row]) -> Vec<f64> {
        rows.iter().map(|r| r.0).collect()
    }

    #[test]
    fn test_toggle_flips_direction_on_same_column() {
        let mut state = SortState::default();
        state.toggle("usedCount");
        assert!(state.is_active("usedCount"));
        assert!(state.ascending);
        state.toggle("usedCount");
        assert!(!state.ascending);
        state.toggle("minOrderValue");
        assert!(state.is_active("minOrderValue"));
        assert!(state.ascending);
    }

    #[test]
    fn test_apply_sorts_loaded_rows() {
        let mut rows = vec![Row(10.0), Row(2.5), Row(7.0)];
        let mut state = SortState::default();
        state.apply(&mut rows);
        assert_eq!(values(&rows), vec![10.0, 2.5, 7.0]);

        state.toggle("discountPercent");
        state.apply(&mut rows);
        assert_eq!(values(&rows), vec![2.5, 7.0, 10.0]);

        state.toggle("discountPercent");
        state.apply(&mut rows);
        assert_eq!(values(&rows), vec![10.0, 7.0, 2.5]);
    }

    #[test]
    fn test_sort_icon_class() {
        let mut state = SortState::default();
        assert_eq!(sort_icon_class(&state, "a"), "bi bi-arrow-down-up text-muted");
        state.toggle("a");
        assert_eq!(sort_icon_class(&state, "a"), "bi bi-caret-up-fill");
        assert_eq!(sort_icon_class(&state, "b"), "bi bi-arrow-down-up text-muted");
        state.toggle("a");
        assert_eq!(sort_icon_class(&state, "a"), "bi bi-caret-down-fill");
    }
}
