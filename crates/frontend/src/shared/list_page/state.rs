use super::query::ListQuery;
use crate::shared::debounce::{Generation, Ticket};
use crate::shared::http::FetchError;
use contracts::shared::page::{PageEnvelope, PageInfo};

#[derive(Debug, Clone, PartialEq)]
pub enum ListPhase<R> {
    /// Before the first request
    Idle,
    Loading,
    Loaded { rows: Vec<R> },
    Failed { message: String },
}

/// What the table body shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableBody {
    Loading,
    Empty,
    Error,
    Rows,
}

#[derive(Debug, Clone)]
pub struct ListState<R> {
    pub query: ListQuery,
    pub phase: ListPhase<R>,
    /// Paging metadata of the last successful response
    pub info: Option<PageInfo>,
    generation: Generation,
}

impl<R> ListState<R> {
    pub fn new(query: ListQuery) -> Self {
        Self {
            query,
            phase: ListPhase::Idle,
            info: None,
            generation: Generation::new(),
        }
    }

    /// Starts a request for the current query; earlier requests become stale.
    pub fn begin(&mut self) -> Ticket {
        self.phase = ListPhase::Loading;
        self.generation.next()
    }

    /// Applies a response if `ticket` is still current. Returns whether it applied.
    pub fn complete(&mut self, ticket: Ticket, result: Result<PageEnvelope<R>, FetchError>) -> bool {
        if !self.generation.is_current(ticket) {
            return false;
        }
        match result {
            Ok(envelope) => {
                let reported = envelope.reported_page().is_some();
                let (rows, mut info) = envelope.into_parts();
                if !reported {
                    info.page = self.query.page();
                }
                if info.number_of_elements == 0 {
                    info.number_of_elements = rows.len() as u32;
                }
                self.info = Some(info);
                self.phase = ListPhase::Loaded { rows };
            }
            Err(e) => {
                self.phase = ListPhase::Failed {
                    message: e.user_message().to_string(),
                };
            }
        }
        true
    }

    pub fn is_loaded(&self) -> bool {
        !matches!(self.phase, ListPhase::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, ListPhase::Idle | ListPhase::Loading)
    }

    pub fn rows(&self) -> &[R] {
        match &self.phase {
            ListPhase::Loaded { rows } => rows,
            _ => &[],
        }
    }

    pub fn body(&self) -> TableBody {
        match &self.phase {
            ListPhase::Idle | ListPhase::Loading => TableBody::Loading,
            ListPhase::Loaded { rows } if rows.is_empty() => TableBody::Empty,
            ListPhase::Loaded { .. } => TableBody::Rows,
            ListPhase::Failed { .. } => TableBody::Error,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            ListPhase::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Page to highlight: what the server returned, else what was asked for
    pub fn current_page(&self) -> u32 {
        self.info.map(|i| i.page).unwrap_or_else(|| self.query.page())
    }

    pub fn total_pages(&self) -> u32 {
        self.info.map(|i| i.total_pages).unwrap_or(0)
    }

    pub fn total_elements(&self) -> u64 {
        self.info.map(|i| i.total_elements).unwrap_or(0)
    }

    /// "Hiển thị N trên tổng số M <noun>"
    pub fn caption(&self, noun: &str) -> Option<String> {
        self.info.map(|i| {
            format!(
                "Hiển thị {} trên tổng số {} {}",
                i.number_of_elements, i.total_elements, noun
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(rows: Vec<i64>, number: u32, total_pages: u32, total: u64) -> PageEnvelope<i64> {
        PageEnvelope {
            number_of_elements: rows.len() as u32,
            content: Some(rows),
            number: Some(number),
            current_page: None,
            total_pages,
            total_elements: total,
        }
    }

    fn state() -> ListState<i64> {
        ListState::new(ListQuery::new(&["keyword", "status"]))
    }

    #[test]
    fn test_begin_shows_loading() {
        let mut s = state();
        assert_eq!(s.body(), TableBody::Loading);
        s.begin();
        assert_eq!(s.phase, ListPhase::Loading);
        assert!(s.is_loading());
    }

    #[test]
    fn test_loaded_rows_and_caption() {
        let mut s = state();
        let ticket = s.begin();
        assert!(s.complete(ticket, Ok(envelope(vec![1, 2, 3], 0, 4, 31))));
        assert_eq!(s.body(), TableBody::Rows);
        assert_eq!(s.rows(), &[1, 2, 3]);
        assert_eq!(s.total_pages(), 4);
        assert_eq!(
            s.caption("đơn hàng").as_deref(),
            Some("Hiển thị 3 trên tổng số 31 đơn hàng")
        );
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut s = state();
        let slow = s.begin();
        s.query.set_filter("keyword", "áo");
        let fast = s.begin();

        assert!(s.complete(fast, Ok(envelope(vec![7], 0, 1, 1))));
        assert!(!s.complete(slow, Ok(envelope(vec![1, 2], 0, 1, 2))));
        assert_eq!(s.rows(), &[7]);
    }

    #[test]
    fn test_stale_failure_does_not_replace_rows() {
        let mut s = state();
        let slow = s.begin();
        let fast = s.begin();
        s.complete(fast, Ok(envelope(vec![5], 0, 1, 1)));
        assert!(!s.complete(slow, Err(FetchError::Status(500))));
        assert_eq!(s.body(), TableBody::Rows);
    }

    #[test]
    fn test_empty_content_is_empty_state() {
        let mut s = state();
        let ticket = s.begin();
        s.complete(ticket, Ok(PageEnvelope::default()));
        assert_eq!(s.body(), TableBody::Empty);
        assert!(s.rows().is_empty());
    }

    #[test]
    fn test_failure_clears_rows() {
        let mut s = state();
        let ticket = s.begin();
        s.complete(ticket, Ok(envelope(vec![1, 2], 0, 2, 12)));

        let ticket = s.begin();
        assert!(s.complete(ticket, Err(FetchError::Transport("offline".into()))));
        assert_eq!(s.body(), TableBody::Error);
        assert!(s.rows().is_empty());
        assert_eq!(s.error_message(), Some("Có lỗi xảy ra khi tải dữ liệu"));
        // Pagination keeps the last known page count
        assert_eq!(s.total_pages(), 2);
    }

    #[test]
    fn test_missing_number_of_elements_uses_row_count() {
        let mut s = state();
        let ticket = s.begin();
        let mut page = envelope(vec![1, 2], 0, 1, 2);
        page.number_of_elements = 0;
        s.complete(ticket, Ok(page));
        assert_eq!(s.caption("người dùng").as_deref(), Some("Hiển thị 2 trên tổng số 2 người dùng"));
    }

    #[test]
    fn test_current_page_follows_server() {
        let mut s = state();
        s.query.set_page(5);
        assert_eq!(s.current_page(), 5);

        // Server clamped an out-of-range request to its last page
        let ticket = s.begin();
        s.complete(ticket, Ok(envelope(vec![1], 2, 3, 21)));
        assert_eq!(s.current_page(), 3);

        // No page reported: fall back to the requested one
        s.query.set_page(2);
        let ticket = s.begin();
        let mut page = envelope(vec![1], 0, 3, 21);
        page.number = None;
        s.complete(ticket, Ok(page));
        assert_eq!(s.current_page(), 2);
    }
}
