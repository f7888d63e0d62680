use serde::Serialize;

/// Page-number controls shown around the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub current: usize,
    pub total: usize,
    /// Consecutive page numbers rendered as buttons.
    pub pages: Vec<usize>,
    /// Page 1 is shown separately because the window starts later.
    pub show_first: bool,
    pub leading_ellipsis: bool,
    pub trailing_ellipsis: bool,
    /// The last page is shown separately because the window ends earlier.
    pub show_last: bool,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PageWindow {
    /// Returns `None` when there is at most one page; nothing is rendered then.
    pub fn compute(current: usize, total: usize, max_visible: usize) -> Option<Self> {
        if total <= 1 {
            return None;
        }
        let current = current.clamp(1, total);
        let (start, end) = visible_range(current, total, max_visible);

        Some(PageWindow {
            current,
            total,
            pages: (start..=end).collect(),
            show_first: start > 1,
            leading_ellipsis: start > 2,
            trailing_ellipsis: end + 1 < total,
            show_last: end < total,
            has_prev: current > 1,
            has_next: current < total,
        })
    }
}

/// Inclusive `[start, end]` of at most `max_visible` pages centered on
/// `current`, shifted toward page 1 when the tail is cut off.
/// Expects `1 <= current <= total`.
pub fn visible_range(current: usize, total: usize, max_visible: usize) -> (usize, usize) {
    let max_visible = max_visible.max(1);
    let mut start = current.saturating_sub(max_visible / 2).max(1);
    let end = (start + max_visible - 1).min(total);

    if end.saturating_sub(start) < max_visible - 1 {
        start = (end + 1).saturating_sub(max_visible).max(1);
    }
    (start, end)
}
