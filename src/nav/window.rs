/// Pagination window over a long option list.
///
/// When the list outgrows the row budget, the visible slice `[start, stop)`
/// strides through the list in steps of `avail - 2`: one row at each end is
/// reserved for a continuation ellipsis. The first and last windows get one
/// extra row back, since they only need a single ellipsis. Scrolling down
/// out of the initial window therefore skips one boundary (start 0 -> 2),
/// and scrolling back up takes the symmetric jump (start 2 -> 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    len: usize,
    avail: usize,
    start: usize,
}

impl PageWindow {
    pub fn new(len: usize, avail: usize) -> Self {
        Self {
            len,
            avail: avail.max(3),
            start: 0,
        }
    }

    /// Pagination only kicks in once the options outnumber the rows.
    pub fn is_active(&self) -> bool {
        self.len > self.avail
    }

    fn max_start(&self) -> usize {
        self.len + 1 - self.avail
    }

    pub fn start(&self) -> usize {
        if self.is_active() { self.start } else { 0 }
    }

    pub fn stop(&self) -> usize {
        if !self.is_active() {
            return self.len;
        }
        let mut stop = self.start + self.avail - 2;
        if self.start == 0 {
            stop += 1;
        }
        if self.start == self.max_start() {
            stop += 1;
        }
        stop
    }

    pub fn leading_ellipsis(&self) -> bool {
        self.is_active() && self.start() != 0
    }

    pub fn trailing_ellipsis(&self) -> bool {
        self.is_active() && self.stop() != self.len
    }

    /// Advance or retreat boundary by boundary until `selected` is visible.
    pub fn scroll_to(&mut self, selected: usize) {
        if !self.is_active() {
            return;
        }
        while selected >= self.stop() {
            self.start += if self.start == 0 { 2 } else { 1 };
        }
        while selected < self.start {
            self.start -= if self.start == 2 { 2 } else { 1 };
        }
    }

    /// Rebuild for a new list length or row budget, keeping `selected`
    /// visible. A call with unchanged dimensions only ensures `selected`
    /// is visible, leaving the window where navigation put it — callers
    /// relayout every frame, and that must not undo a scroll.
    pub fn resize(&mut self, len: usize, avail: usize, selected: usize) {
        let avail = avail.max(3);
        if len != self.len || avail != self.avail {
            *self = Self::new(len, avail);
        }
        self.scroll_to(selected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(window: &PageWindow, index: usize) -> bool {
        window.start() <= index && index < window.stop()
    }

    #[test]
    fn test_inactive_when_options_fit() {
        let window = PageWindow::new(5, 10);
        assert!(!window.is_active());
        assert_eq!(window.start(), 0);
        assert_eq!(window.stop(), 5);
        assert!(!window.leading_ellipsis());
        assert!(!window.trailing_ellipsis());
    }

    #[test]
    fn test_initial_window_has_no_leading_ellipsis() {
        let window = PageWindow::new(20, 6);
        assert!(window.is_active());
        assert_eq!(window.start(), 0);
        // First window gets the leading-ellipsis row back: avail - 1 items.
        assert_eq!(window.stop(), 5);
        assert!(!window.leading_ellipsis());
        assert!(window.trailing_ellipsis());
    }

    #[test]
    fn test_first_advance_skips_one_boundary() {
        let mut window = PageWindow::new(20, 6);
        window.scroll_to(5);
        assert_eq!(window.start(), 2);
        assert_eq!(window.stop(), 6);
        assert!(window.leading_ellipsis());
        assert!(window.trailing_ellipsis());
    }

    #[test]
    fn test_retreat_is_symmetric() {
        let mut window = PageWindow::new(20, 6);
        window.scroll_to(5);
        assert_eq!(window.start(), 2);
        window.scroll_to(1);
        assert_eq!(window.start(), 0);
        assert!(!window.leading_ellipsis());
    }

    #[test]
    fn test_last_window_has_no_trailing_ellipsis() {
        let mut window = PageWindow::new(20, 6);
        window.scroll_to(19);
        assert_eq!(window.stop(), 20);
        assert!(window.leading_ellipsis());
        assert!(!window.trailing_ellipsis());
        assert_eq!(window.start(), 15);
    }

    #[test]
    fn test_window_always_contains_selected() {
        for len in [7, 12, 20, 53] {
            for avail in [3, 5, 6, 11] {
                let mut window = PageWindow::new(len, avail);
                // Walk down then back up, checking visibility at every step.
                for selected in 0..len {
                    window.scroll_to(selected);
                    assert!(contains(&window, selected), "len={len} avail={avail} sel={selected}");
                    assert!(window.stop() <= len);
                }
                for selected in (0..len).rev() {
                    window.scroll_to(selected);
                    assert!(contains(&window, selected), "len={len} avail={avail} sel={selected}");
                }
            }
        }
    }

    #[test]
    fn test_ellipsis_iff_non_boundary() {
        let mut window = PageWindow::new(30, 7);
        for selected in 0..30 {
            window.scroll_to(selected);
            assert_eq!(window.leading_ellipsis(), window.start() != 0);
            assert_eq!(window.trailing_ellipsis(), window.stop() != 30);
        }
    }

    #[test]
    fn test_visible_rows_never_exceed_budget() {
        let mut window = PageWindow::new(25, 8);
        for selected in 0..25 {
            window.scroll_to(selected);
            let mut rows = window.stop() - window.start();
            if window.leading_ellipsis() {
                rows += 1;
            }
            if window.trailing_ellipsis() {
                rows += 1;
            }
            assert!(rows <= 8, "selected={selected} rows={rows}");
        }
    }

    #[test]
    fn test_resize_keeps_selection_visible() {
        let mut window = PageWindow::new(20, 6);
        window.scroll_to(12);
        window.resize(20, 4, 12);
        assert!(contains(&window, 12));
        window.resize(20, 30, 12);
        assert!(!window.is_active());
    }

    #[test]
    fn test_resize_with_unchanged_dimensions_keeps_window() {
        let mut window = PageWindow::new(20, 6);
        window.scroll_to(10);
        assert_eq!(window.start(), 7);
        // Moving up within the visible slice leaves the window alone...
        window.scroll_to(9);
        assert_eq!(window.start(), 7);
        // ...and so does a same-dimension resize afterwards.
        window.resize(20, 6, 9);
        assert_eq!(window.start(), 7);
    }

    #[test]
    fn test_barely_overflowing_list() {
        // len == avail + 1: the smallest list that paginates.
        let mut window = PageWindow::new(7, 6);
        assert_eq!(window.stop(), 5);
        window.scroll_to(6);
        assert_eq!(window.start(), 2);
        assert_eq!(window.stop(), 7);
        assert!(!window.trailing_ellipsis());
    }
}
