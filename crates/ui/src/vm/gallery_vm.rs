/// Position within a gallery flip-book.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageCursor {
    current: usize,
    total: usize,
}

impl PageCursor {
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self { current: 0, total }
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn at_start(&self) -> bool {
        self.current == 0
    }

    /// True once the last page is showing. A book of zero or one page starts at its end.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.current + 1 >= self.total
    }

    pub fn next(&mut self) {
        if !self.at_end() {
            self.current += 1;
        }
    }

    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    pub fn go_to(&mut self, page: usize) {
        if page < self.total {
            self.current = page;
        }
    }

    #[must_use]
    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.current + 1, self.total)
    }
}
