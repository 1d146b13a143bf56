//! View state shared by every page controller.
//!
//! A controller owns one [`PageState`]: the visible [`ViewState`] plus a
//! request-generation counter. Starting a request hands out a [`Ticket`];
//! a response is only committed while its ticket is still the newest, so a
//! slow response to a superseded request is dropped on arrival.

/// What a page currently shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        match self {
            ViewState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Identifies one request start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct Generation(u64);

impl Generation {
    /// Invalidate every outstanding ticket and hand out a fresh one.
    pub fn next(&mut self) -> Ticket {
        self.0 += 1;
        Ticket(self.0)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.0 == ticket.0
    }
}

/// [`ViewState`] guarded by a [`Generation`].
#[derive(Debug)]
pub struct PageState<T> {
    view: ViewState<T>,
    generation: Generation,
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        Self {
            view: ViewState::Idle,
            generation: Generation::default(),
        }
    }
}

impl<T> PageState<T> {
    pub fn view(&self) -> &ViewState<T> {
        &self.view
    }

    pub fn data(&self) -> Option<&T> {
        self.view.data()
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        self.view.data_mut()
    }

    /// Clear the previous result and show the loading state.
    pub fn begin(&mut self) -> Ticket {
        self.view = ViewState::Loading;
        self.generation.next()
    }

    /// Start a request that keeps the current result on screen while it runs.
    pub fn begin_in_place(&mut self) -> Ticket {
        self.generation.next()
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.is_current(ticket)
    }

    /// Commit a settled request. Returns `false` (and changes nothing) when a
    /// newer request has started since `ticket` was issued.
    pub fn settle(&mut self, ticket: Ticket, outcome: Result<T, String>) -> bool {
        if !self.generation.is_current(ticket) {
            log::debug!("dropping stale response ({ticket:?})");
            return false;
        }
        self.view = match outcome {
            Ok(data) => ViewState::Success(data),
            Err(message) => ViewState::Error(message),
        };
        true
    }

    /// Show a failure that never reached the network (validation).
    /// Any in-flight request is invalidated.
    pub fn reject(&mut self, message: impl Into<String>) {
        self.generation.next();
        self.view = ViewState::Error(message.into());
    }

    /// Drop back to idle, invalidating any in-flight request.
    pub fn reset(&mut self) {
        self.generation.next();
        self.view = ViewState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_clears_previous_result() {
        let mut page = PageState::default();
        let ticket = page.begin();
        assert!(page.settle(ticket, Ok(1)));
        assert_eq!(page.data(), Some(&1));

        page.begin();
        assert!(page.view().is_loading());
        assert_eq!(page.data(), None);
    }

    #[test]
    fn last_request_wins() {
        let mut page: PageState<&str> = PageState::default();
        let first = page.begin();
        let second = page.begin();

        // the newer request settles first, then the old one straggles in
        assert!(page.settle(second, Ok("second")));
        assert!(!page.settle(first, Ok("first")));
        assert_eq!(page.data(), Some(&"second"));

        assert!(!page.settle(first, Err("boom".to_string())));
        assert_eq!(page.view().error(), None);
    }

    #[test]
    fn reject_invalidates_in_flight() {
        let mut page: PageState<u8> = PageState::default();
        let ticket = page.begin();
        page.reject("Please enter between 2 and 4 tickers to compare.");
        assert!(!page.settle(ticket, Ok(7)));
        assert_eq!(
            page.view().error(),
            Some("Please enter between 2 and 4 tickers to compare.")
        );
    }

    #[test]
    fn in_place_request_keeps_data() {
        let mut page = PageState::default();
        let ticket = page.begin();
        page.settle(ticket, Ok(vec![1, 2]));

        let refresh = page.begin_in_place();
        assert_eq!(page.data(), Some(&vec![1, 2]));
        assert!(page.is_current(refresh));
        assert!(!page.is_current(ticket));
    }

    #[test]
    fn reset_goes_idle() {
        let mut page: PageState<()> = PageState::default();
        page.reject("nope");
        page.reset();
        assert_eq!(page.view(), &ViewState::Idle);
    }
}
