//! Infinite-scroll feed state
//!
//! The feed loads pages 1, 2, 3... as the reader nears the bottom of the
//! scroll container. Each request gets a monotonic id; only the latest
//! in-flight request may apply its response, so a slow page can never be
//! appended out of order or twice.

/// Load the next page once the remaining scroll distance is within this
/// multiple of the viewport height
pub const SCROLL_THRESHOLD_RATIO: f64 = 1.5;

/// Minimum delay between two scroll-triggered checks
pub const SCROLL_THROTTLE_MS: f64 = 150.0;

/// Whether the reader is close enough to the bottom to load more
///
/// `remaining = scroll_height - (scroll_top + viewport_height)`
pub fn is_near_bottom(scroll_top: f64, viewport_height: f64, scroll_height: f64) -> bool {
    if viewport_height <= 0.0 {
        return false;
    }
    let remaining = scroll_height - (scroll_top + viewport_height);
    remaining <= viewport_height * SCROLL_THRESHOLD_RATIO
}

/// Handle for one page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub id: u64,
    pub page: u32,
}

/// Outcome of applying a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedUpdate {
    /// Page 1 replaced the list; carries the new length
    Replaced(usize),
    /// A later page was appended; carries the number of new items
    Appended(usize),
    /// The server returned an empty page; no further pages are requested
    Exhausted,
    /// The response belongs to a superseded request and was discarded
    Stale,
}

impl FeedUpdate {
    /// Whether the list gained items
    pub fn grew(&self) -> bool {
        match self {
            FeedUpdate::Replaced(len) => *len > 0,
            FeedUpdate::Appended(_) => true,
            FeedUpdate::Exhausted | FeedUpdate::Stale => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Feed<T> {
    items: Vec<T>,
    loaded_page: u32,
    in_flight: Option<PageRequest>,
    next_id: u64,
    exhausted: bool,
}

impl<T> Default for Feed<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Feed<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loaded_page: 0,
            in_flight: None,
            next_id: 1,
            exhausted: false,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Last page applied to the list (0 before the first response)
    pub fn page(&self) -> u32 {
        self.loaded_page
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn in_flight(&self) -> Option<PageRequest> {
        self.in_flight
    }

    fn issue(&mut self, page: u32) -> PageRequest {
        let request = PageRequest {
            id: self.next_id,
            page,
        };
        self.next_id += 1;
        self.in_flight = Some(request);
        request
    }

    /// Restart from page 1, superseding any request in flight
    ///
    /// Current items stay visible until the page-1 response replaces them.
    pub fn reset(&mut self) -> PageRequest {
        self.exhausted = false;
        self.issue(1)
    }

    /// Request the page after the last applied one
    ///
    /// Returns `None` while a request is in flight or once the feed is
    /// exhausted, which suppresses duplicate triggers from rapid scrolling.
    pub fn request_next(&mut self) -> Option<PageRequest> {
        if self.in_flight.is_some() || self.exhausted {
            return None;
        }
        let page = self.loaded_page + 1;
        Some(self.issue(page))
    }

    /// Follow-up request after a page was applied
    ///
    /// A page that leaves the list shorter than the viewport never produces
    /// a scroll event, so the caller re-checks the distance to the bottom
    /// once the new items are rendered and passes the result here.
    pub fn request_fill(&mut self, near_bottom: bool) -> Option<PageRequest> {
        if near_bottom {
            self.request_next()
        } else {
            None
        }
    }

    /// Apply the response for `request`
    pub fn complete(&mut self, request: PageRequest, items: Vec<T>) -> FeedUpdate {
        if self.in_flight != Some(request) {
            tracing::debug!(request_id = request.id, page = request.page, "discarding stale feed page");
            return FeedUpdate::Stale;
        }
        self.in_flight = None;

        if request.page <= 1 {
            self.loaded_page = 1;
            self.exhausted = items.is_empty();
            self.items = items;
            return FeedUpdate::Replaced(self.items.len());
        }

        if items.is_empty() {
            self.exhausted = true;
            return FeedUpdate::Exhausted;
        }

        let added = items.len();
        self.items.extend(items);
        self.loaded_page = request.page;
        FeedUpdate::Appended(added)
    }

    /// Release the in-flight slot after a failed request
    ///
    /// Returns false when the failure belongs to a superseded request.
    pub fn fail(&mut self, request: PageRequest) -> bool {
        if self.in_flight == Some(request) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }
}

/// Leading-edge throttle for scroll events
#[derive(Debug, Clone, Default)]
pub struct ScrollThrottle {
    last_fired_ms: Option<f64>,
}

impl ScrollThrottle {
    /// Whether an event at `now_ms` should be handled
    pub fn should_fire(&mut self, now_ms: f64) -> bool {
        match self.last_fired_ms {
            Some(last) if now_ms - last < SCROLL_THROTTLE_MS => false,
            _ => {
                self.last_fired_ms = Some(now_ms);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_bottom_threshold() {
        // 1000px viewport: trigger once 1500px or less remain below the fold
        assert!(!is_near_bottom(0.0, 1000.0, 4000.0));
        assert!(is_near_bottom(1500.0, 1000.0, 4000.0));
        assert!(is_near_bottom(0.0, 1000.0, 800.0));
        assert!(!is_near_bottom(0.0, 0.0, 800.0));
    }

    #[test]
    fn test_in_flight_guard_suppresses_duplicates() {
        let mut feed: Feed<u32> = Feed::new();
        let first = feed.request_next().unwrap();
        assert_eq!(first.page, 1);
        assert!(feed.request_next().is_none());

        feed.complete(first, vec![1, 2]);
        let second = feed.request_next().unwrap();
        assert_eq!(second.page, 2);
        assert!(second.id > first.id);
    }

    #[test]
    fn test_reset_supersedes_in_flight_page() {
        let mut feed: Feed<u32> = Feed::new();
        let first = feed.request_next().unwrap();
        feed.complete(first, vec![1, 2, 3]);

        let page_two = feed.request_next().unwrap();
        let restart = feed.reset();

        assert_eq!(feed.complete(page_two, vec![4, 5]), FeedUpdate::Stale);
        assert_eq!(feed.items(), &[1, 2, 3]);
        assert_eq!(feed.complete(restart, vec![9]), FeedUpdate::Replaced(1));
        assert_eq!(feed.items(), &[9]);
        assert_eq!(feed.page(), 1);
    }

    #[test]
    fn test_empty_page_exhausts_feed() {
        let mut feed: Feed<u32> = Feed::new();
        let first = feed.request_next().unwrap();
        feed.complete(first, vec![1]);
        let second = feed.request_next().unwrap();
        assert_eq!(feed.complete(second, Vec::new()), FeedUpdate::Exhausted);
        assert!(feed.is_exhausted());
        assert!(feed.request_next().is_none());
        assert_eq!(feed.page(), 1);
    }

    #[test]
    fn test_failure_releases_slot() {
        let mut feed: Feed<u32> = Feed::new();
        let first = feed.request_next().unwrap();
        assert!(feed.fail(first));
        assert!(!feed.is_loading());
        let retry = feed.request_next().unwrap();
        assert_eq!(retry.page, 1);
        assert!(!feed.fail(first));
    }

    #[test]
    fn test_second_page_appends_in_order() {
        let mut feed: Feed<u32> = Feed::new();
        let first = feed.request_next().unwrap();
        assert_eq!(feed.complete(first, (0..10).collect()), FeedUpdate::Replaced(10));

        // 3000px of content, reader scrolled to 1200px in a 900px viewport
        assert!(is_near_bottom(1200.0, 900.0, 3000.0));
        let second = feed.request_next().unwrap();
        assert_eq!(second.page, 2);

        let update = feed.complete(second, (10..20).collect());
        assert_eq!(update, FeedUpdate::Appended(10));
        assert!(update.grew());
        assert_eq!(feed.items(), (0..20).collect::<Vec<_>>().as_slice());
        assert_eq!(feed.page(), 2);
        assert!(!feed.is_loading());
    }

    #[test]
    fn test_short_page_requests_fill() {
        let mut feed: Feed<u32> = Feed::new();
        let first = feed.request_next().unwrap();
        let update = feed.complete(first, vec![1, 2]);
        assert!(update.grew());

        // Two items render 600px of a 900px viewport: no scrollbar, no scroll event
        let near_bottom = is_near_bottom(0.0, 900.0, 600.0);
        let fill = feed.request_fill(near_bottom).unwrap();
        assert_eq!(fill.page, 2);
        assert!(feed.request_fill(true).is_none());

        let update = feed.complete(fill, Vec::new());
        assert!(!update.grew());
        assert!(feed.request_fill(true).is_none());
    }

    #[test]
    fn test_fill_waits_for_distant_bottom() {
        let mut feed: Feed<u32> = Feed::new();
        let first = feed.request_next().unwrap();
        feed.complete(first, (0..10).collect());

        assert!(feed.request_fill(is_near_bottom(0.0, 900.0, 5000.0)).is_none());
        assert!(!feed.is_loading());
        assert!(!FeedUpdate::Replaced(0).grew());
        assert!(!FeedUpdate::Stale.grew());
    }

    #[test]
    fn test_scroll_throttle() {
        let mut throttle = ScrollThrottle::default();
        assert!(throttle.should_fire(0.0));
        assert!(!throttle.should_fire(100.0));
        assert!(throttle.should_fire(160.0));
    }
}
