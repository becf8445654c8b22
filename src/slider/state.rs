// SPDX-License-Identifier: MPL-2.0
//! Slider state machine.
//!
//! Three display states ordered by priority: loading, then error, then ready.
//! Loads are tagged with a [`LoadTicket`]; only the ticket of the most recent
//! load may settle into the state, so a slow response for an old base URL can
//! never overwrite a newer listing.

use crate::domain::listing::{ListingQuery, RemoteImage};
use crate::error::FetchError;

/// Identifies one issued load. Settlements carrying an older ticket are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    /// Returns the generation number of this ticket.
    #[must_use]
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Which of the three mutually exclusive views the state maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState<'a> {
    Loading,
    Error(&'a str),
    Ready,
}

/// Messages understood by the slider.
#[derive(Debug, Clone)]
pub enum Message {
    /// Set the listing source. Fetches when the base URL changed and is non-empty.
    Configure(ListingQuery),
    /// A listing request settled.
    Loaded {
        ticket: LoadTicket,
        result: Result<Vec<RemoteImage>, FetchError>,
    },
    /// Show the previous image, wrapping to the last.
    Previous,
    /// Show the next image, wrapping to the first.
    Next,
    /// Show the image at the given index.
    GoTo(usize),
}

/// Side effects requested by the slider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Issue a listing request and report back with `Message::Loaded { ticket, .. }`.
    FetchListing {
        ticket: LoadTicket,
        query: ListingQuery,
    },
}

/// Images, current index, loading flag and error of one carousel.
#[derive(Debug, Clone, Default)]
pub struct SliderState {
    images: Vec<RemoteImage>,
    current_index: usize,
    loading: bool,
    error: Option<String>,
    query: Option<ListingQuery>,
    generation: u64,
    /// Bumped on every observable change.
    revision: u64,
}

impl SliderState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn images(&self) -> &[RemoteImage] {
        &self.images
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The configured listing source, if any.
    #[must_use]
    pub fn query(&self) -> Option<&ListingQuery> {
        self.query.as_ref()
    }

    /// The image at the current index, `None` when the list is empty.
    #[must_use]
    pub fn current_image(&self) -> Option<&RemoteImage> {
        self.images.get(self.current_index)
    }

    #[must_use]
    pub fn display_state(&self) -> DisplayState<'_> {
        if self.loading {
            DisplayState::Loading
        } else if let Some(error) = self.error.as_deref() {
            DisplayState::Error(error)
        } else {
            DisplayState::Ready
        }
    }

    /// Monotonic change counter, used by the store to decide whether to notify.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Handle a slider message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Configure(query) => self.configure(query),
            Message::Loaded { ticket, result } => {
                self.finish_load(ticket, result);
                Effect::None
            }
            Message::Previous => {
                self.go_to_previous();
                Effect::None
            }
            Message::Next => {
                self.go_to_next();
                Effect::None
            }
            Message::GoTo(index) => {
                self.go_to_index(index);
                Effect::None
            }
        }
    }

    /// Stores `query` and starts a load when its base URL differs from the
    /// previously configured one.
    pub fn configure(&mut self, query: ListingQuery) -> Effect {
        let url_changed = self
            .query
            .as_ref()
            .is_none_or(|previous| previous.base_url != query.base_url);
        self.query = Some(query);

        if !url_changed {
            return Effect::None;
        }
        self.start_load()
    }

    /// Starts a load for the configured query, if it has a base URL.
    fn start_load(&mut self) -> Effect {
        match self.query.clone() {
            Some(query) if query.has_base_url() => {
                let ticket = self.begin_load();
                Effect::FetchListing { ticket, query }
            }
            _ => Effect::None,
        }
    }

    /// Enters the loading state and returns the ticket the result must carry.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.touch();
        LoadTicket(self.generation)
    }

    /// Applies a settled load. Returns false when the ticket is stale and the
    /// result was dropped.
    ///
    /// On success the list is replaced and the index goes back to 0, so a
    /// shorter list can never leave the index out of range. On failure the
    /// previous list is kept.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<RemoteImage>, FetchError>,
    ) -> bool {
        if ticket.0 != self.generation {
            tracing::debug!(
                ticket = ticket.0,
                current = self.generation,
                "dropping stale listing result"
            );
            return false;
        }

        match result {
            Ok(images) => {
                self.images = images;
                self.current_index = 0;
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "image listing failed");
                self.error = Some(err.to_string());
            }
        }
        self.loading = false;
        self.touch();
        true
    }

    /// Circular decrement. No-op on an empty list.
    pub fn go_to_previous(&mut self) {
        if self.images.is_empty() {
            return;
        }
        let previous = if self.current_index == 0 {
            self.images.len() - 1
        } else {
            self.current_index - 1
        };
        self.set_index(previous);
    }

    /// Circular increment. No-op on an empty list.
    pub fn go_to_next(&mut self) {
        if self.images.is_empty() {
            return;
        }
        let next = if self.current_index == self.images.len() - 1 {
            0
        } else {
            self.current_index + 1
        };
        self.set_index(next);
    }

    /// Jumps to `index`. Returns false, leaving the state untouched, when
    /// `index` is outside the list.
    pub fn go_to_index(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            tracing::warn!(index, len = self.images.len(), "ignoring out-of-range slide index");
            return false;
        }
        self.set_index(index);
        true
    }

    /// A single-image list wraps onto itself, which is not a change.
    fn set_index(&mut self, index: usize) {
        if index != self.current_index {
            self.current_index = index;
            self.touch();
        }
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::{PageNumber, PageSize};

    fn sequential_images(count: usize) -> Vec<RemoteImage> {
        (0..count)
            .map(|i| RemoteImage::new(i.to_string(), format!("https://img.test/{i}.jpg")))
            .collect()
    }

    fn loaded_state(count: usize) -> SliderState {
        let mut state = SliderState::new();
        let ticket = state.begin_load();
        assert!(state.finish_load(ticket, Ok(sequential_images(count))));
        state
    }

    fn query(base_url: &str) -> ListingQuery {
        ListingQuery::new(base_url, PageNumber::new(1), PageSize::new(10))
    }

    #[test]
    fn new_state_is_empty_and_ready() {
        let state = SliderState::new();
        assert!(state.images().is_empty());
        assert_eq!(state.current_index(), 0);
        assert!(!state.is_loading());
        assert_eq!(state.error(), None);
        assert_eq!(state.display_state(), DisplayState::Ready);
    }

    #[test]
    fn next_wraps_after_full_cycle() {
        for len in 1..=12 {
            for start in 0..len {
                let mut state = loaded_state(len);
                assert!(state.go_to_index(start));
                for _ in 0..len {
                    state.go_to_next();
                }
                assert_eq!(state.current_index(), start, "len={len} start={start}");
            }
        }
    }

    #[test]
    fn previous_inverts_next() {
        for len in 1..=12 {
            for start in 0..len {
                let mut state = loaded_state(len);
                state.go_to_index(start);
                state.go_to_next();
                state.go_to_previous();
                assert_eq!(state.current_index(), start);

                state.go_to_previous();
                state.go_to_next();
                assert_eq!(state.current_index(), start);
            }
        }
    }

    #[test]
    fn go_to_index_sets_exact_index_from_any_state() {
        let len = 10;
        for from in 0..len {
            for to in 0..len {
                let mut state = loaded_state(len);
                state.go_to_index(from);
                assert!(state.go_to_index(to));
                assert_eq!(state.current_index(), to);
            }
        }
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut state = loaded_state(10);
        assert_eq!(state.current_index(), 0);
        state.go_to_previous();
        assert_eq!(state.current_index(), 9);
    }

    #[test]
    fn next_from_last_wraps_to_first() {
        let mut state = loaded_state(10);
        state.go_to_index(9);
        state.go_to_next();
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn navigation_on_empty_list_is_noop() {
        let mut state = SliderState::new();
        let before = state.revision();
        state.go_to_next();
        state.go_to_previous();
        assert!(!state.go_to_index(0));
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.revision(), before);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut state = loaded_state(3);
        state.go_to_index(1);
        assert!(!state.go_to_index(3));
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn begin_load_sets_loading_and_clears_error() {
        let mut state = SliderState::new();
        let ticket = state.begin_load();
        state.finish_load(ticket, Err(FetchError::Network("down".into())));
        assert!(state.error().is_some());

        state.begin_load();
        assert!(state.is_loading());
        assert_eq!(state.error(), None);
        assert_eq!(state.display_state(), DisplayState::Loading);
    }

    #[test]
    fn loading_takes_precedence_over_error() {
        let mut state = SliderState::new();
        let ticket = state.begin_load();
        state.finish_load(ticket, Err(FetchError::Network("down".into())));
        // A new load clears the error, but even a set error must not win.
        state.loading = true;
        state.error = Some("still here".into());
        assert_eq!(state.display_state(), DisplayState::Loading);
    }

    #[test]
    fn failure_keeps_previous_images() {
        let mut state = loaded_state(4);
        state.go_to_index(2);
        let ticket = state.begin_load();
        state.finish_load(
            ticket,
            Err(FetchError::Status {
                code: 500,
                reason: "Internal Server Error".into(),
            }),
        );

        assert!(!state.is_loading());
        assert_eq!(state.error(), Some("HTTP status: 500 Internal Server Error"));
        assert_eq!(state.images().len(), 4);
        assert_eq!(state.display_state(), DisplayState::Error("HTTP status: 500 Internal Server Error"));
    }

    #[test]
    fn successful_refetch_resets_index() {
        let mut state = loaded_state(10);
        state.go_to_index(8);
        let ticket = state.begin_load();
        state.finish_load(ticket, Ok(sequential_images(3)));
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.current_image().map(|i| i.id.as_str()), Some("0"));
    }

    #[test]
    fn stale_result_is_dropped() {
        let mut state = SliderState::new();
        let first = state.begin_load();
        let second = state.begin_load();

        assert!(state.finish_load(second, Ok(sequential_images(2))));
        let revision = state.revision();
        assert!(!state.finish_load(first, Ok(sequential_images(7))));

        assert_eq!(state.images().len(), 2);
        assert_eq!(state.revision(), revision);
    }

    #[test]
    fn stale_result_does_not_end_newer_load() {
        let mut state = SliderState::new();
        let first = state.begin_load();
        let _second = state.begin_load();
        assert!(!state.finish_load(first, Err(FetchError::Network("late".into()))));
        assert!(state.is_loading());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn configure_fetches_on_first_url() {
        let mut state = SliderState::new();
        let effect = state.configure(query("https://picsum.photos/v2/"));
        match effect {
            Effect::FetchListing { ticket, query } => {
                assert_eq!(ticket.generation(), 1);
                assert_eq!(query.base_url, "https://picsum.photos/v2/");
            }
            Effect::None => panic!("expected a fetch"),
        }
        assert!(state.is_loading());
    }

    #[test]
    fn configure_with_empty_url_issues_nothing() {
        let mut state = SliderState::new();
        assert_eq!(state.configure(query("")), Effect::None);
        assert!(!state.is_loading());
        assert!(state.images().is_empty());
    }

    #[test]
    fn configure_with_same_url_does_not_refetch() {
        let mut state = SliderState::new();
        state.configure(query("https://a.test/"));
        let effect = state.configure(ListingQuery::new(
            "https://a.test/",
            PageNumber::new(2),
            PageSize::new(5),
        ));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.query().map(|q| q.page.value()), Some(2));
    }

    #[test]
    fn configure_with_new_url_refetches() {
        let mut state = SliderState::new();
        state.configure(query("https://a.test/"));
        let effect = state.configure(query("https://b.test/"));
        assert!(matches!(effect, Effect::FetchListing { ticket, .. } if ticket.generation() == 2));
    }

    #[test]
    fn error_stays_until_base_url_changes() {
        let mut state = SliderState::new();
        let Effect::FetchListing { ticket, .. } = state.configure(query("https://a.test/")) else {
            panic!("expected a fetch");
        };
        state.finish_load(ticket, Err(FetchError::Network("timed out".into())));

        assert_eq!(state.configure(query("https://a.test/")), Effect::None);
        assert_eq!(state.error(), Some("Network error: timed out"));
        assert!(!state.is_loading());

        let effect = state.configure(query("https://b.test/"));
        assert!(matches!(
            effect,
            Effect::FetchListing { ref query, .. } if query.base_url == "https://b.test/"
        ));
        assert!(state.is_loading());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn handle_routes_navigation_messages() {
        let mut state = loaded_state(5);
        assert_eq!(state.handle(Message::Previous), Effect::None);
        assert_eq!(state.current_index(), 4);
        state.handle(Message::Next);
        assert_eq!(state.current_index(), 0);
        state.handle(Message::GoTo(3));
        assert_eq!(state.current_index(), 3);
    }
}
