// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the slider store to the listing client: store
//! effects become `Task`s, task results come back as messages. Configuration
//! and localization are resolved once at boot.

mod message;
pub mod paths;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::domain::listing::{ListingQuery, PageNumber, PageSize};
use crate::i18n::fluent::I18n;
use crate::infrastructure::ListingClient;
use crate::slider::{self, DisplayState, SliderState, SliderStore};
use crate::ui::carousel::picture;
use iced::{window, Task};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    store: SliderStore,
    picture: picture::State,
    client: ListingClient,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("slider", self.store.state())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .run()
}

/// Merges CLI flags over the configured listing source.
fn resolve_query(flags: &Flags, config: &Config) -> ListingQuery {
    let configured = config.source.listing_query();
    ListingQuery::new(
        flags.url.clone().unwrap_or(configured.base_url),
        flags.page.map(PageNumber::new).unwrap_or(configured.page),
        flags.limit.map(PageSize::new).unwrap_or(configured.limit),
    )
}

/// Store subscriber mirroring every state transition into the log.
fn log_transition(state: &SliderState) {
    match state.display_state() {
        DisplayState::Loading => tracing::debug!("carousel loading"),
        DisplayState::Error(message) => tracing::debug!(%message, "carousel showing error"),
        DisplayState::Ready => tracing::debug!(
            images = state.images().len(),
            index = state.current_index(),
            "carousel ready"
        ),
    }
}

impl App {
    /// Initializes application state and issues the first listing fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        if let Some(key) = config_warning {
            tracing::warn!("{}", i18n.tr(&key));
        }

        let client = ListingClient::new(config.source.request_timeout()).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "falling back to a default HTTP client");
            ListingClient::from_client(reqwest::Client::new())
        });

        let mut store = SliderStore::new();
        store.subscribe(log_transition);

        let query = resolve_query(&flags, &config);
        tracing::info!(url = %query.listing_url(), "starting carousel");

        let mut app = App {
            i18n,
            store,
            picture: picture::State::default(),
            client,
        };
        let task = app.update(Message::Slider(slider::Message::Configure(query)));
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }
}
