// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the screens (home, about, gallery, menu,
//! locate), the navbar, the welcome modal, and the embedded image store, and
//! translates messages into side effects like config persistence. Policy
//! decisions (which subscriptions exist on which screen, window sizing,
//! persistence format) are kept close to the main update loop so user-facing
//! behavior is easy to audit.

use crate::assets::{self, ImageData, ImageStore};
use crate::catalog;
use crate::config;
use crate::error::Error;
use crate::ui::gallery::component as gallery;
use crate::ui::theming::{self, ThemeMode};
use crate::ui::{about, home, locate, menu, navbar, welcome};
use iced::{
    event, keyboard, time,
    widget::{scrollable, Column},
    window, Element, Length, Size, Subscription, Task, Theme,
};
use std::time::Duration;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    About,
    Gallery,
    Menu,
    Locate,
}

impl Screen {
    /// All screens, in navbar order.
    pub const ALL: [Screen; 5] = [
        Screen::Home,
        Screen::About,
        Screen::Gallery,
        Screen::Menu,
        Screen::Locate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::About => "About",
            Screen::Gallery => "Gallery",
            Screen::Menu => "Menu",
            Screen::Locate => "Locate",
        }
    }

    /// Parses a `--screen` CLI value, case-insensitively.
    pub fn from_arg(value: &str) -> Option<Self> {
        Screen::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(value))
    }
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Home(home::Message),
    About(about::Message),
    Gallery(gallery::Message),
    Menu(menu::Message),
    Locate(locate::Message),
    Welcome(welcome::Message),
    /// The welcome modal's auto-dismiss timer fired.
    WelcomeTimeout,
    /// One embedded image finished decoding (or failed to).
    ImageLoaded {
        name: String,
        result: Result<ImageData, Error>,
    },
    WindowResized(Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional screen to open on instead of Home.
    pub screen: Option<Screen>,
    /// Skip the welcome modal regardless of the saved preference.
    pub skip_welcome: bool,
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 700.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(|state: &App| state.title(), App::update, App::view)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run_with(move || App::new(flags))
}

/// Root Iced application state.
pub struct App {
    screen: Screen,
    theme_mode: ThemeMode,
    show_welcome: bool,
    navbar_menu_open: bool,
    window_width: f32,
    images: ImageStore,
    home: home::State,
    about: about::State,
    gallery: gallery::State,
    locate: locate::State,
}

impl Default for App {
    fn default() -> Self {
        Self {
            screen: Screen::Home,
            theme_mode: ThemeMode::System,
            show_welcome: true,
            navbar_menu_open: false,
            window_width: WINDOW_DEFAULT_WIDTH,
            images: ImageStore::new(),
            home: home::State::new(),
            about: about::State::new(),
            gallery: gallery::State::new(),
            locate: locate::State::new(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the per-image decode
    /// tasks for every embedded asset.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();

        let mut app = App::default();
        app.theme_mode = config.theme_mode;
        app.show_welcome = !flags.skip_welcome && config.show_welcome.unwrap_or(true);
        if let Some(screen) = flags.screen {
            app.screen = screen;
        }

        let mut tasks = Vec::new();
        for name in assets::all_names() {
            app.images.mark_loading(&name);
            tasks.push(Task::perform(
                async move {
                    let result = assets::load_image(&name);
                    (name, result)
                },
                |(name, result)| Message::ImageLoaded { name, result },
            ));
        }

        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        format!("{} \u{2014} {}", catalog::RESTAURANT_NAME, self.screen.label())
    }

    fn theme(&self) -> Theme {
        theming::iced_theme(self.theme_mode)
    }

    /// Subscriptions are scoped to the screen that needs them: the hero
    /// rotation timer only exists on Home, the keyboard listener only on
    /// Gallery, and the welcome timer only while the modal is up. Leaving a
    /// screen drops its subscription, which is the release half of the
    /// acquire/release pattern.
    fn subscription(&self) -> Subscription<Message> {
        let screen_subscription = match self.screen {
            Screen::Home => time::every(Duration::from_secs(catalog::HERO_ROTATION_SECS))
                .map(|_| Message::Home(home::Message::AdvanceBackground)),
            Screen::Gallery => keyboard::on_key_press(|key, _modifiers| {
                Some(Message::Gallery(gallery::Message::KeyPressed(key)))
            }),
            _ => Subscription::none(),
        };

        let welcome_subscription = if self.show_welcome {
            time::every(Duration::from_secs(welcome::AUTO_DISMISS_SECS))
                .map(|_| Message::WelcomeTimeout)
        } else {
            Subscription::none()
        };

        let resize_subscription = event::listen_with(|event, _status, _window| match event {
            event::Event::Window(window::Event::Resized(size)) => {
                Some(Message::WindowResized(size))
            }
            _ => None,
        });

        Subscription::batch([
            screen_subscription,
            welcome_subscription,
            resize_subscription,
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(navbar_message) => {
                match navbar::update(navbar_message, &mut self.navbar_menu_open) {
                    navbar::Event::None => {}
                    navbar::Event::Navigate(screen) => self.screen = screen,
                    navbar::Event::ToggleTheme => {
                        self.theme_mode = self.theme_mode.toggled();
                        self.persist_preferences();
                    }
                }
                Task::none()
            }
            Message::Home(home_message) => {
                match self.home.update(home_message) {
                    home::Event::None => {}
                    home::Event::OpenMenu => self.screen = Screen::Menu,
                    home::Event::OpenAbout => self.screen = Screen::About,
                }
                Task::none()
            }
            Message::About(about_message) => {
                self.about.update(about_message);
                Task::none()
            }
            Message::Gallery(gallery_message) => {
                self.gallery.update(gallery_message).map(Message::Gallery)
            }
            Message::Menu(menu_message) => {
                menu::update(menu_message);
                Task::none()
            }
            Message::Locate(locate_message) => {
                self.locate.update(locate_message);
                Task::none()
            }
            Message::Welcome(welcome::Message::Dismiss) | Message::WelcomeTimeout => {
                self.show_welcome = false;
                Task::none()
            }
            Message::ImageLoaded { name, result } => {
                if let Err(err) = &result {
                    log::warn!("failed to load {name}: {err}");
                }
                self.images.complete(name, result);
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window_width = size.width;
                Task::none()
            }
        }
    }

    fn persist_preferences(&self) {
        let config = config::Config {
            theme_mode: self.theme_mode,
            show_welcome: Some(self.show_welcome),
        };
        if let Err(err) = config::save(&config) {
            log::warn!("failed to save preferences: {err}");
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let navbar = navbar::view(navbar::ViewContext {
            active: self.screen,
            menu_open: self.navbar_menu_open,
            theme_mode: self.theme_mode,
            window_width: self.window_width,
        })
        .map(Message::Navbar);

        let screen: Element<'_, Message> = match self.screen {
            Screen::Home => home::view(&self.home, &self.images).map(Message::Home),
            Screen::About => about::view(&self.about, &self.images).map(Message::About),
            Screen::Gallery => {
                crate::ui::gallery::view(&self.gallery, &self.images).map(Message::Gallery)
            }
            Screen::Menu => menu::view().map(Message::Menu),
            Screen::Locate => locate::view(&self.locate).map(Message::Locate),
        };

        let page = Column::new()
            .push(navbar)
            .push(scrollable(screen).height(Length::Fill));

        if self.show_welcome {
            iced::widget::stack![page, welcome::view().map(Message::Welcome)].into()
        } else {
            page.into()
        }
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("show_welcome", &self.show_welcome)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_from_arg_is_case_insensitive() {
        assert_eq!(Screen::from_arg("gallery"), Some(Screen::Gallery));
        assert_eq!(Screen::from_arg("LOCATE"), Some(Screen::Locate));
        assert_eq!(Screen::from_arg("settings"), None);
    }

    #[test]
    fn navbar_navigation_switches_screens() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Screen::Gallery)));
        assert_eq!(app.screen, Screen::Gallery);
    }

    #[test]
    fn hero_buttons_route_to_their_screens() {
        let mut app = App::default();
        let _ = app.update(Message::Home(home::Message::ExploreMenu));
        assert_eq!(app.screen, Screen::Menu);

        let mut app = App::default();
        let _ = app.update(Message::Home(home::Message::ReadMore));
        assert_eq!(app.screen, Screen::About);
    }

    #[test]
    fn welcome_dismisses_by_button_and_by_timeout() {
        let mut app = App::default();
        assert!(app.show_welcome);
        let _ = app.update(Message::Welcome(welcome::Message::Dismiss));
        assert!(!app.show_welcome);

        let mut app = App::default();
        let _ = app.update(Message::WelcomeTimeout);
        assert!(!app.show_welcome);
    }

    #[test]
    fn image_load_failure_only_touches_its_own_slot() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Screen::Gallery)));
        let _ = app.update(Message::Gallery(gallery::Message::ThumbnailClicked(2)));

        let _ = app.update(Message::ImageLoaded {
            name: "chaat.png".to_string(),
            result: Err(Error::Image("truncated".into())),
        });

        // Gallery state is unaffected by the presentational failure.
        assert_eq!(app.gallery.browser().open_index(), Some(2));
        assert_eq!(app.screen, Screen::Gallery);
    }

    #[test]
    fn theme_toggle_flips_the_mode() {
        let mut app = App::default();
        app.theme_mode = ThemeMode::Light;
        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn window_resize_updates_the_tracked_width() {
        let mut app = App::default();
        let _ = app.update(Message::WindowResized(Size::new(500.0, 700.0)));
        assert_eq!(app.window_width, 500.0);
    }
}
