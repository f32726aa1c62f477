// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! Renders the restaurant name, one link per screen, and a theme toggle.
//! Below a width threshold the links collapse behind a hamburger button,
//! mirroring the responsive header of the original site.

use crate::app::Screen;
use crate::catalog;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Vertical,
    widget::{button, horizontal_space, Column, Container, Row, Text},
    Element, Length,
};

/// Window width below which the link row collapses into the hamburger menu.
pub const COMPACT_WIDTH: f32 = 640.0;

/// Contextual data needed to render the navbar.
pub struct ViewContext {
    pub active: Screen,
    pub menu_open: bool,
    pub theme_mode: ThemeMode,
    /// Current window width, used to pick the compact layout.
    pub window_width: f32,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Screen),
    ToggleMenu,
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Navigate(Screen),
    ToggleTheme,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::Navigate(screen) => {
            *menu_open = false;
            Event::Navigate(screen)
        }
        Message::ToggleTheme => {
            *menu_open = false;
            Event::ToggleTheme
        }
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext) -> Element<'static, Message> {
    let mut content = Column::new().width(Length::Fill);

    let compact = ctx.window_width < COMPACT_WIDTH;
    content = content.push(top_bar(&ctx, compact));

    if compact && ctx.menu_open {
        content = content.push(dropdown(ctx.active));
    }

    content.into()
}

fn top_bar(ctx: &ViewContext, compact: bool) -> Element<'static, Message> {
    let brand = button(
        Text::new(catalog::RESTAURANT_NAME)
            .size(typography::TITLE_MD)
            .color(palette::SAFFRON_500),
    )
    .style(styles::button::tile)
    .on_press(Message::Navigate(Screen::Home));

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(brand)
        .push(horizontal_space());

    if compact {
        let hamburger = button(Text::new("\u{2630}"))
            .on_press(Message::ToggleMenu)
            .style(styles::button::link)
            .padding(spacing::XS);
        row = row.push(hamburger);
    } else {
        for screen in Screen::ALL {
            row = row.push(link(screen, ctx.active));
        }
    }

    let theme_label = if ctx.theme_mode.is_dark() {
        "Light"
    } else {
        "Dark"
    };
    let theme_toggle = button(Text::new(theme_label).size(typography::CAPTION))
        .on_press(Message::ToggleTheme)
        .style(styles::button::link)
        .padding(spacing::XS);
    row = row.push(theme_toggle);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::navbar)
        .into()
}

fn dropdown(active: Screen) -> Element<'static, Message> {
    let mut menu = Column::new().spacing(spacing::XXS).padding(spacing::XS);
    for screen in Screen::ALL {
        menu = menu.push(link(screen, active));
    }

    Container::new(menu)
        .width(Length::Fill)
        .style(styles::container::navbar)
        .into()
}

fn link(screen: Screen, active: Screen) -> Element<'static, Message> {
    let style = if screen == active {
        styles::button::link_active
    } else {
        styles::button::link
    };

    button(Text::new(screen.label()))
        .on_press(Message::Navigate(screen))
        .style(style)
        .padding([spacing::XXS, spacing::XS])
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_closes_menu_and_emits_event() {
        let mut menu_open = true;
        let event = update(Message::Navigate(Screen::Gallery), &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::Navigate(Screen::Gallery)));
    }

    #[test]
    fn toggle_menu_changes_state() {
        let mut menu_open = false;
        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(menu_open);
        assert!(matches!(event, Event::None));

        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn theme_toggle_closes_menu_and_emits_event() {
        let mut menu_open = true;
        let event = update(Message::ToggleTheme, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::ToggleTheme));
    }

    #[test]
    fn navbar_view_renders_wide_and_compact() {
        for (width, menu_open) in [(1024.0, false), (480.0, false), (480.0, true)] {
            let ctx = ViewContext {
                active: Screen::Home,
                menu_open,
                theme_mode: ThemeMode::Dark,
                window_width: width,
            };
            let _element = view(ctx);
        }
    }
}
