// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles shared across screens.

/// Button styles.
pub mod button {
    use crate::ui::design_tokens::{opacity, palette, radius};
    use iced::widget::button;
    use iced::{Background, Border, Color, Theme};

    /// Primary call-to-action button (saffron on maroon).
    pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
        let background = match status {
            button::Status::Hovered => palette::SAFFRON_400,
            button::Status::Pressed => palette::SAFFRON_600,
            _ => palette::SAFFRON_500,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::GRAY_900,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }

    /// Selected state in a toggle group (active category pill).
    pub fn selected(_theme: &Theme, status: button::Status) -> button::Style {
        let background = match status {
            button::Status::Hovered => palette::SAFFRON_400,
            _ => palette::SAFFRON_500,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::GRAY_900,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }

    /// Unselected state in a toggle group.
    pub fn unselected(_theme: &Theme, status: button::Status) -> button::Style {
        let background = match status {
            button::Status::Hovered => palette::GRAY_400,
            _ => palette::GRAY_700,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::GRAY_100,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }

    /// Translucent dark button used for lightbox navigation and close.
    pub fn overlay(_theme: &Theme, status: button::Status) -> button::Style {
        let alpha = match status {
            button::Status::Hovered => opacity::OVERLAY_STRONG,
            button::Status::Pressed => opacity::OVERLAY_LIGHTBOX,
            _ => opacity::OVERLAY_MEDIUM,
        };
        button::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..palette::BLACK
            })),
            text_color: palette::WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }

    /// Borderless navigation link (navbar entries, footer links).
    pub fn link(theme: &Theme, status: button::Status) -> button::Style {
        let text_color = match status {
            button::Status::Hovered | button::Status::Pressed => palette::SAFFRON_400,
            _ => theme.palette().text,
        };
        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            ..button::Style::default()
        }
    }

    /// Navigation link for the currently active screen.
    pub fn link_active(_theme: &Theme, _status: button::Status) -> button::Style {
        button::Style {
            background: None,
            text_color: palette::SAFFRON_500,
            border: Border::default(),
            ..button::Style::default()
        }
    }

    /// Invisible button wrapping a clickable tile or card.
    pub fn tile(_theme: &Theme, _status: button::Status) -> button::Style {
        button::Style {
            background: None,
            text_color: palette::WHITE,
            border: Border::default(),
            ..button::Style::default()
        }
    }
}

/// Container styles.
pub mod container {
    use crate::ui::design_tokens::{opacity, palette, radius};
    use iced::widget::container;
    use iced::{Background, Border, Color, Theme};

    /// Card surface slightly raised from the screen background.
    pub fn card(theme: &Theme) -> container::Style {
        let background = theme.extended_palette().background.weak.color;
        container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                radius: radius::MD.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            ..container::Style::default()
        }
    }

    /// Dimmed backdrop behind modals and the lightbox.
    pub fn backdrop(_theme: &Theme) -> container::Style {
        container::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_LIGHTBOX,
                ..palette::BLACK
            })),
            ..container::Style::default()
        }
    }

    /// Modal dialog surface.
    pub fn modal(theme: &Theme) -> container::Style {
        container::Style {
            background: Some(Background::Color(
                theme.extended_palette().background.base.color,
            )),
            border: Border {
                radius: radius::LG.into(),
                width: 1.0,
                color: palette::SAFFRON_500,
            },
            ..container::Style::default()
        }
    }

    /// Translucent caption bar over an image tile.
    pub fn caption(_theme: &Theme) -> container::Style {
        container::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            })),
            text_color: Some(palette::WHITE),
            ..container::Style::default()
        }
    }

    /// Neutral surface shown while an image is loading or failed to load.
    pub fn placeholder(_theme: &Theme) -> container::Style {
        container::Style {
            background: Some(Background::Color(palette::GRAY_700)),
            text_color: Some(palette::GRAY_100),
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            ..container::Style::default()
        }
    }

    /// Hero banner surface, used while the background image is unavailable.
    pub fn hero(_theme: &Theme) -> container::Style {
        container::Style {
            background: Some(Background::Color(palette::MAROON_700)),
            text_color: Some(palette::WHITE),
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            ..container::Style::default()
        }
    }

    /// Top navigation bar surface.
    pub fn navbar(_theme: &Theme) -> container::Style {
        container::Style {
            background: Some(Background::Color(palette::GRAY_900)),
            text_color: Some(palette::WHITE),
            ..container::Style::default()
        }
    }
}
