use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::ThemeMode;

pub const ACCENT_PURPLE: Color = Color::from_rgb(0.6, 0.2, 1.0);
pub const ACCENT_PURPLE_HOVER: Color = Color::from_rgb(0.69, 0.35, 1.0);
pub const ACCENT_PURPLE_PRESSED: Color = Color::from_rgb(0.48, 0.13, 0.82);
pub const DISABLED_GRAY: Color = Color::from_rgb(0.3, 0.3, 0.3);
pub const DISABLED_TEXT_GRAY: Color = Color::from_rgb(0.5, 0.5, 0.5);
pub const ERROR_RED: Color = Color::from_rgb(1.0, 0.36, 0.36);

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "GIF Search Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.07, 0.07, 0.07),
                text: Color::from_rgb(1.0, 1.0, 1.0),
                primary: ACCENT_PURPLE,
                success: Color::from_rgb(0.0, 1.0, 0.6),
                danger: ERROR_RED,
                warning: Color::from_rgb(1.0, 0.95, 0.36),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "GIF Search Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.96, 0.96, 0.98),
                text: Color::from_rgb(0.1, 0.1, 0.1),
                primary: ACCENT_PURPLE_PRESSED,
                success: Color::from_rgb(0.0, 0.7, 0.4),
                danger: Color::from_rgb(0.85, 0.2, 0.2),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

fn filled_button(background: Color, text_color: Color, snap: bool) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: background,
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: Shadow::default(),
        snap,
    }
}

pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => filled_button(ACCENT_PURPLE, Color::WHITE, false),
        button::Status::Hovered => filled_button(ACCENT_PURPLE_HOVER, Color::WHITE, false),
        button::Status::Pressed => filled_button(ACCENT_PURPLE_PRESSED, Color::WHITE, true),
        button::Status::Disabled => filled_button(DISABLED_GRAY, DISABLED_TEXT_GRAY, false),
    }
}

pub fn secondary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => {
            filled_button(Color::from_rgb(0.25, 0.25, 0.25), Color::from_rgb(0.8, 0.8, 0.8), false)
        }
        button::Status::Hovered => {
            filled_button(Color::from_rgb(0.35, 0.35, 0.35), Color::WHITE, false)
        }
        button::Status::Pressed => {
            filled_button(Color::from_rgb(0.2, 0.2, 0.2), Color::from_rgb(0.8, 0.8, 0.8), true)
        }
        button::Status::Disabled => {
            filled_button(Color::from_rgb(0.2, 0.2, 0.2), Color::from_rgb(0.4, 0.4, 0.4), false)
        }
    }
}

/// Borderless tile around a GIF; only hovering shows an outline.
pub fn grid_tile_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => ACCENT_PURPLE,
        button::Status::Active | button::Status::Disabled => Color::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.04))),
        text_color: Color::from_rgb(0.7, 0.7, 0.7),
        border: Border {
            color: border_color,
            width: 2.0,
            radius: 4.0.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

pub fn error_notice_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(1.0, 0.36, 0.36, 0.12))),
        text_color: Some(ERROR_RED),
        border: Border {
            color: ERROR_RED,
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}

pub fn alert_banner_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(1.0, 0.95, 0.36, 0.15))),
        text_color: Some(Color::from_rgb(1.0, 0.95, 0.36)),
        border: Border {
            color: Color::from_rgb(1.0, 0.95, 0.36),
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}
