/// Button colors for the vote rows
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

use crate::state::data::VoteKind;

macro_rules! rgb {
    ($r:expr, $g:expr, $b:expr) => {
        Color {
            r: $r as f32 / 255.0,
            g: $g as f32 / 255.0,
            b: $b as f32 / 255.0,
            a: 1.0,
        }
    };
}

const IDLE: Color = rgb!(0x42, 0x42, 0x42);
const IDLE_HOVER: Color = rgb!(0x61, 0x61, 0x61);

/// Green for the external vote
const EXTERNAL: Color = rgb!(0x38, 0x8E, 0x3C);
const EXTERNAL_HOVER: Color = rgb!(0x66, 0xBB, 0x6A);

/// Purple for the internal vote
const INTERNAL: Color = rgb!(0x7E, 0x57, 0xC2);
const INTERNAL_HOVER: Color = rgb!(0xB3, 0x9D, 0xDB);

/// Style for one emotion button; the chosen emotion is highlighted
pub fn vote_button(kind: VoteKind, selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    let (base, hover) = match (kind, selected) {
        (_, false) => (IDLE, IDLE_HOVER),
        (VoteKind::External, true) => (EXTERNAL, EXTERNAL_HOVER),
        (VoteKind::Internal, true) => (INTERNAL, INTERNAL_HOVER),
    };

    move |_theme, status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => hover,
            _ => base,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: Color::WHITE,
            border: Border {
                radius: 6.0.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_matches_hex_values() {
        assert_eq!(IDLE, Color::from_rgb8(0x42, 0x42, 0x42));
        assert_eq!(EXTERNAL_HOVER, Color::from_rgb8(0x66, 0xBB, 0x6A));
        assert_eq!(INTERNAL, Color::from_rgb8(0x7E, 0x57, 0xC2));
    }

    #[test]
    fn test_selected_button_uses_vote_color() {
        let theme = Theme::Dark;
        let idle = vote_button(VoteKind::Internal, false)(&theme, button::Status::Active);
        let chosen = vote_button(VoteKind::Internal, true)(&theme, button::Status::Active);
        let hovered = vote_button(VoteKind::External, true)(&theme, button::Status::Hovered);

        assert_eq!(idle.background, Some(Background::Color(IDLE)));
        assert_eq!(chosen.background, Some(Background::Color(INTERNAL)));
        assert_eq!(hovered.background, Some(Background::Color(EXTERNAL_HOVER)));
    }
}
