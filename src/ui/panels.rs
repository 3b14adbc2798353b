/// Building blocks of the voting window
use iced::widget::image::Handle;
use iced::widget::{button, column, container, pick_list, row, text, Image, Row};
use iced::{Alignment, Element, Length};

use super::style;
use crate::i18n::{Language, Texts};
use crate::state::data::{Emotion, Role, VoteKind};
use crate::state::roles;
use crate::state::session::Progress;
use crate::Message;

/// Base font size for labels and buttons
pub const FONT_SIZE: u16 = 22;

/// Scene name above the frames
pub fn header<'a>(texts: &'static Texts, scene: &str) -> Element<'a, Message> {
    text(format!("{} {}", texts.scene, scene))
        .size(FONT_SIZE + 2)
        .into()
}

/// Onset, apex and offset frames side by side
pub fn frame_row<'a>(
    frames: &[Option<Handle>; 3],
    size: u32,
    texts: &'static Texts,
) -> Element<'a, Message> {
    let side = Length::Fixed(size as f32);

    let cells: Vec<Element<'a, Message>> = frames
        .iter()
        .map(|frame| {
            let content: Element<'a, Message> = match frame {
                Some(handle) => Image::new(handle.clone()).width(side).height(side).into(),
                None => text(texts.image_not_found).size(FONT_SIZE).into(),
            };

            container(content)
                .center_x(side)
                .center_y(side)
                .into()
        })
        .collect();

    Row::with_children(cells).spacing(10).into()
}

/// Category and role name pickers.
///
/// The first category entry is the placeholder; picking it clears the role.
pub fn role_picker<'a>(texts: &'static Texts, role: Option<&Role>) -> Element<'a, Message> {
    let categories: Vec<String> = std::iter::once(texts.select_category)
        .chain(roles::categories())
        .map(str::to_string)
        .collect();
    let selected_category = role
        .map(|r| r.category.clone())
        .unwrap_or_else(|| texts.select_category.to_string());

    let names: Vec<String> = role
        .and_then(|r| roles::role_names(&r.category))
        .unwrap_or_default()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let selected_name = role.map(|r| r.name.clone());

    row![
        text(texts.role).size(FONT_SIZE),
        pick_list(categories, Some(selected_category), Message::CategorySelected)
            .text_size(FONT_SIZE),
        pick_list(names, selected_name, Message::RoleNameSelected)
            .placeholder(texts.select_role)
            .text_size(FONT_SIZE),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}

/// Title plus one button per emotion
pub fn vote_section<'a>(
    language: Language,
    kind: VoteKind,
    current: Option<Emotion>,
) -> Element<'a, Message> {
    let texts = language.texts();
    let title = match kind {
        VoteKind::External => texts.external_emotion,
        VoteKind::Internal => texts.internal_emotion,
    };

    let buttons: Vec<Element<'a, Message>> = Emotion::ALL
        .iter()
        .map(|&emotion| {
            button(text(language.emotion_label(emotion)).size(FONT_SIZE))
                .padding([6, 16])
                .style(style::vote_button(kind, current == Some(emotion)))
                .on_press(Message::Vote(kind, emotion))
                .into()
        })
        .collect();

    column![
        text(title).size(FONT_SIZE),
        Row::with_children(buttons).spacing(10),
    ]
    .spacing(10)
    .align_x(Alignment::Center)
    .into()
}

/// Previous / counter / Next
pub fn navigation<'a>(texts: &'static Texts, progress: Progress) -> Element<'a, Message> {
    let counter = format!(
        "{} {} / {} — {} {}",
        texts.sample, progress.position, progress.total, progress.remaining, texts.remaining_samples
    );

    row![
        button(text(texts.prev).size(FONT_SIZE)).on_press(Message::Previous),
        text(counter).size(FONT_SIZE),
        button(text(texts.next).size(FONT_SIZE)).on_press(Message::Next),
    ]
    .spacing(20)
    .align_y(Alignment::Center)
    .into()
}

pub fn goto_first_button<'a>(texts: &'static Texts) -> Element<'a, Message> {
    button(text(texts.goto_first).size(FONT_SIZE))
        .on_press(Message::GotoFirstUnvoted)
        .padding(10)
        .into()
}
