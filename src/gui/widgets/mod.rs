use iced::{
    Color, Element, Length, Theme,
    widget::{button, center, column, container, mouse_area, opaque, row, stack, text},
};
use iced_widget::container::bordered_box;

use crate::{core::catalog::Page, gui::Message};

type ButtonStyle = fn(&Theme, button::Status) -> button::Style;

/// Highlighted style for the active choice in a button group.
pub fn choice_style(active: bool) -> ButtonStyle {
    if active { button::primary } else { button::text }
}

pub fn navigation<'a>(current: Page) -> Element<'a, Message> {
    let mut links = row![text("TerraX").size(22)].spacing(8).padding(10);
    for page in Page::ALL {
        links = links.push(
            button(text(page.label()))
                .style(choice_style(page == current))
                .on_press(Message::Navigate(page)),
        );
    }
    container(links).style(bordered_box).width(Length::Fill).into()
}

/// Bordered card with a heading.
pub fn card<'a, Message: 'a>(
    title: impl text::IntoFragment<'a>,
    body: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let body: Element<'a, Message> = body.into();
    container(column![text(title).size(18), body].spacing(10))
        .style(bordered_box)
        .padding(16)
        .width(Length::Fill)
        .into()
}

/// Label on the left, value on the right.
pub fn stat_row<'a, Message: 'a>(
    label: impl text::IntoFragment<'a>,
    value: impl text::IntoFragment<'a>,
) -> Element<'a, Message> {
    row![
        text(label).width(Length::Fill),
        container(text(value)).style(bordered_box).padding([2, 8]),
    ]
    .spacing(10)
    .into()
}

/// Page heading and subtitle.
pub fn header<'a, Message: 'a>(title: &'a str, subtitle: &'a str) -> Element<'a, Message> {
    column![text(title).size(34), text(subtitle).size(18)]
        .spacing(8)
        .width(Length::Fill)
        .into()
}

pub fn layout<'a, Message>(
    sidebar: impl Into<Element<'a, Message>>,
    main_content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    row![
        container(sidebar).width(Length::FillPortion(1)),
        container(main_content).width(Length::FillPortion(3)),
    ]
    .spacing(20)
    .into()
}

/// Lays `content` over `base`, dimming the page behind it. Clicking outside
/// the content emits `on_blur`.
pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let base: Element<'a, Message> = base.into();
    stack![
        base,
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| container::Style {
                background: Some(
                    Color {
                        a: 0.8,
                        ..Color::BLACK
                    }
                    .into(),
                ),
                ..container::Style::default()
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}
