use std::convert::Infallible;

use iced::{
    Element, Length, Task,
    widget::{Row, button, column, container, row, scrollable, text},
};

use crate::{
    core::catalog::{Page, showcase},
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::card,
    },
};

#[derive(Debug, Clone)]
pub struct LandingPageScreen;

#[derive(Debug, Clone)]
pub enum ParentMessage {
    Navigate(Page),
}

fn call_to_action<'a>(label: &'a str, target: Page) -> Element<'a, ScreenMessage<LandingPageScreen>> {
    button(text(label))
        .padding([10, 20])
        .on_press(ScreenMessage::ParentMessage(ParentMessage::Navigate(target)))
        .into()
}

impl Screen for LandingPageScreen {
    type Message = Infallible;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let stats = Row::with_children(showcase::HEADLINE_STATS.iter().map(|stat| {
            Element::from(
                column![text(stat.value).size(28), text(stat.label)]
                    .spacing(4)
                    .width(Length::Fill),
            )
        }))
        .spacing(20);

        let features = Row::with_children(
            showcase::LANDING_FEATURES
                .iter()
                .map(|feature| card(feature.title, text(feature.description))),
        )
        .spacing(20);

        let content = column![
            text("TerraX: Voices of Earth").size(48),
            text(showcase::TAGLINE).size(22),
            row![
                call_to_action("Explore Atlas", Page::Atlas),
                call_to_action("Watch Stories", Page::Stories),
                call_to_action("Try VR Demo", Page::VrDemo),
            ]
            .spacing(20),
            stats,
            text("Connecting Data to Humanity").size(30),
            text(showcase::MISSION),
            features,
        ]
        .spacing(24)
        .padding(32)
        .max_width(1100);

        scrollable(container(content).center_x(Length::Fill)).into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}
