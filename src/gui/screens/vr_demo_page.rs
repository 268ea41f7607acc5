use std::convert::Infallible;

use iced::{
    Element, Length, Task,
    widget::{Column, Row, button, column, row, scrollable, text},
};

use crate::{
    core::catalog::showcase,
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{card, header, layout},
    },
};

#[derive(Debug, Clone)]
pub struct VrDemoPageScreen;

fn bullet_list<'a, Message: 'a>(items: &'a [&'a str]) -> Column<'a, Message> {
    Column::with_children(
        items
            .iter()
            .map(|item| Element::from(text(format!("• {item}")))),
    )
    .spacing(4)
}

impl Screen for VrDemoPageScreen {
    type Message = Infallible;
    type ParentMessage = Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let features = card(
            "VR Features",
            Column::with_children(showcase::VR_FEATURES.iter().map(|feature| {
                Element::from(
                    column![text(feature.title).size(16), text(feature.description).size(13)]
                        .spacing(2),
                )
            }))
            .spacing(12),
        );

        let steps = card(
            "How to Use",
            Column::with_children(
                showcase::VR_STEPS
                    .iter()
                    .enumerate()
                    .map(|(i, step)| Element::from(text(format!("{}. {step}", i + 1)))),
            )
            .spacing(8),
        );

        // download buttons stay disabled until the app is published
        let preview = column![
            card("VR Mode", text("Terra MODIS")),
            text("Get the VR App").size(20),
            row![
                button(text("Android APK")).width(Length::Fill),
                button(text("iOS App Store")).width(Length::Fill),
            ]
            .spacing(12),
            text("Compatible with Google Cardboard and most VR headsets"),
        ]
        .spacing(16);

        let hotspots = Row::with_children(showcase::HOTSPOTS.iter().map(|hotspot| {
            card(
                hotspot.name,
                column![text(hotspot.kind).size(14), text(hotspot.impact).size(13)].spacing(4),
            )
        }))
        .spacing(12);

        let requirements = card(
            "System Requirements",
            row![
                column![text("Minimum"), bullet_list(&showcase::VR_MINIMUM_REQUIREMENTS)]
                    .spacing(6)
                    .width(Length::Fill),
                column![text("Recommended"), bullet_list(&showcase::VR_RECOMMENDED_REQUIREMENTS)]
                    .spacing(6)
                    .width(Length::Fill),
            ]
            .spacing(20),
        );

        let content = column![
            header(
                "Earth in Motion: VR Experience",
                "Immerse yourself in 25 years of Terra satellite data through virtual reality",
            ),
            layout(preview, column![features, steps].spacing(16)),
            text("Explore Climate Hotspots").size(28),
            hotspots,
            requirements,
        ]
        .spacing(24)
        .padding(32);

        scrollable(content).into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}
