use std::convert::Infallible;

use iced::{
    Element, Length, Task,
    widget::{Column, Row, button, column, row, scrollable, slider, text},
};

use crate::{
    core::{
        catalog::{Catalog, DataLayer, SampleYear, YearPolicy, resolve_year, showcase},
        format::{format_count, format_reading},
        selection::AtlasSelection,
    },
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{card, choice_style, header, layout, stat_row},
    },
};

#[derive(Debug, Clone)]
pub struct AtlasPageScreen {
    catalog: Catalog,
    selection: AtlasSelection,
}

#[derive(Debug, Clone)]
pub enum AtlasPageMessage {
    YearSlid(u16),
    LayerSelected(DataLayer),
}

impl Screen for AtlasPageScreen {
    type Message = AtlasPageMessage;
    type ParentMessage = Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let view = self.selection.view(&self.catalog);

        let time_period = card(
            "Time Period",
            column![
                text(view.year.to_string()).size(32),
                slider(
                    SampleYear::FIRST.year()..=SampleYear::LAST.year(),
                    view.year.year(),
                    |year| ScreenMessage::ScreenMessage(AtlasPageMessage::YearSlid(year)),
                )
                .step(SampleYear::STEP),
                row![
                    text(SampleYear::FIRST.to_string()).width(Length::Fill),
                    text(SampleYear::LAST.to_string()),
                ],
            ]
            .spacing(10),
        );

        let layers = card(
            "Data Layers",
            Column::with_children(DataLayer::ALL.into_iter().map(|layer| {
                Element::from(
                    button(text(layer.label()))
                        .width(Length::Fill)
                        .style(choice_style(layer == view.layer))
                        .on_press(ScreenMessage::ScreenMessage(AtlasPageMessage::LayerSelected(
                            layer,
                        ))),
                )
            }))
            .spacing(4),
        );

        let statistics = card(
            format!("{} Statistics", view.year),
            column![
                stat_row("Fire Hotspots", format_count(view.snapshot.fires)),
                stat_row("Pollution Index", view.snapshot.pollution_index.to_string()),
                stat_row("Flood Events", format_count(view.snapshot.flood_events)),
            ]
            .spacing(8),
        );

        let highlighted = match view.reading() {
            Some(reading) => format!("{}: {}", view.layer.label(), format_reading(reading)),
            None => format!("{} spans every sample year", view.layer.label()),
        };
        let map = card(
            "Interactive Map",
            Column::with_children(
                [text(view.map_caption()), text(highlighted).size(20)]
                    .into_iter()
                    .map(Element::from)
                    .chain(
                        DataLayer::ALL
                            .into_iter()
                            .filter(|layer| layer.is_mapped())
                            .map(|layer| {
                                let instrument = layer.instrument();
                                Element::from(text(format!(
                                    "• Terra {} {}",
                                    instrument.name(),
                                    instrument.product()
                                )))
                            }),
                    ),
            )
            .spacing(10)
            .height(Length::Fixed(360.0)),
        );

        let previews = Row::with_children(
            showcase::ATLAS_PREVIEWS
                .iter()
                .map(|preview| card(preview.title, text(preview.description))),
        )
        .spacing(16);

        let content = column![
            header(
                "Interactive Climate Justice Atlas",
                "Explore 25 years of Terra satellite data with time-based visualization and human impact stories",
            ),
            layout(
                column![time_period, layers, statistics].spacing(16),
                column![map, previews].spacing(16),
            ),
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
        match message {
            AtlasPageMessage::YearSlid(year) => match resolve_year(year, YearPolicy::Nearest) {
                Ok(year) => self.selection.year.select(year),
                Err(err) => tracing::warn!(%err, "ignoring slider position"),
            },
            AtlasPageMessage::LayerSelected(layer) => self.selection.layer.select(layer),
        }
        Task::none()
    }
}

impl AtlasPageScreen {
    pub fn new(state: &AppState) -> Self {
        Self {
            catalog: state.catalog,
            selection: AtlasSelection::default(),
        }
    }
}
