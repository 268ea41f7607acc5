use std::convert::Infallible;

use iced::{
    Element, Length, Task,
    widget::{Column, Row, button, column, container, row, scrollable, text},
};
use iced_widget::container::bordered_box;

use crate::{
    core::{
        catalog::{Catalog, Language, SUPPORTED_LANGUAGES, Story, StoryId},
        format::humanize_key,
        selection::StorySelection,
    },
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{card, choice_style, header, modal, stat_row},
    },
};

#[derive(Debug, Clone)]
pub struct StoriesPageScreen {
    catalog: Catalog,
    selection: StorySelection,
}

#[derive(Debug, Clone)]
pub enum StoriesPageMessage {
    LanguageSelected(Language),
    OpenStory(StoryId),
    CloseStory,
}

type Msg = ScreenMessage<StoriesPageScreen>;

fn story_card(story: &'static Story) -> Element<'static, Msg> {
    let primary = story
        .terra_data
        .primary()
        .map(|product| product.product)
        .unwrap_or("-");
    let body = column![
        text(story.region).size(14),
        text(story.title).size(20),
        text(story.summary),
        stat_row("Terra Data:", primary),
        stat_row("Period:", story.terra_data.period),
        stat_row("Impact:", story.terra_data.impact),
    ]
    .spacing(8);

    button(container(body).padding(8))
        .width(Length::Fixed(320.0))
        .style(button::secondary)
        .on_press(ScreenMessage::ScreenMessage(StoriesPageMessage::OpenStory(story.id)))
        .into()
}

fn story_detail(story: &'static Story) -> Element<'static, Msg> {
    let available_in = story
        .languages
        .iter()
        .map(|language| language.native_name())
        .collect::<Vec<_>>()
        .join(", ");

    let stats = Column::with_children(
        story
            .stats
            .iter()
            .map(|stat| stat_row(humanize_key(stat.key), stat.value)),
    )
    .spacing(8);

    let content = column![
        text(story.title).size(28),
        card(
            "Video Story",
            text(format!("{} • Terra Satellite Data Visualization", story.region)),
        ),
        row![
            column![
                text("Story").size(20),
                text(story.description),
                text(format!("Available in: {available_in}")),
            ]
            .spacing(10)
            .width(Length::Fill),
            card("Impact Statistics", stats),
        ]
        .spacing(20),
        button(text("Close"))
            .on_press(ScreenMessage::ScreenMessage(StoriesPageMessage::CloseStory)),
    ]
    .spacing(16);

    container(scrollable(content))
        .style(bordered_box)
        .padding(24)
        .max_width(900)
        .into()
}

impl Screen for StoriesPageScreen {
    type Message = StoriesPageMessage;
    type ParentMessage = Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let view = self.selection.view(&self.catalog);

        let mut filter = row![text("Filter by language:")].spacing(8);
        for language in SUPPORTED_LANGUAGES {
            filter = filter.push(
                button(text(language.native_name()))
                    .style(choice_style(language == view.language))
                    .on_press(ScreenMessage::ScreenMessage(
                        StoriesPageMessage::LanguageSelected(language),
                    )),
            );
        }

        let gallery: Element<'_, Msg> = if view.is_empty() {
            text(format!("No stories are available in {} yet.", view.language)).into()
        } else {
            Row::with_children(view.stories.iter().copied().map(story_card))
                .spacing(20)
                .wrap()
                .into()
        };

        let page = scrollable(
            column![
                header(
                    "Voices of Terra Story Hub",
                    "Personal narratives from communities around the world, powered by Terra satellite data",
                ),
                filter,
                gallery,
            ]
            .spacing(24)
            .padding(32),
        );

        match self.selection.open_story(&self.catalog) {
            Some(story) => modal(
                page,
                story_detail(story),
                ScreenMessage::ScreenMessage(StoriesPageMessage::CloseStory),
            ),
            None => page.into(),
        }
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            StoriesPageMessage::LanguageSelected(language) => {
                self.selection.language.select(language)
            }
            StoriesPageMessage::OpenStory(id) => self.selection.open(id),
            StoriesPageMessage::CloseStory => self.selection.close(),
        }
        Task::none()
    }
}

impl StoriesPageScreen {
    pub fn new(state: &AppState) -> Self {
        Self {
            catalog: state.catalog,
            selection: StorySelection::default(),
        }
    }
}
