use iced::{Element, Task, widget::column};

use crate::{
    core::catalog::{Catalog, Page},
    gui::{
        AppState, Message,
        screens::{Screen, ScreenData, ScreenMessage},
        widgets::navigation,
    },
};

pub struct TerraxApp {
    state: AppState,
    screen: ScreenData,
}

impl TerraxApp {
    pub fn new(catalog: Catalog, start: Page) -> Self {
        let state = AppState::new(catalog);
        Self {
            screen: ScreenData::open(start, &state),
            state,
        }
    }

    pub fn title(&self) -> String {
        format!("TerraX: Voices of Earth | {}", self.screen.page().label())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(Self::into_app_message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        column![
            navigation(self.screen.page()),
            self.screen.view().map(Self::into_app_message),
        ]
        .into()
    }

    fn into_app_message(message: ScreenMessage<ScreenData>) -> Message {
        match message {
            ScreenMessage::ScreenMessage(message) => message,
            ScreenMessage::ParentMessage(never) => match never {},
        }
    }
}

pub fn run(catalog: Catalog, start: Page) -> anyhow::Result<()> {
    tracing::info!(?start, "starting gui");
    iced::application(
        move || TerraxApp::new(catalog, start),
        TerraxApp::update,
        TerraxApp::view,
    )
    .title(TerraxApp::title)
    .run()?;
    Ok(())
}
