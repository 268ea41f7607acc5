pub mod atlas_page;
pub mod landing_page;
pub mod stories_page;
pub mod vr_demo_page;

use iced::{Element, Task};

use crate::{
    core::catalog::Page,
    gui::{AppState, Message},
};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view(&self) -> Element<'_, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    LandingPage(landing_page::LandingPageScreen),
    AtlasPage(atlas_page::AtlasPageScreen),
    StoriesPage(stories_page::StoriesPageScreen),
    VrDemoPage(vr_demo_page::VrDemoPageScreen),
}

impl ScreenData {
    /// Fresh screen for `page`, with its selections at their defaults.
    pub fn open(page: Page, state: &AppState) -> Self {
        match page {
            Page::Home => ScreenData::LandingPage(landing_page::LandingPageScreen),
            Page::Atlas => ScreenData::AtlasPage(atlas_page::AtlasPageScreen::new(state)),
            Page::Stories => ScreenData::StoriesPage(stories_page::StoriesPageScreen::new(state)),
            Page::VrDemo => ScreenData::VrDemoPage(vr_demo_page::VrDemoPageScreen),
        }
    }

    pub fn page(&self) -> Page {
        match self {
            ScreenData::LandingPage(_) => Page::Home,
            ScreenData::AtlasPage(_) => Page::Atlas,
            ScreenData::StoriesPage(_) => Page::Stories,
            ScreenData::VrDemoPage(_) => Page::VrDemo,
        }
    }
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;
    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        match self {
            ScreenData::LandingPage(screen) => screen.view().map(Message::LandingPage),
            ScreenData::AtlasPage(screen) => screen.view().map(Message::AtlasPageMessage),
            ScreenData::StoriesPage(screen) => screen.view().map(Message::StoriesPageMessage),
            ScreenData::VrDemoPage(screen) => screen.view().map(Message::VrDemoPageMessage),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (x, Message::Navigate(page)) => {
                if x.page() != page {
                    tracing::debug!(from = ?x.page(), to = ?page, "changing screen");
                    *x = ScreenData::open(page, state);
                }
                Task::none()
            }
            (ScreenData::LandingPage(page), Message::LandingPage(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::LandingPage)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(landing_page::ParentMessage::Navigate(target)) => {
                    Task::done(ScreenMessage::ScreenMessage(Message::Navigate(target)))
                }
            },
            (ScreenData::AtlasPage(page), Message::AtlasPageMessage(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::AtlasPageMessage)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(never) => match never {},
            },
            (ScreenData::StoriesPage(page), Message::StoriesPageMessage(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::StoriesPageMessage)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(never) => match never {},
            },
            // messages queued for a screen that has since been replaced
            _ => Task::none(),
        }
    }
}
