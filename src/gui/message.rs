use crate::{
    core::catalog::Page,
    gui::screens::{
        ScreenMessage, atlas_page::AtlasPageScreen, landing_page::LandingPageScreen,
        stories_page::StoriesPageScreen, vr_demo_page::VrDemoPageScreen,
    },
};

#[derive(Debug, Clone)]
pub enum Message {
    LandingPage(ScreenMessage<LandingPageScreen>),
    AtlasPageMessage(ScreenMessage<AtlasPageScreen>),
    StoriesPageMessage(ScreenMessage<StoriesPageScreen>),
    VrDemoPageMessage(ScreenMessage<VrDemoPageScreen>),
    Navigate(Page),
}
