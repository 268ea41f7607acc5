use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Home,
    Atlas,
    Stories,
    VrDemo,
}

impl Page {
    /// Navigation bar order.
    pub const ALL: [Page; 4] = [Page::Home, Page::Atlas, Page::Stories, Page::VrDemo];

    pub const fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Atlas => "Climate Atlas",
            Page::Stories => "Stories",
            Page::VrDemo => "VR Demo",
        }
    }

    pub const fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Atlas => "/atlas",
            Page::Stories => "/stories",
            Page::VrDemo => "/vr-demo",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.path() == path)
    }
}
