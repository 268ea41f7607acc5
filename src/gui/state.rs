use crate::core::catalog::Catalog;

/// State shared by every screen. Page-level selections live on the screens
/// themselves and are dropped when the page is left.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    pub catalog: Catalog,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}
