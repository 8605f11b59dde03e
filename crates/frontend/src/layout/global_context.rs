use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Pages reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Customers,
    Suppliers,
    Vendors,
    Vessels,
    Currencies,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Customers,
        Page::Suppliers,
        Page::Vendors,
        Page::Vessels,
        Page::Currencies,
    ];

    /// Value of the `?active=` URL parameter
    pub fn key(&self) -> &'static str {
        match self {
            Self::Customers => "customers",
            Self::Suppliers => "suppliers",
            Self::Vendors => "vendors",
            Self::Vessels => "vessels",
            Self::Currencies => "currencies",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Customers => "Customers",
            Self::Suppliers => "Suppliers",
            Self::Vendors => "Agents & vendors",
            Self::Vessels => "Vessels",
            Self::Currencies => "Currencies",
        }
    }

    pub fn icon(&self) -> &'static str {
        self.key()
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.key() == key)
    }
}

/// Page parsed from a location search string such as `?active=vessels`.
pub fn page_from_search(search: &str) -> Option<Page> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").and_then(|key| Page::from_key(key))
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::default()),
            left_open: RwSignal::new(true),
        }
    }

    /// Opens the page named in the URL and keeps `?active=` in sync with
    /// later navigation.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(page) = page_from_search(&search) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.active.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "active".to_string(),
                page.key().to_string(),
            )]))
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_url {
                return;
            }
            if let Some(w) = window() {
                if let Ok(history) = w.history() {
                    if let Err(e) = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&new_url),
                    ) {
                        log::warn!("could not update location: {:?}", e);
                    }
                }
            }
        });
    }

    pub fn open(&self, page: Page) {
        log::debug!("open page {}", page.key());
        self.active.set(page);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_page_is_read_from_the_query_string() {
        assert_eq!(page_from_search("?active=vessels"), Some(Page::Vessels));
        assert_eq!(page_from_search("active=currencies&x=1"), Some(Page::Currencies));
        assert_eq!(page_from_search("?active=quotations"), None);
        assert_eq!(page_from_search(""), None);
    }

    #[test]
    fn every_page_round_trips_through_its_key() {
        for page in Page::ALL {
            assert_eq!(Page::from_key(page.key()), Some(page));
        }
    }
}
