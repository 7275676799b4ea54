use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Home,
    About,
    Chat,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::About, Page::Chat];

    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Chat => "chat",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About Team",
            Page::Chat => "Chatbox",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.slug() == value)
            .ok_or_else(|| format!("unknown page '{value}'"))
    }
}

/// Which page body the shell renders. No history.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Navigation {
    page: Page,
}

impl Navigation {
    pub fn page(&self) -> Page {
        self.page
    }

    pub fn select(&mut self, page: Page) {
        self.page = page;
    }
}
