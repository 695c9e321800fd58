// SPDX-License-Identifier: MIT OR Apache-2.0
//! Site page definitions.

use serde::{Deserialize, Serialize};

/// Pages reachable from the navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Page {
    /// Landing hero
    #[default]
    Home,
    /// Profile, achievements, skills
    About,
    /// Portfolio gallery
    Works,
    /// Contact form
    Contact,
}

impl Page {
    /// Navigation order
    pub fn all() -> &'static [Page] {
        &[Page::Home, Page::About, Page::Works, Page::Contact]
    }

    /// Label shown in the header and footer navigation
    pub fn nav_label(&self) -> &'static str {
        match self {
            Self::Home => "HOME",
            Self::About => "ABOUT",
            Self::Works => "WORKS",
            Self::Contact => "CONTACT",
        }
    }

    /// Window title suffix
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Works => "Works",
            Self::Contact => "Contact",
        }
    }
}
