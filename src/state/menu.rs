//! Navbar overlay panels.
//!
//! The four mega menus form one group: at most one is open. The mobile menu
//! is tracked separately and may be open alongside a mega menu.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MegaMenu {
    Language,
    Blog,
    Projects,
    Services,
}

impl MegaMenu {
    pub const ALL: [Self; 4] = [Self::Language, Self::Blog, Self::Projects, Self::Services];

    /// CSS class prefix shared by the toggle and the panel.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Language => "lang",
            Self::Blog => "blog",
            Self::Projects => "projects",
            Self::Services => "services",
        }
    }
}

/// Where a document click landed, as far as menu dismissal cares.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickTarget {
    /// A mega-menu toggle or the language button.
    pub on_menu_toggle: bool,
    /// Inside an open mega-menu panel.
    pub in_mega_menu: bool,
    /// Inside the mobile menu or on its toggle.
    pub in_mobile_menu: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: Option<MegaMenu>,
    mobile_open: bool,
}

impl MenuState {
    pub fn open_menu(&self) -> Option<MegaMenu> {
        self.open
    }

    pub fn is_open(&self, menu: MegaMenu) -> bool {
        self.open == Some(menu)
    }

    pub fn is_mobile_open(&self) -> bool {
        self.mobile_open
    }

    /// Open `menu`, closing any other, or close it if it is the open one.
    pub fn toggle(&mut self, menu: MegaMenu) {
        self.open = if self.open == Some(menu) { None } else { Some(menu) };
    }

    pub fn close(&mut self, menu: MegaMenu) {
        if self.open == Some(menu) {
            self.open = None;
        }
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }

    pub fn toggle_mobile(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    pub fn close_mobile(&mut self) {
        self.mobile_open = false;
    }

    /// Dismiss whatever the click landed outside of.
    pub fn on_document_click(&mut self, target: ClickTarget) {
        if !target.on_menu_toggle && !target.in_mega_menu {
            self.close_all();
        }
        if !target.in_mobile_menu {
            self.close_mobile();
        }
    }
}
