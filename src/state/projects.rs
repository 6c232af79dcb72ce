//! Filterable, paginated project grid.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

pub const INITIAL_VISIBLE: usize = 6;
pub const LOAD_MORE_STEP: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
}

/// Projects listed on the portfolio, newest first.
pub const PROJECT_CARDS: &[ProjectCard] = &[
    ProjectCard { title: "Ironcraft", category: "redesign", image: "images/projects/ironcraft-after.png" },
    ProjectCard { title: "Traffic Tamers", category: "redesign", image: "images/projects/traffic-tamers-after.png" },
    ProjectCard { title: "Bakery Landing", category: "landing", image: "images/projects/bakery.png" },
    ProjectCard { title: "Fitness Tracker", category: "web-app", image: "images/projects/fitness.png" },
    ProjectCard { title: "Dental Clinic", category: "redesign", image: "images/projects/dental.png" },
    ProjectCard { title: "Event Countdown", category: "landing", image: "images/projects/event.png" },
    ProjectCard { title: "Recipe Finder", category: "web-app", image: "images/projects/recipes.png" },
    ProjectCard { title: "Law Office", category: "redesign", image: "images/projects/law-office.png" },
    ProjectCard { title: "Weather Board", category: "web-app", image: "images/projects/weather.png" },
];

/// Category filter button value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    /// Parse a `data-filter` value; `"all"` selects everything.
    #[must_use]
    pub fn from_attr(value: &str) -> Self {
        if value == "all" { Self::All } else { Self::Category(value.to_owned()) }
    }

    fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(wanted) => wanted == category,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCatalog {
    categories: Vec<String>,
    filter: Filter,
    visible_count: usize,
}

impl ProjectCatalog {
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            filter: Filter::All,
            visible_count: INITIAL_VISIBLE,
        }
    }

    #[must_use]
    pub fn from_cards(cards: &[ProjectCard]) -> Self {
        Self::new(cards.iter().map(|c| c.category))
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Switch filters; pagination starts over.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.visible_count = INITIAL_VISIBLE;
    }

    pub fn load_more(&mut self) {
        self.visible_count += LOAD_MORE_STEP;
    }

    /// Per-card visibility, in catalog order.
    pub fn visibility(&self) -> Vec<bool> {
        let mut shown = 0;
        self.categories
            .iter()
            .map(|category| {
                let visible = self.filter.matches(category) && shown < self.visible_count;
                if visible {
                    shown += 1;
                }
                visible
            })
            .collect()
    }

    pub fn visible_total(&self) -> usize {
        self.visibility().into_iter().filter(|v| *v).count()
    }

    pub fn shows_empty_message(&self) -> bool {
        self.visible_total() == 0
    }

    /// The button only paginates the unfiltered list.
    pub fn shows_load_more(&self) -> bool {
        self.filter == Filter::All && self.visible_count < self.categories.len()
    }
}
