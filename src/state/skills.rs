//! Radial skill layout.
//!
//! Items sit evenly on a circle starting from 12 o'clock. Focusing an item
//! pulls it into the center and closes the gap it left on the ring;
//! clicking the focused item again restores the plain circle.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use std::f64::consts::{FRAC_PI_2, TAU};

use super::prefs::Theme;

pub const RING_RADIUS_PX: f64 = 220.0;
/// Description panels show the fade hint while more than this remains.
pub const SCROLL_HINT_PX: f64 = 10.0;
/// The scroll indicator fades out this close to the bottom.
pub const INDICATOR_FADE_PX: f64 = 20.0;
pub const INTRO_DELAY_MS: u32 = 300;
pub const INTRO_STAGGER_MS: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub title: &'static str,
    /// Class of the description block this skill reveals.
    pub content_key: &'static str,
    pub color: &'static str,
    pub image: &'static str,
    pub icon_class: Option<&'static str>,
}

impl Skill {
    const fn new(title: &'static str, content_key: &'static str, color: &'static str, image: &'static str) -> Self {
        Self { title, content_key, color, image, icon_class: None }
    }

    const fn with_icon_class(mut self, class: &'static str) -> Self {
        self.icon_class = Some(class);
        self
    }

    /// Icon for the active theme. Only the AI icon has a light variant.
    pub fn image_for(&self, theme: Theme) -> &'static str {
        if self.content_key == "ai-desc" { theme.ai_icon() } else { self.image }
    }
}

pub const CODING_SKILLS: [Skill; 9] = [
    Skill::new("HTML5", "html-desc", "#E34C26", "images/skills/HTML5.svg"),
    Skill::new("CSS3", "css-desc", "#0083de", "images/skills/CSS3.svg"),
    Skill::new("JavaScript", "js-desc", "#f8dc3d", "images/skills/javascript6.svg"),
    Skill::new("PHP", "php-desc", "#9aa0c6", "images/skills/php.svg"),
    Skill::new("SASS", "sass-desc", "#cd6799", "images/skills/sass.svg"),
    Skill::new("NODEJS", "nodejs-desc", "#8cc84b", "images/skills/nodejs.svg"),
    Skill::new("REACT", "react-desc", "#00d8ff", "images/skills/react.svg"),
    Skill::new("PYTHON", "python-desc", "#3776AB", "images/skills/python.svg"),
    Skill::new("KOTLIN", "kotlin-desc", "#007396", "images/skills/kotlin.svg"),
];

pub const SOFTWARE_SKILLS: [Skill; 13] = [
    Skill::new("ARTIFICIAL INTELIGENCE", "ai-desc", "#19a9d8", "images/skills/Ai-dark.svg"),
    Skill::new("BOOTSTRAP", "bootstrap-desc", "#8f4cce", "images/skills/bootstrap.svg"),
    Skill::new("PHOTOSHOP", "photoshop-desc", "#31a8ff", "images/skills/photoshop.svg"),
    Skill::new("FIGMA", "figma-desc", "#392372", "images/skills/figma.svg").with_icon_class("icon-figma"),
    Skill::new("CANVA", "canva-desc", "#3293d7", "images/skills/canva.svg").with_icon_class("icon-canva"),
    Skill::new("WORDPRESS", "wordpress-desc", "#21759b", "images/skills/wordpress.svg")
        .with_icon_class("icon-wordpress"),
    Skill::new("GITHUB", "github-desc", "#dc4b36", "images/skills/github.svg"),
    Skill::new("MAIL CHIMP", "mail-chimp-desc", "#2496ED", "images/skills/mailchimp.svg"),
    Skill::new("AWS", "aws-desc", "#FF9900", "images/skills/aws-white.svg"),
    Skill::new("LINUX", "linux-desc", "#FCC624", "images/skills/linux.svg"),
    Skill::new("XAMPP", "xampp-desc", "#4479A1", "images/skills/xampp.svg"),
    Skill::new("GODOT", "godot-desc", "#47A248", "images/skills/godot.svg"),
    Skill::new("ANDROID STUDIO", "android-studio-desc", "#DC382D", "images/skills/android-studio.svg"),
];

/// Description panel text, keyed by [`Skill::content_key`].
pub const SKILL_DESCRIPTIONS: [(&str, &str); 22] = [
    ("html-desc", "Semantic, accessible markup is the base of every redesign I ship."),
    ("css-desc", "Responsive layouts with Grid and Flexbox, custom properties for theming and restrained motion."),
    ("js-desc", "Vanilla JavaScript for interactive widgets: sliders, carousels, menus and form handling."),
    ("php-desc", "Server-side templates and small backends for contact forms and WordPress themes."),
    ("sass-desc", "Structured stylesheets with partials, mixins and design tokens."),
    ("nodejs-desc", "Build tooling, small APIs and scripts that automate asset pipelines."),
    ("react-desc", "Component-driven interfaces for web apps that outgrow plain pages."),
    ("python-desc", "Scripting, scraping and data cleanup behind content migrations."),
    ("kotlin-desc", "Native Android apps with modern language features and Jetpack libraries."),
    ("ai-desc", "AI-assisted prototyping, copy drafts and image generation to speed up early design rounds."),
    ("bootstrap-desc", "Rapid, consistent layouts when a project calls for a proven grid and components."),
    ("photoshop-desc", "Image retouching, mockups and export of web-ready assets."),
    ("figma-desc", "Wireframes, design systems and clickable prototypes shared with clients."),
    ("canva-desc", "Quick social graphics and marketing material that match a site's branding."),
    ("wordpress-desc", "Custom themes and editor-friendly sites clients can update themselves."),
    ("github-desc", "Version control, pull-request reviews and deployments through Actions."),
    ("mail-chimp-desc", "Newsletter templates and signup flows wired into client sites."),
    ("aws-desc", "Static hosting, storage and CDN setup for fast, reliable delivery."),
    ("linux-desc", "Daily driver for development, servers and shell automation."),
    ("xampp-desc", "Local Apache, MySQL and PHP stacks for testing sites before launch."),
    ("godot-desc", "Small 2D games and interactive experiments in GDScript."),
    ("android-studio-desc", "Building, profiling and debugging Android apps."),
];

/// Description for a skill's `content_key`.
pub fn description(content_key: &str) -> Option<&'static str> {
    SKILL_DESCRIPTIONS
        .iter()
        .find(|(key, _)| *key == content_key)
        .map(|(_, text)| *text)
}

pub const DOT_MIN_SECS: f64 = 2.0;
pub const DOT_SPREAD_SECS: f64 = 3.0;

/// Animation of the small dot orbiting a skill icon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotMotion {
    pub forward: bool,
    /// In `[DOT_MIN_SECS, DOT_MIN_SECS + DOT_SPREAD_SECS)`.
    pub duration_secs: f64,
}

impl DotMotion {
    /// Scattered but stable motion derived from `key`.
    #[allow(clippy::cast_precision_loss)]
    pub fn for_key(key: &str) -> Self {
        let bits = mix(fnv1a(key));
        let unit = (bits >> 11) as f64 / (1u64 << 53) as f64;
        Self { forward: bits & 1 == 0, duration_secs: DOT_MIN_SECS + unit * DOT_SPREAD_SECS }
    }

    pub fn style(self) -> String {
        let name = if self.forward { "move-dot-forward" } else { "move-dot-backward" };
        format!("animation: {name} {:.2}s linear infinite;", self.duration_secs)
    }
}

fn fnv1a(key: &str) -> u64 {
    key.bytes()
        .fold(0xcbf2_9ce4_8422_2325, |h, b| (h ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3))
}

// splitmix64 finalizer
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Center of a `width` x `height` container.
    #[must_use]
    pub fn center_of(width: f64, height: f64) -> Self {
        Self { x: width / 2.0, y: height / 2.0 }
    }

    pub fn style(self) -> String {
        format!("left: {}px; top: {}px;", self.x, self.y)
    }
}

/// Slot `index` of `count` evenly spaced slots, starting at the top.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ring_slot(index: usize, count: usize, center: Point, radius: f64) -> Point {
    if count == 0 {
        return center;
    }
    let angle = index as f64 * (TAU / count as f64) - FRAC_PI_2;
    Point { x: center.x + radius * angle.cos(), y: center.y + radius * angle.sin() }
}

/// Outcome of clicking a skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillClick {
    Focused(usize),
    Reset,
}

/// Focus state of one skill ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillRing {
    count: usize,
    focused: Option<usize>,
}

impl SkillRing {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { count, focused: None }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Toggle focus on `index`. Out-of-range clicks are ignored.
    pub fn click(&mut self, index: usize) -> Option<SkillClick> {
        if index >= self.count {
            return None;
        }
        if self.focused == Some(index) {
            self.focused = None;
            log::debug!("skill ring reset");
            return Some(SkillClick::Reset);
        }
        self.focused = Some(index);
        Some(SkillClick::Focused(index))
    }

    pub fn reset(&mut self) {
        self.focused = None;
    }

    /// Position of every item for a container centered at `center`.
    pub fn positions(&self, center: Point) -> Vec<Point> {
        let Some(focus) = self.focused else {
            return (0..self.count).map(|i| ring_slot(i, self.count, center, RING_RADIUS_PX)).collect();
        };
        let remaining = self.count - 1;
        (0..self.count)
            .map(|i| match i.cmp(&focus) {
                std::cmp::Ordering::Equal => center,
                std::cmp::Ordering::Less => ring_slot(i, remaining, center, RING_RADIUS_PX),
                std::cmp::Ordering::Greater => ring_slot(i - 1, remaining, center, RING_RADIUS_PX),
            })
            .collect()
    }
}

/// Scroll metrics of a skill description panel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanelScroll {
    pub scroll_top: f64,
    pub client_height: f64,
    pub scroll_height: f64,
}

impl PanelScroll {
    fn remaining(self) -> f64 {
        self.scroll_height - self.scroll_top - self.client_height
    }

    pub fn can_scroll_down(self) -> bool {
        self.remaining() > SCROLL_HINT_PX
    }

    pub fn indicator_visible(self) -> bool {
        self.remaining() > INDICATOR_FADE_PX
    }
}
