//! Hard-coded UI text tables for the four supported languages.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use super::prefs::Language;

/// Navigation labels, in navbar order.
#[derive(Debug, PartialEq, Eq)]
pub struct NavLabels {
    pub home: &'static str,
    pub blog: &'static str,
    pub projects: &'static str,
    pub services: &'static str,
    pub contact: &'static str,
}

impl NavLabels {
    pub fn in_order(&self) -> [&'static str; 5] {
        [self.home, self.blog, self.projects, self.services, self.contact]
    }
}

/// Translatable strings for one language.
#[derive(Debug, PartialEq, Eq)]
pub struct Strings {
    pub greeting: &'static str,
    pub role: &'static str,
    /// May contain inline `<strong>` markup.
    pub description: &'static str,
    pub view_work: &'static str,
    pub get_in_touch: &'static str,
    pub nav: NavLabels,
    pub menu_title: &'static str,
}

/// Language switcher button content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LanguageBadge {
    pub code: &'static str,
    pub flag: &'static str,
    pub alt: &'static str,
}

static EN: Strings = Strings {
    greeting: "Hello, I'm",
    role: "Frontend Developer",
    description: "I specialize in <strong>re:designing</strong> outdated websites into modern, responsive, and user-friendly experiences. Transforming old web presence into cutting-edge digital solutions.",
    view_work: "View My Work",
    get_in_touch: "Get In Touch",
    nav: NavLabels { home: "Home", blog: "Blog", projects: "Projects", services: "Services", contact: "Contact" },
    menu_title: "Choose Your Language",
};

static RO: Strings = Strings {
    greeting: "Salut, sunt",
    role: "Dezvoltator Frontend",
    description: "Mă specializez în <strong>re:proiectarea</strong> site-urilor web învechite în experiențe moderne, responsive și ușor de utilizat. Transform prezența web veche în soluții digitale de ultimă generație.",
    view_work: "Vezi Munca Mea",
    get_in_touch: "Ia Legătura",
    nav: NavLabels { home: "Acasă", blog: "Blog", projects: "Proiecte", services: "Servicii", contact: "Contact" },
    menu_title: "Alege Limba",
};

static ES: Strings = Strings {
    greeting: "Hola, soy",
    role: "Desarrollador Frontend",
    description: "Me especializo en <strong>re:diseñar</strong> sitios web obsoletos en experiencias modernas, responsivas y fáciles de usar. Transformando la presencia web antigua en soluciones digitales de vanguardia.",
    view_work: "Ver Mi Trabajo",
    get_in_touch: "Contactar",
    nav: NavLabels {
        home: "Inicio",
        blog: "Blog",
        projects: "Proyectos",
        services: "Servicios",
        contact: "Contacto",
    },
    menu_title: "Elige Tu Idioma",
};

static FR: Strings = Strings {
    greeting: "Bonjour, je suis",
    role: "Développeur Frontend",
    description: "Je me spécialise dans la <strong>re:conception</strong> de sites web obsolètes en expériences modernes, responsives et conviviales. Transformer l'ancienne présence web en solutions numériques de pointe.",
    view_work: "Voir Mon Travail",
    get_in_touch: "Me Contacter",
    nav: NavLabels { home: "Accueil", blog: "Blog", projects: "Projets", services: "Services", contact: "Contact" },
    menu_title: "Choisissez Votre Langue",
};

#[must_use]
pub fn strings(language: Language) -> &'static Strings {
    match language {
        Language::En => &EN,
        Language::Ro => &RO,
        Language::Es => &ES,
        Language::Fr => &FR,
    }
}

#[must_use]
pub fn badge(language: Language) -> LanguageBadge {
    match language {
        Language::En => LanguageBadge { code: "EN", flag: "images/language/us-flag.svg", alt: "US Flag" },
        Language::Ro => LanguageBadge { code: "RO", flag: "images/language/ro-flag.svg", alt: "Romanian Flag" },
        Language::Es => LanguageBadge { code: "ES", flag: "images/language/es-flag.svg", alt: "Spanish Flag" },
        Language::Fr => LanguageBadge { code: "FR", flag: "images/language/fr-flag.svg", alt: "French Flag" },
    }
}
