use super::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_defaults_to_light_during_day_hours() {
    assert_eq!(Theme::for_hour(6), Theme::Dark);
    assert_eq!(Theme::for_hour(7), Theme::Light);
    assert_eq!(Theme::for_hour(19), Theme::Light);
    assert_eq!(Theme::for_hour(20), Theme::Dark);
    assert_eq!(Theme::for_hour(0), Theme::Dark);
}

#[test]
fn theme_parses_stored_strings() {
    assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    assert_eq!("Dark".parse::<Theme>(), Err(PrefError::UnknownTheme("Dark".to_owned())));
}

#[test]
fn theme_labels_describe_the_next_state() {
    assert_eq!(Theme::Light.toggle_label(), "Switch to dark mode");
    assert_eq!(Theme::Dark.toggle_label(), "Switch to light mode");
    assert_eq!(Theme::Light.ai_icon(), "images/skills/Ai-light.svg");
    assert_eq!(Theme::Dark.ai_icon(), "images/skills/Ai-dark.svg");
}

// =============================================================
// Language
// =============================================================

#[test]
fn language_round_trips_through_codes() {
    for lang in Language::ALL {
        assert_eq!(lang.as_str().parse::<Language>(), Ok(lang));
    }
    assert!("de".parse::<Language>().is_err());
    assert_eq!(Language::default(), Language::En);
}

// =============================================================
// Preferences
// =============================================================

#[test]
fn load_uses_defaults_when_store_is_empty() {
    let store = MemoryStore::new();
    let day = Preferences::load(&store, 12);
    assert_eq!(day, Preferences { theme: Theme::Light, language: Language::En });

    let night = Preferences::load(&store, 23);
    assert_eq!(night.theme, Theme::Dark);
}

#[test]
fn load_prefers_stored_values() {
    let store = MemoryStore::new()
        .with(THEME_KEY, "dark")
        .with(LANGUAGE_KEY, "fr");
    let prefs = Preferences::load(&store, 12);
    assert_eq!(prefs, Preferences { theme: Theme::Dark, language: Language::Fr });
}

#[test]
fn load_falls_back_on_malformed_values() {
    let store = MemoryStore::new()
        .with(THEME_KEY, "sepia")
        .with(LANGUAGE_KEY, "klingon");
    let prefs = Preferences::load(&store, 3);
    assert_eq!(prefs, Preferences { theme: Theme::Dark, language: Language::En });
}

#[test]
fn changes_are_written_back() {
    let mut store = MemoryStore::new();
    let mut prefs = Preferences::load(&store, 12);

    assert_eq!(prefs.toggle_theme(&mut store), Theme::Dark);
    prefs.set_language(&mut store, Language::Ro);

    assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("ro"));
    assert_eq!(Preferences::load(&store, 12), prefs);
}

#[test]
fn serde_wire_names_match_stored_strings() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    assert_eq!(serde_json::from_str::<Language>("\"ro\"").unwrap(), Language::Ro);
    for lang in Language::ALL {
        let wire = serde_json::to_string(&lang).unwrap();
        assert_eq!(wire, format!("\"{}\"", lang.as_str()));
    }
}
