use super::*;

fn typewriter(words: &[&str]) -> Typewriter {
    Typewriter::new(words.iter().map(ToString::to_string).collect(), TypewriterTiming::default()).unwrap()
}

#[test]
fn types_one_character_per_step() {
    let mut tw = typewriter(&["Rust"]);
    assert_eq!(tw.text(), "");
    assert_eq!(tw.step(), 300);
    assert_eq!(tw.text(), "R");
    assert_eq!(tw.phase(), TypewriterPhase::Typing);
    tw.step();
    tw.step();
    assert_eq!(tw.text(), "Rus");
}

#[test]
fn full_word_waits_then_deletes_at_double_speed() {
    let mut tw = typewriter(&["ab", "cd"]);
    tw.step();
    assert_eq!(tw.step(), 3000);
    assert_eq!(tw.phase(), TypewriterPhase::PausingFull);
    assert_eq!(tw.text(), "ab");

    assert_eq!(tw.step(), 150);
    assert_eq!(tw.text(), "a");
    assert_eq!(tw.phase(), TypewriterPhase::Deleting);

    assert_eq!(tw.step(), 2000);
    assert_eq!(tw.phase(), TypewriterPhase::PausingEmpty);
    assert_eq!(tw.word_index(), 1);
    assert_eq!(tw.text(), "");

    assert_eq!(tw.step(), 300);
    assert_eq!(tw.text(), "c");
}

#[test]
fn word_index_wraps_around() {
    let mut tw = typewriter(&["x", "y"]);
    // "x": type, delete; "y": type, delete.
    for _ in 0..4 {
        tw.step();
    }
    assert_eq!(tw.word_index(), 0);
}

#[test]
fn counts_characters_not_bytes() {
    let mut tw = typewriter(&["Designér"]);
    for _ in 0..8 {
        tw.step();
    }
    assert_eq!(tw.text(), "Designér");
    assert_eq!(tw.phase(), TypewriterPhase::PausingFull);
}

#[test]
fn from_attrs_reads_words_and_wait() {
    let tw = Typewriter::from_attrs(r#"["Developer", "Designer"]"#, Some("2500")).unwrap();
    assert_eq!(tw.timing().wait_ms, 2500);

    let tw = Typewriter::from_attrs(r#"["Developer"]"#, Some("soon")).unwrap();
    assert_eq!(tw.timing().wait_ms, 3000);
    let tw = Typewriter::from_attrs(r#"["Developer"]"#, None).unwrap();
    assert_eq!(tw.timing().wait_ms, 3000);
}

#[test]
fn malformed_or_empty_word_lists_are_rejected() {
    assert!(matches!(Typewriter::from_attrs("not json", None), Err(TypewriterError::Malformed(_))));
    assert!(matches!(Typewriter::from_attrs(r#"{"a": 1}"#, None), Err(TypewriterError::Malformed(_))));
    assert!(matches!(Typewriter::from_attrs("[]", None), Err(TypewriterError::Empty)));
}
