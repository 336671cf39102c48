use analyzer_core::Reveal;

#[test]
fn reveals_one_char_per_tick_until_complete() {
    let mut reveal = Reveal::new("abc");
    assert_eq!(reveal.displayed(), "");

    assert!(!reveal.tick());
    assert_eq!(reveal.displayed(), "a");
    assert!(!reveal.tick());
    assert_eq!(reveal.displayed(), "ab");
    assert!(reveal.tick());
    assert_eq!(reveal.displayed(), "abc");
    assert!(reveal.is_complete());
}

#[test]
fn displayed_is_always_a_prefix_of_source() {
    let mut reveal = Reveal::new("some longer feedback");
    while !reveal.is_complete() {
        assert!(reveal.source().starts_with(reveal.displayed()));
        reveal.tick();
    }
    assert_eq!(reveal.displayed(), reveal.source());
}

#[test]
fn ticking_a_complete_reveal_is_a_noop() {
    let mut reveal = Reveal::new("x");
    assert!(reveal.tick());
    assert!(reveal.tick());
    assert_eq!(reveal.displayed(), "x");
}

#[test]
fn source_change_restarts_from_empty() {
    let mut reveal = Reveal::new("old text");
    reveal.tick();
    reveal.tick();
    assert_eq!(reveal.displayed(), "ol");

    reveal.set_source("new");
    assert_eq!(reveal.displayed(), "");
    assert!(!reveal.is_complete());
    reveal.tick();
    assert_eq!(reveal.displayed(), "n");
}

#[test]
fn multibyte_feedback_reveals_on_char_boundaries() {
    let mut reveal = Reveal::new("a§水");
    reveal.tick();
    assert_eq!(reveal.displayed(), "a");
    reveal.tick();
    assert_eq!(reveal.displayed(), "a§");
    assert!(reveal.tick());
    assert_eq!(reveal.displayed(), "a§水");
}

#[test]
fn empty_source_is_complete_immediately() {
    let reveal = Reveal::new("");
    assert!(reveal.is_complete());
    assert_eq!(reveal.displayed(), "");
}
