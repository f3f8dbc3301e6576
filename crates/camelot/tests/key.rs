use camelot::{Key, KeyParseError, KeySet, Mode, Position, long_name, notation};

#[test]
fn all_keys_in_domain_order() {
    let names: Vec<String> = Key::all().map(|k| k.to_string()).collect();
    assert_eq!(names.len(), 24);
    assert_eq!(&names[..3], ["1A", "2A", "3A"]);
    assert_eq!(names[11], "12A");
    assert_eq!(names[12], "1B");
    assert_eq!(names[23], "12B");

    assert!(Key::MINOR.iter().all(|k| k.is_minor() && !k.is_major()));
    assert!(Key::MAJOR.iter().all(|k| k.is_major() && !k.is_minor()));
    assert_eq!(&Key::ALL[..12], &Key::MINOR);
    assert_eq!(&Key::ALL[12..], &Key::MAJOR);
}

#[test]
fn parse_canonical_and_loose_forms() {
    let k: Key = "8A".parse().unwrap();
    assert_eq!(k, Key::new(Position::Eight, Mode::Minor));
    assert_eq!("10b".parse::<Key>().unwrap(), Key::new(Position::Ten, Mode::Major));
    assert_eq!(" 12B ".parse::<Key>().unwrap(), Key::new(Position::Twelve, Mode::Major));
    assert_eq!("c major".parse::<Key>().unwrap().to_string(), "8B");
    assert_eq!("F-Sharp Minor".parse::<Key>().unwrap().to_string(), "11A");
}

#[test]
fn display_round_trips_for_every_key() {
    for k in Key::all() {
        assert_eq!(k.to_string().parse::<Key>().unwrap(), k);
    }
}

#[test]
fn parse_rejects_keys_outside_the_wheel() {
    assert_eq!("".parse::<Key>(), Err(KeyParseError::Empty));
    assert_eq!(
        "13A".parse::<Key>(),
        Err(KeyParseError::InvalidPosition("13".to_string()))
    );
    assert_eq!(
        "0B".parse::<Key>(),
        Err(KeyParseError::InvalidPosition("0".to_string()))
    );
    assert_eq!("8C".parse::<Key>(), Err(KeyParseError::InvalidMode('C')));
    assert!(matches!("A".parse::<Key>(), Err(KeyParseError::Unknown(_))));
    assert!(matches!("H Minor".parse::<Key>(), Err(KeyParseError::Unknown(_))));
}

#[test]
fn parse_error_messages() {
    let err = "13A".parse::<Key>().unwrap_err();
    assert_eq!(err.to_string(), "invalid key position \"13\" (expected 1-12)");
}

#[test]
fn notation_short_is_identifier() {
    for k in Key::all() {
        let n = notation(k);
        assert_eq!(n.short, k.to_string());
        assert_eq!(n.long, long_name(k));
    }
    assert_eq!("8A".parse::<Key>().unwrap().long_name(), "A Minor");
    assert_eq!("8B".parse::<Key>().unwrap().long_name(), "C Major");
    assert_eq!("1A".parse::<Key>().unwrap().long_name(), "A-Flat Minor");
    assert_eq!("12B".parse::<Key>().unwrap().long_name(), "E Major");
}

#[test]
fn long_names_are_unique() {
    let mut names: Vec<&str> = Key::all().map(long_name).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 24);
}

#[test]
fn key_set_collapses_duplicates() {
    let a: Key = "8A".parse().unwrap();
    let b: Key = "3B".parse().unwrap();
    let set: KeySet = [b, a, a, b].into_iter().collect();
    assert_eq!(set.len(), 2);
    assert!(set.contains(a));
    assert!(set.contains(b));
    assert!(!set.contains("8B".parse().unwrap()));
    // Iteration follows domain order, not insertion order.
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![a, b]);
    assert!(KeySet::new().is_empty());
}
