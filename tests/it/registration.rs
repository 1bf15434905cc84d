use kwparse::{ArgSpec, Error, Parser};

#[test]
fn keys() {
    let mut p = Parser::new();
    p.add_keyed("-a", "Some help text").unwrap();
    p.add_keyed("--name", "Another help text").unwrap();
    assert!(p.key_exists("a"));
    assert!(p.key_exists("name"));
    assert!(!p.key_exists("--name"));

    p.try_parse(["-a", "yay", "--name", "nay"]).unwrap();
    assert_eq!(p.get_key("a").unwrap(), "yay");
    assert_eq!(p.get_key("name").unwrap(), "nay");
}

#[test]
fn invalid_keys() {
    let mut p = Parser::new();
    p.add_keyed("-a", "Some help text").unwrap();
    let rejected =
        ["-ne", "-a", "--a", "-h", "--help", "--h", "---x", "--dry-run", "name", "-", "--", ""];
    for key in rejected {
        assert_eq!(
            p.add_keyed(key, "Another help text"),
            Err(Error::InvalidKey { key: key.to_string() }),
            "{key:?}"
        );
    }
    assert_eq!(
        p.add_keyed("-ne", "").unwrap_err().to_string(),
        "The following key '-ne' is invalid"
    );
    assert_eq!(p.registry().keyed_count(), 1);
}

#[test]
fn positionals_have_no_names() {
    let mut p = Parser::new();
    assert_eq!(p.add_positional("same"), 0);
    assert_eq!(p.add_positional("same"), 1);
    assert!(p.position_exists(1));
    assert!(!p.position_exists(2));
}

#[test]
fn spec_builder() {
    let spec = ArgSpec::new("jobs");
    assert!(spec.is_required());
    assert!(!spec.is_multi());
    assert_eq!(spec.default_value(), "");

    let spec = ArgSpec::new("jobs").required(false).multi(true).default("4");
    assert!(!spec.is_required());
    assert!(spec.is_multi());
    assert_eq!(spec.default_value(), "4");
    assert_eq!(spec.help(), "jobs");
    assert!(!spec.is_satisfied());
}
