use kwparse::{ArgSpec, Parser};

#[test]
fn sections() {
    let mut p = Parser::new();
    p.add_positional(ArgSpec::new("input file"));
    p.add_positional(ArgSpec::new("output file").required(false).default("out.txt"));
    p.add_keyed("--name", ArgSpec::new("who to greet").default("anon")).unwrap();
    p.add_keyed("-v", ArgSpec::new("verbosity")).unwrap();

    assert_eq!(
        p.help(),
        "Ordered Arguments List : \n\
         \tinput file default : \n\
         \toutput file default : out.txt\n\
         Keyword Arguments List : \n\
         \t--name\t\t : who to greet default : anon\n\
         \t-v\t\t : verbosity default : \n"
    );
}

#[test]
fn empty() {
    assert_eq!(Parser::new().help(), "Ordered Arguments List : \nKeyword Arguments List : \n");
}

#[test]
fn write_help() {
    let mut p = Parser::new();
    p.add_keyed("-q", "quiet").unwrap();
    let mut buf = Vec::new();
    p.write_help(&mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), p.help());
}
