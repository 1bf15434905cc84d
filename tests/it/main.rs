mod help;
mod registration;

use std::fmt::Write;

use expect_test::Expect;
use kwparse::Parser;

fn check(mut parser: Parser, args: &str, expect: Expect) {
    let args = args.split_ascii_whitespace().collect::<Vec<_>>();
    match parser.try_parse(args) {
        Ok(()) => expect.assert_eq(&dump(&parser)),
        Err(err) => expect.assert_eq(&err.to_string()),
    }
}

/// Every stored value, positionals first.
fn dump(parser: &Parser) -> String {
    let mut buf = String::new();
    for pos in 0..parser.registry().positional_count() {
        writeln!(buf, "{pos}: {:?}", parser.get(pos).unwrap()).unwrap();
    }
    for (name, _) in parser.registry().keyed_specs() {
        writeln!(buf, "{name}: {:?}", parser.get_key(name).unwrap()).unwrap();
    }
    buf
}
