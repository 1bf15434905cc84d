use kwparse::{ArgSpec, ParseOptions, Parser};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let mut p = Parser::new();
    p.add_positional(ArgSpec::new("who to greet"));
    p.add_keyed("-e", ArgSpec::new("emoji").required(false).default("false")).unwrap();
    p.add_keyed("--times", ArgSpec::new("repetitions").required(false).default("1")).unwrap();

    // Prints the help text and exits with status 1 on bad input.
    if let Err(err) = p.parse_env(ParseOptions::default()) {
        err.exit()
    }

    let name = p.get(0).unwrap_or_default();
    let bang = if p.value_key::<bool>("e").unwrap_or(false) { "❣️" } else { "!" };
    for _ in 0..p.value_key::<u32>("times").unwrap_or(1) {
        println!("Hello {name}{bang}");
    }
}
