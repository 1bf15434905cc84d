use std::fmt::Write;

use crate::registry::Registry;

pub(crate) fn render(registry: &Registry) -> String {
    let mut buf = String::new();
    // Writing into a `String` does not fail.
    let _ = write_sections(registry, &mut buf);
    buf
}

fn write_sections(registry: &Registry, buf: &mut String) -> std::fmt::Result {
    writeln!(buf, "Ordered Arguments List : ")?;
    for spec in registry.positionals() {
        writeln!(buf, "\t{} default : {}", spec.help(), spec.default_value())?;
    }
    writeln!(buf, "Keyword Arguments List : ")?;
    for (name, spec) in registry.keyed_specs() {
        let dashes = if name.chars().count() == 1 { "-" } else { "--" };
        writeln!(buf, "\t{dashes}{name}\t\t : {} default : {}", spec.help(), spec.default_value())?;
    }
    Ok(())
}
