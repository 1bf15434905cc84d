#[cfg(test)]
mod tidy;

use std::time::Instant;

use xshell::{cmd, Shell};

fn main() -> xshell::Result<()> {
    let sh = Shell::new()?;

    cmd!(sh, "rustup toolchain install stable --no-self-update").run()?;
    let _e = sh.push_env("RUSTUP_TOOLCHAIN", "stable");
    cmd!(sh, "rustc --version").run()?;

    {
        let _s = section("BUILD");
        cmd!(sh, "cargo test --workspace --no-run").run()?;
        cmd!(sh, "cargo build --example hello").run()?;
    }

    {
        let _s = section("TEST");
        cmd!(sh, "cargo test --workspace -- --nocapture").run()?;
    }

    {
        let _s = section("DEMO");
        let greeting = cmd!(sh, "cargo run -q --example hello -- world --times 2").read()?;
        assert_eq!(greeting, "Hello world!\nHello world!");

        let help = cmd!(sh, "cargo run -q --example hello -- -h").ignore_status().output()?;
        assert_eq!(help.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&help.stderr).contains("Keyword Arguments List"));

        let bad =
            cmd!(sh, "cargo run -q --example hello -- --bogus x").ignore_status().output()?;
        assert_eq!(bad.status.code(), Some(1));
        let stderr = String::from_utf8_lossy(&bad.stderr);
        let (first, rest) = stderr.split_once('\n').unwrap_or((&stderr, ""));
        assert_eq!(first, "The following key '--bogus' does not exist in the parser");
        assert!(rest.starts_with("Ordered Arguments List : \n"));
    }

    {
        let _s = section("PUBLISH");

        let version = cmd!(sh, "cargo pkgid -p kwparse").read()?;
        let version = version.rsplit_once(['#', '@']).map_or("", |it| it.1).to_string();
        let tag = format!("v{version}");

        let current_branch = cmd!(sh, "git branch --show-current").read()?;
        let tag_exists =
            cmd!(sh, "git tag --list").read()?.split_ascii_whitespace().any(|it| it == tag);

        if current_branch == "master" && !tag_exists && !version.is_empty() {
            cmd!(sh, "git tag {tag}").run()?;
            cmd!(sh, "cargo publish -p kwparse").run()?;
            cmd!(sh, "git push --tags").run()?;
        } else {
            cmd!(sh, "cargo publish -p kwparse --dry-run").run()?;
        }
    }

    Ok(())
}

fn section(name: &'static str) -> impl Drop {
    println!("::group::{name}");
    let start = Instant::now();
    defer(move || {
        let elapsed = start.elapsed();
        eprintln!("{name}: {elapsed:.2?}");
        println!("::endgroup::");
    })
}

fn defer<F: FnOnce()>(f: F) -> impl Drop {
    struct D<F: FnOnce()>(Option<F>);
    impl<F: FnOnce()> Drop for D<F> {
        fn drop(&mut self) {
            if let Some(f) = self.0.take() {
                f()
            }
        }
    }
    D(Some(f))
}
