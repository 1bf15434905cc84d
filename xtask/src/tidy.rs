use std::{
    fs,
    path::{Path, PathBuf},
};

fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).ancestors().nth(1).unwrap().to_path_buf()
}

#[test]
fn source_hygiene() {
    let root = project_root();
    let mut files = Vec::new();
    for dir in ["src", "tests", "demos", "xtask/src"] {
        collect_rs(&root.join(dir), &mut files);
    }
    assert!(!files.is_empty());

    for path in files {
        let text = fs::read_to_string(&path).unwrap();
        for (i, line) in text.lines().enumerate() {
            let at = format!("{}:{}", path.display(), i + 1);
            assert!(!line.ends_with([' ', '\t']), "trailing whitespace at {at}");
            assert!(!line.contains('\t'), "literal tab at {at}, use `\\t`");
            assert!(!line.contains(concat!("dbg", "!(")), "leftover debug print at {at}");
        }
    }
}

fn collect_rs(dir: &Path, acc: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else { return };
    for entry in entries {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect_rs(&path, acc);
        } else if path.extension().map_or(false, |it| it == "rs") {
            acc.push(path);
        }
    }
}
