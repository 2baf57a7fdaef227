use std::path::Path;

use org_astgen::{GenConfig, WriteOutcome};

// The same list `SyntaxKind` is built from, as strings.
macro_rules! syntax_kinds {
    ($($kind:ident),* $(,)?) => {
        const KINDS: &[&str] = &[$(stringify!($kind),)*];
    };
}

include!("src/syntax/kinds.in");

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/syntax/kinds.in");
    println!("cargo:rerun-if-changed=astgen.toml");

    let config = match GenConfig::from_file(Path::new("astgen.toml")) {
        Ok(config) => config,
        Err(err) => panic!("failed to load astgen.toml:\n{}", err),
    };

    let out_dir = std::env::var("OUT_DIR").expect("OUT_DIR is always set during builds");
    let path = Path::new(&out_dir).join("ast_generated.rs");

    let schema = org_astgen::org::schema().with_known_kinds(KINDS.iter().copied());
    match org_astgen::write_artifact(&path, &schema, &config) {
        Ok(WriteOutcome::Written) | Ok(WriteOutcome::Unchanged) => {}
        Err(err) => panic!("failed to generate the typed AST:\n{}", err),
    }
}
