//! Help and version output.

use crate::prelude::*;

#[test]
fn help_lists_rotation_flags() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Pipe lines into a size-rotating log file")
        .stdout_has("--max-bytes")
        .stdout_has("--max-files")
        .stdout_has("--mirror");
}

#[test]
fn version_prints_package_version() {
    cli()
        .args(&["--version"])
        .passes()
        .stdout_eq(&format!("rotlog {}\n", env!("CARGO_PKG_VERSION")));
}
