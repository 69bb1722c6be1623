#![allow(dead_code)]

use std::env::consts::{DLL_PREFIX, DLL_SUFFIX};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::OnceLock;

pub fn invoker(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_invoker"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn invoker")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Builds `Dll_Module` into its own target directory, once per test binary,
/// and returns the path of the resulting dynamic library.
pub fn message_box_module() -> &'static Path {
    static MODULE: OnceLock<PathBuf> = OnceLock::new();

    MODULE.get_or_init(|| {
        let target_dir = Path::new(env!("CARGO_TARGET_TMPDIR")).join("message-box-module");
        let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("../Dll_Module/Cargo.toml");

        let output = Command::new(env!("CARGO"))
            .arg("build")
            .arg("--manifest-path")
            .arg(&manifest)
            .arg("--target-dir")
            .arg(&target_dir)
            .output()
            .expect("failed to spawn cargo");
        assert!(
            output.status.success(),
            "building message-box-module failed:\n{}",
            stderr(&output)
        );

        let module = target_dir
            .join("debug")
            .join(format!("{}message_box_module{}", DLL_PREFIX, DLL_SUFFIX));
        assert!(module.is_file(), "{} was not built", module.display());
        module
    })
}
