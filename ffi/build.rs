use std::env;
use std::fs::File;
use std::path::PathBuf;

fn main() {
    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());

    println!("cargo:rerun-if-changed=src/lib.rs");
    println!("cargo:rerun-if-changed=src/types.rs");

    let Some(out_dir) = env::var_os("OUT_DIR") else {
        println!("cargo:warning=cbindgen skipped: OUT_DIR not set");
        return;
    };
    let out = PathBuf::from(out_dir).join("notas.h");

    // Best effort: a missing header never fails the library build.
    let bindings = match cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("NOTAS_H")
        .with_parse_deps(false)
        .generate()
    {
        Ok(bindings) => bindings,
        Err(err) => {
            println!("cargo:warning=cbindgen skipped: {err}");
            return;
        }
    };
    match File::create(&out) {
        Ok(file) => bindings.write(file),
        Err(err) => println!("cargo:warning=cannot write {}: {err}", out.display()),
    }
}
