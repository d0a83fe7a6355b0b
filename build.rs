//! Bundles `assets/css/main.css` and its `@import`s into one minified sheet
//! that the layout loads through `asset!`.

use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const CSS_DIR: &str = "assets/css";
const ENTRY: &str = "assets/css/main.css";
const OUTPUT: &str = "assets/dist/bundle.css";

fn main() {
    watch_stylesheets();

    if let Err(err) = bundle(Path::new(ENTRY), Path::new(OUTPUT)) {
        panic!("storefront CSS bundling failed: {err}");
    }
}

/// Rebuild when any sheet changes, including ones only reached via `@import`
fn watch_stylesheets() {
    println!("cargo:rerun-if-changed={CSS_DIR}");
    let Ok(entries) = fs::read_dir(CSS_DIR) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.extension().is_some_and(|ext| ext == "css") {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
}

fn bundle(entry: &Path, output: &Path) -> Result<(), String> {
    let provider = FileProvider::new();
    let mut bundler = Bundler::new(&provider, None, ParserOptions::default());

    let mut sheet = bundler
        .bundle(entry)
        .map_err(|err| format!("{}: {err}", entry.display()))?;
    sheet
        .minify(MinifyOptions::default())
        .map_err(|err| format!("minify: {err}"))?;
    let css = sheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|err| format!("print: {err}"))?;

    if let Some(dir) = output.parent() {
        fs::create_dir_all(dir).map_err(|err| format!("{}: {err}", dir.display()))?;
    }
    // Skip the write when nothing changed so `dx serve` doesn't reload for nothing
    if fs::read_to_string(output).is_ok_and(|current| current == css.code) {
        return Ok(());
    }
    fs::write(output, css.code).map_err(|err| format!("{}: {err}", output.display()))
}
