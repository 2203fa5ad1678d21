//! Build script for the site crate.
//!
//! Computes a content hash for the stylesheet so it can be served under an
//! immutable cache-busted filename. The hash is exposed to the crate as the
//! `CSS_HASH` env var and baked into the filename of a copy under
//! `static/css/derived/`.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

fn main() {
    hash_css();
}

fn hash_css() {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("Cargo always sets CARGO_MANIFEST_DIR");
    let css_path = Path::new(&manifest_dir).join("static/css/site.css");

    println!("cargo:rerun-if-changed={}", css_path.display());

    let content = match fs::read(&css_path) {
        Ok(content) => content,
        Err(e) => {
            // The stylesheet may be missing on a fresh checkout
            println!("cargo:warning=Could not read site.css: {e}");
            println!("cargo:rustc-env=CSS_HASH=");
            return;
        }
    };

    let mut hasher = Sha256::new();
    hasher.update(&content);
    let hash = format!("{:x}", hasher.finalize());
    // Eight hex chars is plenty for cache busting
    let short_hash = hash.get(..8).unwrap_or_default();

    println!("cargo:rustc-env=CSS_HASH={short_hash}");

    let derived_dir = Path::new(&manifest_dir).join("static/css/derived");
    fs::create_dir_all(&derived_dir).expect("Could not create static/css/derived");

    let derived_path = derived_dir.join(format!("site.{short_hash}.css"));
    fs::copy(&css_path, &derived_path).expect("Could not copy the hashed stylesheet");
}
