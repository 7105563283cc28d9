use std::env;
use std::fs;
use std::path::Path;

const FALLBACK_PROFILES: &str = r#"{"floaterId":"0000000","dates":[],"profiles":{}}"#;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("profiles.json");

    // Re-serialize the fixture compactly so the embedded copy carries no
    // indentation. A fixture that does not parse falls back to an empty catalog.
    let src = Path::new("../fixtures/profiles.json");
    let compact = fs::read_to_string(src)
        .ok()
        .and_then(|body| serde_json::from_str::<serde_json::Value>(&body).ok())
        .map(|value| value.to_string());
    match compact {
        Some(body) => fs::write(&dest, body).unwrap(),
        None => {
            println!("cargo:warning=fixtures/profiles.json missing or invalid, embedding an empty catalog");
            fs::write(&dest, FALLBACK_PROFILES).unwrap();
        }
    }

    println!("cargo:rerun-if-changed=../fixtures/profiles.json");
}
