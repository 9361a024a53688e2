use std::{env, error::Error, fs, path::Path};

use serde::Deserialize;

#[derive(Deserialize)]
struct RawConfig {
    board: String,
    firmware_version: u16,
    remote_endpoint: String,
    update_rate_seconds: u16,
}

fn board_variant(name: &str) -> Result<&'static str, Box<dyn Error>> {
    match name {
        "feather" => Ok("BoardProfile::Feather"),
        "rev-b" => Ok("BoardProfile::RevB"),
        other => Err(format!("cfg.toml: unknown board profile {:?}", other).into()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if toml changes
    println!("cargo:rerun-if-changed=cfg.toml");

    // Read and parse
    let toml_str = fs::read_to_string("cfg.toml")?;
    let raw: RawConfig = toml::from_str(&toml_str)?;

    // Reject what can already be caught before flashing
    let board = board_variant(&raw.board)?;
    if raw.firmware_version == 0 {
        return Err("cfg.toml: firmware_version must be greater than 0".into());
    }
    if raw.update_rate_seconds == 0 {
        return Err("cfg.toml: update_rate_seconds must be greater than 0".into());
    }
    if !(raw.remote_endpoint.starts_with("http://") || raw.remote_endpoint.starts_with("https://"))
    {
        return Err("cfg.toml: remote_endpoint must be an http:// or https:// URL".into());
    }

    // Generate Rust code
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    let code = format!(
        r#"
        pub const BUILD: BuildConfig = BuildConfig {{
            board: {board},
            firmware_version: {fw},
            remote_endpoint: {ep:?},
            update_rate_seconds: {rate},
        }};
    "#,
        board = board,
        fw = raw.firmware_version,
        ep = raw.remote_endpoint,
        rate = raw.update_rate_seconds,
    );

    fs::write(dest_path, code)?;
    Ok(())
}
