//! Build script for nextion-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates display.toml at compile time
//! - Generates the link constants the firmware compiles in

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    let config = validate_config();
    generate_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Values read from display.toml
struct DisplayConfig {
    baudrate: u32,
    poll_interval_ms: u32,
    rx_buffer_len: usize,
    home_page: String,
    status_text: String,
    progress: String,
}

/// Validate display.toml configuration at compile time
fn validate_config() -> DisplayConfig {
    // Re-run if display.toml changes
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");

    // Check if config file exists
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: display.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a display.toml configuration file.        ║\n\
            ║  Please create one in the nextion-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    // Read the config file
    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read display.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in display.toml                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();

    let baudrate = read_integer(&config, "uart", "baudrate", 9600, &mut errors);
    let supported = u32::try_from(baudrate).is_ok_and(nextion_hal::uart::is_supported_baudrate);
    if !supported {
        errors.push(format!(
            "[uart] baudrate {} is not supported by the display",
            baudrate
        ));
    }

    let poll_interval_ms = read_integer(&config, "link", "poll_interval_ms", 50, &mut errors);
    if !(1..=10_000).contains(&poll_interval_ms) {
        errors.push("[link] poll_interval_ms must be 1-10000".to_string());
    }

    let rx_buffer_len = read_integer(&config, "link", "rx_buffer_len", 64, &mut errors);
    if !(1..=1024).contains(&rx_buffer_len) {
        errors.push("[link] rx_buffer_len must be 1-1024".to_string());
    }

    let home_page = read_string(&config, "widgets", "home_page", "0", &mut errors);
    let status_text = read_string(&config, "widgets", "status_text", "t0", &mut errors);
    let progress = read_string(&config, "widgets", "progress", "j0", &mut errors);

    for (key, name) in [("status_text", &status_text), ("progress", &progress)] {
        if name.is_empty() || name.contains(char::is_whitespace) || name.contains('"') {
            errors.push(format!("[widgets] {} must be a widget name", key));
        }
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid display.toml                                     ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=display.toml validated successfully");

    DisplayConfig {
        baudrate: baudrate as u32,
        poll_interval_ms: poll_interval_ms as u32,
        rx_buffer_len: rx_buffer_len as usize,
        home_page,
        status_text,
        progress,
    }
}

/// Read `[section] key` as an integer, falling back to `default` if absent
fn read_integer(
    config: &toml::Value,
    section: &str,
    key: &str,
    default: i64,
    errors: &mut Vec<String>,
) -> i64 {
    match config.get(section).and_then(|s| s.get(key)) {
        None => default,
        Some(toml::Value::Integer(value)) => *value,
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            default
        }
    }
}

/// Read `[section] key` as a string, falling back to `default` if absent
fn read_string(
    config: &toml::Value,
    section: &str,
    key: &str,
    default: &str,
    errors: &mut Vec<String>,
) -> String {
    match config.get(section).and_then(|s| s.get(key)) {
        None => default.to_string(),
        Some(toml::Value::String(value)) => value.clone(),
        Some(_) => {
            errors.push(format!("[{}] {} must be a string", section, key));
            default.to_string()
        }
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the validated values as Rust constants into OUT_DIR
fn generate_config(config: &DisplayConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("display_config.rs")).unwrap();

    writeln!(f, "pub const BAUDRATE: u32 = {};", config.baudrate).unwrap();
    writeln!(f, "pub const POLL_INTERVAL_MS: u32 = {};", config.poll_interval_ms).unwrap();
    writeln!(f, "pub const RX_BUFFER_LEN: usize = {};", config.rx_buffer_len).unwrap();
    writeln!(f, "pub const HOME_PAGE: &str = {:?};", config.home_page).unwrap();
    writeln!(f, "pub const STATUS_TEXT: &str = {:?};", config.status_text).unwrap();
    writeln!(f, "pub const PROGRESS: &str = {:?};", config.progress).unwrap();
}
