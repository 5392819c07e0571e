//! Build script for lapse-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates stopwatch.toml at compile time
//! - Generates the `StopwatchConfig` constant from stopwatch.toml

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Must match `lapse_core::config::MAX_PINS`
const MAX_PINS: i64 = 30;

/// Must match `lapse_core::config::MAX_DIGIT_HOLD_US`
const MAX_DIGIT_HOLD_US: i64 = 3_000;

fn main() {
    setup_linker();
    let config = load_config();
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

/// Parsed stopwatch.toml, reduced to the values the firmware needs
struct Config {
    debounce_ms: i64,
    reset: Pin,
    start_stop: Pin,
    segment_pins: Vec<i64>,
    decimal_point_pin: Option<i64>,
    digit_pins: Vec<i64>,
    segments_active_low: bool,
    digits_active_low: bool,
    digit_hold_us: i64,
}

struct Pin {
    pin: i64,
    inverted: bool,
    pull_up: bool,
}

/// Read and validate stopwatch.toml
fn load_config() -> Config {
    println!("cargo:rerun-if-changed=stopwatch.toml");

    let config_path = Path::new("stopwatch.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: stopwatch.toml not found!                                ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a stopwatch.toml board configuration.     ║\n\
            ║  Please create one in the lapse-firmware directory.              ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read stopwatch.toml                            ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let value: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in stopwatch.toml                    ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    let config = extract(&value, &mut errors);

    if errors.is_empty() {
        validate(&config, &mut errors);
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid stopwatch.toml                                   ║\n\
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

    println!("cargo:warning=stopwatch.toml validated successfully");
    config
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| format!("║  {:<64} ║", truncate_line(line, 64)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Shorten `line` to at most `width` chars, marking the cut with "..."
fn truncate_line(line: &str, width: usize) -> String {
    // Error text may quote non-ASCII input, so cut on chars
    if line.chars().count() > width {
        format!("{}...", line.chars().take(width - 3).collect::<String>())
    } else {
        line.to_string()
    }
}

fn table<'a>(value: &'a toml::Value, key: &str, errors: &mut Vec<String>) -> Option<&'a toml::Table> {
    match value.get(key) {
        Some(toml::Value::Table(t)) => Some(t),
        Some(_) => {
            errors.push(format!("[{}] must be a table", key));
            None
        }
        None => {
            errors.push(format!("Missing [{}] section", key));
            None
        }
    }
}

fn int(t: &toml::Table, section: &str, key: &str, errors: &mut Vec<String>) -> i64 {
    match t.get(key) {
        Some(toml::Value::Integer(i)) => *i,
        Some(_) => {
            errors.push(format!("[{}] '{}' must be an integer", section, key));
            0
        }
        None => {
            errors.push(format!("[{}] missing '{}'", section, key));
            0
        }
    }
}

fn flag(t: &toml::Table, section: &str, key: &str, errors: &mut Vec<String>) -> bool {
    match t.get(key) {
        Some(toml::Value::Boolean(b)) => *b,
        Some(_) => {
            errors.push(format!("[{}] '{}' must be true or false", section, key));
            false
        }
        None => false,
    }
}

fn int_array(t: &toml::Table, section: &str, key: &str, len: usize, errors: &mut Vec<String>) -> Vec<i64> {
    let items = match t.get(key) {
        Some(toml::Value::Array(items)) => items,
        _ => {
            errors.push(format!("[{}] '{}' must be an array", section, key));
            return vec![0; len];
        }
    };

    if items.len() != len {
        errors.push(format!("[{}] '{}' needs exactly {} pins", section, key, len));
        return vec![0; len];
    }

    items
        .iter()
        .map(|item| match item {
            toml::Value::Integer(i) => *i,
            _ => {
                errors.push(format!("[{}] '{}' entries must be integers", section, key));
                0
            }
        })
        .collect()
}

fn pin(input: &toml::Table, name: &str, errors: &mut Vec<String>) -> Pin {
    let section = format!("input.{}", name);
    match input.get(name) {
        Some(toml::Value::Table(t)) => Pin {
            pin: int(t, &section, "pin", errors),
            inverted: flag(t, &section, "inverted", errors),
            pull_up: flag(t, &section, "pull_up", errors),
        },
        _ => {
            errors.push(format!("Missing [{}] section", section));
            Pin {
                pin: 0,
                inverted: false,
                pull_up: false,
            }
        }
    }
}

fn extract(value: &toml::Value, errors: &mut Vec<String>) -> Config {
    let empty = toml::Table::new();
    let input = table(value, "input", errors).unwrap_or(&empty);
    let display = table(value, "display", errors).unwrap_or(&empty);

    let decimal_point_pin = match display.get("decimal_point_pin") {
        Some(toml::Value::Integer(i)) => Some(*i),
        Some(_) => {
            errors.push("[display] 'decimal_point_pin' must be an integer".to_string());
            None
        }
        None => None,
    };

    Config {
        debounce_ms: int(input, "input", "debounce_ms", errors),
        reset: pin(input, "reset", errors),
        start_stop: pin(input, "start_stop", errors),
        segment_pins: int_array(display, "display", "segment_pins", 7, errors),
        decimal_point_pin,
        digit_pins: int_array(display, "display", "digit_pins", 4, errors),
        segments_active_low: flag(display, "display", "segments_active_low", errors),
        digits_active_low: flag(display, "display", "digits_active_low", errors),
        digit_hold_us: int(display, "display", "digit_hold_us", errors),
    }
}

/// Same rules as `StopwatchConfig::validate`, reported all at once
fn validate(config: &Config, errors: &mut Vec<String>) {
    if config.debounce_ms <= 0 || config.debounce_ms > u32::MAX as i64 {
        errors.push("[input] debounce_ms must be positive".to_string());
    }

    if config.digit_hold_us <= 0 || config.digit_hold_us > MAX_DIGIT_HOLD_US {
        errors.push(format!(
            "[display] digit_hold_us must be 1-{}",
            MAX_DIGIT_HOLD_US
        ));
    }

    let mut pins = vec![config.reset.pin, config.start_stop.pin];
    pins.extend(&config.segment_pins);
    pins.extend(config.decimal_point_pin);
    pins.extend(&config.digit_pins);

    for (i, pin) in pins.iter().enumerate() {
        if *pin < 0 || *pin >= MAX_PINS {
            errors.push(format!("GPIO {} out of range (0-{})", pin, MAX_PINS - 1));
        } else if pins[..i].contains(pin) {
            errors.push(format!("GPIO {} assigned more than once", pin));
        }
    }
}

fn pin_literal(pin: &Pin) -> String {
    format!(
        "PinConfig {{ pin: {}, inverted: {}, pull_up: {} }}",
        pin.pin, pin.inverted, pin.pull_up
    )
}

fn list(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Write `stopwatch_config.rs` into OUT_DIR for `include!`
fn generate_config(config: &Config) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let decimal_point = match config.decimal_point_pin {
        Some(pin) => format!("Some({})", pin),
        None => "None".to_string(),
    };

    let source = format!(
        "// Generated by build.rs from stopwatch.toml\n\
        pub const STOPWATCH_CONFIG: StopwatchConfig = StopwatchConfig {{\n\
        \x20   input: InputConfig {{\n\
        \x20       reset: {reset},\n\
        \x20       start_stop: {start_stop},\n\
        \x20       debounce_ms: {debounce},\n\
        \x20   }},\n\
        \x20   display: DisplayConfig {{\n\
        \x20       segment_pins: [{segments}],\n\
        \x20       decimal_point_pin: {decimal_point},\n\
        \x20       digit_pins: [{digits}],\n\
        \x20       segments_active_low: {seg_low},\n\
        \x20       digits_active_low: {dig_low},\n\
        \x20       digit_hold_us: {hold},\n\
        \x20   }},\n\
        }};\n",
        reset = pin_literal(&config.reset),
        start_stop = pin_literal(&config.start_stop),
        debounce = config.debounce_ms,
        segments = list(&config.segment_pins),
        decimal_point = decimal_point,
        digits = list(&config.digit_pins),
        seg_low = config.segments_active_low,
        dig_low = config.digits_active_low,
        hold = config.digit_hold_us,
    );

    let mut f = File::create(out_dir.join("stopwatch_config.rs")).unwrap();
    f.write_all(source.as_bytes()).unwrap();
}
