//! Build script for chowtime-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates feeder.toml at compile time and bakes it into the binary
//! - Records the build time used to seed the RTC

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use chowtime_core::config::FeederConfig;

/// Override for the RTC seed, in seconds since the Unix epoch
const EPOCH_OVERRIDE_VAR: &str = "CHOWTIME_EPOCH";

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));

    setup_linker(&out_dir);
    let config = validate_config();
    write_generated(&out_dir, &config);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).expect("create memory.x");
    f.write_all(memory_x).expect("write memory.x");

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

/// Validate feeder.toml configuration at compile time
fn validate_config() -> FeederConfig {
    // Re-run if feeder.toml changes
    println!("cargo:rerun-if-changed=feeder.toml");

    let config_path = Path::new("feeder.toml");

    // A missing file means defaults
    if !config_path.exists() {
        println!("cargo:warning=feeder.toml not found, using default configuration");
        return FeederConfig::DEFAULT;
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read feeder.toml", &e.to_string()),
    };

    let config: FeederConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => fail("Invalid feeder.toml", &e.to_string()),
    };

    if let Err(e) = config.validate() {
        fail("Invalid value in feeder.toml", e.message());
    }

    println!("cargo:warning=feeder.toml validated successfully");
    config
}

/// Abort the build with a boxed error message
fn fail(title: &str, detail: &str) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        format_error_lines(detail)
    );
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

/// Seconds since the Unix epoch to seed the RTC with
fn build_epoch() -> i64 {
    println!("cargo:rerun-if-env-changed={}", EPOCH_OVERRIDE_VAR);

    if let Ok(value) = env::var(EPOCH_OVERRIDE_VAR) {
        match value.trim().parse() {
            Ok(secs) => return secs,
            Err(_) => fail(
                "Invalid CHOWTIME_EPOCH",
                "expected whole seconds since 1970-01-01T00:00:00Z",
            ),
        }
    }

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Write the validated configuration as Rust constants
fn write_generated(out_dir: &Path, config: &FeederConfig) {
    let t = &config.timing;
    let d = &config.dispense;

    let source = format!(
        "// Generated by build.rs from feeder.toml\n\
         \n\
         pub const FEEDER_CONFIG: FeederConfig = FeederConfig {{\n\
         \x20   timing: TimingConfig {{\n\
         \x20       debounce_ms: {},\n\
         \x20       poll_ms: {},\n\
         \x20       hold_sample_ms: {},\n\
         \x20       hold_threshold: {},\n\
         \x20       confirm_settle_ms: {},\n\
         \x20       review_ms: {},\n\
         \x20       armed_poll_ms: {},\n\
         \x20   }},\n\
         \x20   dispense: DispenseConfig {{\n\
         \x20       open_angle: {},\n\
         \x20       closed_angle: {},\n\
         \x20       open_ms: {},\n\
         \x20       closed_ms: {},\n\
         \x20       tone_hz: {},\n\
         \x20       tone_ms: {},\n\
         \x20   }},\n\
         \x20   clock: ClockConfig {{\n\
         \x20       utc_offset_minutes: {},\n\
         \x20   }},\n\
         }};\n\
         \n\
         /// Local time offset from UTC in minutes\n\
         pub const UTC_OFFSET_MINUTES: i16 = {};\n\
         \n\
         /// Build time, seconds since the Unix epoch (UTC)\n\
         pub const BUILD_UNIX_SECS: i64 = {};\n",
        t.debounce_ms,
        t.poll_ms,
        t.hold_sample_ms,
        t.hold_threshold,
        t.confirm_settle_ms,
        t.review_ms,
        t.armed_poll_ms,
        d.open_angle,
        d.closed_angle,
        d.open_ms,
        d.closed_ms,
        d.tone_hz,
        d.tone_ms,
        config.clock.utc_offset_minutes,
        config.clock.utc_offset_minutes,
        build_epoch(),
    );

    fs::write(out_dir.join("feeder_config.rs"), source).expect("write feeder_config.rs");
}
