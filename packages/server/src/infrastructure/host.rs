//! Host introspection for `/api/info` and the stream payloads.

use crate::domain::HostInfo;

/// Toolchain the crate declares (`rust-version` in Cargo.toml)
const RUNTIME_VERSION: &str = env!("CARGO_PKG_RUST_VERSION");

/// Collect hostname, OS family and runtime version of this process
pub fn detect() -> HostInfo {
    HostInfo {
        hostname: hostname(),
        platform: platform_name(std::env::consts::OS),
        runtime_version: RUNTIME_VERSION.to_string(),
    }
}

/// Hostname of this machine.
///
/// Tried in order: `HOSTNAME`, `/proc/sys/kernel/hostname`, `/etc/hostname`,
/// the `hostname` command. Falls back to `localhost`.
pub fn hostname() -> String {
    let sources: [fn() -> Option<String>; 4] = [
        || std::env::var("HOSTNAME").ok(),
        || std::fs::read_to_string("/proc/sys/kernel/hostname").ok(),
        || std::fs::read_to_string("/etc/hostname").ok(),
        hostname_command,
    ];
    first_hostname(sources.into_iter().map(|source| source()))
}

fn hostname_command() -> Option<String> {
    let output = std::process::Command::new("hostname").output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout).ok()
}

/// First candidate that is non-empty after trimming, or `localhost`
fn first_hostname(candidates: impl IntoIterator<Item = Option<String>>) -> String {
    candidates
        .into_iter()
        .flatten()
        .map(|name| name.trim().to_string())
        .find(|name| !name.is_empty())
        .unwrap_or_else(|| "localhost".to_string())
}

/// `linux` → `Linux`, `macos` → `Darwin`, `windows` → `Windows`
fn platform_name(os: &str) -> String {
    match os {
        "macos" => "Darwin".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}
