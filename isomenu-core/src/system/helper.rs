//! Various helper functions for other modules.

/// The length of a hex encoded SHA-256 digest.
const SHA256_HEX_LEN: usize = 64;

/// Tests if a checksum is a valid hex encoded SHA-256 digest.
///
/// Returns true if the character count is exactly 64 characters in length, and every character is a hex
/// digit. Otherwise, will return false.
#[must_use = "Has no effect if the result is unused"]
pub(crate) fn is_sha256_hex(checksum: &str) -> bool {
    checksum.len() == SHA256_HEX_LEN && checksum.chars().all(|x| x.is_ascii_hexdigit())
}

/// Gets the feed architecture name matching the target architecture of the binary.
///
/// These are the Debian style names used by Ubuntu's image streams, not the Rust target names.
#[must_use = "Has no effect if the result is unused"]
pub fn default_arch() -> Option<&'static str> {
    if cfg!(target_arch = "x86_64") {
        Some("amd64")
    } else if cfg!(target_arch = "aarch64") {
        Some("arm64")
    } else if cfg!(target_arch = "x86") {
        Some("i386")
    } else if cfg!(target_arch = "arm") {
        Some("armhf")
    } else if cfg!(target_arch = "powerpc64") {
        Some("ppc64el")
    } else if cfg!(target_arch = "riscv64") {
        Some("riscv64")
    } else if cfg!(target_arch = "s390x") {
        Some("s390x")
    } else {
        None
    }
}

/// Joins a mirror base URL and an item path from a feed.
///
/// Paths that are already absolute URLs are returned as is. Otherwise exactly one slash separates the mirror
/// from the path, regardless of how many either side had.
#[must_use = "Has no effect if the result is unused"]
pub fn join_url(mirror: &str, path: &str) -> String {
    if path.contains("://") {
        return path.to_owned();
    }
    format!(
        "{}/{}",
        mirror.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Turns an os identifier such as `ubuntu-server` into a display name such as `Ubuntu Server`.
#[must_use = "Has no effect if the result is unused"]
pub fn title_case(os: &str) -> String {
    let mut title = String::with_capacity(os.len());
    for word in os.split(['-', '_']).filter(|x| !x.is_empty()) {
        if !title.is_empty() {
            title.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            title.extend(first.to_uppercase());
            title.push_str(chars.as_str());
        }
    }
    title
}
