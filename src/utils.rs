//! Utility functions for filename sanitization and collision-free paths

use std::path::{Path, PathBuf};

/// Characters that may not appear in exported filenames
const RESERVED_CHARS: &[char] = &['/', '\\', '?', '%', '*', ':', '|', '"', '<', '>'];

/// Replace every filesystem-reserved character in a display name with a
/// single hyphen.
///
/// All other characters pass through unchanged, including non-ASCII, so the
/// function is idempotent on names that are already clean.
///
/// # Examples
///
/// ```
/// use figma_export::utils::sanitize_name;
///
/// assert_eq!(sanitize_name("A/B:C"), "A-B-C");
/// assert_eq!(sanitize_name("Écran réglages"), "Écran réglages");
/// ```
pub fn sanitize_name(raw: &str) -> String {
    raw.chars()
        .map(|c| if RESERVED_CHARS.contains(&c) { '-' } else { c })
        .collect()
}

/// Pick a path under `dir` that does not exist yet.
///
/// Tries `<base>.<ext>` first, then `<base>-1.<ext>`, `<base>-2.<ext>`, …
/// incrementing until a free path is found.
///
/// The check-and-pick is not atomic against concurrent writers. The export
/// loop is strictly sequential, so a chosen path stays free until it is
/// written.
pub fn unique_path(dir: &Path, base: &str, ext: &str) -> PathBuf {
    let candidate = dir.join(format!("{base}.{ext}"));
    if !candidate.exists() {
        return candidate;
    }

    let mut counter = 1u32;
    loop {
        let candidate = dir.join(format!("{base}-{counter}.{ext}"));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn sanitize_replaces_each_reserved_character() {
        assert_eq!(sanitize_name("A/B:C"), "A-B-C");
        assert_eq!(sanitize_name(r#"a\b?c%d*e:f|g"h<i>j"#), "a-b-c-d-e-f-g-h-i-j");
    }

    #[test]
    fn sanitize_is_idempotent_on_clean_names() {
        let clean = "Login Screen (v2)";
        assert_eq!(sanitize_name(clean), clean);
        assert_eq!(sanitize_name(&sanitize_name("A/B")), sanitize_name("A/B"));
    }

    #[test]
    fn sanitize_passes_non_ascii_through() {
        assert_eq!(sanitize_name("画面/ログイン"), "画面-ログイン");
        assert_eq!(sanitize_name("émoji 🎨"), "émoji 🎨");
    }

    #[test]
    fn sanitize_handles_empty_name() {
        assert_eq!(sanitize_name(""), "");
    }

    #[test]
    fn unique_path_returns_base_when_free() {
        let temp_dir = TempDir::new().unwrap();
        let path = unique_path(temp_dir.path(), "screen-Login", "png");
        assert_eq!(path, temp_dir.path().join("screen-Login.png"));
    }

    #[test]
    fn unique_path_appends_counter_when_occupied() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("screen-Login.png"), "img").unwrap();

        let path = unique_path(temp_dir.path(), "screen-Login", "png");
        assert_eq!(path, temp_dir.path().join("screen-Login-1.png"));
    }

    #[test]
    fn unique_path_skips_every_occupied_counter() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("screen-Login.png"), "img").unwrap();
        fs::write(temp_dir.path().join("screen-Login-1.png"), "img").unwrap();

        let path = unique_path(temp_dir.path(), "screen-Login", "png");
        assert_eq!(path, temp_dir.path().join("screen-Login-2.png"));
    }

    #[test]
    fn unique_path_counters_are_per_extension() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("screen-Login.png"), "img").unwrap();

        // The svg slot is still free, so no counter is appended
        let path = unique_path(temp_dir.path(), "screen-Login", "svg");
        assert_eq!(path, temp_dir.path().join("screen-Login.svg"));
    }
}
