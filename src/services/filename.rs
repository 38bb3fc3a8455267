use std::path::Path;
use uuid::Uuid;

const SUFFIX_LEN: usize = 8;

/// Replace every character outside `[A-Za-z0-9]` with `-` and lower-case
/// the result. "Sunset In Bali" becomes "sunset-in-bali".
pub fn sanitize_base_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}

/// Stored name for an upload: sanitized base name, a random 8-hex-char
/// suffix, and the original extension (case preserved). Uniqueness rests
/// on the suffix alone; there is no collision check.
pub fn unique_file_name(original_name: &str) -> String {
    let path = Path::new(original_name);
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    let extension = path.extension().and_then(|e| e.to_str());

    let base = sanitize_base_name(stem);
    let uuid = Uuid::new_v4().simple().to_string();
    let suffix = &uuid[..SUFFIX_LEN];

    match extension {
        Some(ext) => format!("{}-{}.{}", base, suffix, ext),
        None => format!("{}-{}", base, suffix),
    }
}

/// Reconstruct a display title from a stored file stem: drop the trailing
/// suffix segment, capitalize the rest, join with spaces. Returns an empty
/// string when nothing usable remains (e.g. a file that never went through
/// `unique_file_name`).
pub fn title_from_stem(stem: &str) -> String {
    let parts: Vec<&str> = stem.split('-').collect();
    let kept = &parts[..parts.len().saturating_sub(1)];

    kept.iter()
        .filter(|part| !part.is_empty())
        .map(|part| capitalize(part))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
