use std::path::Path;

/// Artist used when a file name carries no `Artist-` prefix.
pub const UNKNOWN_ARTIST: &str = "unknown";

/// Split a file name of the form `Artist-Title.ext` into `(artist, title)`.
///
/// Only the first dash separates the fields, so `"A-B-C.mp3"` gives
/// `("A", "B-C")`. Surrounding whitespace is trimmed. Names without a dash,
/// or with an empty side, fall back to [`UNKNOWN_ARTIST`] and the whole stem.
pub fn details_from_filename(path: &Path) -> (String, String) {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("UNKNOWN")
        .trim();

    match stem.split_once('-') {
        Some((artist, title)) if !artist.trim().is_empty() && !title.trim().is_empty() => {
            (artist.trim().to_string(), title.trim().to_string())
        }
        _ => (UNKNOWN_ARTIST.to_string(), stem.to_string()),
    }
}
