use std::path::Path;

use lofty::prelude::*;
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::Track;
use super::naming::details_from_filename;

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Build a track for `path`, preferring tag values over the file name.
fn read_track(path: &Path) -> Track {
    let (mut artist, mut title) = details_from_filename(path);
    let mut year = 0;

    match lofty::read_from_path(path) {
        Ok(tagged) => {
            if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                if let Some(v) = tag.artist() {
                    let v = v.trim();
                    if !v.is_empty() {
                        artist = v.to_string();
                    }
                }
                if let Some(v) = tag.title() {
                    let v = v.trim();
                    if !v.is_empty() {
                        title = v.to_string();
                    }
                }
                if let Some(y) = tag.date().map(|d| u32::from(d.year)) {
                    year = y;
                }
            }
        }
        Err(e) => log::debug!("no readable tags in {}: {e}", path.display()),
    }

    Track::new(path.display().to_string(), artist, title, year)
}

/// Load every audio file under `dir` as a [`Track`].
///
/// Never fails: a missing, unreadable or empty folder yields an empty list.
/// The result is ordered by file name so repeated loads agree.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<Track> {
    if !dir.is_dir() {
        log::warn!("music folder {} does not exist", dir.display());
        return Vec::new();
    }

    let mut tracks: Vec<Track> = Vec::new();

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if path.is_file()
            && (settings.include_hidden || !is_hidden(path))
            && is_audio_file(path, settings)
        {
            tracks.push(read_track(path));
        }
    }

    tracks.sort_by(|a, b| a.filename().cmp(b.filename()));
    log::info!("loaded {} tracks from {}", tracks.len(), dir.display());
    tracks
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn is_audio_file_matches_configured_extensions_case_insensitive() {
        let settings = LibrarySettings {
            extensions: vec!["mp3".into(), ".ogg".into()],
            ..LibrarySettings::default()
        };
        assert!(is_audio_file(Path::new("/tmp/a.mp3"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.MP3"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.ogg"), &settings));
        assert!(!is_audio_file(Path::new("/tmp/a.flac"), &settings));
        assert!(!is_audio_file(Path::new("/tmp/a.txt"), &settings));
        assert!(!is_audio_file(Path::new("/tmp/a"), &settings));
    }

    #[test]
    fn scan_filters_by_extension_and_sorts_by_filename() {
        let dir = tempdir().unwrap();

        fs::write(dir.path().join("Bob-Song1.MP3"), b"not a real mp3").unwrap();
        fs::write(dir.path().join("Amy-Song2.mp3"), b"not a real mp3").unwrap();
        fs::write(dir.path().join("notes.txt"), b"ignore me").unwrap();
        fs::write(dir.path().join("Cat-Song3.ogg"), b"wrong extension").unwrap();

        let tracks = scan(dir.path(), &LibrarySettings::default());
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].artist(), "Amy");
        assert_eq!(tracks[0].title(), "Song2");
        assert_eq!(tracks[1].artist(), "Bob");
        assert_eq!(tracks[1].title(), "Song1");
        assert!(tracks[1].filename().ends_with("Bob-Song1.MP3"));
        assert_eq!(tracks[0].play_count(), 0);
        assert_eq!(tracks[0].year(), 0);
    }

    /// A tenth of a second of 8 kHz mono silence.
    fn silent_wav() -> Vec<u8> {
        let data_len: u32 = 1600;
        let mut b = Vec::new();
        b.extend_from_slice(b"RIFF");
        b.extend_from_slice(&(36 + data_len).to_le_bytes());
        b.extend_from_slice(b"WAVE");
        b.extend_from_slice(b"fmt ");
        b.extend_from_slice(&16u32.to_le_bytes());
        b.extend_from_slice(&1u16.to_le_bytes()); // PCM
        b.extend_from_slice(&1u16.to_le_bytes()); // mono
        b.extend_from_slice(&8000u32.to_le_bytes());
        b.extend_from_slice(&16000u32.to_le_bytes());
        b.extend_from_slice(&2u16.to_le_bytes());
        b.extend_from_slice(&16u16.to_le_bytes());
        b.extend_from_slice(b"data");
        b.extend_from_slice(&data_len.to_le_bytes());
        b.resize(b.len() + data_len as usize, 0);
        b
    }

    #[test]
    fn scan_prefers_tag_values_over_filename() {
        use lofty::config::WriteOptions;
        use lofty::tag::items::Timestamp;
        use lofty::tag::{Tag, TagType};

        let dir = tempdir().unwrap();
        let path = dir.path().join("Bob-Song1.wav");
        fs::write(&path, silent_wav()).unwrap();

        let mut tagged = lofty::read_from_path(&path).unwrap();
        let mut tag = Tag::new(TagType::Id3v2);
        tag.set_artist("Nina Simone".to_string());
        tag.set_title("Sinnerman".to_string());
        tag.set_date(Timestamp {
            year: 1965,
            ..Timestamp::default()
        });
        tagged.insert_tag(tag);
        tagged.save_to_path(&path, WriteOptions::default()).unwrap();

        let settings = LibrarySettings {
            extensions: vec!["wav".into()],
            ..LibrarySettings::default()
        };
        let tracks = scan(dir.path(), &settings);

        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].artist(), "Nina Simone");
        assert_eq!(tracks[0].title(), "Sinnerman");
        assert_eq!(tracks[0].year(), 1965);
        assert!(tracks[0].filename().ends_with("Bob-Song1.wav"));
    }

    #[test]
    fn scan_keeps_filename_fields_when_tag_is_partial() {
        use lofty::config::WriteOptions;
        use lofty::tag::{Tag, TagType};

        let dir = tempdir().unwrap();
        let path = dir.path().join("Bob-Song1.wav");
        fs::write(&path, silent_wav()).unwrap();

        let mut tagged = lofty::read_from_path(&path).unwrap();
        let mut tag = Tag::new(TagType::Id3v2);
        tag.set_title("Renamed".to_string());
        tagged.insert_tag(tag);
        tagged.save_to_path(&path, WriteOptions::default()).unwrap();

        let settings = LibrarySettings {
            extensions: vec!["wav".into()],
            ..LibrarySettings::default()
        };
        let tracks = scan(dir.path(), &settings);

        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].artist(), "Bob");
        assert_eq!(tracks[0].title(), "Renamed");
        assert_eq!(tracks[0].year(), 0);
    }

    #[test]
    fn scan_of_missing_folder_is_empty() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(scan(&missing, &LibrarySettings::default()).is_empty());
    }

    #[test]
    fn scan_of_empty_folder_is_empty() {
        let dir = tempdir().unwrap();
        assert!(scan(dir.path(), &LibrarySettings::default()).is_empty());
    }

    #[test]
    fn scan_respects_include_hidden_false() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".hidden.mp3"), b"not real").unwrap();
        fs::write(dir.path().join("visible.mp3"), b"not real").unwrap();

        let settings = LibrarySettings {
            include_hidden: false,
            ..LibrarySettings::default()
        };
        let tracks = scan(dir.path(), &settings);

        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].title(), "visible");
    }

    #[test]
    fn scan_respects_recursive_false() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("root.mp3"), b"not real").unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join("child.mp3"), b"not real").unwrap();

        let settings = LibrarySettings {
            recursive: false,
            ..LibrarySettings::default()
        };
        let tracks = scan(dir.path(), &settings);
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].title(), "root");
    }

    #[test]
    fn scan_respects_max_depth() {
        let dir = tempdir().unwrap();
        let d1 = dir.path().join("d1");
        let d2 = d1.join("d2");
        fs::create_dir_all(&d2).unwrap();
        fs::write(dir.path().join("root.mp3"), b"not real").unwrap();
        fs::write(d1.join("one.mp3"), b"not real").unwrap();
        fs::write(d2.join("two.mp3"), b"not real").unwrap();

        // WalkDir depth counts root as 0, children as 1, grandchildren as 2...
        let settings = LibrarySettings {
            max_depth: Some(2),
            ..LibrarySettings::default()
        };
        let tracks = scan(dir.path(), &settings);

        let titles: Vec<&str> = tracks.iter().map(|t| t.title()).collect();
        assert!(titles.contains(&"root"));
        assert!(titles.contains(&"one"));
        assert!(!titles.contains(&"two"));
    }
}
