//! Elastic Transcoder system presets for audio output.
//!
//! Custom presets are referenced by their raw id; the names here are shortcuts
//! for the built-in MP3 presets.

/// A built-in preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemPreset {
    pub name: &'static str,
    pub id: &'static str,
    pub description: &'static str,
}

pub const SYSTEM_PRESETS: &[SystemPreset] = &[
    SystemPreset {
        name: "mp3-128",
        id: "1351620000001-300040",
        description: "Audio MP3 - 128k",
    },
    SystemPreset {
        name: "mp3-160",
        id: "1351620000001-300030",
        description: "Audio MP3 - 160k",
    },
    SystemPreset {
        name: "mp3-192",
        id: "1351620000001-300020",
        description: "Audio MP3 - 192k",
    },
    SystemPreset {
        name: "mp3-320",
        id: "1351620000001-300010",
        description: "Audio MP3 - 320k",
    },
];

/// Find a system preset by name, case insensitive
pub fn find(name: &str) -> Option<&'static SystemPreset> {
    SYSTEM_PRESETS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
}

/// Resolve a preset name to its id; anything else is taken as an id already
pub fn resolve(name_or_id: &str) -> &str {
    find(name_or_id).map(|preset| preset.id).unwrap_or(name_or_id)
}
