use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

lazy_static! {
    static ref METADATA_START_RE: Regex = Regex::new(r"^\s*<metadata>").unwrap();
    static ref METADATA_END_RE: Regex = Regex::new(r"^\s*</metadata>").unwrap();
    static ref TRACK_START_RE: Regex = Regex::new(r"^\s*<trk>").unwrap();
    static ref TRACK_END_RE: Regex = Regex::new(r"^\s*</trk>").unwrap();
}

/// Where a line of a GPX document lies.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Region {
    Outside,
    InMetadata,
    InTrack,
}

/// Follows `<metadata>` and `<trk>` boundaries line by line.
///
/// Both regions are plain flags, not depth counters: re-opening a region
/// that is already open is a no-op and the first closing tag ends it. When
/// both flags are set the metadata region wins.
#[derive(Debug, Default)]
pub struct RegionTracker {
    in_metadata: bool,
    in_track: bool,
}

impl RegionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the flags from `line` and returns the region the line lies in.
    pub fn observe(&mut self, line: &str) -> Region {
        let line = line.trim_end_matches(['\r', '\n']);

        if METADATA_START_RE.is_match(line) {
            trace!("Entering metadata: {line}");
            self.in_metadata = true;
        }

        if METADATA_END_RE.is_match(line) {
            trace!("Leaving metadata: {line}");
            self.in_metadata = false;
        }

        if TRACK_START_RE.is_match(line) {
            trace!("Entering track: {line}");
            self.in_track = true;
        }

        if TRACK_END_RE.is_match(line) {
            trace!("Leaving track: {line}");
            self.in_track = false;
        }

        self.region()
    }

    pub fn region(&self) -> Region {
        if self.in_metadata {
            Region::InMetadata
        } else if self.in_track {
            Region::InTrack
        } else {
            Region::Outside
        }
    }

    pub fn in_track(&self) -> bool {
        self.in_track
    }
}
