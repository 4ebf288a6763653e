use crate::gpx::error::{GpxError, GpxResult};
use crate::gpx::region::{Region, RegionTracker};
use crate::gpx::time::{find_timestamp, parse_timestamp};
use log::debug;

/// Computes how far the first track point is ahead of the metadata time.
///
/// Positive means the track times are late and must be moved back. Only the
/// first track time is used; the device clock is assumed to be off by a
/// constant amount for the whole recording.
pub fn compute_delta<S: AsRef<str>>(lines: &[S]) -> GpxResult<i64> {
    let mut tracker = RegionTracker::new();
    let mut reference: Option<i64> = None;

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let region = tracker.observe(line);

        let Some(found) = find_timestamp(line) else {
            continue;
        };

        let epoch = parse_timestamp(found.as_str())?;

        match region {
            Region::InMetadata => match reference {
                None => {
                    debug!("Metadata time {} on line {}", found.as_str(), index + 1);
                    reference = Some(epoch);
                }
                Some(_) => {
                    debug!(
                        "Ignoring additional metadata time {} on line {}",
                        found.as_str(),
                        index + 1
                    );
                }
            },
            Region::InTrack => {
                let Some(reference) = reference else {
                    return Err(GpxError::TrackTimeBeforeMetadata {
                        line_number: index + 1,
                        line: line.trim_end().to_string(),
                    });
                };

                debug!("First track time {} on line {}", found.as_str(), index + 1);
                return Ok(epoch - reference);
            }
            Region::Outside => {
                return Err(GpxError::TimeOutsideRegion {
                    line_number: index + 1,
                    line: line.trim_end().to_string(),
                });
            }
        }
    }

    Err(GpxError::NoTrackTime)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpx::time::error::TimeError;

    const META_TIME: &str = "2017-02-22T21:28:02.000Z";
    const TRACK_TIME: &str = "2017-03-01T23:15:45.000Z";

    fn document(meta_time: &str, track_times: &[&str]) -> Vec<String> {
        let mut lines = vec![
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>".to_string(),
            "<gpx version=\"1.1\" creator=\"test\">".to_string(),
            " <metadata>".to_string(),
            format!("  <time>{meta_time}</time>"),
            " </metadata>".to_string(),
            " <trk>".to_string(),
            "  <trkseg>".to_string(),
        ];

        for time in track_times {
            lines.push("   <trkpt lat=\"47.1\" lon=\"8.2\">".to_string());
            lines.push(format!("    <time>{time}</time>"));
            lines.push("   </trkpt>".to_string());
        }

        lines.push("  </trkseg>".to_string());
        lines.push(" </trk>".to_string());
        lines.push("</gpx>".to_string());
        lines
    }

    #[test]
    fn computes_delta_from_first_track_point() {
        let lines = document(META_TIME, &[TRACK_TIME, "2017-03-01T23:15:50.000Z"]);
        assert_eq!(compute_delta(&lines).unwrap(), 611263);
    }

    #[test]
    fn delta_matches_epoch_difference() {
        let lines = document(META_TIME, &[TRACK_TIME]);
        let delta = compute_delta(&lines).unwrap();

        assert_eq!(
            parse_timestamp(TRACK_TIME).unwrap() - parse_timestamp(META_TIME).unwrap(),
            delta
        );
    }

    #[test]
    fn delta_is_negative_when_track_is_early() {
        let lines = document(TRACK_TIME, &[META_TIME]);
        assert_eq!(compute_delta(&lines).unwrap(), -611263);
    }

    #[test]
    fn epoch_zero_is_a_valid_reference() {
        let lines = document("1970-01-01T00:00:00.000Z", &["1970-01-01T00:01:00.000Z"]);
        assert_eq!(compute_delta(&lines).unwrap(), 60);
    }

    #[test]
    fn first_metadata_time_wins() {
        let lines = vec![
            "<metadata>",
            "<time>2017-02-22T21:28:02.000Z</time>",
            "<time>2017-02-22T21:28:12.000Z</time>",
            "</metadata>",
            "<trk>",
            "<time>2017-02-22T21:28:22.000Z</time>",
            "</trk>",
        ];
        assert_eq!(compute_delta(&lines).unwrap(), 20);
    }

    #[test]
    fn time_outside_regions_is_a_context_error() {
        let lines = vec![
            "<gpx>",
            "<time>2017-02-22T21:28:02.000Z</time>",
            "<metadata>",
        ];

        match compute_delta(&lines) {
            Err(GpxError::TimeOutsideRegion { line_number, line }) => {
                assert_eq!(line_number, 2);
                assert_eq!(line, "<time>2017-02-22T21:28:02.000Z</time>");
            }
            other => panic!("expected TimeOutsideRegion, got {other:?}"),
        }
    }

    #[test]
    fn track_time_before_metadata_is_an_ordering_error() {
        let lines = vec![
            "<trk>",
            "<time>2017-03-01T23:15:45.000Z</time>",
            "</trk>",
            "<metadata>",
            "<time>2017-02-22T21:28:02.000Z</time>",
            "</metadata>",
        ];

        assert!(matches!(
            compute_delta(&lines),
            Err(GpxError::TrackTimeBeforeMetadata { line_number: 2, .. })
        ));
    }

    #[test]
    fn missing_track_time_is_an_exhaustion_error() {
        let lines = document(META_TIME, &[]);
        assert!(matches!(compute_delta(&lines), Err(GpxError::NoTrackTime)));
    }

    #[test]
    fn empty_input_is_an_exhaustion_error() {
        let lines: Vec<String> = Vec::new();
        assert!(matches!(compute_delta(&lines), Err(GpxError::NoTrackTime)));
    }

    #[test]
    fn malformed_metadata_time_is_a_format_error() {
        let lines = document("2017-02-22T21:28:02.000", &[TRACK_TIME]);
        assert!(matches!(
            compute_delta(&lines),
            Err(GpxError::TimeError(TimeError::MissingUtcDesignator(_)))
        ));
    }

    #[test]
    fn stops_at_first_track_time() {
        // A malformed time after the first track point is never looked at.
        let lines = document(META_TIME, &[TRACK_TIME, "garbage"]);
        assert_eq!(compute_delta(&lines).unwrap(), 611263);
    }
}
