use crate::gpx::region::RegionTracker;
use crate::gpx::time::error::{TimeError, TimeResult};
use crate::gpx::time::{find_timestamp, format_timestamp, parse_timestamp};
use log::{debug, trace};

/// Moves every time inside a `<trk>` region back by `delta` seconds.
///
/// Metadata times are left alone since they are the reference. Everything
/// but the replaced time text is copied through unchanged, so the output has
/// the same number of lines in the same order. Applying it twice corrects
/// twice.
pub fn rewrite<S: AsRef<str>>(lines: &[S], delta: i64) -> TimeResult<Vec<String>> {
    let mut tracker = RegionTracker::new();
    let mut corrected = Vec::with_capacity(lines.len());
    let mut count = 0usize;

    for line in lines {
        let line = line.as_ref();
        tracker.observe(line);

        let found = match find_timestamp(line) {
            Some(found) if tracker.in_track() => found,
            _ => {
                corrected.push(line.to_string());
                continue;
            }
        };

        let epoch = parse_timestamp(found.as_str())?;
        let shifted = epoch
            .checked_sub(delta)
            .ok_or(TimeError::ShiftOverflow { epoch, delta })?;
        let fixed = format_timestamp(shifted)?;
        trace!("{} -> {}", found.as_str(), fixed);

        // Splice at the matched range rather than replacing the first copy of
        // the time text, so an identical string earlier on the line is kept.
        let mut fixed_line = String::with_capacity(line.len());
        fixed_line.push_str(&line[..found.start()]);
        fixed_line.push_str(&fixed);
        fixed_line.push_str(&line[found.end()..]);

        corrected.push(fixed_line);
        count += 1;
    }

    debug!("Corrected {count} track times");

    Ok(corrected)
}
