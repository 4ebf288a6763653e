use crate::gpx::delta::compute_delta;
use crate::gpx::error::{GpxError, GpxResult};
use crate::gpx::lines::{load_lines, save_lines};
use crate::gpx::rewrite::rewrite;
use crate::gpx::time::describe_delta;
use log::{debug, info};
use std::path::Path;
use tokio::fs;

pub mod delta;
pub mod error;
pub mod lines;
pub mod region;
pub mod rewrite;
pub mod time;

/// Repairs the track times of `input` and writes the result to `output`.
///
/// The output is only written once both passes succeeded. Returns the delta
/// in seconds that was subtracted from every track time.
pub async fn fix_gpx_file(
    input: &Path,
    output: &Path,
    force: bool,
    dry_run: bool,
) -> GpxResult<i64> {
    if !dry_run && fs::try_exists(output).await? && !force {
        return Err(GpxError::OutputAlreadyExists(output.to_path_buf()));
    }

    debug!("Loading GPX file: {input:?}");
    let lines = load_lines(input).await?;
    debug!("Loaded {} lines", lines.len());

    let delta = compute_delta(&lines)?;
    info!("Time delta is: {delta} ({})", describe_delta(delta));

    let fixed = rewrite(&lines, delta)?;

    if dry_run {
        info!("Dry run, not writing {output:?}");
        return Ok(delta);
    }

    debug!("Writing fixed GPX file: {output:?}");
    save_lines(output, &fixed).await?;

    Ok(delta)
}
