use clap::Parser;
use std::path::PathBuf;

/// CLI for repairing GPX tracks whose times are offset from the recording start.
///
/// The offset between the <metadata> time and the first track point is
/// subtracted from every time inside <trk>.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// GPX file needing repair
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Repaired GPX file path
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Force overwrite of the output file if it already exists
    #[arg(long, short = 'f', default_value_t = false)]
    pub force: bool,

    /// Only compute and report the time delta, do not write the output file
    #[arg(long, short = 'n', default_value_t = false)]
    pub dry_run: bool,
}
