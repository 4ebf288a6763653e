use crate::gpx::error::GpxResult;
use std::path::Path;
use tokio::fs;

/// Splits text into lines that keep their `\n` or `\r\n` terminator, so
/// joining them again reproduces the input exactly.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}

pub async fn load_lines(path: &Path) -> GpxResult<Vec<String>> {
    let text = fs::read_to_string(path).await?;

    Ok(split_lines(&text))
}

pub async fn save_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> GpxResult<()> {
    let mut text = String::with_capacity(lines.iter().map(|line| line.as_ref().len()).sum());
    for line in lines {
        text.push_str(line.as_ref());
    }

    fs::write(path, text).await?;

    Ok(())
}
