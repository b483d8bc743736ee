//! HTTP download of source text files
//!
//! Plain GET with status checking. Retries are left to the caller.

use crate::error::{HurdatError, Result};
use reqwest::Client;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Download a text file, failing on any non-success status
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(HurdatError::DownloadFailed {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        debug!("Downloaded {} bytes from {}", text.len(), url);
        Ok(text)
    }
}

/// Split downloaded text into lines, dropping trailing blank lines
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_drops_trailing_blank() {
        let text = "AL012016, ALBERTO, 1,\r\n20160606, 1800,\r\n\n";
        assert_eq!(
            split_lines(text),
            vec!["AL012016, ALBERTO, 1,", "20160606, 1800,"]
        );
    }

    #[test]
    fn test_split_lines_keeps_interior_blank() {
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert!(split_lines("").is_empty());
        assert!(split_lines("\n\n").is_empty());
    }
}
