//! Save-to-disk: fetch a thumbnail and write it under its suggested filename.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GrabError, Result};
use crate::probe;

/// Destination path for a save: the chosen folder joined with the
/// candidate's suggested filename.
pub fn save_path(folder: &str, filename: &str) -> PathBuf {
    Path::new(folder).join(filename)
}

/// Fetches the image at `url` and writes it to `folder/filename`.
/// Blocking; run on a blocking task off the UI thread. The folder is
/// created if it does not exist yet.
pub fn save_image(
    client: &reqwest::blocking::Client,
    url: &str,
    folder: &str,
    filename: &str,
) -> Result {
    let resp = client
        .get(url)
        .send()
        .map_err(|e| GrabError::FetchFailed(e.to_string()))?;
    if !probe::is_available(resp.status()) {
        return Err(GrabError::FetchFailed(format!("HTTP {}", resp.status())));
    }
    let bytes = resp
        .bytes()
        .map_err(|e| GrabError::FetchFailed(e.to_string()))?;

    fs::create_dir_all(folder).map_err(|e| GrabError::SaveFailed(e.to_string()))?;
    fs::write(save_path(folder, filename), &bytes)
        .map_err(|e| GrabError::SaveFailed(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_path_joins_folder_and_filename() {
        let path = save_path("./downloads", "youtube-thumbnail-abc-maxres.jpg");
        assert_eq!(
            path,
            Path::new("./downloads").join("youtube-thumbnail-abc-maxres.jpg")
        );
        assert!(path.to_string_lossy().ends_with("youtube-thumbnail-abc-maxres.jpg"));
    }
}
