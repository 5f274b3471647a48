//! Hotel image download collaborator.
//!
//! [`ImageQueue`] is fed by the extractor through [`RecordSink`];
//! [`download_images`] then stores each queued URL under
//! `<dir>/full/<sha256(url)>.jpg`.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tripscrape_core::HotelRecord;

use crate::error::ScrapeError;
use crate::sink::RecordSink;

/// Collects every hotel's `imageUrls` in emission order.
#[derive(Debug, Default, Clone)]
pub struct ImageQueue {
    urls: Vec<String>,
}

impl ImageQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

impl RecordSink for ImageQueue {
    fn emit(&mut self, hotel: &HotelRecord) {
        self.urls.extend(hotel.image_urls.iter().cloned());
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImageDownloadSummary {
    pub downloaded: usize,
    pub skipped_existing: usize,
    pub failed: usize,
}

/// Content-addressed location of `url` inside `dir`.
#[must_use]
pub fn image_path(dir: &Path, url: &str) -> PathBuf {
    dir.join("full")
        .join(format!("{:x}.jpg", Sha256::digest(url.as_bytes())))
}

/// Download every URL in `urls` into `dir`.
///
/// Files already on disk are left alone. A URL repeated in `urls` is only
/// fetched once. Individual failures are logged and counted.
///
/// # Errors
///
/// Returns [`ScrapeError::Io`] only if `<dir>/full` cannot be created.
pub async fn download_images(
    client: &reqwest::Client,
    urls: &[String],
    dir: &Path,
) -> Result<ImageDownloadSummary, ScrapeError> {
    let full = dir.join("full");
    tokio::fs::create_dir_all(&full)
        .await
        .map_err(|source| ScrapeError::Io {
            path: full.clone(),
            source,
        })?;

    let mut summary = ImageDownloadSummary::default();
    let mut seen: HashSet<&str> = HashSet::new();

    for url in urls {
        if !seen.insert(url.as_str()) {
            continue;
        }
        let path = image_path(dir, url);
        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            tracing::debug!(url, path = %path.display(), "image already present");
            summary.skipped_existing += 1;
            continue;
        }

        let bytes = match fetch_image(client, url).await {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(url, error = %err, "image download failed");
                summary.failed += 1;
                continue;
            }
        };

        match tokio::fs::write(&path, &bytes).await {
            Ok(()) => {
                tracing::debug!(url, path = %path.display(), bytes = bytes.len(), "stored image");
                summary.downloaded += 1;
            }
            Err(err) => {
                tracing::warn!(url, path = %path.display(), error = %err, "could not store image");
                summary.failed += 1;
            }
        }
    }

    tracing::info!(
        downloaded = summary.downloaded,
        skipped_existing = summary.skipped_existing,
        failed = summary.failed,
        "image downloads finished"
    );
    Ok(summary)
}

async fn fetch_image(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, ScrapeError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_owned(),
        });
    }
    Ok(response.bytes().await?.to_vec())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn hotel(image_url: &str) -> HotelRecord {
        HotelRecord {
            property_title: "Hotel".to_string(),
            rating: json!("N/A"),
            location: "paris".to_string(),
            latitude: json!("N/A"),
            longitude: json!("N/A"),
            room_type: vec![],
            price: json!("N/A"),
            image_url: image_url.to_string(),
            image_urls: vec![image_url.to_string()],
        }
    }

    #[test]
    fn queue_collects_urls_in_emission_order() {
        let mut queue = ImageQueue::new();
        queue.emit(&hotel("https://img.test/a.jpg"));
        queue.emit(&hotel("https://img.test/b.jpg"));
        queue.emit(&hotel("https://img.test/a.jpg"));
        assert_eq!(
            queue.urls(),
            [
                "https://img.test/a.jpg",
                "https://img.test/b.jpg",
                "https://img.test/a.jpg"
            ]
        );
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn image_path_is_stable_and_distinct() {
        let dir = Path::new("/imgs");
        let a = image_path(dir, "https://img.test/a.jpg");
        assert_eq!(a, image_path(dir, "https://img.test/a.jpg"));
        assert_ne!(a, image_path(dir, "https://img.test/b.jpg"));
        assert!(a.starts_with("/imgs/full"));
        let name = a.file_name().unwrap().to_str().unwrap();
        assert_eq!(name.len(), 64 + ".jpg".len());
        assert!(name.ends_with(".jpg"));
    }
}
