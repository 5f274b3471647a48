//! Glue between configuration, the page fetcher, and the extraction pipeline.

use std::path::Path;

use anyhow::Context;
use tripscrape_core::AppConfig;
use tripscrape_scraper::{
    download_images, run_page, ImageQueue, OutputWriter, PageFetcher, RunSummary, ScrapeError,
};

/// Fetch the landing page and process it.
pub(crate) async fn scrape(
    config: &AppConfig,
    url_override: Option<&str>,
    with_images: bool,
) -> anyhow::Result<()> {
    let fetcher = build_fetcher(config)?;
    let url = url_override.unwrap_or(&config.start_url);

    let html = fetcher.fetch_page(url).await.map_err(abort)?;
    process(config, &fetcher, &html, with_images).await
}

/// Process a landing page previously saved to disk.
pub(crate) async fn extract_file(
    config: &AppConfig,
    html_path: &Path,
    with_images: bool,
) -> anyhow::Result<()> {
    let html = tokio::fs::read_to_string(html_path)
        .await
        .with_context(|| format!("reading {}", html_path.display()))?;
    let fetcher = build_fetcher(config)?;
    process(config, &fetcher, &html, with_images).await
}

fn build_fetcher(config: &AppConfig) -> anyhow::Result<PageFetcher> {
    PageFetcher::new(
        config.request_timeout_secs,
        &config.user_agent,
        config.max_retries,
        config.retry_backoff_base_ms,
    )
    .context("building HTTP client")
}

async fn process(
    config: &AppConfig,
    fetcher: &PageFetcher,
    html: &str,
    with_images: bool,
) -> anyhow::Result<()> {
    let writer = OutputWriter::new(config.locations_path(), config.hotels_path());
    let mut queue = ImageQueue::new();

    let summary = run_page(html, &writer, &mut queue).map_err(abort)?;
    report(&summary, &writer);

    if with_images && !queue.is_empty() {
        let images = download_images(fetcher.client(), queue.urls(), &config.images_dir)
            .await
            .map_err(abort)?;
        if images.failed > 0 {
            tracing::warn!(failed = images.failed, "some hotel images could not be downloaded");
        }
    }
    Ok(())
}

fn report(summary: &RunSummary, writer: &OutputWriter) {
    tracing::info!(
        locations = summary.locations,
        hotels = summary.hotels,
        skipped = summary.skipped,
        locations_path = %writer.locations_path().display(),
        hotels_path = %writer.hotels_path().display(),
        "run complete"
    );
    if summary.skipped > 0 {
        tracing::warn!(
            skipped = summary.skipped,
            "records with missing required fields were left out"
        );
    }
}

fn abort(err: ScrapeError) -> anyhow::Error {
    let stage = err.stage();
    tracing::error!(stage, error = %err, "run aborted");
    anyhow::Error::new(err).context(format!("{stage} stage failed"))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn config_in(dir: &Path) -> AppConfig {
        AppConfig {
            log_level: "info".to_string(),
            start_url: "http://127.0.0.1:9/hotels/".to_string(),
            output_dir: dir.to_path_buf(),
            locations_file: "Scraped_locations.json".to_string(),
            hotels_file: "Scraped_hotels.json".to_string(),
            images_dir: dir.join("images"),
            request_timeout_secs: 1,
            user_agent: "tripscrape-test/0.1".to_string(),
            max_retries: 0,
            retry_backoff_base_ms: 0,
        }
    }

    #[tokio::test]
    async fn extract_file_writes_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let html_path = dir.path().join("page.html");
        std::fs::write(
            &html_path,
            r#"<script>window.IBU_HOTEL = {"initData": {"htlsData": {"inboundCities": [
                {"type": "City", "id": "1", "name": "Paris", "cityUrl": "paris", "imgUrl": "/p.jpg",
                 "recommendHotels": [{"hotelName": "Hotel A", "rating": 4.2}]}
            ]}}};</script>"#,
        )
        .unwrap();
        let config = config_in(dir.path());

        extract_file(&config, &html_path, false).await.unwrap();

        assert!(config.locations_path().exists());
        assert!(config.hotels_path().exists());
        assert!(!config.images_dir.exists());
    }

    #[tokio::test]
    async fn extract_file_reports_stage_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let html_path = dir.path().join("page.html");
        std::fs::write(&html_path, "<html><body>maintenance</body></html>").unwrap();
        let config = config_in(dir.path());

        let err = extract_file(&config, &html_path, false).await.unwrap_err();

        assert_eq!(err.to_string(), "locate stage failed");
        assert!(err.downcast_ref::<ScrapeError>().is_some());
        assert!(!config.locations_path().exists());
    }

    #[tokio::test]
    async fn extract_file_missing_input_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let missing = PathBuf::from("/nonexistent/page.html");
        assert!(extract_file(&config, &missing, false).await.is_err());
    }
}
