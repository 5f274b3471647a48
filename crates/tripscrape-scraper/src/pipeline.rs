//! One landing page through locate → extract → write.

use crate::error::ScrapeError;
use crate::extract::extract;
use crate::locator::locate;
use crate::sink::RecordSink;
use crate::writer::OutputWriter;

/// Counts reported for a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub locations: usize,
    pub hotels: usize,
    /// Records dropped for a missing required field.
    pub skipped: usize,
}

/// Run the extraction pipeline over one HTML document.
///
/// Hotels are streamed to `sink` while extracting. Nothing is written
/// unless locating and extracting both succeed.
///
/// # Errors
///
/// Any locator, extractor or writer error; see [`ScrapeError::stage`].
pub fn run_page<S>(
    html: &str,
    writer: &OutputWriter,
    sink: &mut S,
) -> Result<RunSummary, ScrapeError>
where
    S: RecordSink + ?Sized,
{
    let json_text = locate(html)?;
    let extraction = extract(json_text, sink)?;

    for skip in &extraction.skipped {
        tracing::debug!(%skip, "record skipped");
    }

    writer.write(&extraction.locations, &extraction.hotels)?;

    Ok(RunSummary {
        locations: extraction.locations.len(),
        hotels: extraction.hotels.len(),
        skipped: extraction.skipped.len(),
    })
}
