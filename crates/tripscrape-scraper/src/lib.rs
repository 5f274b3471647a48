pub mod error;
pub mod extract;
pub mod fetch;
pub mod images;
pub mod locator;
pub mod lookup;
pub mod pipeline;
mod retry;
pub mod sink;
pub mod writer;

pub use error::{FieldMissing, ScrapeError};
pub use extract::{extract, extract_from_value, Extraction};
pub use fetch::PageFetcher;
pub use images::{download_images, ImageDownloadSummary, ImageQueue};
pub use locator::locate;
pub use pipeline::{run_page, RunSummary};
pub use sink::{NullSink, RecordSink};
pub use writer::{read_json_array, write_json_array, OutputWriter};
