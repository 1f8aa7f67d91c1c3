pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod result;

pub use error::{ErrorKind, ScanError};
pub use extractor::extract_report;
pub use fetcher::{FetchConfig, Fetcher};
pub use result::{BacklinkRow, CompetitorRow, KeywordRow, MetricSet, PageRow, SeoReport};
