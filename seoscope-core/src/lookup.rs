use crate::domain::normalize_domain;
use seoscope_scanner::error::Result;
use seoscope_scanner::{Fetcher, SeoReport};
use tracing::{info, warn};

/// Normalize `raw_url` and look up its report. Every call goes upstream.
pub async fn execute_lookup(fetcher: &Fetcher, raw_url: &str) -> Result<SeoReport> {
    let domain = normalize_domain(raw_url);
    info!("Looking up SEO data for {} (input: {:?})", domain, raw_url);

    match fetcher.fetch_report(&domain).await {
        Ok(report) => {
            info!(
                "Lookup for {} complete: {} keywords, {} backlinks, {} competitors, {} top pages",
                domain,
                report.top_keywords.len(),
                report.backlinks.len(),
                report.competitors.len(),
                report.top_pages.len()
            );
            Ok(report)
        }
        Err(e) => {
            warn!("Lookup for {} failed ({:?}): {}", domain, e.kind(), e);
            Err(e)
        }
    }
}
