//! HTML to [`SeoReport`] extraction.
//!
//! Everything here is a pure function over the upstream markup. Lookups are
//! driven by the rule tables below so a markup change on the upstream page is
//! a data edit, not a code edit. A lookup that misses degrades to a placeholder
//! or an empty table; only structurally impossible input (an anchor without an
//! `href` in the backlinks table, an invalid container selector) is an error.

use crate::error::{Result, ScanError};
use crate::result::{
    BacklinkRow, CompetitorRow, KeywordRow, MetricField, MetricSet, NOT_AVAILABLE, NOT_FOUND,
    PageRow, SeoReport,
};
use scraper::{ElementRef, Html, Node, Selector};
use std::sync::LazyLock;
use tracing::debug;

static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());
static ROW_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
static CELL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());

/// Locates a metric: the first `label_tag` whose sole string is exactly
/// `label`, then the first anchor inside its next `value_tag` sibling.
#[derive(Debug, Clone, Copy)]
pub struct MetricRule {
    pub field: MetricField,
    pub label: &'static str,
    pub label_tag: &'static str,
    pub value_tag: &'static str,
}

const fn metric(field: MetricField, label: &'static str) -> MetricRule {
    MetricRule {
        field,
        label,
        label_tag: "p",
        value_tag: "p",
    }
}

pub const METRIC_RULES: &[MetricRule] = &[
    metric(MetricField::OrganicTraffic, "Organic Search Traffic"),
    metric(MetricField::TrafficValue, "Traffic Value"),
    metric(MetricField::AuthorityScore, "Authority Score"),
    metric(MetricField::Visits, "Visits"),
    metric(MetricField::PagesPerVisit, "Pages / Visit"),
    metric(MetricField::AvgVisitDuration, "Avg. Visit Duration"),
    metric(MetricField::BounceRate, "Bounce Rate"),
    metric(MetricField::TotalReferringDomains, "Total Referring Domains"),
    metric(MetricField::RankingKeywords, "Ranking Keywords"),
];

/// How the container of a table section is found.
#[derive(Debug, Clone, Copy)]
pub enum Anchor {
    /// First `tag` whose sole string equals `label`, then the next `<table>` in document order.
    Heading {
        tag: &'static str,
        label: &'static str,
    },
    /// First element matching a CSS selector.
    FirstMatch(&'static str),
}

/// A table section: where it lives, how many cells a row needs, and how a row
/// becomes a record.
pub struct TableRule<T> {
    pub anchor: Anchor,
    pub min_cells: usize,
    pub build: fn(&[ElementRef<'_>]) -> Result<T>,
}

pub const BACKLINKS: TableRule<BacklinkRow> = TableRule {
    anchor: Anchor::Heading {
        tag: "h3",
        label: "Backlinks",
    },
    min_cells: 4,
    build: backlink_row,
};

pub const TOP_PAGES: TableRule<PageRow> = TableRule {
    anchor: Anchor::Heading {
        tag: "h3",
        label: "Top Pages",
    },
    min_cells: 3,
    build: page_row,
};

pub const COMPETITORS: TableRule<CompetitorRow> = TableRule {
    anchor: Anchor::Heading {
        tag: "h3",
        label: "Main Organic Competitors",
    },
    min_cells: 3,
    build: competitor_row,
};

// Positional lookup: the first `div.table` on the page wins.
pub const TOP_KEYWORDS: TableRule<KeywordRow> = TableRule {
    anchor: Anchor::FirstMatch("div.table"),
    min_cells: 8,
    build: keyword_row,
};

/// Parse `html` and extract a full report for `domain`.
pub fn extract_report(domain: &str, html: &str) -> Result<SeoReport> {
    let document = Html::parse_document(html);

    let report = SeoReport {
        domain: domain.to_string(),
        metrics: extract_metrics(&document),
        top_keywords: extract_rows(&document, &TOP_KEYWORDS)?,
        backlinks: extract_rows(&document, &BACKLINKS)?,
        competitors: extract_rows(&document, &COMPETITORS)?,
        top_pages: extract_rows(&document, &TOP_PAGES)?,
    };

    debug!(
        "Extracted {} keywords, {} backlinks, {} competitors, {} top pages for {}",
        report.top_keywords.len(),
        report.backlinks.len(),
        report.competitors.len(),
        report.top_pages.len(),
        domain
    );

    Ok(report)
}

pub fn extract_metrics(document: &Html) -> MetricSet {
    let mut metrics = MetricSet::default();
    for rule in METRIC_RULES {
        let value = find_metric(document, rule).unwrap_or_else(|| NOT_FOUND.to_string());
        metrics.set(rule.field, value);
    }
    metrics
}

/// Resolve a single metric rule. `None` when any step of the lookup misses.
pub fn find_metric(document: &Html, rule: &MetricRule) -> Option<String> {
    let label = find_labeled(document, rule.label_tag, rule.label)?;
    let value = label
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sibling| sibling.value().name() == rule.value_tag)?;
    let anchor = value.select(&ANCHOR_SELECTOR).next()?;
    Some(cell_text(&anchor))
}

/// Collect the records of one table section. The first row is a header and
/// rows with fewer than `min_cells` cells are dropped.
pub fn extract_rows<T>(document: &Html, rule: &TableRule<T>) -> Result<Vec<T>> {
    let Some(container) = locate(document, rule.anchor)? else {
        debug!("No container for {:?}", rule.anchor);
        return Ok(Vec::new());
    };

    let mut rows = Vec::new();
    for row in container.select(&ROW_SELECTOR).skip(1) {
        let cells: Vec<ElementRef<'_>> = row.select(&CELL_SELECTOR).collect();
        if cells.len() < rule.min_cells {
            continue;
        }
        rows.push((rule.build)(&cells)?);
    }
    Ok(rows)
}

fn locate<'a>(document: &'a Html, anchor: Anchor) -> Result<Option<ElementRef<'a>>> {
    match anchor {
        Anchor::Heading { tag, label } => table_after(document, tag, label),
        Anchor::FirstMatch(css) => {
            let selector = Selector::parse(css)
                .map_err(|e| ScanError::ExtractionError(format!("bad selector {css:?}: {e}")))?;
            Ok(document.select(&selector).next())
        }
    }
}

fn table_after<'a>(
    document: &'a Html,
    tag: &str,
    label: &str,
) -> Result<Option<ElementRef<'a>>> {
    let css = format!("{tag}, table");
    let selector = Selector::parse(&css)
        .map_err(|e| ScanError::ExtractionError(format!("bad selector {css:?}: {e}")))?;

    // Document order: once the first matching heading is seen, the next table wins.
    let mut anchored = false;
    for element in document.select(&selector) {
        let name = element.value().name();
        if anchored && name == "table" {
            return Ok(Some(element));
        }
        if !anchored && name == tag && sole_string(element) == Some(label) {
            anchored = true;
        }
    }
    Ok(None)
}

fn find_labeled<'a>(document: &'a Html, tag: &str, label: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(tag).ok()?;
    document
        .select(&selector)
        .find(|element| sole_string(*element) == Some(label))
}

/// The single string an element holds: its only child when that is text, or
/// the sole string of its only child element. Mixed or split content has none.
fn sole_string<'a>(element: ElementRef<'a>) -> Option<&'a str> {
    let mut children = element.children();
    let only = children.next()?;
    if children.next().is_some() {
        return None;
    }
    match only.value() {
        Node::Text(text) => Some(&**text),
        Node::Element(_) => ElementRef::wrap(only).and_then(sole_string),
        _ => None,
    }
}

fn cell_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn anchor_href(anchor: &ElementRef<'_>) -> Result<String> {
    anchor
        .value()
        .attr("href")
        .map(|href| href.trim().to_string())
        .ok_or_else(|| {
            ScanError::ExtractionError("backlink anchor has no 'href' attribute".into())
        })
}

fn backlink_row(cells: &[ElementRef<'_>]) -> Result<BacklinkRow> {
    let anchors: Vec<ElementRef<'_>> = cells[0].select(&ANCHOR_SELECTOR).collect();
    let source_url = match anchors.first() {
        Some(anchor) => anchor_href(anchor)?,
        None => NOT_AVAILABLE.to_string(),
    };
    let target_url = match anchors.last() {
        Some(anchor) => anchor_href(anchor)?,
        None => NOT_AVAILABLE.to_string(),
    };

    Ok(BacklinkRow {
        source_url,
        target_url,
        anchor_text: cell_text(&cells[1]),
        follow_type: cell_text(&cells[2]),
    })
}

fn page_row(cells: &[ElementRef<'_>]) -> Result<PageRow> {
    let page_url = match cells[0].select(&ANCHOR_SELECTOR).next() {
        Some(anchor) => cell_text(&anchor),
        None => cell_text(&cells[0]),
    };

    Ok(PageRow {
        page_url,
        traffic_percentage: cell_text(&cells[1]),
        keywords: cell_text(&cells[2]),
    })
}

fn competitor_row(cells: &[ElementRef<'_>]) -> Result<CompetitorRow> {
    Ok(CompetitorRow {
        domain: cell_text(&cells[0]),
        common_keywords: cell_text(&cells[1]),
        competition_level: cell_text(&cells[2]),
    })
}

fn keyword_row(cells: &[ElementRef<'_>]) -> Result<KeywordRow> {
    Ok(KeywordRow {
        keyword: cell_text(&cells[0]),
        rank: cell_text(&cells[1]),
        traffic_percentage: cell_text(&cells[2]),
        volume: cell_text(&cells[3]),
        kd_percentage: cell_text(&cells[4]),
        cpc: cell_text(&cells[5]),
        num_results: cell_text(&cells[6]),
        search_trend: cell_text(&cells[7]),
    })
}
