// Report rendering for one-shot lookups

use seoscope_scanner::SeoReport;
use seoscope_scanner::result::NOT_FOUND;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

pub fn render_report(report: &SeoReport, format: ReportFormat) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(generate_text_report(report)),
        ReportFormat::Json => generate_json_report(report),
    }
}

pub fn generate_text_report(report: &SeoReport) -> String {
    let mut out = String::new();

    out.push_str(RULE);
    out.push_str("                            SEOSCOPE DOMAIN REPORT\n");
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("Domain:       {}\n\n", report.domain));

    section(&mut out, "METRICS");
    let m = &report.metrics;
    let metrics = [
        ("Organic Search Traffic", &m.organic_traffic),
        ("Traffic Value", &m.traffic_value),
        ("Authority Score", &m.authority_score),
        ("Visits", &m.visits),
        ("Pages / Visit", &m.pages_per_visit),
        ("Avg. Visit Duration", &m.avg_visit_duration),
        ("Bounce Rate", &m.bounce_rate),
        ("Total Referring Domains", &m.total_referring_domains),
        ("Ranking Keywords", &m.ranking_keywords),
    ];
    let found = metrics.iter().filter(|(_, v)| v.as_str() != NOT_FOUND).count();
    for (label, value) in metrics {
        out.push_str(&format!("  {:<26}{}\n", label, value));
    }
    out.push_str(&format!("\n  {} of {} metrics found\n\n", found, metrics.len()));

    section(&mut out, "TOP RANKING KEYWORDS");
    if report.top_keywords.is_empty() {
        out.push_str("  (none)\n");
    }
    for (idx, row) in report.top_keywords.iter().enumerate() {
        out.push_str(&format!("[{}] {}\n", idx + 1, row.keyword));
        out.push_str(&format!(
            "    rank {}  traffic {}  volume {}  KD {}  CPC {}  results {}  trend {}\n",
            row.rank,
            row.traffic_percentage,
            row.volume,
            row.kd_percentage,
            row.cpc,
            row.num_results,
            row.search_trend
        ));
    }
    out.push('\n');

    section(&mut out, "BACKLINKS");
    if report.backlinks.is_empty() {
        out.push_str("  (none)\n");
    }
    for (idx, row) in report.backlinks.iter().enumerate() {
        out.push_str(&format!("[{}] {} -> {}\n", idx + 1, row.source_url, row.target_url));
        out.push_str(&format!("    \"{}\" ({})\n", row.anchor_text, row.follow_type));
    }
    out.push('\n');

    section(&mut out, "MAIN ORGANIC COMPETITORS");
    if report.competitors.is_empty() {
        out.push_str("  (none)\n");
    }
    for row in &report.competitors {
        out.push_str(&format!(
            "  {:<32}{:>10} common  {}\n",
            row.domain, row.common_keywords, row.competition_level
        ));
    }
    out.push('\n');

    section(&mut out, "TOP PAGES");
    if report.top_pages.is_empty() {
        out.push_str("  (none)\n");
    }
    for row in &report.top_pages {
        out.push_str(&format!(
            "  {:<48}{:>8}  {} keywords\n",
            row.page_url, row.traffic_percentage, row.keywords
        ));
    }
    out.push('\n');

    out.push_str(RULE);
    out.push_str("                              End of Report\n");
    out.push_str(RULE);

    out
}

fn section(out: &mut String, title: &str) {
    out.push_str(RULE);
    out.push_str(title);
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
}

/// Same shape as the HTTP API body, pretty-printed.
pub fn generate_json_report(report: &SeoReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
