// Tests for report rendering

use seoscope_core::report::{
    ReportFormat, generate_json_report, generate_text_report, render_report, save_report,
};
use seoscope_scanner::{BacklinkRow, CompetitorRow, KeywordRow, PageRow, SeoReport};

fn sample_report() -> SeoReport {
    let mut report = SeoReport::new("example.com".to_string());
    report.metrics.visits = "88K".to_string();
    report.metrics.bounce_rate = "51%".to_string();
    report.top_keywords.push(KeywordRow {
        keyword: "rust web".to_string(),
        rank: "3".to_string(),
        traffic_percentage: "12%".to_string(),
        volume: "1.2K".to_string(),
        kd_percentage: "40%".to_string(),
        cpc: "$1.10".to_string(),
        num_results: "2M".to_string(),
        search_trend: "up".to_string(),
    });
    report.backlinks.push(BacklinkRow {
        source_url: "https://blog.example.org/post".to_string(),
        target_url: "https://example.com/".to_string(),
        anchor_text: "read more".to_string(),
        follow_type: "follow".to_string(),
    });
    report.competitors.push(CompetitorRow {
        domain: "rival.com".to_string(),
        common_keywords: "540".to_string(),
        competition_level: "High".to_string(),
    });
    report.top_pages.push(PageRow {
        page_url: "example.com/a".to_string(),
        traffic_percentage: "40%".to_string(),
        keywords: "120".to_string(),
    });
    report
}

// ============================================================================
// Report Format Tests
// ============================================================================

#[test]
fn test_report_format_from_str_text() {
    assert_eq!(ReportFormat::from_str("text"), Some(ReportFormat::Text));
    assert_eq!(ReportFormat::from_str("TXT"), Some(ReportFormat::Text));
}

#[test]
fn test_report_format_from_str_json() {
    assert_eq!(ReportFormat::from_str("json"), Some(ReportFormat::Json));
}

#[test]
fn test_report_format_from_str_unknown() {
    assert_eq!(ReportFormat::from_str("csv"), None);
}

// ============================================================================
// Text Report Tests
// ============================================================================

#[test]
fn test_text_report_contains_sections() {
    let text = generate_text_report(&sample_report());

    assert!(text.contains("Domain:       example.com"));
    assert!(text.contains("METRICS"));
    assert!(text.contains("TOP RANKING KEYWORDS"));
    assert!(text.contains("BACKLINKS"));
    assert!(text.contains("MAIN ORGANIC COMPETITORS"));
    assert!(text.contains("TOP PAGES"));
    assert!(text.contains("End of Report"));
}

#[test]
fn test_text_report_contains_values() {
    let text = generate_text_report(&sample_report());

    assert!(text.contains("88K"));
    assert!(text.contains("[1] rust web"));
    assert!(text.contains("https://blog.example.org/post -> https://example.com/"));
    assert!(text.contains("rival.com"));
    assert!(text.contains("example.com/a"));
    assert!(text.contains("2 of 9 metrics found"));
}

#[test]
fn test_text_report_empty_sections() {
    let text = generate_text_report(&SeoReport::new("empty.org".to_string()));

    assert!(text.contains("0 of 9 metrics found"));
    assert_eq!(text.matches("(none)").count(), 4);
}

// ============================================================================
// JSON Report Tests
// ============================================================================

#[test]
fn test_json_report_has_api_shape() {
    let json = generate_json_report(&sample_report()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["domain"], "example.com");
    assert_eq!(value["metrics"]["visits"], "88K");
    assert_eq!(value["metrics"]["organic_traffic"], "Not Found");
    assert_eq!(value["top_keywords"][0]["kd_percentage"], "40%");
    assert_eq!(value["backlinks"][0]["follow_type"], "follow");
    assert_eq!(value["competitors"][0]["competition_level"], "High");
    assert_eq!(value["top_pages"][0]["keywords"], "120");
}

#[test]
fn test_render_report_dispatches_on_format() {
    let report = sample_report();
    let text = render_report(&report, ReportFormat::Text).unwrap();
    let json = render_report(&report, ReportFormat::Json).unwrap();

    assert!(text.starts_with("━"));
    assert!(json.starts_with('{'));
}

#[test]
fn test_save_report() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::temp_dir().join(format!("seoscope-report-{}.txt", std::process::id()));
    save_report("hello report", &path)?;

    assert_eq!(std::fs::read_to_string(&path)?, "hello report");
    std::fs::remove_file(&path)?;
    Ok(())
}
