use serde::{Deserialize, Serialize};

/// Placeholder for a metric whose label is absent from the page.
pub const NOT_FOUND: &str = "Not Found";

/// Placeholder for a backlink URL when its cell carries no anchor.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoReport {
    pub domain: String,
    pub metrics: MetricSet,
    pub top_keywords: Vec<KeywordRow>,
    pub backlinks: Vec<BacklinkRow>,
    pub competitors: Vec<CompetitorRow>,
    pub top_pages: Vec<PageRow>,
}

impl SeoReport {
    /// An empty report: every metric is the placeholder and every table is empty.
    pub fn new(domain: String) -> Self {
        Self {
            domain,
            metrics: MetricSet::default(),
            top_keywords: Vec::new(),
            backlinks: Vec::new(),
            competitors: Vec::new(),
            top_pages: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSet {
    pub organic_traffic: String,
    pub traffic_value: String,
    pub authority_score: String,
    pub visits: String,
    pub pages_per_visit: String,
    pub avg_visit_duration: String,
    pub bounce_rate: String,
    pub total_referring_domains: String,
    pub ranking_keywords: String,
}

impl Default for MetricSet {
    fn default() -> Self {
        Self {
            organic_traffic: NOT_FOUND.to_string(),
            traffic_value: NOT_FOUND.to_string(),
            authority_score: NOT_FOUND.to_string(),
            visits: NOT_FOUND.to_string(),
            pages_per_visit: NOT_FOUND.to_string(),
            avg_visit_duration: NOT_FOUND.to_string(),
            bounce_rate: NOT_FOUND.to_string(),
            total_referring_domains: NOT_FOUND.to_string(),
            ranking_keywords: NOT_FOUND.to_string(),
        }
    }
}

/// Names one field of a [`MetricSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricField {
    OrganicTraffic,
    TrafficValue,
    AuthorityScore,
    Visits,
    PagesPerVisit,
    AvgVisitDuration,
    BounceRate,
    TotalReferringDomains,
    RankingKeywords,
}

impl MetricSet {
    pub fn get(&self, field: MetricField) -> &str {
        match field {
            MetricField::OrganicTraffic => &self.organic_traffic,
            MetricField::TrafficValue => &self.traffic_value,
            MetricField::AuthorityScore => &self.authority_score,
            MetricField::Visits => &self.visits,
            MetricField::PagesPerVisit => &self.pages_per_visit,
            MetricField::AvgVisitDuration => &self.avg_visit_duration,
            MetricField::BounceRate => &self.bounce_rate,
            MetricField::TotalReferringDomains => &self.total_referring_domains,
            MetricField::RankingKeywords => &self.ranking_keywords,
        }
    }

    pub fn set(&mut self, field: MetricField, value: String) {
        let slot = match field {
            MetricField::OrganicTraffic => &mut self.organic_traffic,
            MetricField::TrafficValue => &mut self.traffic_value,
            MetricField::AuthorityScore => &mut self.authority_score,
            MetricField::Visits => &mut self.visits,
            MetricField::PagesPerVisit => &mut self.pages_per_visit,
            MetricField::AvgVisitDuration => &mut self.avg_visit_duration,
            MetricField::BounceRate => &mut self.bounce_rate,
            MetricField::TotalReferringDomains => &mut self.total_referring_domains,
            MetricField::RankingKeywords => &mut self.ranking_keywords,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRow {
    pub keyword: String,
    pub rank: String,
    pub traffic_percentage: String,
    pub volume: String,
    pub kd_percentage: String,
    pub cpc: String,
    pub num_results: String,
    pub search_trend: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacklinkRow {
    pub source_url: String,
    pub target_url: String,
    pub anchor_text: String,
    pub follow_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorRow {
    pub domain: String,
    pub common_keywords: String,
    pub competition_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRow {
    pub page_url: String,
    pub traffic_percentage: String,
    pub keywords: String,
}
