//! SEO Metrics Provider — pluggable, trait-based source of keyword metrics.
//!
//! Default: `MockSeoProvider` (randomized within realistic ranges, no network).
//! A real SEO API client would implement the same trait and drop in at
//! startup without touching callers.
//!
//! `AppState` holds an `Arc<dyn SeoProvider>`.

use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Fixed-shape metrics record for one keyword.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeoMetrics {
    pub search_volume: u32,
    pub keyword_difficulty: u32,
    /// Average cost-per-click in dollars, rounded to cents.
    pub avg_cpc: f64,
}

#[async_trait]
pub trait SeoProvider: Send + Sync {
    async fn fetch(&self, keyword: &str) -> Result<SeoMetrics, AppError>;
}

/// Mock provider: random metrics in the ranges a real keyword tool would
/// report. Volume 1,000–100,000; difficulty 0–100; CPC $0.50–$10.00.
pub struct MockSeoProvider;

#[async_trait]
impl SeoProvider for MockSeoProvider {
    async fn fetch(&self, _keyword: &str) -> Result<SeoMetrics, AppError> {
        let mut rng = rand::thread_rng();
        let avg_cpc: f64 = rng.gen_range(0.5..10.0);
        Ok(SeoMetrics {
            search_volume: rng.gen_range(1_000..=100_000),
            keyword_difficulty: rng.gen_range(0..=100),
            avg_cpc: (avg_cpc * 100.0).round() / 100.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_metrics_within_documented_ranges() {
        let metrics = MockSeoProvider.fetch("wireless earbuds").await.unwrap();

        assert!((1_000..=100_000).contains(&metrics.search_volume));
        assert!(metrics.keyword_difficulty <= 100);
        assert!((0.5..=10.0).contains(&metrics.avg_cpc));
        // Rounded to cents.
        let cents = metrics.avg_cpc * 100.0;
        assert!((cents - cents.round()).abs() < 1e-6);
    }

    #[test]
    fn test_seo_metrics_serde_shape() {
        let metrics = SeoMetrics {
            search_volume: 42_000,
            keyword_difficulty: 55,
            avg_cpc: 1.23,
        };
        let value = serde_json::to_value(metrics).unwrap();

        assert_eq!(value["search_volume"], 42_000);
        assert_eq!(value["keyword_difficulty"], 55);
        assert_eq!(value["avg_cpc"], 1.23);
    }
}
