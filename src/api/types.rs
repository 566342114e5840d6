// Response payload types
// Field declaration order is the key order on the wire.

use serde::Serialize;

/// `GET /` service banner
#[derive(Debug, Serialize)]
pub struct ServiceBanner {
    pub message: &'static str,
    pub status: &'static str,
    pub version: &'static str,
    pub endpoints: EndpointIndex,
}

#[derive(Debug, Serialize)]
pub struct EndpointIndex {
    pub health: &'static str,
    pub docs: &'static str,
    pub demo_products: &'static str,
    pub demo_analytics: &'static str,
}

/// `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub database: &'static str,
    pub cache: &'static str,
}

/// A catalog entry with its current and recommended price
#[derive(Debug, Serialize)]
pub struct Product {
    pub id: u32,
    pub sku: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub current_price: f64,
    pub cost: f64,
    /// Percent
    pub margin: f64,
    pub competitor_avg_price: f64,
    pub inventory_level: u32,
    pub recommended_price: f64,
    /// 0.0 - 1.0
    pub confidence: f64,
}

/// `GET /api/products`
#[derive(Debug, Serialize)]
pub struct ProductList {
    pub products: Vec<Product>,
    pub total: usize,
    pub message: &'static str,
}

impl ProductList {
    pub fn new(products: Vec<Product>, message: &'static str) -> Self {
        Self {
            total: products.len(),
            products,
            message,
        }
    }
}

/// `GET /api/analytics`
#[derive(Debug, Serialize)]
pub struct Analytics {
    pub revenue_impact: RevenueImpact,
    pub margin_distribution: MarginDistribution,
    pub summary: AnalyticsSummary,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RevenueImpact {
    pub actual_revenue: u64,
    pub counterfactual_revenue: u64,
    pub revenue_lift: u64,
    pub revenue_lift_percentage: f64,
    pub price_changes_count: u32,
}

#[derive(Debug, Serialize)]
pub struct MarginDistribution {
    pub average_margin: f64,
    pub min_margin: f64,
    pub max_margin: f64,
    pub products_below_30: u32,
    pub products_30_to_50: u32,
    pub products_above_50: u32,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsSummary {
    pub total_products: u32,
    pub pending_approvals: u32,
    pub auto_approved_today: u32,
    pub avg_confidence: f64,
}

/// A proposed price change waiting for a human decision
#[derive(Debug, Serialize)]
pub struct PendingPriceChange {
    pub id: u32,
    pub product_name: &'static str,
    pub sku: &'static str,
    pub old_price: f64,
    pub new_price: f64,
    pub reason: &'static str,
    pub confidence: f64,
    pub margin_after_change: f64,
    pub requires_approval: bool,
}

/// `GET /api/price-changes/pending`
#[derive(Debug, Serialize)]
pub struct PendingChangeList {
    pub pending_changes: Vec<PendingPriceChange>,
    pub total: usize,
    pub message: &'static str,
}

impl PendingChangeList {
    pub fn new(pending_changes: Vec<PendingPriceChange>, message: &'static str) -> Self {
        Self {
            total: pending_changes.len(),
            pending_changes,
            message,
        }
    }
}
