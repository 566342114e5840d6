// Hardcoded demo payloads
// Sample values only; nothing here is computed or persisted.

use super::types::{
    Analytics, AnalyticsSummary, EndpointIndex, HealthStatus, MarginDistribution,
    PendingChangeList, PendingPriceChange, Product, ProductList, RevenueImpact, ServiceBanner,
};

pub const SERVICE_NAME: &str = "PriceOptimize AI";
pub const SERVICE_DESCRIPTION: &str = "Dynamic Pricing Agent - Demo API";
pub const API_VERSION: &str = "1.0.0";

pub fn service_banner() -> ServiceBanner {
    ServiceBanner {
        message: "🚀 PriceOptimize AI API",
        status: "running",
        version: API_VERSION,
        endpoints: EndpointIndex {
            health: "/health",
            docs: "/docs",
            demo_products: "/api/products",
            demo_analytics: "/api/analytics",
        },
    }
}

pub const fn health_status() -> HealthStatus {
    HealthStatus {
        status: "healthy",
        service: SERVICE_NAME,
        database: "connected",
        cache: "active",
    }
}

pub fn products() -> ProductList {
    ProductList::new(
        vec![
            Product {
                id: 1,
                sku: "SKU-001",
                name: "Apple iPhone 15 Pro 256GB",
                category: "Electronics",
                current_price: 1062.50,
                cost: 850.00,
                margin: 25.0,
                competitor_avg_price: 1099.99,
                inventory_level: 45,
                recommended_price: 1049.99,
                confidence: 0.92,
            },
            Product {
                id: 2,
                sku: "SKU-002",
                name: "Nike Air Max 270 Sneakers",
                category: "Apparel",
                current_price: 116.25,
                cost: 75.00,
                margin: 55.0,
                competitor_avg_price: 129.99,
                inventory_level: 120,
                recommended_price: 119.99,
                confidence: 0.88,
            },
            Product {
                id: 3,
                sku: "SKU-003",
                name: "KitchenAid Stand Mixer 5-Quart",
                category: "Home Goods",
                current_price: 304.50,
                cost: 210.00,
                margin: 45.0,
                competitor_avg_price: 319.99,
                inventory_level: 28,
                recommended_price: 299.99,
                confidence: 0.85,
            },
        ],
        "Demo data - showing sample products",
    )
}

pub const fn analytics() -> Analytics {
    Analytics {
        revenue_impact: RevenueImpact {
            actual_revenue: 150_000,
            counterfactual_revenue: 140_000,
            revenue_lift: 10_000,
            revenue_lift_percentage: 7.14,
            price_changes_count: 25,
        },
        margin_distribution: MarginDistribution {
            average_margin: 38.5,
            min_margin: 15.2,
            max_margin: 62.8,
            products_below_30: 12,
            products_30_to_50: 28,
            products_above_50: 10,
        },
        summary: AnalyticsSummary {
            total_products: 50,
            pending_approvals: 3,
            auto_approved_today: 7,
            avg_confidence: 0.87,
        },
        message: "Demo analytics data",
    }
}

pub fn pending_price_changes() -> PendingChangeList {
    PendingChangeList::new(
        vec![
            PendingPriceChange {
                id: 1,
                product_name: "Sony WH-1000XM5 Headphones",
                sku: "SKU-010",
                old_price: 350.00,
                new_price: 329.99,
                reason: "Competitive adjustment - Amazon pricing",
                confidence: 0.90,
                margin_after_change: 28.5,
                requires_approval: true,
            },
            PendingPriceChange {
                id: 2,
                product_name: "Levi's 501 Original Fit Jeans",
                sku: "SKU-015",
                old_price: 54.25,
                new_price: 49.99,
                reason: "High inventory (250 units) - clearance discount",
                confidence: 0.85,
                margin_after_change: 42.8,
                requires_approval: true,
            },
        ],
        "Demo pending approvals",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_match_entry_counts() {
        let products = products();
        assert_eq!(products.products.len(), 3);
        assert_eq!(products.total, products.products.len());

        let pending = pending_price_changes();
        assert_eq!(pending.pending_changes.len(), 2);
        assert_eq!(pending.total, pending.pending_changes.len());
    }

    #[test]
    fn test_every_pending_change_requires_approval() {
        assert!(pending_price_changes()
            .pending_changes
            .iter()
            .all(|c| c.requires_approval));
    }

    #[test]
    fn test_product_numbers_keep_float_and_integer_types() {
        let json = serde_json::to_string(&products().products[0]).unwrap();
        assert!(json.contains(r#""current_price":1062.5"#));
        assert!(json.contains(r#""cost":850.0"#));
        assert!(json.contains(r#""margin":25.0"#));
        assert!(json.contains(r#""inventory_level":45,"#));
        assert!(json.starts_with(r#"{"id":1,"sku":"SKU-001""#));
    }

    #[test]
    fn test_analytics_integers_have_no_fraction() {
        let json = serde_json::to_string(&analytics()).unwrap();
        assert!(json.starts_with(r#"{"revenue_impact":{"actual_revenue":150000,"#));
        assert!(json.contains(r#""revenue_lift_percentage":7.14"#));
        assert!(json.contains(r#""avg_confidence":0.87}"#));
        assert!(json.ends_with(r#""message":"Demo analytics data"}"#));
    }

    #[test]
    fn test_banner_keeps_emoji() {
        let json = serde_json::to_string(&service_banner()).unwrap();
        assert!(json.starts_with(r#"{"message":"🚀 PriceOptimize AI API","status":"running""#));
    }
}
