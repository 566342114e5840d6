// OpenAPI description of the demo routes, served at /openapi.json

use serde_json::{json, Map, Value};

use super::demo_data::{API_VERSION, SERVICE_DESCRIPTION, SERVICE_NAME};
use super::Route;

/// Build the OpenAPI 3.1 document for every documented route
pub fn document() -> Value {
    let mut paths = Map::new();
    for route in Route::ALL {
        if let Some((summary, operation_id)) = route.operation() {
            paths.insert(
                route.path().to_string(),
                json!({
                    "get": {
                        "summary": summary,
                        "operationId": operation_id,
                        "responses": {
                            "200": {
                                "description": "Successful Response",
                                "content": { "application/json": { "schema": {} } }
                            }
                        }
                    }
                }),
            );
        }
    }

    json!({
        "openapi": "3.1.0",
        "info": {
            "title": SERVICE_NAME,
            "description": SERVICE_DESCRIPTION,
            "version": API_VERSION,
        },
        "paths": paths,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_demo_routes_only() {
        let doc = document();
        assert_eq!(doc["info"]["title"], SERVICE_NAME);
        let paths = doc["paths"].as_object().unwrap();
        assert_eq!(paths.len(), 5);
        assert!(paths.contains_key("/api/price-changes/pending"));
        assert!(!paths.contains_key("/docs"));
        assert_eq!(paths["/health"]["get"]["operationId"], "health_check_health_get");
    }
}
