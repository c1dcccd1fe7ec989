//! FoodScan MCP Server Implementation
//!
//! Implements the MCP server with all FoodScan tools.

use std::collections::BTreeMap;
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::lookup::ProductClient;
use crate::models::{Nutriments, ProductRecord};
use crate::tools::analysis;
use crate::tools::status::StatusTracker;

/// FoodScan MCP Service
#[derive(Clone)]
pub struct FoodScanService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    client: ProductClient,
    tool_router: ToolRouter<FoodScanService>,
}

impl FoodScanService {
    pub fn new(client: ProductClient) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(client.base_url()))),
            client,
            tool_router: Self::tool_router(),
        }
    }
}

/// Serialize a tool response as pretty JSON text content
fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LookupProductParams {
    /// Product barcode (digits only)
    pub barcode: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AnalyzeProductParams {
    /// Product name (optional, echoed back)
    pub product_name: Option<String>,
    /// Brand names (optional, echoed back)
    pub brands: Option<String>,
    /// Ingredient list as printed on the package
    pub ingredients_text: Option<String>,
    /// Allergen declaration (e.g. "Contains: wheat, milk")
    pub allergens: Option<String>,
    /// "May contain" traces (optional, echoed back)
    pub traces: Option<String>,
    /// NOVA processing group, 1-4
    pub nova_group: Option<i64>,
    /// Per-100g nutriment values keyed like "fat_100g", in grams (energy in kcal)
    #[serde(default)]
    pub nutriments: BTreeMap<String, Option<f64>>,
}

impl From<AnalyzeProductParams> for ProductRecord {
    fn from(p: AnalyzeProductParams) -> Self {
        ProductRecord {
            product_name: p.product_name,
            brands: p.brands,
            ingredients_text: p.ingredients_text,
            allergens: p.allergens,
            traces: p.traces,
            nova_group: p.nova_group,
            image_url: None,
            nutriments: Nutriments::from(p.nutriments),
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ClassifyIngredientsParams {
    /// Ingredient text to classify
    pub text: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct NormalizeNutrientsParams {
    /// Per-100g nutriment values keyed like "vitamin-c_100g", in grams (energy in kcal)
    pub nutriments: BTreeMap<String, Option<f64>>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DescribeNovaGroupParams {
    /// NOVA processing group, 1-4
    pub nova_group: Option<i64>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl FoodScanService {
    // --- Status ---

    #[tool(description = "Get the current status of the FoodScan service including build info, lookup counters, and process information")]
    async fn foodscan_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        json_result(&status)
    }

    #[tool(description = "Get step-by-step instructions for checking a product. Call this when starting a scanning session or when unsure how to use the analysis tools.")]
    fn scan_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::SCAN_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(SCAN_INSTRUCTIONS)]))
    }

    // --- Analysis ---

    #[tool(description = "Look up a packaged food by barcode and report gluten, lactose and ultra-processed status plus normalized nutrition facts")]
    async fn lookup_product(&self, Parameters(p): Parameters<LookupProductParams>) -> Result<CallToolResult, McpError> {
        let result = analysis::lookup_product(&self.client, &p.barcode).await;
        self.status_tracker.lock().await.record_lookup(result.is_ok());
        let report = result.map_err(|e| McpError::internal_error(e, None))?;
        json_result(&report)
    }

    #[tool(description = "Analyze a product from its ingredient list, allergen declaration, NOVA group and per-100g nutriments")]
    fn analyze_product(&self, Parameters(p): Parameters<AnalyzeProductParams>) -> Result<CallToolResult, McpError> {
        let report = analysis::analyze_record(ProductRecord::from(p)).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&report)
    }

    #[tool(description = "Check raw ingredient text for gluten, lactose and ultra-processed markers")]
    fn classify_ingredients(&self, Parameters(p): Parameters<ClassifyIngredientsParams>) -> Result<CallToolResult, McpError> {
        json_result(&analysis::classify_ingredients(&p.text))
    }

    #[tool(description = "Convert per-100g nutriment values into display units grouped as macronutrients, vitamins and minerals")]
    fn normalize_nutrients(&self, Parameters(p): Parameters<NormalizeNutrientsParams>) -> Result<CallToolResult, McpError> {
        json_result(&analysis::normalize_nutrients(p.nutriments))
    }

    #[tool(description = "Describe what a NOVA processing group means")]
    fn describe_nova_group(&self, Parameters(p): Parameters<DescribeNovaGroupParams>) -> Result<CallToolResult, McpError> {
        json_result(&analysis::describe_nova_group(p.nova_group))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for FoodScanService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "foodscan".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("FoodScan".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "FoodScan - Packaged food ingredient and nutrition analysis. \
                 IMPORTANT: Call scan_instructions before the first analysis. \
                 Barcode: lookup_product. \
                 Manual entry: analyze_product, classify_ingredients, normalize_nutrients. \
                 Reference: describe_nova_group. Service: foodscan_status."
                    .into(),
            ),
        }
    }
}
