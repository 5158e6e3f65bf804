use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::frameworks::catalog::{Catalog, CatalogError, FrameworkType};

const DEFAULT_COMPLEXITY: &str = "medium";

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

/// Body of `POST /api/generate-framework` as it arrives on the wire.
/// Every field is optional; `null` behaves like an absent key.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateFrameworkBody {
    #[serde(rename = "type")]
    pub framework_type: Option<String>,
    pub industry: Option<String>,
    pub purpose: Option<String>,
    pub target_audience: Option<String>,
    pub complexity: Option<String>,
}

/// A validated generation request: the type is known to the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub kind: FrameworkType,
    pub industry: String,
    pub purpose: String,
    pub target_audience: String,
    pub complexity: String,
}

impl GenerationRequest {
    pub fn from_body(body: GenerateFrameworkBody, catalog: &Catalog) -> Result<Self, CatalogError> {
        let key = body.framework_type.unwrap_or_default();
        let (kind, _) = catalog.lookup(&key)?;

        Ok(Self {
            kind,
            industry: body.industry.unwrap_or_default(),
            purpose: body.purpose.unwrap_or_default(),
            target_audience: body.target_audience.unwrap_or_default(),
            complexity: body
                .complexity
                .unwrap_or_else(|| DEFAULT_COMPLEXITY.to_string()),
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Result types
// ────────────────────────────────────────────────────────────────────────────

/// An entry of a text list (`activities`, `best_practices`, `pitfalls`).
/// Items that are not strings are kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ListItem {
    Text(String),
    Opaque(Value),
}

impl From<Value> for ListItem {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => ListItem::Text(s),
            other => ListItem::Opaque(other),
        }
    }
}

impl From<&str> for ListItem {
    fn from(text: &str) -> Self {
        ListItem::Text(text.to_string())
    }
}

impl PartialEq<&str> for ListItem {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, ListItem::Text(s) if s == other)
    }
}

/// One step, pillar, stage, tier or quadrant of a generated framework.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameworkElement {
    pub name: String,
    pub description: String,
    pub activities: Vec<ListItem>,
    pub success_criteria: String,
    /// Keys the model added beyond the schema, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An entry of `elements`. Model output that is not a JSON object is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ElementEntry {
    Structured(FrameworkElement),
    Opaque(Value),
}

/// The normalized framework returned to callers. Every field is always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameworkResult {
    pub name: String,
    #[serde(rename = "type")]
    pub framework_type: String,
    pub description: String,
    pub elements: Vec<ElementEntry>,
    pub visual_concept: String,
    pub when_to_use: String,
    pub best_practices: Vec<ListItem>,
    pub pitfalls: Vec<ListItem>,
    pub psychology_principle: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
