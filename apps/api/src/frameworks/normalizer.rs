//! Response Normalizer — turns raw completion text into a schema-complete `FrameworkResult`.
//!
//! Never fails. The model's reply is scanned for an embedded JSON object; when none
//! parses, a placeholder framework is synthesized instead. A parsed object is read
//! into a draft whose fields are all optional, then completed field by field:
//!
//! 1. `name`, `type`, `description` → `"Default <field>"` when absent
//! 2. `elements` → `[]` when absent or not a list; object items get their own
//!    defaults, anything else is kept verbatim. An empty list stays empty.
//! 3. `visual_concept`, `when_to_use`, `psychology_principle` → fixed defaults
//! 4. `best_practices`, `pitfalls` → a bare string becomes a one-item list;
//!    absent becomes a fixed one-item list; a list is kept item for item
//!
//! Present values are never overwritten. `null` counts as absent.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use tracing::warn;

use crate::frameworks::catalog::{FrameworkProfile, FrameworkType};
use crate::frameworks::models::{ElementEntry, FrameworkElement, FrameworkResult, ListItem};

const PLACEHOLDER_ELEMENT_COUNT: usize = 4;

const DEFAULT_ELEMENT_NAME: &str = "Framework Element";
const DEFAULT_ELEMENT_DESCRIPTION: &str = "Element description";
const DEFAULT_ACTIVITY: &str = "Key activity";
const DEFAULT_SUCCESS_CRITERIA: &str = "Success measure";

const DEFAULT_VISUAL_CONCEPT: &str = "Standard visual representation";
const DEFAULT_WHEN_TO_USE: &str = "General use cases";
const DEFAULT_PSYCHOLOGY_PRINCIPLE: &str = "Psychological foundation";
const DEFAULT_BEST_PRACTICE: &str = "Follow best practices";
const DEFAULT_PITFALL: &str = "Avoid common mistakes";

// ────────────────────────────────────────────────────────────────────────────
// Drafts: model output with every field optional
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
struct FrameworkDraft {
    #[serde(default, deserialize_with = "de_text")]
    name: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "de_text")]
    framework_type: Option<String>,
    #[serde(default, deserialize_with = "de_text")]
    description: Option<String>,
    #[serde(default)]
    elements: Option<Value>,
    #[serde(default, deserialize_with = "de_text")]
    visual_concept: Option<String>,
    #[serde(default, deserialize_with = "de_text")]
    when_to_use: Option<String>,
    #[serde(default, deserialize_with = "de_text_list")]
    best_practices: Option<Vec<ListItem>>,
    #[serde(default, deserialize_with = "de_text_list")]
    pitfalls: Option<Vec<ListItem>>,
    #[serde(default, deserialize_with = "de_text")]
    psychology_principle: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
struct ElementDraft {
    #[serde(default, deserialize_with = "de_text")]
    name: Option<String>,
    #[serde(default, deserialize_with = "de_text")]
    description: Option<String>,
    #[serde(default, deserialize_with = "de_text_list")]
    activities: Option<Vec<ListItem>>,
    #[serde(default, deserialize_with = "de_text")]
    success_criteria: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// Accepts any JSON value as text: strings as-is, other values as their JSON text.
fn de_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_to_text))
}

/// Accepts a list, kept item for item, or a single value as a one-item list.
fn de_text_list<'de, D>(deserializer: D) -> Result<Option<Vec<ListItem>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => Some(items.into_iter().map(ListItem::from).collect()),
        Some(other) => Some(vec![ListItem::from(other)]),
    })
}

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Extraction
// ────────────────────────────────────────────────────────────────────────────

/// Parses the span from the first `{` to the last `}` as a JSON object.
/// Returns `None` when there is no such span or it is not valid JSON.
pub fn extract_json_object(raw: &str) -> Option<Map<String, Value>> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }

    match serde_json::from_str::<Value>(&raw[start..=end]) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => None,
        Err(e) => {
            warn!("Completion contained malformed JSON: {e}");
            None
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Normalization
// ────────────────────────────────────────────────────────────────────────────

/// Normalizes a raw completion into a `FrameworkResult`.
///
/// `profile` and `industry` are only used to word the placeholder when the
/// completion holds no usable JSON object.
pub fn normalize_response(
    raw: &str,
    kind: FrameworkType,
    profile: &FrameworkProfile,
    industry: &str,
) -> FrameworkResult {
    match extract_json_object(raw) {
        Some(map) => complete_framework(map),
        None => {
            warn!(framework_type = %kind, "No JSON object in completion; using placeholder framework");
            placeholder_framework(kind, profile, industry)
        }
    }
}

/// Fills every missing field of a parsed object with its default.
pub fn complete_framework(map: Map<String, Value>) -> FrameworkResult {
    let draft: FrameworkDraft =
        serde_json::from_value(Value::Object(map)).unwrap_or_else(|e| {
            warn!("Unreadable framework object, defaulting every field: {e}");
            FrameworkDraft::default()
        });

    let elements = match draft.elements {
        Some(Value::Array(items)) => items.into_iter().map(complete_element).collect(),
        _ => Vec::new(),
    };

    FrameworkResult {
        name: draft.name.unwrap_or_else(|| "Default name".to_string()),
        framework_type: draft
            .framework_type
            .unwrap_or_else(|| "Default type".to_string()),
        description: draft
            .description
            .unwrap_or_else(|| "Default description".to_string()),
        elements,
        visual_concept: draft
            .visual_concept
            .unwrap_or_else(|| DEFAULT_VISUAL_CONCEPT.to_string()),
        when_to_use: draft
            .when_to_use
            .unwrap_or_else(|| DEFAULT_WHEN_TO_USE.to_string()),
        best_practices: draft
            .best_practices
            .unwrap_or_else(|| vec![ListItem::from(DEFAULT_BEST_PRACTICE)]),
        pitfalls: draft
            .pitfalls
            .unwrap_or_else(|| vec![ListItem::from(DEFAULT_PITFALL)]),
        psychology_principle: draft
            .psychology_principle
            .unwrap_or_else(|| DEFAULT_PSYCHOLOGY_PRINCIPLE.to_string()),
        extra: draft.extra,
    }
}

fn complete_element(item: Value) -> ElementEntry {
    if !item.is_object() {
        return ElementEntry::Opaque(item);
    }

    let draft: ElementDraft = serde_json::from_value(item).unwrap_or_default();
    ElementEntry::Structured(FrameworkElement {
        name: draft
            .name
            .unwrap_or_else(|| DEFAULT_ELEMENT_NAME.to_string()),
        description: draft
            .description
            .unwrap_or_else(|| DEFAULT_ELEMENT_DESCRIPTION.to_string()),
        activities: draft
            .activities
            .unwrap_or_else(|| vec![ListItem::from(DEFAULT_ACTIVITY)]),
        success_criteria: draft
            .success_criteria
            .unwrap_or_else(|| DEFAULT_SUCCESS_CRITERIA.to_string()),
        extra: draft.extra,
    })
}

/// The framework returned when the completion holds no usable JSON object.
pub fn placeholder_framework(
    kind: FrameworkType,
    profile: &FrameworkProfile,
    industry: &str,
) -> FrameworkResult {
    let elements = (1..=PLACEHOLDER_ELEMENT_COUNT)
        .map(|i| {
            ElementEntry::Structured(FrameworkElement {
                name: format!("Element {i}"),
                description: "Framework element description".to_string(),
                activities: vec![ListItem::from(DEFAULT_ACTIVITY)],
                success_criteria: DEFAULT_SUCCESS_CRITERIA.to_string(),
                extra: Map::new(),
            })
        })
        .collect();

    FrameworkResult {
        name: format!("{industry} {} Framework", profile.name),
        framework_type: kind.key().to_string(),
        description: format!("A {kind} framework designed for {industry}"),
        elements,
        visual_concept: DEFAULT_VISUAL_CONCEPT.to_string(),
        when_to_use: format!("Use when working in {industry}"),
        best_practices: vec![ListItem::from("Follow framework principles")],
        pitfalls: vec![ListItem::from(DEFAULT_PITFALL)],
        psychology_principle: format!("Leverages {kind} psychology principles"),
        extra: Map::new(),
    }
}
