//! Framework Catalog — the five framework shapes and their canned examples.
//!
//! Built once at startup and shared read-only through `AppState`.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("unknown framework type '{0}'")]
    UnknownType(String),
}

/// The abstract shape a generated framework takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameworkType {
    Linear,
    NonLinear,
    Cyclical,
    Hierarchical,
    Matrix,
}

impl FrameworkType {
    pub const ALL: [FrameworkType; 5] = [
        FrameworkType::Linear,
        FrameworkType::NonLinear,
        FrameworkType::Cyclical,
        FrameworkType::Hierarchical,
        FrameworkType::Matrix,
    ];

    /// The wire key, e.g. `non_linear`.
    pub fn key(self) -> &'static str {
        match self {
            FrameworkType::Linear => "linear",
            FrameworkType::NonLinear => "non_linear",
            FrameworkType::Cyclical => "cyclical",
            FrameworkType::Hierarchical => "hierarchical",
            FrameworkType::Matrix => "matrix",
        }
    }
}

impl fmt::Display for FrameworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FrameworkType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FrameworkType::ALL
            .into_iter()
            .find(|t| t.key() == s)
            .ok_or_else(|| CatalogError::UnknownType(s.to_string()))
    }
}

/// Static description of one framework shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameworkProfile {
    pub name: &'static str,
    pub description: &'static str,
    pub characteristics: &'static [&'static str],
    /// Human-readable size hint, e.g. "3-8 steps".
    pub ideal_steps: &'static str,
    pub examples: &'static [&'static str],
}

/// A well-known framework of a given shape, shown to users as inspiration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameworkExample {
    pub name: &'static str,
    pub elements: &'static [&'static str],
}

#[derive(Debug, Clone)]
pub struct Catalog {
    profiles: BTreeMap<FrameworkType, FrameworkProfile>,
    examples: BTreeMap<FrameworkType, FrameworkExample>,
}

impl Catalog {
    /// The standard five-shape catalog.
    pub fn standard() -> Self {
        let profiles = FrameworkType::ALL
            .into_iter()
            .map(|t| (t, standard_profile(t)))
            .collect();
        let examples = FrameworkType::ALL
            .into_iter()
            .map(|t| (t, standard_example(t)))
            .collect();
        Self { profiles, examples }
    }

    /// Resolves a wire key to its type and profile.
    pub fn lookup(&self, key: &str) -> Result<(FrameworkType, &FrameworkProfile), CatalogError> {
        let kind: FrameworkType = key.parse()?;
        self.profiles
            .get(&kind)
            .map(|profile| (kind, profile))
            .ok_or_else(|| CatalogError::UnknownType(key.to_string()))
    }

    pub fn profiles(&self) -> &BTreeMap<FrameworkType, FrameworkProfile> {
        &self.profiles
    }

    pub fn examples(&self) -> &BTreeMap<FrameworkType, FrameworkExample> {
        &self.examples
    }
}

fn standard_profile(kind: FrameworkType) -> FrameworkProfile {
    match kind {
        FrameworkType::Linear => FrameworkProfile {
            name: "Linear",
            description: "A finite, one-way sequence of steps that must be completed in order",
            characteristics: &["Causality", "Irreversibility", "Completion Trigger"],
            ideal_steps: "3-8 steps",
            examples: &["Design Thinking", "Sales Pipeline", "Product Launch"],
        },
        FrameworkType::NonLinear => FrameworkProfile {
            name: "Non-Linear",
            description: "Independent elements that can be used in any order or combination",
            characteristics: &["Order-agnostic", "Equal weight", "Re-mixability"],
            ideal_steps: "4-9 pillars",
            examples: &["7 Habits", "McKinsey 7-S", "Marketing 4 Ps"],
        },
        FrameworkType::Cyclical => FrameworkProfile {
            name: "Cyclical",
            description: "A closed loop where the output feeds back into the first stage",
            characteristics: &["Recurrence", "Feedback", "Momentum over Completion"],
            ideal_steps: "3-6 segments",
            examples: &["PDCA Cycle", "Habit Loop", "Agile Sprint"],
        },
        FrameworkType::Hierarchical => FrameworkProfile {
            name: "Hierarchical",
            description: "Stacked levels where higher tiers include or supersede lower ones",
            characteristics: &["Containment", "Priority/Status", "Directional Advancement"],
            ideal_steps: "3-7 tiers",
            examples: &["Maslow's Hierarchy", "Bloom's Taxonomy", "Skill Levels"],
        },
        FrameworkType::Matrix => FrameworkProfile {
            name: "Matrix",
            description: "Two or more axes mapping ideas for diagnosis and prioritization",
            characteristics: &[
                "Orthogonal Axes",
                "Quadrants/Zones",
                "Placement over Progression",
            ],
            ideal_steps: "2x2 to 5x5 grid",
            examples: &["Eisenhower Matrix", "BCG Matrix", "SWOT Analysis"],
        },
    }
}

fn standard_example(kind: FrameworkType) -> FrameworkExample {
    match kind {
        FrameworkType::Linear => FrameworkExample {
            name: "Design Thinking 5-Step Process",
            elements: &["Empathise", "Define", "Ideate", "Prototype", "Test"],
        },
        FrameworkType::NonLinear => FrameworkExample {
            name: "Marketing 4 Ps",
            elements: &["Product", "Price", "Place", "Promotion"],
        },
        FrameworkType::Cyclical => FrameworkExample {
            name: "PDCA Improvement Cycle",
            elements: &["Plan", "Do", "Check", "Act"],
        },
        FrameworkType::Hierarchical => FrameworkExample {
            name: "Maslow's Hierarchy of Needs",
            elements: &[
                "Physiological",
                "Safety",
                "Love/Belonging",
                "Esteem",
                "Self-Actualization",
            ],
        },
        FrameworkType::Matrix => FrameworkExample {
            name: "Eisenhower Matrix",
            elements: &["Do First", "Schedule", "Delegate", "Delete"],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_has_complete_profile() {
        let catalog = Catalog::standard();
        for kind in FrameworkType::ALL {
            let (resolved, profile) = catalog.lookup(kind.key()).unwrap();
            assert_eq!(resolved, kind);
            assert!(!profile.name.is_empty(), "{kind} has no name");
            assert!(!profile.description.is_empty(), "{kind} has no description");
            assert!(!profile.characteristics.is_empty());
            assert!(!profile.ideal_steps.is_empty());
            assert!(!profile.examples.is_empty());
        }
    }

    #[test]
    fn test_lookup_unknown_type() {
        let catalog = Catalog::standard();
        assert_eq!(
            catalog.lookup("spiral").unwrap_err(),
            CatalogError::UnknownType("spiral".to_string())
        );
        assert!(catalog.lookup("").is_err());
        assert!(catalog.lookup("Linear").is_err());
    }

    #[test]
    fn test_key_roundtrips_through_from_str() {
        for kind in FrameworkType::ALL {
            assert_eq!(kind.key().parse::<FrameworkType>().unwrap(), kind);
        }
        assert_eq!(FrameworkType::NonLinear.to_string(), "non_linear");
    }

    #[test]
    fn test_serde_key_matches_wire_key() {
        for kind in FrameworkType::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.key()));
        }
    }

    #[test]
    fn test_profiles_serialize_keyed_by_type() {
        let catalog = Catalog::standard();
        let value = serde_json::to_value(catalog.profiles()).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 5);
        assert_eq!(map["non_linear"]["name"], "Non-Linear");
        assert_eq!(map["matrix"]["ideal_steps"], "2x2 to 5x5 grid");
        assert_eq!(map["linear"]["characteristics"][0], "Causality");
    }

    #[test]
    fn test_examples_cover_every_type() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.examples().len(), 5);
        for kind in FrameworkType::ALL {
            let example = &catalog.examples()[&kind];
            assert!(!example.name.is_empty());
            assert!(!example.elements.is_empty());
        }
        assert_eq!(
            catalog.examples()[&FrameworkType::Hierarchical].elements.len(),
            5
        );
    }
}
