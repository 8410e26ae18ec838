//! JSON rule manifests for the command-line interface.
//!
//! A manifest is a JSON object with an `entries` array. Each entry is
//! either a rule or a layer wrapping a list of rules:
//!
//! ```json
//! {
//!   "entries": [
//!     { "layer": "hero", "rules": [{ "ids": ["hero"], "style": { "display": "flex" } }] },
//!     { "ids": ["main"], "style": { "color": "green" } },
//!     { "bases": ["main"], "selectors": ["li"], "style": { "marginTop": "1rem" } }
//!   ]
//! }
//! ```
//!
//! Style objects map property names to string values; JSON object order is
//! the declaration order.

use serde::Deserialize;
use serde::de::{MapAccess, Visitor};

use crate::error::Result;
use crate::markup::DocumentIndex;
use crate::registry::Registry;
use crate::style::Style;

/// A parsed rule manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub entries: Vec<Entry>,
}

/// One manifest entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    /// A named layer holding rules recorded between begin and end.
    Layer { layer: String, rules: Vec<Rule> },
    /// A rule outside any explicit layer.
    Rule(Rule),
}

/// A single rule registration.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Rule {
    /// One id rule per listed element id.
    Id { ids: Vec<String>, style: Style },
    /// A sub-rule scoped under registered bases.
    Sub {
        bases: Vec<String>,
        selectors: Vec<String>,
        style: Style,
    },
}

impl Manifest {
    /// Parse a manifest from JSON text.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Replay every entry against a registry, in manifest order.
    ///
    /// The registry must already be begun. The first failing entry aborts
    /// the replay with that entry's error.
    pub fn apply<D: DocumentIndex>(&self, registry: &mut Registry<D>) -> Result<()> {
        for entry in &self.entries {
            match entry {
                Entry::Layer { layer, rules } => {
                    registry.layer_begin(layer)?;
                    for rule in rules {
                        apply_rule(registry, rule)?;
                    }
                    registry.layer_end(layer)?;
                }
                Entry::Rule(rule) => apply_rule(registry, rule)?,
            }
        }
        Ok(())
    }
}

fn apply_rule<D: DocumentIndex>(registry: &mut Registry<D>, rule: &Rule) -> Result<()> {
    match rule {
        Rule::Id { ids, style } => registry.register_many(ids.iter().map(String::as_str), style),
        Rule::Sub {
            bases,
            selectors,
            style,
        } => registry.sub_rule(
            bases.iter().map(String::as_str),
            selectors.iter().map(String::as_str),
            style.clone(),
        ),
    }
}

struct StyleVisitor;

impl<'de> Visitor<'de> for StyleVisitor {
    type Value = Style;

    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("a map of property names to string values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Style, A::Error> {
        let mut style = Style::new();
        while let Some((name, value)) = map.next_entry::<String, String>()? {
            style.set(name, value);
        }
        Ok(style)
    }
}

impl<'de> Deserialize<'de> for Style {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(StyleVisitor)
    }
}
