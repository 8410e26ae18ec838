//! Stylesheet generation from the action log.
//!
//! This module turns recorded actions into CSS text. Output is fully
//! deterministic: the layer declaration lists effective layers in
//! first-occurrence order, and rule blocks follow the log in sequence
//! order, one block per action.

use std::collections::HashSet;
use std::fmt;

use cssparser::serialize_identifier;
use memchr::memmem;

use crate::action::{Action, ActionKind};
use crate::error::{Error, Result};
use crate::style::{Style, css_property_name};

/// The importance marker banned from rendered declarations.
const IMPORTANT: &[u8] = b"!important";

/// A rendered stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    /// The `@layer` statement establishing priority order.
    pub layer_declaration: String,
    /// Effective layer names in declaration order.
    pub layers: Vec<String>,
    /// One rule block per recorded action, in sequence order.
    pub rules: Vec<String>,
}

impl Stylesheet {
    /// The complete stylesheet text: the layer declaration followed by the
    /// rule blocks, one line each.
    pub fn text(&self) -> String {
        let mut out = String::new();
        if !self.layer_declaration.is_empty() {
            out.push_str(&self.layer_declaration);
            out.push('\n');
        }
        for rule in &self.rules {
            out.push_str(rule);
            out.push('\n');
        }
        out
    }

    /// Check if the stylesheet has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Render the action log into a stylesheet.
///
/// Fails without producing an artifact if any rendered declaration
/// contains `!important`.
pub(crate) fn build_stylesheet(actions: &[Action]) -> Result<Stylesheet> {
    let layers = collect_layers(actions);
    let layer_declaration = render_layer_declaration(&layers);

    let finder = memmem::Finder::new(IMPORTANT);
    let mut rules = Vec::with_capacity(actions.len());
    for action in actions {
        rules.push(render_rule(action, &finder)?);
    }

    Ok(Stylesheet {
        layer_declaration,
        layers,
        rules,
    })
}

/// Effective layer names in first-occurrence order.
fn collect_layers(actions: &[Action]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut layers = Vec::new();
    for action in actions {
        let name = action.effective_layer();
        if seen.insert(name.to_string()) {
            layers.push(name.to_string());
        }
    }
    layers
}

fn render_layer_declaration(layers: &[String]) -> String {
    if layers.is_empty() {
        return String::new();
    }
    let mut out = String::from("@layer ");
    for (i, name) in layers.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        serialize_identifier(name, &mut out).unwrap();
    }
    out.push(';');
    out
}

fn render_rule(action: &Action, finder: &memmem::Finder) -> Result<String> {
    let selector = render_selector(action.kind());
    let declarations = render_declarations(action.style(), &selector, finder)?;

    let mut out = String::from("@layer ");
    serialize_identifier(action.effective_layer(), &mut out).unwrap();
    out.push_str(" { ");
    out.push_str(&selector);
    out.push_str(" { ");
    out.push_str(&declarations);
    out.push_str("} }");
    Ok(out)
}

/// The selector for an action. Rule names become escaped id selectors;
/// sub-rule fragments stay verbatim, paired with every base.
fn render_selector(kind: &ActionKind) -> String {
    match kind {
        ActionKind::IdRule { name } => {
            let mut out = String::from("#");
            serialize_identifier(name, &mut out).unwrap();
            out
        }
        ActionKind::SubRule { bases, selectors } => {
            let mut out = String::new();
            for (i, base) in bases.iter().enumerate() {
                for (j, fragment) in selectors.iter().enumerate() {
                    if i > 0 || j > 0 {
                        out.push_str(", ");
                    }
                    out.push('#');
                    serialize_identifier(base, &mut out).unwrap();
                    out.push(' ');
                    out.push_str(fragment);
                }
            }
            out
        }
    }
}

/// Render `name: value; ` pairs, scanning each declaration for the
/// importance marker as it is written.
fn render_declarations(style: &Style, selector: &str, finder: &memmem::Finder) -> Result<String> {
    let mut out = String::new();
    for (name, value) in style.iter() {
        let css_name = css_property_name(name);
        let start = out.len();
        out.push_str(&css_name);
        out.push_str(": ");
        out.push_str(value);
        out.push_str("; ");
        if finder.find(out[start..].as_bytes()).is_some() {
            return Err(Error::ForbiddenImportant {
                selector: selector.to_string(),
                property: css_name,
            });
        }
    }
    Ok(out)
}
