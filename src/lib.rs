//! # lamina
//!
//! Declarative stylesheet generation built on CSS cascade layers.
//!
//! ## Features
//!
//! - Register element-id rules and scoped sub-rules against a document
//! - Organize rules into explicit `@layer` cascade layers
//! - Validate names, layer discipline, and document markup up front
//! - Render one deterministic stylesheet per registry
//!
//! ## Quick Start
//!
//! ```
//! use lamina::{ElementIndex, Registry, Style};
//!
//! let document: ElementIndex = ["hero", "main"].into_iter().collect();
//! let mut registry = Registry::new(document);
//!
//! registry.begin()?;
//! registry.layer_begin("hero")?;
//! registry.register("hero", Style::new().with("display", "flex"))?;
//! registry.layer_end("hero")?;
//! registry.register("main", Style::new().with("color", "green"))?;
//!
//! let sheet = registry.build()?;
//! assert_eq!(
//!     sheet.text(),
//!     "@layer hero, main;\n\
//!      @layer hero { #hero { display: flex; } }\n\
//!      @layer main { #main { color: green; } }\n"
//! );
//! # Ok::<(), lamina::Error>(())
//! ```
//!
//! ## How priority works
//!
//! Later layers in the `@layer` declaration win, regardless of selector
//! specificity inside earlier layers. A rule registered outside any
//! explicit layer gets an implicit layer named after itself, so every
//! rule block is layered and the declaration alone decides priority.

pub mod action;
pub mod error;
pub mod layer;
pub mod markup;
pub mod registry;
pub mod render;
pub mod style;

#[cfg(feature = "cli")]
pub mod manifest;

pub use action::{Action, ActionKind};
pub use error::{Error, Result};
pub use layer::LayerStack;
pub use markup::{DocumentIndex, ElementIndex, HtmlIndex};
pub use registry::Registry;
pub use render::Stylesheet;
pub use style::{Style, css_property_name};
