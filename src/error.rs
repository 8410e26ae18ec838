//! Error types for lamina operations.

use thiserror::Error;

/// Errors that can occur while recording rules or building a stylesheet.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Styling has not begun: call begin() first")]
    NotBegun,

    #[error("Stylesheet already built: the pipeline is single-shot")]
    AlreadyBuilt,

    #[error("Empty style: a rule needs at least one property")]
    EmptyStyle,

    #[error("Empty rule name: rules must target a non-empty element id")]
    EmptyName,

    #[error("Rule name already registered: {0:?}")]
    DuplicateName(String),

    #[error("No element with id {0:?} in the document")]
    UnknownId(String),

    #[error("Layer {0:?} is still open: close it before opening another")]
    LayerAlreadyOpen(String),

    #[error("Invalid layer name {0:?}: must be non-empty and contain no whitespace")]
    InvalidLayerName(String),

    #[error("Layer name {0:?} already used: a closed layer cannot reopen")]
    DuplicateLayer(String),

    #[error("Layer mismatch: tried to close {requested:?} but the open layer is {open:?}")]
    LayerMismatch {
        requested: String,
        open: Option<String>,
    },

    #[error("Sub-rule bases have no registered id rule: {0:?}")]
    MissingBaseRules(Vec<String>),

    #[error("Sub-rule bases contain duplicates: {0:?}")]
    DuplicateTargets(Vec<String>),

    #[error("Sub-rule needs at least one base and one selector")]
    EmptySubRule,

    #[error("Duplicate element ids in document markup: {0:?}")]
    DuplicateElementIds(Vec<String>),

    #[error("No \"!important\" allowed ({selector:?}, property {property:?}): it breaks layer ordering")]
    ForbiddenImportant { selector: String, property: String },
}

pub type Result<T> = std::result::Result<T, Error>;
