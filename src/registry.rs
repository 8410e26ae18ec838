//! The styling pipeline: record rules, then build once.
//!
//! A [`Registry`] owns a [`DocumentIndex`] and an append-only action log.
//! Rules are validated as they are recorded, so the log only ever holds
//! well-formed actions; [`build`](Registry::build) turns the log into a
//! [`Stylesheet`] exactly once.

use crate::action::{Action, ActionKind};
use crate::error::{Error, Result};
use crate::layer::LayerStack;
use crate::markup::{self, DocumentIndex};
use crate::render::{self, Stylesheet};
use crate::style::Style;

/// Records styling actions against a document and builds the stylesheet.
#[derive(Debug)]
pub struct Registry<D> {
    document: D,
    actions: Vec<Action>,
    layers: LayerStack,
    next_sequence: u32,
    has_begun: bool,
    has_built: bool,
}

impl<D: DocumentIndex> Registry<D> {
    pub fn new(document: D) -> Self {
        Self {
            document,
            actions: Vec::new(),
            layers: LayerStack::new(),
            next_sequence: 1,
            has_begun: false,
            has_built: false,
        }
    }

    /// Open the pipeline for registrations.
    ///
    /// Calling `begin` again before building is a no-op; calling it after
    /// the stylesheet was built fails, a registry is single-shot.
    pub fn begin(&mut self) -> Result<()> {
        if self.has_built {
            return Err(Error::AlreadyBuilt);
        }
        self.has_begun = true;
        Ok(())
    }

    /// Record a rule for one element id.
    ///
    /// The name must be a non-empty element id present in the document and
    /// not yet used by another rule. The style must have at least one
    /// property.
    pub fn register(&mut self, name: impl Into<String>, style: Style) -> Result<()> {
        self.ensure_open()?;
        if style.is_empty() {
            return Err(Error::EmptyStyle);
        }
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        if self.name_in_log(&name) {
            return Err(Error::DuplicateName(name));
        }
        if !self.document.has_element(&name) {
            return Err(Error::UnknownId(name));
        }
        self.push(style, ActionKind::IdRule { name });
        Ok(())
    }

    /// Record one rule per name, sharing the same style.
    ///
    /// Names are processed in order and the first failure aborts; rules
    /// recorded before the failure stay in the log. The pipeline and style
    /// checks run even when `names` is empty.
    pub fn register_many<I>(&mut self, names: I, style: &Style) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.ensure_open()?;
        if style.is_empty() {
            return Err(Error::EmptyStyle);
        }
        for name in names {
            self.register(name, style.clone())?;
        }
        Ok(())
    }

    /// Record a rule scoped under previously registered id rules.
    ///
    /// Every base must name a distinct, already registered id rule, and
    /// both lists must be non-empty. Selector fragments are kept verbatim;
    /// the rendered selector pairs every base with every fragment.
    pub fn sub_rule<B, S>(&mut self, bases: B, selectors: S, style: Style) -> Result<()>
    where
        B: IntoIterator,
        B::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        self.ensure_open()?;
        if style.is_empty() {
            return Err(Error::EmptyStyle);
        }
        let bases: Vec<String> = bases.into_iter().map(Into::into).collect();
        let selectors: Vec<String> = selectors.into_iter().map(Into::into).collect();
        if bases.is_empty() || selectors.is_empty() {
            return Err(Error::EmptySubRule);
        }
        if bases.iter().any(String::is_empty) {
            return Err(Error::EmptyName);
        }

        let duplicates = markup::duplicate_ids(&bases);
        if !duplicates.is_empty() {
            return Err(Error::DuplicateTargets(duplicates));
        }

        let missing: Vec<String> = bases
            .iter()
            .filter(|base| !self.id_rule_exists(base))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(Error::MissingBaseRules(missing));
        }

        self.push(style, ActionKind::SubRule { bases, selectors });
        Ok(())
    }

    /// Open an explicit cascade layer.
    pub fn layer_begin(&mut self, name: &str) -> Result<()> {
        self.ensure_open()?;
        self.layers.begin(name)
    }

    /// Close the open cascade layer.
    pub fn layer_end(&mut self, name: &str) -> Result<()> {
        self.ensure_open()?;
        self.layers.end(name)
    }

    /// Validate the document and render the stylesheet.
    ///
    /// Fails if any element id occurs more than once in the document. After
    /// a successful or rendering-failed build the registry is spent; only a
    /// markup failure leaves it open so the document can be fixed first.
    pub fn build(&mut self) -> Result<Stylesheet> {
        self.ensure_open()?;

        let duplicates = markup::duplicate_ids(&self.document.element_ids());
        if !duplicates.is_empty() {
            return Err(Error::DuplicateElementIds(duplicates));
        }

        self.has_built = true;
        render::build_stylesheet(&self.actions)
    }

    /// The recorded action log, in sequence order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// The document this registry styles.
    pub fn document(&self) -> &D {
        &self.document
    }

    /// The currently open explicit layer, if any.
    pub fn open_layer(&self) -> Option<&str> {
        self.layers.open()
    }

    fn ensure_open(&self) -> Result<()> {
        if !self.has_begun {
            return Err(Error::NotBegun);
        }
        if self.has_built {
            return Err(Error::AlreadyBuilt);
        }
        Ok(())
    }

    fn push(&mut self, style: Style, kind: ActionKind) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        let layer = self.layers.open().map(str::to_string);
        self.actions.push(Action::new(sequence, layer, style, kind));
    }

    /// Whether `name` is taken by any id rule or sub-rule base in the log.
    fn name_in_log(&self, name: &str) -> bool {
        self.actions.iter().any(|action| match action.kind() {
            ActionKind::IdRule { name: existing } => existing == name,
            ActionKind::SubRule { bases, .. } => bases.iter().any(|base| base == name),
        })
    }

    fn id_rule_exists(&self, name: &str) -> bool {
        self.actions.iter().any(|action| {
            matches!(action.kind(), ActionKind::IdRule { name: existing } if existing == name)
        })
    }
}
