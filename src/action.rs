//! Recorded styling actions.
//!
//! Every successful registration appends one [`Action`] to the log. The log
//! is append-only and ordered by sequence number, which is what makes the
//! rendered stylesheet deterministic.

use crate::style::Style;

/// What a recorded action targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionKind {
    /// A rule for a single element id.
    IdRule { name: String },
    /// A rule scoped under previously registered id rules.
    ///
    /// `bases` and `selectors` are non-empty for any action produced by a
    /// registry; the combined selector pairs every base with every fragment.
    SubRule {
        bases: Vec<String>,
        selectors: Vec<String>,
    },
}

impl ActionKind {
    /// The name that anchors this action: the rule name for an id rule,
    /// the first base for a sub-rule.
    pub fn anchor(&self) -> &str {
        match self {
            ActionKind::IdRule { name } => name,
            ActionKind::SubRule { bases, .. } => {
                bases.first().map(String::as_str).unwrap_or_default()
            }
        }
    }
}

/// One entry in the styling log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    sequence: u32,
    layer: Option<String>,
    style: Style,
    kind: ActionKind,
}

impl Action {
    pub(crate) fn new(sequence: u32, layer: Option<String>, style: Style, kind: ActionKind) -> Self {
        Self {
            sequence,
            layer,
            style,
            kind,
        }
    }

    /// Position in the log, starting at 1.
    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    /// The layer that was open when the action was recorded, if any.
    pub fn layer(&self) -> Option<&str> {
        self.layer.as_deref()
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn kind(&self) -> &ActionKind {
        &self.kind
    }

    /// The cascade layer this action renders into.
    ///
    /// Actions recorded outside any explicit layer fall back to an implicit
    /// layer named after their anchor.
    pub fn effective_layer(&self) -> &str {
        self.layer.as_deref().unwrap_or_else(|| self.kind.anchor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> Style {
        Style::new().with("color", "green")
    }

    #[test]
    fn test_effective_layer_explicit() {
        let action = Action::new(
            1,
            Some("hero".into()),
            style(),
            ActionKind::IdRule { name: "title".into() },
        );
        assert_eq!(action.effective_layer(), "hero");
        assert_eq!(action.layer(), Some("hero"));
    }

    #[test]
    fn test_effective_layer_implicit_id_rule() {
        let action = Action::new(1, None, style(), ActionKind::IdRule { name: "main".into() });
        assert_eq!(action.effective_layer(), "main");
        assert_eq!(action.layer(), None);
    }

    #[test]
    fn test_effective_layer_implicit_sub_rule() {
        let action = Action::new(
            2,
            None,
            style(),
            ActionKind::SubRule {
                bases: vec!["card".into(), "panel".into()],
                selectors: vec![".title".into()],
            },
        );
        // Falls back to the first base
        assert_eq!(action.effective_layer(), "card");
    }
}
