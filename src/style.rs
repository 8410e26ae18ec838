//! Ordered style property sets and CSS property-name conversion.

/// Convert a declared property name to its hyphenated CSS form.
///
/// Accepts camelCase (`backgroundColor`), snake_case (`background_color`),
/// and already-hyphenated names (`background-color`). A hyphen is inserted
/// at each lowercase-to-uppercase boundary, underscores become hyphens, and
/// the result is lowercased.
pub fn css_property_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev = '\0';
    for ch in name.chars() {
        if ch == '_' {
            out.push('-');
        } else if ch.is_ascii_uppercase() && prev.is_ascii_lowercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch.to_ascii_lowercase());
        }
        prev = ch;
    }
    out
}

/// An ordered set of style properties.
///
/// Properties keep first-declaration order. Setting a property that is
/// already present (under any accepted spelling of the same CSS name)
/// replaces its value in place rather than appending, so iteration order
/// is stable under updates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    properties: Vec<(String, String)>,
}

impl Style {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, consuming and returning the style (builder form).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a property value.
    ///
    /// If a property with the same CSS name already exists, its value is
    /// replaced at its original position and its declared spelling is kept.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        let css_name = css_property_name(&name);
        for (existing, existing_value) in &mut self.properties {
            if css_property_name(existing) == css_name {
                *existing_value = value;
                return;
            }
        }
        self.properties.push((name, value));
    }

    /// Look up a property value by name (any accepted spelling).
    pub fn get(&self, name: &str) -> Option<&str> {
        let css_name = css_property_name(name);
        self.properties
            .iter()
            .find(|(existing, _)| css_property_name(existing) == css_name)
            .map(|(_, value)| value.as_str())
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Check if the style has no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate over `(name, value)` pairs in declaration order.
    ///
    /// Names are returned as declared; callers render them with
    /// [`css_property_name`].
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// A flat baseline style that pins every commonly-inherited property
    /// to a predictable value.
    ///
    /// Apply it to a root element to keep user-agent defaults from leaking
    /// into layered rules.
    pub fn base() -> Self {
        let mut style = Style::new();

        // Colors
        style.set("background_color", "white");
        style.set("color", "black");

        // Padding
        style.set("padding_top", "0");
        style.set("padding_bottom", "0");
        style.set("padding_left", "0");
        style.set("padding_right", "0");

        // Margins
        style.set("margin_top", "0");
        style.set("margin_bottom", "0");
        style.set("margin_left", "0");
        style.set("margin_right", "0");

        // Borders
        style.set("border_top", "0");
        style.set("border_bottom", "0");
        style.set("border_left", "0");
        style.set("border_right", "0");

        // Font
        style.set("font_family", "serif");
        style.set("font_size", "1rem");
        style.set("font_style", "normal");
        style.set("font_weight", "400");

        // Layout
        style.set("display", "initial");
        style.set("align_items", "flex-start");
        style.set("justify_content", "flex-start");

        // Positioning
        style.set("position", "static");
        style.set("top", "0");
        style.set("bottom", "0");
        style.set("right", "0");
        style.set("left", "0");

        style
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = Style::new();
        for (name, value) in iter {
            style.set(name, value);
        }
        style
    }
}
