//! Self-describing response element tree.
//!
//! Every vendor message is a tree of named elements. A node is either a
//! scalar, a complex node with named children, an array of entries (scalars
//! or value-groups), or missing altogether. Validity and nullness are flags
//! on every node rather than properties of the content, so an element can be
//! present in the tree but flagged unusable.

use serde::{Deserialize, Serialize};

use super::value::Value;

/// Content of an element node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Content {
    /// A single scalar value.
    Scalar(#[serde(with = "super::value::tagged")] Value),
    /// A sequence of named child elements.
    Complex(Vec<Element>),
    /// Repeated entries. Bulk fields hold one complex entry per row.
    Array(Vec<Element>),
    /// No value was delivered.
    #[default]
    Missing,
}

/// A named node in a response message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    name: String,
    #[serde(default = "default_valid")]
    valid: bool,
    #[serde(default)]
    null: bool,
    #[serde(default)]
    content: Content,
}

const fn default_valid() -> bool {
    true
}

impl Element {
    /// Create an element with explicit content.
    pub fn new(name: impl Into<String>, content: Content) -> Self {
        Self {
            name: name.into(),
            valid: true,
            null: false,
            content,
        }
    }

    pub fn scalar(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(name, Content::Scalar(value.into()))
    }

    pub fn complex(name: impl Into<String>, children: Vec<Element>) -> Self {
        Self::new(name, Content::Complex(children))
    }

    pub fn array(name: impl Into<String>, entries: Vec<Element>) -> Self {
        Self::new(name, Content::Array(entries))
    }

    /// An element the vendor reported as invalid: present by name, no value.
    pub fn invalid(name: impl Into<String>) -> Self {
        Self {
            valid: false,
            ..Self::new(name, Content::Missing)
        }
    }

    /// A valid element explicitly carrying no value.
    pub fn null(name: impl Into<String>) -> Self {
        Self {
            null: true,
            ..Self::new(name, Content::Missing)
        }
    }

    /// Override the validity flag.
    #[must_use]
    pub fn with_valid(mut self, valid: bool) -> Self {
        self.valid = valid;
        self
    }

    /// Override the null flag.
    #[must_use]
    pub fn with_null(mut self, null: bool) -> Self {
        self.null = null;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.null
    }

    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self.content, Content::Array(_))
    }

    #[must_use]
    pub const fn content(&self) -> &Content {
        &self.content
    }

    /// The scalar value, if this is a scalar node.
    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        match &self.content {
            Content::Scalar(v) => Some(v),
            _ => None,
        }
    }

    /// Child elements of a complex node. Empty for any other content.
    pub fn elements(&self) -> std::slice::Iter<'_, Element> {
        match &self.content {
            Content::Complex(children) => children.iter(),
            _ => Default::default(),
        }
    }

    /// Entries of an array node. Empty for any other content.
    pub fn values(&self) -> std::slice::Iter<'_, Element> {
        match &self.content {
            Content::Array(entries) => entries.iter(),
            _ => Default::default(),
        }
    }

    /// Number of child elements of a complex node.
    #[must_use]
    pub fn num_elements(&self) -> usize {
        self.elements().len()
    }

    /// Number of entries of an array node.
    #[must_use]
    pub fn num_values(&self) -> usize {
        self.values().len()
    }

    #[must_use]
    pub fn has_element(&self, name: &str) -> bool {
        self.get_element(name).is_some()
    }

    /// First child with the given name.
    #[must_use]
    pub fn get_element(&self, name: &str) -> Option<&Element> {
        self.elements().find(|e| e.name == name)
    }

    /// A child scalar rendered as a string.
    #[must_use]
    pub fn element_as_string(&self, name: &str) -> Option<String> {
        self.get_element(name)
            .and_then(Element::value)
            .map(ToString::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn security_entry() -> Element {
        Element::complex(
            "securityData",
            vec![
                Element::scalar("security", "IBM US Equity"),
                Element::complex(
                    "fieldData",
                    vec![
                        Element::scalar("PX_LAST", 190.5),
                        Element::array(
                            "DVD_HIST_ALL",
                            vec![Element::complex(
                                "DVD_HIST_ALL",
                                vec![Element::scalar("Amount", 1.67)],
                            )],
                        ),
                    ],
                ),
            ],
        )
    }

    #[test]
    fn complex_lookup_by_name() {
        let entry = security_entry();

        assert!(entry.has_element("fieldData"));
        assert!(!entry.has_element("fieldExceptions"));
        assert_eq!(
            entry.element_as_string("security").as_deref(),
            Some("IBM US Equity")
        );
        assert_eq!(entry.get_element("fieldData").unwrap().num_elements(), 2);
    }

    #[test]
    fn array_flag_follows_content() {
        let entry = security_entry();
        let fields = entry.get_element("fieldData").unwrap();

        assert!(!fields.get_element("PX_LAST").unwrap().is_array());
        let bulk = fields.get_element("DVD_HIST_ALL").unwrap();
        assert!(bulk.is_array());
        assert_eq!(bulk.num_values(), 1);
        assert_eq!(bulk.num_elements(), 0);
    }

    #[test]
    fn scalar_nodes_have_no_children() {
        let element = Element::scalar("PX_LAST", 1.0);

        assert_eq!(element.elements().count(), 0);
        assert_eq!(element.values().count(), 0);
        assert_eq!(element.element_as_string("anything"), None);
    }

    #[test]
    fn invalid_and_null_flags() {
        let invalid = Element::invalid("Declared Date");
        assert!(!invalid.is_valid());
        assert!(!invalid.is_null());
        assert_eq!(invalid.value(), None);

        let null = Element::null("Amount");
        assert!(null.is_valid());
        assert!(null.is_null());

        let flagged = Element::scalar("PX_LAST", 1.0).with_valid(false);
        assert!(!flagged.is_valid());
        assert!(flagged.value().is_some());
    }

    #[test]
    fn json_defaults_to_valid_non_null() {
        let element: Element =
            serde_json::from_str(r#"{"name": "PX_LAST", "content": {"scalar": {"float": 150.25}}}"#).unwrap();

        assert!(element.is_valid());
        assert!(!element.is_null());
        assert_eq!(element.value(), Some(&Value::Float(150.25)));

        let missing: Element = serde_json::from_str(r#"{"name": "X", "valid": false}"#).unwrap();
        assert_eq!(missing.content(), &Content::Missing);
        assert!(!missing.is_valid());
    }
}
