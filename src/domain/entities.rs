//! Domain entities: the node value types

use std::fmt;

use crate::domain::chain::{ChainValue, Labelled};

/// Base numeric node.
///
/// Obtained only through [`Node::create`]; there is intentionally no `Default`.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    value: f64,
}

impl Node {
    /// Create a node holding `value`. Non-finite values are stored as given.
    pub fn create(value: f64) -> Self {
        Self { value }
    }
}

impl ChainValue for Node {
    fn value(&self) -> f64 {
        self.value
    }

    fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    fn describe(&self) -> String {
        format!("Node({})", self.value)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// A node carrying a mutable label. Usable anywhere a [`ChainValue`] is expected.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedNode {
    value: f64,
    label: String,
}

impl NamedNode {
    /// Create a named node holding `value` with an empty label.
    pub fn create(value: f64) -> Self {
        Self {
            value,
            label: String::new(),
        }
    }

    /// Builder-style label assignment.
    pub fn with_label(mut self, label: &str) -> Self {
        self.set_label(label);
        self
    }
}

impl ChainValue for NamedNode {
    fn value(&self) -> f64 {
        self.value
    }

    fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    fn describe(&self) -> String {
        format!("NamedNode({:?}, {})", self.label, self.value)
    }
}

impl Labelled for NamedNode {
    fn label(&self) -> &str {
        &self.label
    }

    fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
    }
}

impl fmt::Display for NamedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Upcast: keeps the value, drops the label.
impl From<&NamedNode> for Node {
    fn from(named: &NamedNode) -> Self {
        Node::create(named.value)
    }
}

impl From<NamedNode> for Node {
    fn from(named: NamedNode) -> Self {
        Node::from(&named)
    }
}
