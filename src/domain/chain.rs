//! Capability traits and the chain operations.
//!
//! `combine` and `advance` are written against [`ChainValue`], so any node
//! kind (plain, named, or a future variant) composes with any other. Results
//! are always a plain [`Node`]: labels never propagate.

use tracing::trace;

use crate::domain::entities::Node;
use crate::domain::error::{DomainError, DomainResult};

/// Capability shared by every node kind.
pub trait ChainValue {
    /// Current scalar payload.
    fn value(&self) -> f64;

    /// Replace the payload in place. The only mutating operation on the base kind.
    fn set_value(&mut self, value: f64);

    /// Human-readable rendering for diagnostics.
    fn describe(&self) -> String;

    /// New node whose value is `self.value() + other.value()`. Neither operand changes.
    fn combine(&self, other: &dyn ChainValue) -> Node {
        let combined = Node::create(self.value() + other.value());
        trace!(
            lhs = self.value(),
            rhs = other.value(),
            result = combined.value(),
            "combine"
        );
        combined
    }

    /// New node whose value is `self.value() + 1`.
    fn advance(&self) -> Node {
        let next = Node::create(self.value() + 1.0);
        trace!(from = self.value(), to = next.value(), "advance");
        next
    }
}

/// Capability added by labelled node kinds.
pub trait Labelled: ChainValue {
    fn label(&self) -> &str;
    fn set_label(&mut self, label: &str);
}

/// `combine` for call sites where the right operand may be absent.
///
/// # Errors
/// `DomainError::InvalidArgument` when `rhs` is `None`.
pub fn try_combine(lhs: &dyn ChainValue, rhs: Option<&dyn ChainValue>) -> DomainResult<Node> {
    match rhs {
        Some(rhs) => Ok(lhs.combine(rhs)),
        None => Err(DomainError::invalid_argument(
            "combine",
            format!("missing node to combine with {}", lhs.describe()),
        )),
    }
}
