//! Chainable numeric nodes.
//!
//! A base [`Node`](domain::Node) and a labelled [`NamedNode`](domain::NamedNode)
//! share the [`ChainValue`](domain::ChainValue) capability, so `combine` and
//! `advance` accept either kind:
//!
//! ```
//! use nodechain::domain::{ChainValue, NamedNode, Node};
//!
//! let a = Node::create(46.0);
//! let b = NamedNode::create(-5.0);
//! assert_eq!(a.combine(&b).advance().value(), 42.0);
//! ```
//!
//! Output is never written by the model itself; consumers receive a
//! [`LogSink`](infrastructure::LogSink) by injection.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
