//! Schemaless XML input: arena tree and parser.

mod arena;
mod parser;

pub use arena::{Attr, ChildIter, Node, NodeData, NodeId, XmlTree};
pub use parser::parse;
