//! Binary search tree — ordered keys with in-order traversal.

pub mod bst;

pub use bst::{BinarySearchTree, Inorder};
