//! Singly linked list — arena-backed nodes addressed by handles.

pub mod singly;

pub use singly::{Iter, NodeId, SinglyLinkedList};
