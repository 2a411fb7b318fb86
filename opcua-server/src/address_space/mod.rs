// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! The in-memory address space store the traversal core is written against.
//!
//! This is the "external collaborator" the top-level specification describes: a directed,
//! typed multigraph of [`Node`]s. Borrowing in this crate is handled by ordinary Rust
//! references rather than a manual refcount: `AddressSpace::get` returns a plain `&Node`, and
//! the borrow is released the moment that reference goes out of scope. There is no separate
//! `release` call to make or forget to make.

use hashbrown::HashMap;
use log::error;
use opcua_nodes::Node;
use opcua_types::{ExpandedNodeId, NodeClass, NodeId, ReferenceTypeId};

/// An in-memory OPC UA address space: a node map plus the references hanging off each node.
#[derive(Default)]
pub struct AddressSpace {
    nodes: HashMap<NodeId, Node>,
}

impl AddressSpace {
    /// Creates a new, empty address space.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }

    /// Inserts or replaces a node. Returns the previous node at this id, if any.
    pub fn insert(&mut self, node: Node) -> Option<Node> {
        if self.nodes.contains_key(node.node_id()) {
            error!("Address space already contains a node with id {}, replacing it", node.node_id());
        }
        self.nodes.insert(node.node_id().clone(), node)
    }

    /// Adds a reference from `source` to `target`. Both ends are addressed by id; `source`
    /// must already be present or this is a no-op (mirrors the store silently dropping a
    /// reference whose source cannot be found, matching how a missing *target* is handled
    /// during traversal).
    pub fn insert_reference(
        &mut self,
        source: &NodeId,
        reference_type_id: impl Into<NodeId>,
        is_inverse: bool,
        target: impl Into<ExpandedNodeId>,
    ) {
        let reference_type_id = reference_type_id.into();
        if let Some(node) = self.nodes.get_mut(source) {
            node.add_reference(reference_type_id, is_inverse, target);
        } else {
            error!("Cannot add reference from unknown node {source}");
        }
    }

    /// Convenience for [`AddressSpace::insert_reference`] plus its inverse, when both ends are
    /// local nodes and the reference type is symmetric in the sense that the inverse should
    /// also be recorded (the common case for hierarchical references in test fixtures).
    pub fn insert_reference_pair(
        &mut self,
        source: &NodeId,
        reference_type_id: impl Into<NodeId>,
        target: &NodeId,
    ) {
        let reference_type_id = reference_type_id.into();
        self.insert_reference(source, reference_type_id.clone(), false, target.clone());
        self.insert_reference(target, reference_type_id, true, source.clone());
    }

    /// Looks up a node by id. The returned borrow is released when it is dropped.
    pub fn get(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Returns `true` if `id` is null, or resolves to a `ReferenceType` node. Used to validate
    /// a `referenceTypeId` field before using it as a predicate (a null id always passes,
    /// since it means "every reference type").
    pub fn is_valid_reference_type_filter(&self, id: &NodeId) -> bool {
        id.is_null() || matches!(self.get(id).map(|n| n.node_class()), Some(NodeClass::ReferenceType))
    }

    /// Returns `true` if `candidate` is reachable from `requested` by following `HasSubtype`
    /// edges downward (i.e. `candidate` is `requested` or one of its subtypes), implementing
    /// the `isInTree` primitive the reference predicate (C1) needs. A visited set guards
    /// against the reference-type hierarchy containing a cycle.
    pub fn is_subtype_of(&self, candidate: &NodeId, requested: &NodeId) -> bool {
        if candidate == requested {
            return true;
        }
        let has_subtype = NodeId::from(ReferenceTypeId::HasSubtype);
        let mut visited = hashbrown::HashSet::new();
        let mut frontier = vec![candidate.clone()];
        while let Some(current) = frontier.pop() {
            if !visited.insert(current.clone()) {
                continue;
            }
            let Some(node) = self.get(&current) else {
                continue;
            };
            for kind in node.reference_kinds() {
                // The child's `HasSubtype` reference to its parent is recorded inverse
                // (parent --HasSubtype(forward)--> child), so we walk inverse kinds upward.
                if !kind.is_inverse || kind.reference_type_id != has_subtype {
                    continue;
                }
                for target in &kind.targets {
                    if target.is_external() {
                        continue;
                    }
                    if target.node_id == *requested {
                        return true;
                    }
                    if !visited.contains(&target.node_id) {
                        frontier.push(target.node_id.clone());
                    }
                }
            }
        }
        false
    }
}
