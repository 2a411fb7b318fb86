// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the implementation of [`Node`].

use log::debug;
use opcua_types::{
    ExpandedNodeId, LocalizedText, NodeClass, NodeId, QualifiedName, ReferenceTypeId,
};

use crate::reference::ReferenceKind;

/// A vertex in the address space: an id, a class, the two standard human-facing names, and
/// the typed references that hang off it.
///
/// Unlike the full OPC UA node model, this does not carry per-class attributes (`Value`,
/// `AccessLevel`, `IsAbstract`, ...) since the traversal core never reads or writes them; it
/// only needs enough of a node to browse, filter by class, and resolve a type definition.
#[derive(Debug, Clone)]
pub struct Node {
    node_id: NodeId,
    node_class: NodeClass,
    browse_name: QualifiedName,
    display_name: LocalizedText,
    references: Vec<ReferenceKind>,
}

impl Node {
    /// Creates a new node with no references.
    pub fn new(
        node_id: NodeId,
        node_class: NodeClass,
        browse_name: impl Into<QualifiedName>,
        display_name: impl Into<LocalizedText>,
    ) -> Self {
        Self {
            node_id,
            node_class,
            browse_name: browse_name.into(),
            display_name: display_name.into(),
            references: Vec::new(),
        }
    }

    /// This node's id.
    pub fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    /// This node's class.
    pub fn node_class(&self) -> NodeClass {
        self.node_class
    }

    /// This node's browse name.
    pub fn browse_name(&self) -> &QualifiedName {
        &self.browse_name
    }

    /// This node's display name.
    pub fn display_name(&self) -> &LocalizedText {
        &self.display_name
    }

    /// This node's outgoing reference kinds, in store order.
    pub fn reference_kinds(&self) -> &[ReferenceKind] {
        &self.references
    }

    /// Adds `target` to the reference kind `(reference_type_id, is_inverse)`, creating the
    /// kind if this is the first reference of that shape. Targets are appended, preserving
    /// store order.
    pub fn add_reference(
        &mut self,
        reference_type_id: NodeId,
        is_inverse: bool,
        target: impl Into<ExpandedNodeId>,
    ) {
        let target = target.into();
        if target.is_null() {
            debug!(
                "Ignoring reference from {} with null target id",
                self.node_id
            );
            return;
        }
        match self
            .references
            .iter_mut()
            .find(|kind| kind.reference_type_id == reference_type_id && kind.is_inverse == is_inverse)
        {
            Some(kind) => kind.targets.push(target),
            None => {
                let mut kind = ReferenceKind::new(reference_type_id, is_inverse);
                kind.targets.push(target);
                self.references.push(kind);
            }
        }
    }

    /// The unique target of this node's forward `HasTypeDefinition` reference, if any. Per the
    /// Browse service, this is only meaningful (and only consulted by callers) for `Object`
    /// and `Variable` nodes.
    pub fn type_definition(&self) -> Option<&ExpandedNodeId> {
        self.references
            .iter()
            .find(|kind| {
                !kind.is_inverse && kind.reference_type_id == ReferenceTypeId::HasTypeDefinition
            })
            .and_then(|kind| kind.targets.first())
    }
}
