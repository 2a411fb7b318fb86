// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Grouped outgoing references, as stored on a [`crate::Node`].

use opcua_types::{ExpandedNodeId, NodeId};

/// Which side of a reference's `isInverse` flag a single reference kind was recorded on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReferenceDirection {
    /// The reference is followed from the source node to the target in the declared
    /// direction of the reference type.
    Forward,
    /// The reference is followed against the declared direction of the reference type.
    Inverse,
}

impl ReferenceDirection {
    /// Returns the direction a reference recorded with `is_inverse` has.
    pub fn from_is_inverse(is_inverse: bool) -> Self {
        if is_inverse {
            ReferenceDirection::Inverse
        } else {
            ReferenceDirection::Forward
        }
    }

    /// Returns `true` if this direction corresponds to an inverse reference.
    pub fn is_inverse(self) -> bool {
        matches!(self, ReferenceDirection::Inverse)
    }
}

/// A group of a node's outgoing references that share a `(referenceTypeId, isInverse)` pair.
/// Targets are kept in the store's natural insertion order, which a browse and its resumes
/// must preserve (spec invariant: ordering is stable for the lifetime of a browse).
#[derive(Debug, Clone)]
pub struct ReferenceKind {
    /// The type of reference this kind groups.
    pub reference_type_id: NodeId,
    /// `true` if this kind groups references followed in the inverse direction.
    pub is_inverse: bool,
    /// The targets of this reference kind, in store order.
    pub targets: Vec<ExpandedNodeId>,
}

impl ReferenceKind {
    /// Creates a new, empty reference kind.
    pub fn new(reference_type_id: NodeId, is_inverse: bool) -> Self {
        Self {
            reference_type_id,
            is_inverse,
            targets: Vec::new(),
        }
    }

    /// The direction this reference kind was recorded on.
    pub fn direction(&self) -> ReferenceDirection {
        ReferenceDirection::from_is_inverse(self.is_inverse)
    }
}
