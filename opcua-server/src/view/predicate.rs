// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! C1: the reference-type predicate used by both the single-node browse engine and the
//! relative-path walker to decide whether a reference's type matches what a caller asked for.

use opcua_types::NodeId;

use crate::address_space::AddressSpace;

/// Returns `true` if `candidate` should be treated as a match for `requested`.
///
/// A null `requested` always matches (it means "every reference type"). Otherwise, if
/// `include_subtypes` is `false`, the ids must be identical. If it is `true`, `candidate` must
/// be `requested` or a subtype of it, per the `HasSubtype` closure computed by
/// [`AddressSpace::is_subtype_of`].
pub fn reference_type_matches(
    address_space: &AddressSpace,
    requested: &NodeId,
    candidate: &NodeId,
    include_subtypes: bool,
) -> bool {
    if requested.is_null() {
        return true;
    }
    if !include_subtypes {
        return requested == candidate;
    }
    address_space.is_subtype_of(candidate, requested)
}

#[cfg(test)]
mod tests {
    use super::*;
    use opcua_nodes::Node;
    use opcua_types::{NodeClass, ReferenceTypeId};

    fn reference_type(id: u32, name: &str) -> Node {
        Node::new(NodeId::new(0, id), NodeClass::ReferenceType, name, name)
    }

    #[test]
    fn null_requested_matches_anything() {
        let space = AddressSpace::new();
        assert!(reference_type_matches(
            &space,
            &NodeId::null(),
            &NodeId::from(ReferenceTypeId::Organizes),
            false
        ));
    }

    #[test]
    fn exact_match_without_subtypes() {
        let space = AddressSpace::new();
        let organizes = NodeId::from(ReferenceTypeId::Organizes);
        let has_component = NodeId::from(ReferenceTypeId::HasComponent);
        assert!(reference_type_matches(&space, &organizes, &organizes, false));
        assert!(!reference_type_matches(
            &space,
            &organizes,
            &has_component,
            false
        ));
    }

    #[test]
    fn subtype_closure_when_requested() {
        let mut space = AddressSpace::new();
        let hierarchical = NodeId::from(ReferenceTypeId::HierarchicalReferences);
        let organizes = NodeId::from(ReferenceTypeId::Organizes);
        space.insert(reference_type(33, "HierarchicalReferences"));
        space.insert(reference_type(35, "Organizes"));
        space.insert_reference(&organizes, ReferenceTypeId::HasSubtype, true, hierarchical.clone());

        assert!(reference_type_matches(
            &space,
            &hierarchical,
            &organizes,
            true
        ));
        assert!(!reference_type_matches(
            &space,
            &hierarchical,
            &organizes,
            false
        ));
    }
}
