// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! C2: materializes one `ReferenceDescription` result row from a source reference kind and
//! the resolved target node.

use opcua_nodes::{Node, ReferenceKind};
use opcua_types::{BrowseResultMask, ExpandedNodeId, NodeClass, ReferenceDescription};

/// Builds a `ReferenceDescription` for `target`, reached from `kind`. Only the fields selected
/// by `mask` are populated; the rest are left at their default (null/unspecified) value. The
/// `typeDefinition` field is only ever populated for `Object` and `Variable` targets, since
/// that is the only node class family for which the standard defines a type definition.
///
/// `target` is `None` for a reference whose target lives on another server (`server_index != 0`
/// on `target_expanded_id`): such a target cannot be dereferenced locally, so every field but
/// `nodeId`, `referenceTypeId` and `isForward` is left at its default.
pub fn build_reference_description(
    kind: &ReferenceKind,
    target_expanded_id: &ExpandedNodeId,
    target: Option<&Node>,
    mask: BrowseResultMask,
) -> ReferenceDescription {
    let mut row = ReferenceDescription {
        node_id: target_expanded_id.clone(),
        ..Default::default()
    };

    if mask.contains(BrowseResultMask::REFERENCE_TYPE_ID) {
        row.reference_type_id = kind.reference_type_id.clone();
    }
    if mask.contains(BrowseResultMask::IS_FORWARD) {
        row.is_forward = !kind.is_inverse;
    }
    let Some(target) = target else {
        return row;
    };
    if mask.contains(BrowseResultMask::NODE_CLASS) {
        row.node_class = target.node_class() as u32;
    }
    if mask.contains(BrowseResultMask::BROWSE_NAME) {
        row.browse_name = target.browse_name().clone();
    }
    if mask.contains(BrowseResultMask::DISPLAY_NAME) {
        row.display_name = target.display_name().clone();
    }
    if mask.contains(BrowseResultMask::TYPE_DEFINITION)
        && matches!(target.node_class(), NodeClass::Object | NodeClass::Variable)
    {
        if let Some(type_definition) = target.type_definition() {
            row.type_definition = type_definition.clone();
        }
    }

    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use opcua_types::{NodeId, ReferenceTypeId};

    #[test]
    fn populates_only_masked_fields() {
        let mut target = Node::new(NodeId::new(0, 2253), NodeClass::Object, "Server", "Server");
        target.add_reference(
            NodeId::from(ReferenceTypeId::HasTypeDefinition),
            false,
            NodeId::new(0, 2004),
        );
        let kind = ReferenceKind::new(NodeId::from(ReferenceTypeId::Organizes), false);
        let expanded = ExpandedNodeId::from(target.node_id().clone());

        let row = build_reference_description(
            &kind,
            &expanded,
            Some(&target),
            BrowseResultMask::BROWSE_NAME | BrowseResultMask::IS_FORWARD,
        );

        assert_eq!(row.node_id, expanded);
        assert_eq!(row.browse_name.name.as_ref(), "Server");
        assert!(row.is_forward);
        assert!(row.reference_type_id.is_null());
        assert!(row.display_name.text.is_null());
        assert!(row.type_definition.is_null());
    }

    #[test]
    fn all_mask_populates_type_definition_for_objects() {
        let mut target = Node::new(NodeId::new(0, 2253), NodeClass::Object, "Server", "Server");
        target.add_reference(
            NodeId::from(ReferenceTypeId::HasTypeDefinition),
            false,
            NodeId::new(0, 2004),
        );
        let kind = ReferenceKind::new(NodeId::from(ReferenceTypeId::Organizes), false);
        let expanded = ExpandedNodeId::from(target.node_id().clone());

        let row =
            build_reference_description(&kind, &expanded, Some(&target), BrowseResultMask::ALL);
        assert_eq!(row.type_definition.node_id, NodeId::new(0, 2004));
    }

    #[test]
    fn type_definition_not_populated_for_non_object_variable_classes() {
        let target = Node::new(
            NodeId::new(0, 31),
            NodeClass::ReferenceType,
            "References",
            "References",
        );
        let kind = ReferenceKind::new(NodeId::from(ReferenceTypeId::Organizes), false);
        let expanded = ExpandedNodeId::from(target.node_id().clone());

        let row =
            build_reference_description(&kind, &expanded, Some(&target), BrowseResultMask::ALL);
        assert!(row.type_definition.is_null());
    }

    #[test]
    fn external_target_only_populates_node_id_and_reference_fields() {
        let kind = ReferenceKind::new(NodeId::from(ReferenceTypeId::Organizes), false);
        let expanded: ExpandedNodeId = (NodeId::new(1, 1u32), 7u32).into();

        let row = build_reference_description(&kind, &expanded, None, BrowseResultMask::ALL);
        assert_eq!(row.node_id, expanded);
        assert!(row.is_forward);
        assert!(row.browse_name.name.is_null());
        assert!(row.display_name.text.is_null());
        assert!(row.type_definition.is_null());
    }
}
