// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! End-to-end tests driving the view services together over a small standard-namespace
//! address space, the way a dispatcher sitting on top of this crate would: one `Session`,
//! one `AddressSpace`, and a sequence of `Browse`/`BrowseNext`/`TranslateBrowsePathsToNodeIds`
//! calls against it.

use opcua_nodes::Node;
use opcua_server::address_space::AddressSpace;
use opcua_server::session::Session;
use opcua_server::view::{BrowseService, Limits};
use opcua_types::{
    BrowseDescription, BrowseDirection, BrowsePath, NodeClass, NodeId, QualifiedName,
    RelativePath, RelativePathElement, ReferenceTypeId, StatusCode,
};

/// A sliver of the standard OPC UA core namespace: `ObjectsFolder` (i=85) organizing a handful
/// of children including `Server` (i=2253), plus the `ReferenceType` nodes and `HasSubtype`
/// edges needed to resolve `HierarchicalReferences` as a supertype of `Organizes`.
fn standard_address_space() -> AddressSpace {
    let mut space = AddressSpace::new();

    space.insert(Node::new(
        NodeId::new(0, 85),
        NodeClass::Object,
        "ObjectsFolder",
        "ObjectsFolder",
    ));
    for (id, name) in [
        (2253u32, "Server"),
        (2254, "SomeObject"),
        (2255, "AnotherObject"),
    ] {
        space.insert(Node::new(NodeId::new(0, id), NodeClass::Object, name, name));
        space.insert_reference_pair(&NodeId::new(0, 85), ReferenceTypeId::Organizes, &NodeId::new(0, id));
    }

    space.insert(Node::new(
        NodeId::new(0, 33),
        NodeClass::ReferenceType,
        "HierarchicalReferences",
        "HierarchicalReferences",
    ));
    space.insert(Node::new(
        NodeId::new(0, 35),
        NodeClass::ReferenceType,
        "Organizes",
        "Organizes",
    ));
    space.insert_reference(
        &NodeId::new(0, 35),
        ReferenceTypeId::HasSubtype,
        true,
        NodeId::new(0, 33),
    );

    space
}

fn objects_folder_children_description() -> BrowseDescription {
    BrowseDescription {
        node_id: NodeId::new(0, 85),
        browse_direction: BrowseDirection::Forward,
        reference_type_id: NodeId::from(ReferenceTypeId::HierarchicalReferences),
        include_subtypes: true,
        node_class_mask: 0,
        result_mask: opcua_types::BrowseResultMask::ALL.bits(),
    }
}

#[test]
fn s1_browse_objects_folder_children() {
    let space = standard_address_space();
    let session = Session::new(1, 64);
    let mut registry = session.lock_continuation_points();
    let mut service = BrowseService::new(&space, &mut registry, Limits::default());

    let results = service
        .browse(&NodeId::null(), 0, &[objects_folder_children_description()])
        .unwrap();

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert_eq!(result.status_code, StatusCode::Good);
    assert!(result.continuation_point.is_null());
    assert!(!result.references.is_empty());
    assert!(result.references.iter().all(|r| r.is_forward));
    assert!(result
        .references
        .iter()
        .any(|r| r.node_id.node_id == NodeId::new(0, 2253)));
}

#[test]
fn s2_paginated_browse_matches_unbounded_browse_in_order() {
    let space = standard_address_space();
    let session = Session::new(1, 64);
    let description = objects_folder_children_description();

    let unbounded = {
        let mut registry = session.lock_continuation_points();
        let mut service = BrowseService::new(&space, &mut registry, Limits::default());
        service
            .browse(&NodeId::null(), 0, &[description.clone()])
            .unwrap()
            .remove(0)
    };
    let unbounded_ids: Vec<_> = unbounded
        .references
        .iter()
        .map(|r| r.node_id.clone())
        .collect();

    let first = {
        let mut registry = session.lock_continuation_points();
        let mut service = BrowseService::new(&space, &mut registry, Limits::default());
        service
            .browse(&NodeId::null(), 1, &[description])
            .unwrap()
            .remove(0)
    };
    assert_eq!(first.status_code, StatusCode::Good);
    assert_eq!(first.references.len(), 1);
    assert!(!first.continuation_point.is_null());

    let mut paginated_ids = vec![first.references[0].node_id.clone()];
    let mut cp = first.continuation_point;
    loop {
        let result = {
            let mut registry = session.lock_continuation_points();
            opcua_server::view::browse_next(&space, &mut registry, false, &[cp.clone()])
                .remove(0)
        };
        assert_eq!(result.status_code, StatusCode::Good);
        paginated_ids.extend(result.references.iter().map(|r| r.node_id.clone()));
        if result.continuation_point.is_null() {
            break;
        }
        cp = result.continuation_point;
    }

    assert_eq!(paginated_ids, unbounded_ids);
}

#[test]
fn s3_release_then_reuse_is_invalid() {
    let space = standard_address_space();
    let session = Session::new(1, 64);
    let description = objects_folder_children_description();

    let first = {
        let mut registry = session.lock_continuation_points();
        let mut service = BrowseService::new(&space, &mut registry, Limits::default());
        service
            .browse(&NodeId::null(), 1, &[description])
            .unwrap()
            .remove(0)
    };

    let released = {
        let mut registry = session.lock_continuation_points();
        opcua_server::view::browse_next(&space, &mut registry, true, &[first.continuation_point.clone()])
    };
    assert!(released[0].references.is_empty());

    let reused = {
        let mut registry = session.lock_continuation_points();
        opcua_server::view::browse_next(&space, &mut registry, false, &[first.continuation_point])
    };
    assert_eq!(
        reused[0].status_code,
        StatusCode::BadContinuationPointInvalid
    );
}

#[test]
fn s4_translate_path_to_server() {
    let space = standard_address_space();
    let path = BrowsePath {
        starting_node: NodeId::new(0, 85),
        relative_path: RelativePath {
            elements: vec![RelativePathElement {
                reference_type_id: NodeId::from(ReferenceTypeId::HierarchicalReferences),
                is_inverse: false,
                include_subtypes: true,
                target_name: QualifiedName::new(0, "Server"),
            }],
        },
    };

    let results =
        opcua_server::view::translate_browse_paths_to_node_ids(&space, Limits::default(), &[path])
            .unwrap();

    assert_eq!(results[0].status_code, StatusCode::Good);
    assert_eq!(results[0].targets.len(), 1);
    assert_eq!(results[0].targets[0].target_id.node_id, NodeId::new(0, 2253));
    assert_eq!(results[0].targets[0].remaining_path_index, u32::MAX);
}

#[test]
fn s5_three_element_path_with_unmatched_final_name_is_no_match() {
    let mut space = standard_address_space();
    // Server/Nameplate/Manufacturer, a three-deep chain, with the final element asking for a
    // name that does not exist.
    space.insert(Node::new(
        NodeId::new(0, 3001),
        NodeClass::Object,
        "Nameplate",
        "Nameplate",
    ));
    space.insert_reference_pair(
        &NodeId::new(0, 2253),
        ReferenceTypeId::Organizes,
        &NodeId::new(0, 3001),
    );
    space.insert(Node::new(
        NodeId::new(0, 3002),
        NodeClass::Object,
        "Manufacturer",
        "Manufacturer",
    ));
    space.insert_reference_pair(
        &NodeId::new(0, 3001),
        ReferenceTypeId::Organizes,
        &NodeId::new(0, 3002),
    );

    let step = |name: &str| RelativePathElement {
        reference_type_id: NodeId::from(ReferenceTypeId::HierarchicalReferences),
        is_inverse: false,
        include_subtypes: true,
        target_name: QualifiedName::new(0, name),
    };
    let path = BrowsePath {
        starting_node: NodeId::new(0, 85),
        relative_path: RelativePath {
            elements: vec![step("Server"), step("Nameplate"), step("NoSuchField")],
        },
    };

    let results =
        opcua_server::view::translate_browse_paths_to_node_ids(&space, Limits::default(), &[path])
            .unwrap();

    assert_eq!(results[0].status_code, StatusCode::BadNoMatch);
    assert!(results[0].targets.is_empty());
}

#[test]
fn s6_invalid_browse_direction_value_is_rejected_at_decode() {
    assert_eq!(
        opcua_types::BrowseDirection::from_wire(3).unwrap_err(),
        StatusCode::BadBrowseDirectionInvalid
    );
}
