// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Request and result types for the View services: `Browse`, `BrowseNext`, and
//! `TranslateBrowsePathsToNodeIds`.
//!
//! https://reference.opcfoundation.org/v105/Core/docs/Part4/5.9/

use crate::{
    byte_string::ByteString, data_types::ContinuationPoint, enums::BrowseDirection,
    expanded_node_id::ExpandedNodeId, localized_text::LocalizedText, node_id::NodeId,
    qualified_name::QualifiedName, status_code::StatusCode,
};

/// A request to browse the references of a single node.
/// https://reference.opcfoundation.org/v105/Core/docs/Part4/5.9.2/#5.9.2.2
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BrowseDescription {
    /// The node to browse.
    pub node_id: NodeId,
    /// Which direction along a reference to follow.
    pub browse_direction: BrowseDirection,
    /// Only references of this type (and, if `include_subtypes`, its subtypes) are returned.
    /// A null node id means "every reference type".
    pub reference_type_id: NodeId,
    /// Whether subtypes of `reference_type_id` should also be considered.
    pub include_subtypes: bool,
    /// Bitmask (`NodeClassMask`) of which target node classes to return. Zero means no filter.
    pub node_class_mask: u32,
    /// Bitmask (`BrowseResultMask`) of which optional `ReferenceDescription` fields to populate.
    pub result_mask: u32,
}

/// One reference found while browsing a node, described from the perspective of the node
/// that was browsed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReferenceDescription {
    /// The type of the reference.
    pub reference_type_id: NodeId,
    /// `true` if the reference is followed in the forward direction from the browsed node.
    pub is_forward: bool,
    /// The id of the target node, expanded since it may be hosted on another server.
    pub node_id: ExpandedNodeId,
    /// The browse name of the target node, if `BrowseResultMask::BROWSE_NAME` was requested.
    pub browse_name: QualifiedName,
    /// The display name of the target node, if `BrowseResultMask::DISPLAY_NAME` was requested.
    pub display_name: LocalizedText,
    /// The node class of the target node, if `BrowseResultMask::NODE_CLASS` was requested.
    /// Zero (`NodeClass::Unspecified`) if not requested or not resolvable.
    pub node_class: u32,
    /// The type definition of the target node, if it is an Object or Variable and
    /// `BrowseResultMask::TYPE_DEFINITION` was requested.
    pub type_definition: ExpandedNodeId,
}

/// The outcome of browsing a single node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BrowseResult {
    /// `Good` on success. A browse-level failure (e.g. an invalid reference type) leaves
    /// `references` empty.
    pub status_code: StatusCode,
    /// Opaque handle to resume this browse via `BrowseNext`. Empty if the browse for this
    /// node completed within the call.
    pub continuation_point: ContinuationPoint,
    /// The references found, up to the per-node result cap.
    pub references: Vec<ReferenceDescription>,
}

/// A request to resume one paginated browse, or to release its continuation point early.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BrowseNextRequest {
    /// If `true`, the identified continuation points are freed and no further results are
    /// returned for them.
    pub release_continuation_points: bool,
    /// The continuation points to resume (or release), one per `BrowseResult` slot.
    pub continuation_points: Vec<ByteString>,
}

/// One element of a `RelativePath`, naming a reference type to follow and a browse name to
/// match at each step.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RelativePathElement {
    /// The reference type to follow. A null node id means "any reference type".
    pub reference_type_id: NodeId,
    /// If `true`, the reference is followed in the inverse direction.
    pub is_inverse: bool,
    /// Whether subtypes of `reference_type_id` should also be considered.
    pub include_subtypes: bool,
    /// The browse name the target of this step must have.
    pub target_name: QualifiedName,
}

/// A sequence of reference-type/browse-name steps describing a path through the address space,
/// relative to some starting node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RelativePath {
    /// The path elements, walked in order starting from the request's `starting_node`.
    pub elements: Vec<RelativePathElement>,
}

/// One entry of a `TranslateBrowsePathsToNodeIds` request: a starting node plus the relative
/// path to walk from it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BrowsePath {
    /// The node the path starts from.
    pub starting_node: NodeId,
    /// The path to walk.
    pub relative_path: RelativePath,
}

/// One node reached by walking a `BrowsePath` to completion.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BrowsePathTarget {
    /// The node reached.
    pub target_id: ExpandedNodeId,
    /// If the path continued past an external server reference (`target_id.server_index != 0`),
    /// this is the index of the first path element that a lookup on that other server would
    /// still need to resolve. `u32::MAX` if the path was fully resolved locally.
    pub remaining_path_index: u32,
}

/// The outcome of walking one `BrowsePath`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BrowsePathResult {
    /// `Good` if at least one target was found; the specific `Bad*` status otherwise.
    pub status_code: StatusCode,
    /// Every node reached by the path. Ordinarily one, but a path element whose browse name
    /// matches more than one target fans out into multiple targets.
    pub targets: Vec<BrowsePathTarget>,
}

/// A node and the client handle to associate with it, used by `RegisterNodes`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegisterNodesRequest {
    /// The nodes to register.
    pub nodes_to_register: Vec<NodeId>,
}

/// The server-chosen node ids to use in place of the registered ones for the remainder of the
/// session. The core here treats registration as the identity mapping (see the crate's
/// `register` module) since no alias/opaque node-id optimization is in scope.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegisterNodesResult {
    /// One entry per requested node, in the same order.
    pub registered_node_ids: Vec<NodeId>,
}

/// A request to release previously registered node ids.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnregisterNodesRequest {
    /// The nodes to unregister. Must have been previously returned from `RegisterNodes`.
    pub nodes_to_unregister: Vec<NodeId>,
}
