// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! C7 (the relative-path element walker) and C8 (the `TranslateBrowsePathsToNodeIds` driver
//! that repeatedly calls it across alternating frontier buffers).

use opcua_types::{
    BrowsePath, BrowsePathResult, BrowsePathTarget, ExpandedNodeId, NodeId, QualifiedName,
    RelativePathElement, StatusCode,
};

use crate::address_space::AddressSpace;
use crate::view::limits::Limits;
use crate::view::predicate::reference_type_matches;

/// C7: walks one relative-path element across the nodes in `current_frontier`, returning the
/// local node ids reached (the next frontier) plus any targets that turned out to live on
/// another server (suspended here, so they go straight into the result rather than the next
/// frontier).
///
/// `depth` is this element's zero-based position in the path; it becomes the
/// `remainingPathIndex` of any external target discovered while walking it. `prev_target_name`
/// is `None` only at `depth == 0` (the starting node is taken as-is); for every later depth it
/// is the previous element's `targetName`, which a frontier node must match before its own
/// references are walked — the match could not be performed any earlier, since it requires the
/// node to already be resolved.
pub fn step(
    address_space: &AddressSpace,
    element: &RelativePathElement,
    depth: usize,
    prev_target_name: Option<&QualifiedName>,
    current_frontier: &[NodeId],
) -> Result<(Vec<NodeId>, Vec<BrowsePathTarget>), StatusCode> {
    if !address_space.is_valid_reference_type_filter(&element.reference_type_id) {
        // Not a hard error: an invalid filter simply matches nothing.
        return Ok((Vec::new(), Vec::new()));
    }

    let mut next_frontier = Vec::new();
    let mut external_targets = Vec::new();

    for node_id in current_frontier {
        let Some(node) = address_space.get(node_id) else {
            if depth == 0 {
                return Err(StatusCode::BadNodeIdUnknown);
            }
            continue;
        };

        if let Some(prev_target_name) = prev_target_name {
            if node.browse_name() != prev_target_name {
                continue;
            }
        }

        for kind in node.reference_kinds() {
            if kind.is_inverse != element.is_inverse {
                continue;
            }
            if !reference_type_matches(
                address_space,
                &element.reference_type_id,
                &kind.reference_type_id,
                element.include_subtypes,
            ) {
                continue;
            }
            for target in &kind.targets {
                if target.is_external() {
                    external_targets.push(BrowsePathTarget {
                        target_id: target.clone(),
                        remaining_path_index: depth as u32,
                    });
                } else {
                    next_frontier.push(target.node_id.clone());
                }
            }
        }
    }

    Ok((next_frontier, external_targets))
}

/// Walks one `BrowsePath` to completion, driving [`step`] across each of its elements with two
/// alternating frontier buffers.
fn translate_one(address_space: &AddressSpace, browse_path: &BrowsePath) -> BrowsePathResult {
    let elements = &browse_path.relative_path.elements;
    if elements.is_empty() {
        return BrowsePathResult {
            status_code: StatusCode::BadNothingToDo,
            targets: Vec::new(),
        };
    }
    if elements.iter().any(|e| e.target_name.name.is_empty()) {
        return BrowsePathResult {
            status_code: StatusCode::BadBrowseNameInvalid,
            targets: Vec::new(),
        };
    }

    let mut targets = Vec::new();
    let mut current = vec![browse_path.starting_node.clone()];
    let mut prev_target_name: Option<QualifiedName> = None;

    for (depth, element) in elements.iter().enumerate() {
        let (next, externals) =
            match step(address_space, element, depth, prev_target_name.as_ref(), &current) {
                Ok(result) => result,
                Err(status_code) => {
                    return BrowsePathResult {
                        status_code,
                        targets: Vec::new(),
                    }
                }
            };
        targets.extend(externals);
        current = next;
        prev_target_name = Some(element.target_name.clone());
        if current.is_empty() {
            break;
        }
    }

    if let Some(last_target_name) = &prev_target_name {
        for node_id in &current {
            let Some(node) = address_space.get(node_id) else {
                continue;
            };
            if node.browse_name() == last_target_name {
                targets.push(BrowsePathTarget {
                    target_id: ExpandedNodeId::from(node_id.clone()),
                    remaining_path_index: u32::MAX,
                });
            }
        }
    }

    let status_code = if targets.is_empty() {
        StatusCode::BadNoMatch
    } else {
        StatusCode::Good
    };
    BrowsePathResult {
        status_code,
        targets,
    }
}

/// C8: the `TranslateBrowsePathsToNodeIds` service.
pub fn translate_browse_paths_to_node_ids(
    address_space: &AddressSpace,
    limits: Limits,
    browse_paths: &[BrowsePath],
) -> Result<Vec<BrowsePathResult>, StatusCode> {
    if browse_paths.is_empty() {
        return Err(StatusCode::BadNothingToDo);
    }
    if limits.max_nodes_per_translate_browse_paths_to_node_ids != 0
        && browse_paths.len() > limits.max_nodes_per_translate_browse_paths_to_node_ids
    {
        return Err(StatusCode::BadTooManyOperations);
    }

    Ok(browse_paths
        .iter()
        .map(|browse_path| translate_one(address_space, browse_path))
        .collect())
}
