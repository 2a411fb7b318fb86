// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! `RegisterNodes` and `UnregisterNodes`. Both share the Browse/TranslateBrowsePaths service
//! surface but do no real work: no alias or opaque node-id optimization is in scope, so
//! registration is the identity mapping and unregistration only validates its input.

use opcua_types::{NodeId, StatusCode};

use crate::view::limits::Limits;

/// Registers `nodes_to_register` for the remainder of the session. Returns the same ids back,
/// unchanged, since this core does not optimize repeated access through an opaque alias.
pub fn register_nodes(
    limits: Limits,
    nodes_to_register: &[NodeId],
) -> Result<Vec<NodeId>, StatusCode> {
    if nodes_to_register.is_empty() {
        return Err(StatusCode::BadNothingToDo);
    }
    if limits.max_nodes_per_register_nodes != 0
        && nodes_to_register.len() > limits.max_nodes_per_register_nodes
    {
        return Err(StatusCode::BadTooManyOperations);
    }
    Ok(nodes_to_register.to_vec())
}

/// Releases previously registered node ids. There is no alias table to clear, so this only
/// validates the request shape.
///
/// The reference source for this service writes `BadNothingToDo` for empty input but falls
/// through to the `maxNodesPerRegisterNodes` size check instead of returning immediately — a
/// harmless bug, since that check can never trigger on an empty slice. This implementation
/// returns as soon as the empty-input case is detected.
pub fn unregister_nodes(limits: Limits, nodes_to_unregister: &[NodeId]) -> Result<(), StatusCode> {
    if nodes_to_unregister.is_empty() {
        return Err(StatusCode::BadNothingToDo);
    }
    if limits.max_nodes_per_register_nodes != 0
        && nodes_to_unregister.len() > limits.max_nodes_per_register_nodes
    {
        return Err(StatusCode::BadTooManyOperations);
    }
    Ok(())
}
