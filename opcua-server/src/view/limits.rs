// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Server-wide configuration for the view services.

/// Server-wide bounds on the view services, mirroring the `OperationalLimits` fields of the
/// `ServerConfig` a real server reads from its configuration file. `0` means "unbounded" for
/// every field here except `continuation_point_cap` per session, which is always a hard cap.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    /// Upper bound on references returned for a single node in one `Browse`/`BrowseNext` call,
    /// combined with the client's own requested maximum by taking the smaller of the two
    /// (`0` from either side means "no limit from that side").
    pub max_references_per_node: usize,
    /// Upper bound on the number of `BrowseDescription`s accepted in one `Browse` request.
    pub max_nodes_per_browse: usize,
    /// Upper bound on the number of `BrowsePath`s accepted in one
    /// `TranslateBrowsePathsToNodeIds` request.
    pub max_nodes_per_translate_browse_paths_to_node_ids: usize,
    /// Upper bound on the number of node ids accepted in one `RegisterNodes` or
    /// `UnregisterNodes` request. The standard does not define a distinct limit for
    /// `UnregisterNodes`; the source reuses `maxNodesPerRegisterNodes` for both.
    pub max_nodes_per_register_nodes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_references_per_node: 0,
            max_nodes_per_browse: 0,
            max_nodes_per_translate_browse_paths_to_node_ids: 0,
            max_nodes_per_register_nodes: 0,
        }
    }
}

impl Limits {
    /// Combines a client-requested maximum with a server-configured one: the smaller of the
    /// two non-zero values wins; if either is zero, the other applies; if both are zero, the
    /// result is zero (unbounded).
    pub fn effective_max(client_requested: usize, server_configured: usize) -> usize {
        match (client_requested, server_configured) {
            (0, s) => s,
            (c, 0) => c,
            (c, s) => c.min(s),
        }
    }
}
