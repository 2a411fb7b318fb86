// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the implementation of `ExpandedNodeId`.

use std::{fmt, str::FromStr, sync::LazyLock};

use crate::{
    node_id::{Identifier, NodeId},
    status_code::StatusCode,
    string::UAString,
};

/// A NodeId that allows the namespace URI to be specified instead of an index, and that can
/// refer to a node hosted by a different server (`server_index != 0`).
#[derive(PartialEq, Debug, Clone, Eq, Hash, Default)]
pub struct ExpandedNodeId {
    /// The inner NodeId.
    pub node_id: NodeId,
    /// The full namespace URI. If this is set, the node ID namespace index may be zero.
    pub namespace_uri: UAString,
    /// The server index. 0 means current server.
    pub server_index: u32,
}

impl From<&NodeId> for ExpandedNodeId {
    fn from(value: &NodeId) -> Self {
        value.clone().into()
    }
}

impl From<(NodeId, u32)> for ExpandedNodeId {
    fn from(v: (NodeId, u32)) -> Self {
        ExpandedNodeId {
            node_id: v.0,
            namespace_uri: UAString::null(),
            server_index: v.1,
        }
    }
}

impl From<(NodeId, &str)> for ExpandedNodeId {
    fn from(v: (NodeId, &str)) -> Self {
        ExpandedNodeId {
            node_id: v.0,
            namespace_uri: v.1.into(),
            server_index: 0,
        }
    }
}

impl From<NodeId> for ExpandedNodeId {
    fn from(v: NodeId) -> Self {
        ExpandedNodeId {
            node_id: v,
            namespace_uri: UAString::null(),
            server_index: 0,
        }
    }
}

impl fmt::Display for ExpandedNodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Formatted depending on the namespace uri being empty or not.
        if self.namespace_uri.is_empty() {
            // svr=<serverindex>;ns=<namespaceindex>;<type>=<value>
            write!(f, "svr={};{}", self.server_index, self.node_id)
        } else {
            // The % and ; chars have to be escaped out in the uri
            let namespace_uri = String::from(self.namespace_uri.as_ref())
                .replace('%', "%25")
                .replace(';', "%3b");
            // svr=<serverindex>;nsu=<uri>;<type>=<value>
            write!(
                f,
                "svr={};nsu={};{}",
                self.server_index, namespace_uri, self.node_id.identifier
            )
        }
    }
}

impl FromStr for ExpandedNodeId {
    type Err = StatusCode;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        use regex::Regex;

        // Parses a node from a string using the format specified in 5.3.1.11 part 6
        //
        // svr=<serverindex>;ns=<namespaceindex>;<type>=<value>
        // or
        // svr=<serverindex>;nsu=<uri>;<type>=<value>

        static RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(
                r"^svr=(?P<svr>[0-9]+);(ns=(?P<ns>[0-9]+)|nsu=(?P<nsu>[^;]+));(?P<t>[isgb]=.+)$",
            )
            .unwrap()
        });

        let captures = RE.captures(s).ok_or(StatusCode::BadNodeIdInvalid)?;

        // Server index
        let server_index = captures
            .name("svr")
            .ok_or(StatusCode::BadNodeIdInvalid)
            .and_then(|server_index| {
                server_index
                    .as_str()
                    .parse::<u32>()
                    .map_err(|_| StatusCode::BadNodeIdInvalid)
            })?;

        // Check for namespace uri
        let namespace_uri = if let Some(nsu) = captures.name("nsu") {
            // The % and ; chars need to be unescaped
            let nsu = String::from(nsu.as_str())
                .replace("%3b", ";")
                .replace("%25", "%");
            UAString::from(nsu)
        } else {
            UAString::null()
        };

        let namespace = if let Some(ns) = captures.name("ns") {
            ns.as_str()
                .parse::<u16>()
                .map_err(|_| StatusCode::BadNodeIdInvalid)?
        } else {
            0
        };

        // Type identifier
        let t = captures.name("t").unwrap();
        Identifier::from_str(t.as_str())
            .map(|t| ExpandedNodeId {
                server_index,
                namespace_uri,
                node_id: NodeId::new(namespace, t),
            })
            .map_err(|_| StatusCode::BadNodeIdInvalid)
    }
}

impl ExpandedNodeId {
    /// Creates an expanded node id from a node id
    pub fn new<T>(value: T) -> ExpandedNodeId
    where
        T: 'static + Into<ExpandedNodeId>,
    {
        value.into()
    }

    /// Return a null ExpandedNodeId.
    pub fn null() -> ExpandedNodeId {
        Self::new(NodeId::null())
    }

    /// Return `true` if this expanded node ID is null.
    pub fn is_null(&self) -> bool {
        self.node_id.is_null()
    }

    /// Return `true` if this node is hosted by a server other than the one currently browsing
    /// it, i.e. `server_index != 0`. Such targets cannot be dereferenced locally; browsing stops
    /// and the raw `ExpandedNodeId` is returned to the caller as-is.
    pub fn is_external(&self) -> bool {
        self.server_index != 0
    }
}

#[cfg(test)]
mod tests {
    use super::ExpandedNodeId;
    use crate::node_id::NodeId;
    use std::str::FromStr;

    #[test]
    fn display_local() {
        let n = ExpandedNodeId::new(NodeId::new(1, 42u32));
        assert_eq!(n.to_string(), "svr=0;ns=1;i=42");
    }

    #[test]
    fn roundtrip_via_string() {
        let n = ExpandedNodeId::new(NodeId::new(1, 42u32));
        let s = n.to_string();
        let n2 = ExpandedNodeId::from_str(&s).unwrap();
        assert_eq!(n, n2);
    }

    #[test]
    fn external_server_target() {
        let n: ExpandedNodeId = (NodeId::new(1, 1u32), 7u32).into();
        assert!(n.is_external());
    }
}
