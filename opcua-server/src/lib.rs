// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

#![warn(missing_docs)]

//! The address-space traversal core of an OPC UA server: the `Browse`, `BrowseNext`,
//! `TranslateBrowsePathsToNodeIds`, `RegisterNodes` and `UnregisterNodes` services, built over
//! an in-memory address space.
//!
//! This crate is deliberately narrow. It has no transport, no session establishment, no
//! attribute read/write, and no subscriptions: it is the graph-traversal engine those layers
//! would sit on top of, consuming an [`AddressSpace`] and a per-client [`Session`] and nothing
//! else.
//!
//! ```
//! use opcua_nodes::Node;
//! use opcua_server::address_space::AddressSpace;
//! use opcua_server::session::Session;
//! use opcua_server::view::{BrowseService, Limits};
//! use opcua_types::{BrowseDescription, BrowseDirection, NodeClass, NodeId, ReferenceTypeId};
//!
//! let mut address_space = AddressSpace::new();
//! address_space.insert(Node::new(
//!     NodeId::new(0, 85),
//!     NodeClass::Object,
//!     "ObjectsFolder",
//!     "ObjectsFolder",
//! ));
//!
//! let session = Session::new(1, 64);
//! let mut registry = session.lock_continuation_points();
//! let mut service = BrowseService::new(
//!     &address_space,
//!     &mut registry,
//!     Limits::default(),
//! );
//! let results = service
//!     .browse(
//!         &NodeId::null(),
//!         0,
//!         &[BrowseDescription {
//!             node_id: NodeId::new(0, 85),
//!             browse_direction: BrowseDirection::Forward,
//!             reference_type_id: NodeId::from(ReferenceTypeId::HierarchicalReferences),
//!             include_subtypes: true,
//!             node_class_mask: 0,
//!             result_mask: 0,
//!         }],
//!     )
//!     .unwrap();
//! assert!(results[0].references.is_empty());
//! ```

pub mod address_space;
pub mod session;
pub mod view;
