// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

#![warn(missing_docs)]

//! Data types shared by the address-space traversal core: node identifiers, the handful of
//! OPC UA built-in string/scalar types it depends on, and the request/result structs for the
//! `Browse`, `BrowseNext`, and `TranslateBrowsePathsToNodeIds` services.

pub mod byte_string;
pub mod data_types;
pub mod enums;
pub mod errors;
pub mod expanded_node_id;
pub mod guid;
pub mod ids;
pub mod localized_text;
pub mod node_id;
pub mod qualified_name;
pub mod status_code;
pub mod string;
pub mod view;

pub use byte_string::ByteString;
pub use data_types::{Counter, IntegerId, LocaleId};
pub use enums::{BrowseDirection, BrowseResultMask, NodeClass, NodeClassMask};
pub use errors::OpcUaError;
pub use expanded_node_id::ExpandedNodeId;
pub use guid::Guid;
pub use ids::{DataTypeId, ObjectId, ReferenceTypeId};
pub use localized_text::LocalizedText;
pub use node_id::{Identifier, NodeId};
pub use qualified_name::QualifiedName;
pub use status_code::StatusCode;
pub use string::UAString;
pub use view::{
    BrowseDescription, BrowseNextRequest, BrowsePath, BrowsePathResult, BrowsePathTarget,
    BrowseResult, RegisterNodesRequest, RegisterNodesResult, ReferenceDescription, RelativePath,
    RelativePathElement, UnregisterNodesRequest,
};
