// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Well-known numeric identifiers from namespace 0 (the OPC UA standard namespace).
//!
//! The full catalog of these is normally produced by a code generator reading the
//! standard `Opc.Ua.NodeSet2.xml`. This module hand-curates the small subset the
//! address-space traversal core actually needs to reason about: the root folders,
//! and the reference-type hierarchy rooted at `References`.

use std::convert::TryFrom;

/// Numeric identifiers of well-known standard Objects.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ObjectId {
    /// The root folder of the address space.
    RootFolder = 84,
    /// The folder containing the Objects hierarchy.
    ObjectsFolder = 85,
    /// The folder containing the Types hierarchy.
    TypesFolder = 86,
    /// The folder containing the Views hierarchy.
    ViewsFolder = 87,
    /// The folder containing all reference type definitions.
    ReferenceTypesFolder = 91,
    /// The folder containing all data type definitions.
    DataTypesFolder = 90,
    /// The Server object, the standard entry point describing the server itself. Used by the
    /// sample address-space fixtures as a child of `ObjectsFolder`.
    Server = 2253,
}

impl TryFrom<u32> for ObjectId {
    type Error = ();

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Ok(match value {
            84 => ObjectId::RootFolder,
            85 => ObjectId::ObjectsFolder,
            86 => ObjectId::TypesFolder,
            87 => ObjectId::ViewsFolder,
            91 => ObjectId::ReferenceTypesFolder,
            90 => ObjectId::DataTypesFolder,
            2253 => ObjectId::Server,
            _ => return Err(()),
        })
    }
}

/// Numeric identifiers of well-known standard ReferenceTypes.
///
/// `HasSubtype` is the reference kind the subtype-closure walk in the type tree follows;
/// `References` is the root of the entire reference-type hierarchy.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ReferenceTypeId {
    /// The abstract base of all reference types.
    References = 31,
    /// The abstract base of reference types not part of the Organizes/Aggregates tree.
    NonHierarchicalReferences = 32,
    /// The abstract base of reference types that form a tree (Organizes, Aggregates, ...).
    HierarchicalReferences = 33,
    /// The abstract base of reference types used to build up a type's structure.
    HasChild = 34,
    /// Used to relate an object or view to a child in the Objects/Views hierarchy.
    Organizes = 35,
    /// Relates a node to an event source.
    HasEventSource = 36,
    /// Relates an instance to the modelling rule that governs it within a type definition.
    HasModellingRule = 37,
    /// Relates a node to the type it encodes.
    HasEncoding = 38,
    /// Relates a node to its type definition.
    HasTypeDefinition = 40,
    /// Relates an event notifier to the types of event it can generate.
    GeneratesEvent = 41,
    /// The abstract base of reference types used to build up an instance's structure.
    Aggregates = 44,
    /// Relates a type to a subtype one level below it in the type hierarchy.
    HasSubtype = 45,
    /// Relates a node to a property that describes it.
    HasProperty = 46,
    /// Relates a node to a component that makes up part of it.
    HasComponent = 47,
    /// Relates a node to a subordinate node capable of notifying it of events.
    HasNotifier = 48,
    /// Like `HasComponent`, but preserves the declared order of the target nodes.
    HasOrderedComponent = 49,
}

impl TryFrom<u32> for ReferenceTypeId {
    type Error = ();

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Ok(match value {
            31 => ReferenceTypeId::References,
            32 => ReferenceTypeId::NonHierarchicalReferences,
            33 => ReferenceTypeId::HierarchicalReferences,
            34 => ReferenceTypeId::HasChild,
            35 => ReferenceTypeId::Organizes,
            36 => ReferenceTypeId::HasEventSource,
            37 => ReferenceTypeId::HasModellingRule,
            38 => ReferenceTypeId::HasEncoding,
            40 => ReferenceTypeId::HasTypeDefinition,
            41 => ReferenceTypeId::GeneratesEvent,
            44 => ReferenceTypeId::Aggregates,
            45 => ReferenceTypeId::HasSubtype,
            46 => ReferenceTypeId::HasProperty,
            47 => ReferenceTypeId::HasComponent,
            48 => ReferenceTypeId::HasNotifier,
            49 => ReferenceTypeId::HasOrderedComponent,
            _ => return Err(()),
        })
    }
}

/// Numeric identifiers of well-known standard DataTypes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum DataTypeId {
    /// The abstract base of all data types.
    BaseDataType = 24,
    /// A boolean logic value.
    Boolean = 1,
    /// A signed 32 bit integer.
    Int32 = 6,
    /// A UTF-8 encoded string.
    String = 12,
    /// A NodeId value.
    NodeId = 17,
}

impl TryFrom<u32> for DataTypeId {
    type Error = ();

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Ok(match value {
            24 => DataTypeId::BaseDataType,
            1 => DataTypeId::Boolean,
            6 => DataTypeId::Int32,
            12 => DataTypeId::String,
            17 => DataTypeId::NodeId,
            _ => return Err(()),
        })
    }
}
