// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Enumerations and bitmasks used by the Browse family of services.

use bitflags::bitflags;

use crate::status_code::StatusCode;

/// The class of a node, as defined by OPC UA Part 3.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum NodeClass {
    /// Node class is not known. Not a legal value on a real node, only used as a wildcard.
    Unspecified = 0,
    Object = 1,
    Variable = 2,
    Method = 4,
    ObjectType = 8,
    VariableType = 16,
    ReferenceType = 32,
    DataType = 64,
    View = 128,
}

impl NodeClass {
    /// The bit this node class occupies in a `NodeClassMask`.
    pub fn as_mask_bit(self) -> u32 {
        self as u32
    }
}

bitflags! {
    /// A mask of node classes, used by `BrowseDescription::node_class_mask` to filter which
    /// target node classes a browse returns. `0` means "no filtering, match every class".
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct NodeClassMask: u32 {
        const OBJECT = 1;
        const VARIABLE = 2;
        const METHOD = 4;
        const OBJECT_TYPE = 8;
        const VARIABLE_TYPE = 16;
        const REFERENCE_TYPE = 32;
        const DATA_TYPE = 64;
        const VIEW = 128;
    }
}

impl NodeClassMask {
    /// Returns `true` if this mask is empty or if it admits `class`. An empty mask is defined
    /// by the Browse service to mean "no filter" rather than "match nothing".
    pub fn matches(self, class: NodeClass) -> bool {
        self.is_empty() || self.bits() & class.as_mask_bit() != 0
    }
}

bitflags! {
    /// Selects which optional fields of a `ReferenceDescription` the server should populate.
    /// Fields outside the mask are left at their default (null / unspecified) value so the
    /// server can skip the work of resolving them.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct BrowseResultMask: u32 {
        const REFERENCE_TYPE_ID = 1;
        const IS_FORWARD = 2;
        const NODE_CLASS = 4;
        const BROWSE_NAME = 8;
        const DISPLAY_NAME = 16;
        const TYPE_DEFINITION = 32;
        const ALL = Self::REFERENCE_TYPE_ID.bits()
            | Self::IS_FORWARD.bits()
            | Self::NODE_CLASS.bits()
            | Self::BROWSE_NAME.bits()
            | Self::DISPLAY_NAME.bits()
            | Self::TYPE_DEFINITION.bits();
    }
}

/// Which direction along a reference a Browse or relative-path step should follow.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum BrowseDirection {
    /// Follow forward (non-inverse) references only.
    #[default]
    Forward,
    /// Follow inverse references only.
    Inverse,
    /// Follow both forward and inverse references.
    Both,
}

impl BrowseDirection {
    /// Returns `true` if a reference stored with inverse-ness `is_inverse` should be followed
    /// under this direction.
    pub fn matches(self, is_inverse: bool) -> bool {
        match self {
            BrowseDirection::Forward => !is_inverse,
            BrowseDirection::Inverse => is_inverse,
            BrowseDirection::Both => true,
        }
    }

    /// Decodes the wire representation of a browse direction (`0` = forward, `1` = inverse,
    /// `2` = both). Any other value is not a legal `BrowseDirection` per the standard and is
    /// rejected here rather than at the `BrowseDescription` type, since the enum itself has no
    /// room for an invalid state.
    pub fn from_wire(value: i32) -> Result<Self, StatusCode> {
        match value {
            0 => Ok(BrowseDirection::Forward),
            1 => Ok(BrowseDirection::Inverse),
            2 => Ok(BrowseDirection::Both),
            _ => Err(StatusCode::BadBrowseDirectionInvalid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_node_class_mask_matches_everything() {
        let mask = NodeClassMask::empty();
        assert!(mask.matches(NodeClass::Object));
        assert!(mask.matches(NodeClass::View));
    }

    #[test]
    fn node_class_mask_filters() {
        let mask = NodeClassMask::OBJECT | NodeClassMask::VARIABLE;
        assert!(mask.matches(NodeClass::Object));
        assert!(mask.matches(NodeClass::Variable));
        assert!(!mask.matches(NodeClass::Method));
    }

    #[test]
    fn browse_direction_matches() {
        assert!(BrowseDirection::Forward.matches(false));
        assert!(!BrowseDirection::Forward.matches(true));
        assert!(BrowseDirection::Inverse.matches(true));
        assert!(!BrowseDirection::Inverse.matches(false));
        assert!(BrowseDirection::Both.matches(true));
        assert!(BrowseDirection::Both.matches(false));
    }

    #[test]
    fn browse_direction_from_wire() {
        assert_eq!(BrowseDirection::from_wire(0), Ok(BrowseDirection::Forward));
        assert_eq!(BrowseDirection::from_wire(1), Ok(BrowseDirection::Inverse));
        assert_eq!(BrowseDirection::from_wire(2), Ok(BrowseDirection::Both));
        assert_eq!(
            BrowseDirection::from_wire(3),
            Err(crate::StatusCode::BadBrowseDirectionInvalid)
        );
    }
}
