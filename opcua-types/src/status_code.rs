// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the implementation of `StatusCode`, the uniform result/error code
//! every traversal operation reports through.

use std::fmt;

/// The severity encoded in the top two bits of a status code.
const SEVERITY_MASK: u32 = 0xC000_0000;
const SEVERITY_UNCERTAIN: u32 = 0x4000_0000;
const SEVERITY_BAD: u32 = 0x8000_0000;

/// A `StatusCode` is a numeric code with an encoded severity (Good, Uncertain, Bad) used
/// throughout OPC UA as the uniform result type for operations, in place of idiomatic
/// per-module Rust error enums. It is `Copy` and carries no payload, matching the wire type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct StatusCode(u32);

macro_rules! status_codes {
    ($($(#[$doc:meta])* $name:ident = $value:expr;)*) => {
        impl StatusCode {
            $(
                $(#[$doc])*
                pub const $name: StatusCode = StatusCode($value);
            )*
        }
    };
}

status_codes! {
    /// The operation completed successfully.
    Good = 0x0000_0000;
    /// The result is uncertain but is not known to be wrong.
    UncertainReferenceOutOfServer = 0x4080_0000;
    /// The node id refers to a node that does not exist in the server address space.
    BadNodeIdUnknown = 0x8033_0000;
    /// The syntax of the node id is not valid.
    BadNodeIdInvalid = 0x8034_0000;
    /// No value matched the search criteria.
    BadNoMatch = 0x8064_0000;
    /// The view id does not refer to a valid view node.
    BadViewIdUnknown = 0x8079_0000;
    /// The requested operation has no effect and was not performed.
    BadNothingToDo = 0x800F_0000;
    /// The requested operation is too complex given the maximum number of operations allowed.
    BadTooManyOperations = 0x80E5_0000;
    /// The continuation point provided is no longer valid.
    BadContinuationPointInvalid = 0x8045_0000;
    /// The operation could not be processed because all continuation points have been assigned.
    BadNoContinuationPoints = 0x8046_0000;
    /// The reference type id does not refer to a valid reference type node.
    BadReferenceTypeIdInvalid = 0x80E4_0000;
    /// The browse direction is not a valid value.
    BadBrowseDirectionInvalid = 0x80E3_0000;
    /// The node is not part of the view.
    BadNodeNotInView = 0x80E6_0000;
    /// The target node does not have the expected node class.
    BadNodeClassInvalid = 0x80F0_0000;
    /// The browse name is invalid.
    BadBrowseNameInvalid = 0x80E7_0000;
    /// The target of the referenced relative path could not be resolved.
    BadTargetNodeIdInvalid = 0x80FB_0000;
    /// An unexpected error occurred during a request.
    BadUnexpectedError = 0x8001_0000;
    /// The request is not supported by this server.
    BadNotSupported = 0x8038_0000;
}

impl StatusCode {
    /// Returns `true` if the status represents success (including a qualified success).
    pub fn is_good(self) -> bool {
        self.0 & SEVERITY_MASK == 0
    }

    /// Returns `true` if the status represents an uncertain result.
    pub fn is_uncertain(self) -> bool {
        self.0 & SEVERITY_MASK == SEVERITY_UNCERTAIN
    }

    /// Returns `true` if the status represents a failure.
    pub fn is_bad(self) -> bool {
        self.0 & SEVERITY_MASK == SEVERITY_BAD
    }

    /// The raw numeric value of the code.
    pub fn bits(self) -> u32 {
        self.0
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

impl From<StatusCode> for u32 {
    fn from(value: StatusCode) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::StatusCode;

    #[test]
    fn good_is_good() {
        assert!(StatusCode::Good.is_good());
        assert!(!StatusCode::Good.is_bad());
    }

    #[test]
    fn bad_variants_are_bad() {
        assert!(StatusCode::BadNodeIdUnknown.is_bad());
        assert!(StatusCode::BadContinuationPointInvalid.is_bad());
        assert!(StatusCode::BadNoContinuationPoints.is_bad());
    }

    #[test]
    fn uncertain_is_uncertain() {
        assert!(StatusCode::UncertainReferenceOutOfServer.is_uncertain());
        assert!(!StatusCode::UncertainReferenceOutOfServer.is_bad());
    }
}
