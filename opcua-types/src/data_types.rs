// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Certain aliases for OPC-UA data types.

use crate::{ByteString, UAString};

/// This primitive data type is a UInt32 that is used as an identifier, such as a handle.
/// All values, except for 0, are valid. IntegerId = 288,
pub type IntegerId = u32;

/// OPC-UA LocaleId.
pub type LocaleId = UAString;

/// OPC-UA raw continuation point, alias for ByteString. This is the opaque handle a client
/// passes back to `BrowseNext` to resume a paginated browse.
pub type ContinuationPoint = ByteString;

/// OPC-UA Counter, alias for u32.
pub type Counter = u32;
