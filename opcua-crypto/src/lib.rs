// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Random identifier generation used by continuation points and other
//! server-generated handles.

pub mod random;
