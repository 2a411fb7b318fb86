// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! C4: the per-session registry of continuation points that let a paginated `Browse` be
//! resumed by a later `BrowseNext` call.

use hashbrown::HashMap;
use opcua_crypto::random;
use opcua_types::{BrowseDescription, ByteString, NodeId, StatusCode};

use crate::view::BrowseCursor;

/// The saved state of one paginated browse: which node is being browsed, the original browse
/// description (so a later `BrowseNext` does not need the caller to resupply filters the wire
/// protocol never carries again), the effective per-node max pinned at the original `Browse`
/// call, and how far into the reference list the last page stopped.
///
/// This is a deep copy, not a borrow into the address space: it is taken once, when a browse
/// first overflows its page size, and is independent of whatever the address space does to the
/// underlying node afterwards. A node deleted between `Browse` and `BrowseNext` surfaces as a
/// `BadNodeIdUnknown` the next time the cursor is resolved, rather than dangling.
#[derive(Debug, Clone)]
pub struct ContinuationPoint {
    /// The node whose references are being enumerated.
    pub node_id: NodeId,
    /// The browse description this continuation point was opened under.
    pub description: BrowseDescription,
    /// The effective max references per node pinned when this browse began.
    pub effective_max: usize,
    /// Where the enumeration had gotten to.
    pub cursor: BrowseCursor,
}

/// A session's continuation points, keyed by the opaque id handed back to the client. Per spec,
/// continuation-point lists belong to a session and are only ever mutated under that session's
/// own lock (see [`crate::session::Session`]); this type holds no lock of its own.
#[derive(Debug, Default)]
pub struct ContinuationPointRegistry {
    points: HashMap<ByteString, ContinuationPoint>,
    max_per_session: usize,
}

impl ContinuationPointRegistry {
    /// Creates a new, empty registry. `max_per_session` is the hard cap on how many
    /// continuation points this session may hold at once; `0` means unbounded.
    pub fn new(max_per_session: usize) -> Self {
        Self {
            points: HashMap::new(),
            max_per_session,
        }
    }

    /// The number of continuation points currently held open.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no continuation points are currently held open.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Mints a fresh 16-byte random id, stores `point` under it, and returns the id as the
    /// `ByteString` the client should pass back to `BrowseNext`. Fails with
    /// `BadNoContinuationPoints` if this session is already at its cap.
    pub fn create(&mut self, point: ContinuationPoint) -> Result<ByteString, StatusCode> {
        if self.max_per_session != 0 && self.points.len() >= self.max_per_session {
            return Err(StatusCode::BadNoContinuationPoints);
        }
        let id = random::byte_string(16);
        self.points.insert(id.clone(), point);
        Ok(id)
    }

    /// Removes and returns the continuation point named by `id`, or `BadContinuationPointInvalid`
    /// if no such point is held (including a point that was already consumed or released).
    pub fn take(&mut self, id: &ByteString) -> Result<ContinuationPoint, StatusCode> {
        self.points
            .remove(id)
            .ok_or(StatusCode::BadContinuationPointInvalid)
    }

    /// Returns a mutable borrow of the continuation point named by `id`, without removing it, or
    /// `BadContinuationPointInvalid` if no such point is held. Used by `BrowseNext` to resume a
    /// cursor in place: the same id is re-emitted to the client as long as the browse is not yet
    /// exhausted, so the id must not change across resumes (§4.6).
    pub fn get_mut(&mut self, id: &ByteString) -> Result<&mut ContinuationPoint, StatusCode> {
        self.points
            .get_mut(id)
            .ok_or(StatusCode::BadContinuationPointInvalid)
    }

    /// Releases the continuation point named by `id` without resuming it, as requested by a
    /// `BrowseNext` call with `releaseContinuationPoints = true`. Releasing an id that is not
    /// held is not an error: the end state (no continuation point under that id) is the same
    /// either way.
    pub fn release(&mut self, id: &ByteString) {
        self.points.remove(id);
    }

    /// Drops every continuation point this session holds, e.g. on session close.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}
