// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! The session collaborator: owns the continuation-point registry the view services mutate.
//!
//! Per-session continuation-point lists are mutated only under the session's own lock, which a
//! dispatcher holds for the duration of one service call. Here that lock is a `parking_lot`
//! mutex around the registry, rather than something the caller has to remember to take:
//! [`Session::lock_continuation_points`] hands out the guard the view services mutate through,
//! so a `Session` can be shared (e.g. behind an `Arc`) across the threads an outer dispatcher
//! uses to run independent sessions in parallel.

use parking_lot::{Mutex, MutexGuard};

use opcua_types::IntegerId;

use crate::view::ContinuationPointRegistry;

/// One client session's view-service state: its continuation points and the cap they're held
/// to. A server creates one of these per session and keeps it alive for that session's
/// lifetime.
#[derive(Debug)]
pub struct Session {
    id: IntegerId,
    continuation_points: Mutex<ContinuationPointRegistry>,
    continuation_point_cap: usize,
}

impl Session {
    /// Creates a new session with the given id and continuation-point cap (`0` = unbounded).
    pub fn new(id: IntegerId, continuation_point_cap: usize) -> Self {
        Self {
            id,
            continuation_points: Mutex::new(ContinuationPointRegistry::new(continuation_point_cap)),
            continuation_point_cap,
        }
    }

    /// This session's id.
    pub fn id(&self) -> IntegerId {
        self.id
    }

    /// Locks and returns this session's continuation-point registry. Held for the duration of
    /// one `Browse`/`BrowseNext` call, matching the concurrency contract.
    pub fn lock_continuation_points(&self) -> MutexGuard<'_, ContinuationPointRegistry> {
        self.continuation_points.lock()
    }

    /// `availableContinuationPoints`: how many more continuation points this session may open
    /// before hitting its cap. Unbounded sessions always report `0`, since there is no
    /// meaningful "remaining" count to report against an unbounded cap.
    pub fn available_continuation_points(&self) -> usize {
        if self.continuation_point_cap == 0 {
            0
        } else {
            self.continuation_point_cap
                .saturating_sub(self.lock_continuation_points().len())
        }
    }

    /// Frees every continuation point this session holds. Must be called on session teardown so
    /// a closed session does not leak registry entries.
    pub fn close(&self) {
        self.lock_continuation_points().clear();
    }
}

/// The process-wide administrative session, used when the public non-service entry points
/// (e.g. a server's own startup code populating the address space) are invoked without a
/// client session attached. It participates in the same continuation-point invariants as any
/// client session; in practice nothing ever pages a browse through it, since administrative
/// callers use `requestedMaxReferencesPerNode = 0`.
pub fn administrative_session() -> Session {
    Session::new(0, 0)
}
