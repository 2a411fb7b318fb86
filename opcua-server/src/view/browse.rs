// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! C3 (the single-node browse engine) plus the C5/C6 service entry points, `Browse` and
//! `BrowseNext`, that drive it.

use opcua_types::{
    BrowseDescription, BrowseResult, BrowseResultMask, ByteString, NodeClassMask, NodeId,
    StatusCode,
};

use crate::address_space::AddressSpace;
use crate::view::continuation::{ContinuationPoint, ContinuationPointRegistry};
use crate::view::limits::Limits;
use crate::view::predicate::reference_type_matches;
use crate::view::reference_description::build_reference_description;

/// A resumable position within one node's reference kinds. Starts at `(0, 0)`; a fresh browse
/// begins with `BrowseCursor::new()` and never touches the continuation-point registry unless
/// the node has more matching references than the effective max allows (see module docs on
/// "lazy promotion").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowseCursor {
    kind_index: usize,
    target_index: usize,
}

impl BrowseCursor {
    /// A cursor positioned at the very start of a node's reference list.
    pub fn new() -> Self {
        Self::default()
    }
}

/// The result of walking one node's reference list to completion or to its effective max.
struct BrowseStep {
    references: Vec<opcua_types::ReferenceDescription>,
    cursor: BrowseCursor,
    done: bool,
}

/// C3: walks `node_id`'s reference kinds starting at `cursor`, applying `description`'s
/// direction/type/class filters, and stops once `effective_max` matching rows have been
/// produced (`0` means unbounded). Returns the rows found, the cursor to resume from, and
/// whether the node's reference list was exhausted.
///
/// `description.browse_direction` is always a valid, already-decoded [`opcua_types::BrowseDirection`]:
/// the wire-level "is this direction value legal" check happens once, at decode time, via
/// `BrowseDirection::from_wire`, before a `BrowseDescription` can exist at all.
fn browse_node(
    address_space: &AddressSpace,
    node_id: &NodeId,
    description: &BrowseDescription,
    cursor: BrowseCursor,
    effective_max: usize,
) -> Result<BrowseStep, StatusCode> {
    let node = address_space
        .get(node_id)
        .ok_or(StatusCode::BadNodeIdUnknown)?;
    if !address_space.is_valid_reference_type_filter(&description.reference_type_id) {
        return Err(StatusCode::BadReferenceTypeIdInvalid);
    }

    let node_class_mask = NodeClassMask::from_bits_truncate(description.node_class_mask);
    let result_mask = BrowseResultMask::from_bits_truncate(description.result_mask);
    let kinds = node.reference_kinds();

    let mut references = Vec::new();
    let mut kind_index = cursor.kind_index;
    let mut target_index = cursor.target_index;

    while kind_index < kinds.len() {
        let kind = &kinds[kind_index];
        let kind_matches = description.browse_direction.matches(kind.is_inverse)
            && reference_type_matches(
                address_space,
                &description.reference_type_id,
                &kind.reference_type_id,
                description.include_subtypes,
            );
        if !kind_matches {
            kind_index += 1;
            target_index = 0;
            continue;
        }

        while target_index < kind.targets.len() {
            let target_expanded = &kind.targets[target_index];
            let target_node = if target_expanded.is_external() {
                None
            } else {
                match address_space.get(&target_expanded.node_id) {
                    Some(node) => Some(node),
                    // Missing target: not an error, not counted against the effective max.
                    None => {
                        target_index += 1;
                        continue;
                    }
                }
            };
            if let Some(target_node) = &target_node {
                if !node_class_mask.matches(target_node.node_class()) {
                    target_index += 1;
                    continue;
                }
            }

            if effective_max != 0 && references.len() >= effective_max {
                return Ok(BrowseStep {
                    references,
                    cursor: BrowseCursor {
                        kind_index,
                        target_index,
                    },
                    done: false,
                });
            }

            references.push(build_reference_description(
                kind,
                target_expanded,
                target_node,
                result_mask,
            ));
            target_index += 1;
        }

        kind_index += 1;
        target_index = 0;
    }

    Ok(BrowseStep {
        references,
        cursor: BrowseCursor::new(),
        done: true,
    })
}

/// C5: the `Browse` service, orchestrating [`browse_node`] across a whole request and
/// promoting cursors that overflow their page into `registry`.
pub struct BrowseService<'a> {
    address_space: &'a AddressSpace,
    registry: &'a mut ContinuationPointRegistry,
    limits: Limits,
}

impl<'a> BrowseService<'a> {
    /// Creates a service bound to one address space and one session's continuation-point
    /// registry, enforcing `limits`.
    pub fn new(
        address_space: &'a AddressSpace,
        registry: &'a mut ContinuationPointRegistry,
        limits: Limits,
    ) -> Self {
        Self {
            address_space,
            registry,
            limits,
        }
    }

    /// Runs a `Browse` request. `view_id` is the request's `view.viewId`; non-null fails the
    /// whole request, since only the default view is supported. `requested_max_references` is
    /// the client's `requestedMaxReferencesPerNode`.
    pub fn browse(
        &mut self,
        view_id: &NodeId,
        requested_max_references: usize,
        nodes_to_browse: &[BrowseDescription],
    ) -> Result<Vec<BrowseResult>, StatusCode> {
        if !view_id.is_null() {
            return Err(StatusCode::BadViewIdUnknown);
        }
        if nodes_to_browse.is_empty() {
            return Err(StatusCode::BadNothingToDo);
        }
        if self.limits.max_nodes_per_browse != 0
            && nodes_to_browse.len() > self.limits.max_nodes_per_browse
        {
            return Err(StatusCode::BadTooManyOperations);
        }

        let effective_max = Limits::effective_max(
            requested_max_references,
            self.limits.max_references_per_node,
        );

        Ok(nodes_to_browse
            .iter()
            .map(|description| self.browse_one(description, effective_max))
            .collect())
    }

    fn browse_one(&mut self, description: &BrowseDescription, effective_max: usize) -> BrowseResult {
        let step = match browse_node(
            self.address_space,
            &description.node_id,
            description,
            BrowseCursor::new(),
            effective_max,
        ) {
            Ok(step) => step,
            Err(status_code) => {
                return BrowseResult {
                    status_code,
                    ..Default::default()
                }
            }
        };

        if step.done {
            return BrowseResult {
                status_code: StatusCode::Good,
                continuation_point: ByteString::null(),
                references: step.references,
            };
        }

        match self.registry.create(ContinuationPoint {
            node_id: description.node_id.clone(),
            description: description.clone(),
            effective_max,
            cursor: step.cursor,
        }) {
            Ok(id) => BrowseResult {
                status_code: StatusCode::Good,
                continuation_point: id,
                references: step.references,
            },
            Err(status_code) => BrowseResult {
                status_code,
                ..Default::default()
            },
        }
    }
}

/// C6: resumes or releases continuation points allocated by a prior `Browse`. Each entry of
/// `continuation_points` is the opaque id the client sent back; the filters and target node are
/// read from the registry's own snapshot, since the wire-level `BrowseNext` request does not
/// resupply them.
///
/// A resumed cursor that is still not exhausted re-emits the *same* id it was handed back under
/// (§4.6: "re-emit the same identifier"), so the entry is mutated in place rather than removed
/// and re-created; it is only retired from the registry once `browse_node` reports `done`.
pub fn browse_next(
    address_space: &AddressSpace,
    registry: &mut ContinuationPointRegistry,
    release_continuation_points: bool,
    continuation_points: &[ByteString],
) -> Vec<BrowseResult> {
    continuation_points
        .iter()
        .map(|id| {
            if release_continuation_points {
                registry.release(id);
                return BrowseResult::default();
            }

            let point = match registry.get_mut(id) {
                Ok(point) => point,
                Err(status_code) => {
                    return BrowseResult {
                        status_code,
                        ..Default::default()
                    }
                }
            };

            let step = match browse_node(
                address_space,
                &point.node_id,
                &point.description,
                point.cursor,
                point.effective_max,
            ) {
                Ok(step) => step,
                Err(status_code) => {
                    registry.release(id);
                    return BrowseResult {
                        status_code,
                        ..Default::default()
                    };
                }
            };

            if step.done {
                registry.release(id);
                return BrowseResult {
                    status_code: StatusCode::Good,
                    continuation_point: ByteString::null(),
                    references: step.references,
                };
            }

            registry.get_mut(id).expect("just resolved above").cursor = step.cursor;
            BrowseResult {
                status_code: StatusCode::Good,
                continuation_point: id.clone(),
                references: step.references,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opcua_nodes::Node;
    use opcua_types::{NodeClass, ReferenceTypeId};

    fn sample_space() -> AddressSpace {
        let mut space = AddressSpace::new();
        space.insert(Node::new(
            NodeId::new(0, 85),
            NodeClass::Object,
            "ObjectsFolder",
            "ObjectsFolder",
        ));
        for id in 1..=5u32 {
            space.insert(Node::new(
                NodeId::new(0, 1000 + id),
                NodeClass::Object,
                format!("Child{id}"),
                format!("Child{id}"),
            ));
            space.insert_reference_pair(
                &NodeId::new(0, 85),
                ReferenceTypeId::Organizes,
                &NodeId::new(0, 1000 + id),
            );
        }
        space
    }

    fn forward_organizes_description() -> BrowseDescription {
        BrowseDescription {
            node_id: NodeId::new(0, 85),
            browse_direction: opcua_types::BrowseDirection::Forward,
            reference_type_id: NodeId::from(ReferenceTypeId::Organizes),
            include_subtypes: true,
            node_class_mask: 0,
            result_mask: BrowseResultMask::ALL.bits(),
        }
    }

    #[test]
    fn browse_unbounded_returns_all_children_with_no_continuation_point() {
        let space = sample_space();
        let mut registry = ContinuationPointRegistry::new(0);
        let mut service = BrowseService::new(&space, &mut registry, Limits::default());

        let results = service
            .browse(&NodeId::null(), 0, &[forward_organizes_description()])
            .unwrap();

        assert_eq!(results.len(), 1);
        let result = &results[0];
        assert_eq!(result.status_code, StatusCode::Good);
        assert!(result.continuation_point.is_null());
        assert_eq!(result.references.len(), 5);
        assert!(result.references.iter().all(|r| r.is_forward));
    }

    #[test]
    fn paginated_browse_resumes_in_order_via_browse_next() {
        let space = sample_space();
        let mut registry = ContinuationPointRegistry::new(0);
        let description = forward_organizes_description();

        let first = {
            let mut service = BrowseService::new(&space, &mut registry, Limits::default());
            service
                .browse(&NodeId::null(), 1, &[description.clone()])
                .unwrap()
                .remove(0)
        };
        assert_eq!(first.references.len(), 1);
        assert!(!first.continuation_point.is_null());

        let mut all_ids = vec![first.references[0].node_id.clone()];
        let cp = first.continuation_point;
        loop {
            let results = browse_next(&space, &mut registry, false, &[cp.clone()]);
            let result = &results[0];
            assert_eq!(result.status_code, StatusCode::Good);
            all_ids.extend(result.references.iter().map(|r| r.node_id.clone()));
            if result.continuation_point.is_null() {
                break;
            }
            // §4.6: a resume that is not yet exhausted re-emits the same identifier.
            assert_eq!(result.continuation_point, cp);
        }

        let unbounded = {
            let mut service = BrowseService::new(&space, &mut registry, Limits::default());
            service
                .browse(&NodeId::null(), 0, &[description])
                .unwrap()
                .remove(0)
        };
        let unbounded_ids: Vec<_> = unbounded.references.iter().map(|r| r.node_id.clone()).collect();
        assert_eq!(all_ids, unbounded_ids);
    }

    #[test]
    fn browse_next_reemits_the_same_continuation_point_until_exhausted() {
        let space = sample_space();
        let mut registry = ContinuationPointRegistry::new(0);
        let description = forward_organizes_description();

        let first = {
            let mut service = BrowseService::new(&space, &mut registry, Limits::default());
            service
                .browse(&NodeId::null(), 1, &[description])
                .unwrap()
                .remove(0)
        };
        let cp = first.continuation_point;
        assert!(!cp.is_null());

        // Replaying the exact id handed back by `Browse` must keep working across multiple
        // resumes, since a spec-conformant client never sees a different id until the cursor
        // is exhausted.
        let second = browse_next(&space, &mut registry, false, &[cp.clone()]);
        assert_eq!(second[0].status_code, StatusCode::Good);
        assert_eq!(second[0].continuation_point, cp);

        let third = browse_next(&space, &mut registry, false, &[cp.clone()]);
        assert_eq!(third[0].status_code, StatusCode::Good);
        assert_eq!(third[0].continuation_point, cp);
    }

    #[test]
    fn release_then_reuse_is_invalid() {
        let space = sample_space();
        let mut registry = ContinuationPointRegistry::new(0);
        let description = forward_organizes_description();

        let first = {
            let mut service = BrowseService::new(&space, &mut registry, Limits::default());
            service
                .browse(&NodeId::null(), 1, &[description.clone()])
                .unwrap()
                .remove(0)
        };

        let released = browse_next(&space, &mut registry, true, &[first.continuation_point.clone()]);
        assert!(released[0].references.is_empty());

        let reused = browse_next(&space, &mut registry, false, &[first.continuation_point]);
        assert_eq!(
            reused[0].status_code,
            StatusCode::BadContinuationPointInvalid
        );
    }

    #[test]
    fn empty_request_is_bad_nothing_to_do() {
        let space = sample_space();
        let mut registry = ContinuationPointRegistry::new(0);
        let mut service = BrowseService::new(&space, &mut registry, Limits::default());
        assert_eq!(
            service.browse(&NodeId::null(), 0, &[]).unwrap_err(),
            StatusCode::BadNothingToDo
        );
    }

    #[test]
    fn too_many_nodes_to_browse_is_rejected() {
        let space = sample_space();
        let mut registry = ContinuationPointRegistry::new(0);
        let limits = Limits {
            max_nodes_per_browse: 1,
            ..Default::default()
        };
        let mut service = BrowseService::new(&space, &mut registry, limits);
        let descriptions = vec![forward_organizes_description(), forward_organizes_description()];
        assert_eq!(
            service
                .browse(&NodeId::null(), 0, &descriptions)
                .unwrap_err(),
            StatusCode::BadTooManyOperations
        );
    }

    #[test]
    fn non_null_view_id_is_rejected() {
        let space = sample_space();
        let mut registry = ContinuationPointRegistry::new(0);
        let mut service = BrowseService::new(&space, &mut registry, Limits::default());
        assert_eq!(
            service
                .browse(&NodeId::new(0, 1), 0, &[forward_organizes_description()])
                .unwrap_err(),
            StatusCode::BadViewIdUnknown
        );
    }

    #[test]
    fn unknown_reference_type_filter_fails_the_operation_not_the_request() {
        let space = sample_space();
        let mut registry = ContinuationPointRegistry::new(0);
        let mut service = BrowseService::new(&space, &mut registry, Limits::default());
        let mut description = forward_organizes_description();
        description.reference_type_id = NodeId::new(0, 99999);

        let results = service
            .browse(&NodeId::null(), 0, &[description])
            .unwrap();
        assert_eq!(results[0].status_code, StatusCode::BadReferenceTypeIdInvalid);
    }

    #[test]
    fn node_with_no_references_returns_empty_non_null_row_array() {
        let mut space = AddressSpace::new();
        space.insert(Node::new(NodeId::new(0, 1), NodeClass::Object, "Lonely", "Lonely"));
        let mut registry = ContinuationPointRegistry::new(0);
        let mut service = BrowseService::new(&space, &mut registry, Limits::default());
        let mut description = forward_organizes_description();
        description.node_id = NodeId::new(0, 1);

        let results = service
            .browse(&NodeId::null(), 0, &[description])
            .unwrap();
        assert_eq!(results[0].status_code, StatusCode::Good);
        assert!(results[0].references.is_empty());
        assert!(results[0].continuation_point.is_null());
    }

    #[test]
    fn no_continuation_points_available_fails_the_operation() {
        let space = sample_space();
        // Exhaust the session's single continuation-point slot before the real browse call.
        let mut registry = ContinuationPointRegistry::new(1);
        registry
            .create(ContinuationPoint {
                node_id: NodeId::new(0, 1),
                description: BrowseDescription::default(),
                effective_max: 0,
                cursor: BrowseCursor::new(),
            })
            .unwrap();

        let mut service = BrowseService::new(&space, &mut registry, Limits::default());
        let results = service
            .browse(&NodeId::null(), 1, &[forward_organizes_description()])
            .unwrap();
        assert_eq!(results[0].status_code, StatusCode::BadNoContinuationPoints);
        assert!(results[0].references.is_empty());
    }
}
