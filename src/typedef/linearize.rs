// ABOUTME: Computes a type's resolution order from its declared bases.
// ABOUTME: C3 merge, or legacy depth-first with first occurrence winning.

use super::TypeRef;
use crate::error::InheritanceError;
use crate::types::TypeId;
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

/// A base followed by its own linearized ancestors.
fn full_order(ty: &TypeRef) -> VecDeque<TypeRef> {
    std::iter::once(Arc::clone(ty))
        .chain(ty.ancestors.iter().cloned())
        .collect()
}

/// Ancestors of a new type named `derived` with `bases`, by C3 merge.
pub(crate) fn c3(derived: &str, bases: &[TypeRef]) -> Result<Vec<TypeRef>, InheritanceError> {
    let mut sequences: Vec<VecDeque<TypeRef>> = bases.iter().map(full_order).collect();
    sequences.push(bases.iter().cloned().collect());

    let mut merged = Vec::new();
    loop {
        sequences.retain(|s| !s.is_empty());
        if sequences.is_empty() {
            return Ok(merged);
        }

        // A good head appears in no sequence's tail.
        let next = sequences
            .iter()
            .map(|s| &s[0])
            .find(|head| {
                !sequences
                    .iter()
                    .any(|s| s.iter().skip(1).any(|t| t.id() == head.id()))
            })
            .cloned();

        let Some(next) = next else {
            return Err(InheritanceError::InconsistentOrder {
                derived: derived.to_string(),
            });
        };

        for sequence in &mut sequences {
            if sequence.front().is_some_and(|head| head.id() == next.id()) {
                sequence.pop_front();
            }
        }
        merged.push(next);
    }
}

/// Ancestors by depth-first, left-to-right walk, keeping first occurrences.
pub(crate) fn depth_first(bases: &[TypeRef]) -> Vec<TypeRef> {
    fn visit(ty: &TypeRef, seen: &mut HashSet<TypeId>, out: &mut Vec<TypeRef>) {
        if !seen.insert(ty.id()) {
            return;
        }
        out.push(Arc::clone(ty));
        for base in ty.bases() {
            visit(base, seen, out);
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for base in bases {
        visit(base, &mut seen, &mut out);
    }
    out
}
