//! Field Resolver.
//!
//! Walks a record model depth-first, emits one candidate per visible
//! member, then merges candidates that share a logical name.

use crate::{
    error::Error,
    model::{Field, NativeType, RecordModel},
    schema::tag::FieldTag,
};
use std::collections::BTreeMap;
use tracing::trace;

///
/// Candidate
///

#[derive(Debug)]
struct Candidate {
    name: &'static str,
    tag: FieldTag,
    native_type: NativeType,
    depth: usize,
    path: Vec<usize>,
    order: usize,
}

/// Resolve the persisted fields of `model`, unordered.
pub(crate) fn resolve(model: &'static RecordModel) -> Result<Vec<Field>, Error> {
    let mut candidates = Vec::new();
    walk(model, 0, &mut Vec::new(), &mut candidates)?;

    let mut groups: BTreeMap<&'static str, Vec<Candidate>> = BTreeMap::new();
    for candidate in candidates {
        groups.entry(candidate.name).or_default().push(candidate);
    }

    let mut fields = Vec::with_capacity(groups.len());
    for (name, mut group) in groups {
        // stable: equal depths keep walk order
        group.sort_by_key(|c| c.depth);

        if let Some(field) = merge(model, group) {
            fields.push(field);
        } else {
            trace!(record = model.path, field = name, "no candidate declares a column");
        }
    }

    Ok(fields)
}

fn walk(
    model: &'static RecordModel,
    depth: usize,
    prefix: &mut Vec<usize>,
    out: &mut Vec<Candidate>,
) -> Result<(), Error> {
    for (index, member) in model.members.iter().enumerate() {
        if !member.is_visible() {
            continue;
        }

        let native_type = member.native_type();
        prefix.push(index);

        out.push(Candidate {
            name: member.name,
            tag: FieldTag::from_member(model, member)?,
            native_type,
            depth,
            path: prefix.clone(),
            order: out.len(),
        });

        if let Some(embedded) = native_type.embedded_record() {
            walk(embedded, depth + 1, prefix, out)?;
        }

        prefix.pop();
    }

    Ok(())
}

// Candidates arrive sorted by depth. The first one with a column becomes
// canonical and keeps its metadata and walk position; the value slot then
// follows the chain of `statement` redeclarations downwards.
fn merge(model: &RecordModel, group: Vec<Candidate>) -> Option<Field> {
    let mut canonical: Option<Field> = None;
    let mut rest = group.into_iter();

    for candidate in rest.by_ref() {
        if canonical.is_none() && candidate.tag.column.is_empty() {
            trace!(
                record = model.path,
                field = candidate.name,
                depth = candidate.depth,
                "skipping candidate without column"
            );
            continue;
        }

        let field = canonical.get_or_insert_with(|| Field {
            name: candidate.name,
            column: candidate.tag.column.clone(),
            native_type: candidate.native_type,
            primary_key: candidate.tag.primary_key,
            auto_increment: candidate.tag.auto_increment,
            statement: candidate.tag.statement,
            declared_depth: candidate.depth,
            depth: candidate.depth,
            sort: candidate.tag.sort,
            path: Vec::new(),
            order: candidate.order,
        });

        field.depth = candidate.depth;
        field.native_type = candidate.native_type;
        field.path = candidate.path;

        if !candidate.tag.statement {
            break;
        }
    }

    for dropped in rest {
        trace!(
            record = model.path,
            field = dropped.name,
            depth = dropped.depth,
            "dropping shadowed candidate"
        );
    }

    canonical
}
