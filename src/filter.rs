//! Frame selection over the document tree.
//!
//! Walks the full tree depth-first in document order and projects matching
//! FRAME nodes into [`ScreenRecord`]s. The walk always continues into the
//! children of a match, so a matching frame nested inside another matching
//! frame produces two records, one per occurrence.

use crate::types::{DocumentNode, FrameSize, NodeType, ScreenRecord};

/// Collect every frame in `nodes` (at any depth) that passes the optional
/// exact-dimension filter.
///
/// Records come back in depth-first pre-order, i.e. document order; the
/// caller never re-sorts them. With `target` set, frames without a bounding
/// box are skipped and width/height must both equal the target exactly.
pub fn collect_frames(nodes: &[DocumentNode], target: Option<FrameSize>) -> Vec<ScreenRecord> {
    let mut records = Vec::new();
    for node in nodes {
        visit(node, target, &mut records);
    }
    records
}

fn visit(node: &DocumentNode, target: Option<FrameSize>, records: &mut Vec<ScreenRecord>) {
    if node.node_type == NodeType::Frame && matches_target(node, target) {
        records.push(ScreenRecord {
            id: node.id.clone(),
            name: node.name.clone(),
            bounding_box: node.absolute_bounding_box,
            styles: node.styles.clone(),
        });
    }

    // Descend regardless of whether this node matched
    for child in &node.children {
        visit(child, target, records);
    }
}

fn matches_target(node: &DocumentNode, target: Option<FrameSize>) -> bool {
    match target {
        None => true,
        Some(size) => node
            .absolute_bounding_box
            .is_some_and(|bounds| size.matches(&bounds)),
    }
}
