use core::ptr::NonNull;

use hashbrown::HashSet;

use super::cursor::Cursor;

/// Remember every node of `a`, then return the first node of `b` seen before.
pub(crate) fn find<C: Cursor>(a: Option<C>, b: Option<C>) -> Option<C> {
    if a.is_none() {
        return None;
    }

    let mut seen: HashSet<NonNull<()>> = HashSet::new();
    let mut current = a;
    while let Some(node) = current {
        seen.insert(node.identity());
        current = node.advance();
    }

    let mut current = b;
    while let Some(node) = current {
        if seen.contains(&node.identity()) {
            return Some(node);
        }
        current = node.advance();
    }
    None
}
