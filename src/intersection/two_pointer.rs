use super::cursor::Cursor;

/// Walk `a` then `b` with one cursor and `b` then `a` with the other.
///
/// Both cursors cover the same distance before reaching the shared suffix,
/// so they either meet on its first node or reach the end together.
pub(crate) fn find<C: Cursor>(a: Option<C>, b: Option<C>) -> Option<C> {
    let (mut p, mut q) = (a, b);
    loop {
        match (p, q) {
            (None, None) => return None,
            (Some(x), Some(y)) if x.same_node(y) => return Some(x),
            _ => {}
        }
        p = match p {
            Some(x) => x.advance(),
            None => b,
        };
        q = match q {
            Some(y) => y.advance(),
            None => a,
        };
    }
}
