use super::cursor::Cursor;

fn length<C: Cursor>(head: Option<C>) -> usize {
    let mut len = 0;
    let mut current = head;
    while let Some(node) = current {
        len += 1;
        current = node.advance();
    }
    len
}

fn skip<C: Cursor>(head: Option<C>, n: usize) -> Option<C> {
    (0..n).try_fold(head?, |node, _| node.advance())
}

/// Drop the extra prefix of the longer list, then step both in lockstep.
pub(crate) fn find<C: Cursor>(a: Option<C>, b: Option<C>) -> Option<C> {
    let (len_a, len_b) = (length(a), length(b));
    let (mut p, mut q) = if len_a > len_b {
        (skip(a, len_a - len_b), b)
    } else {
        (a, skip(b, len_b - len_a))
    };

    while let (Some(x), Some(y)) = (p, q) {
        if x.same_node(y) {
            return Some(x);
        }
        p = x.advance();
        q = y.advance();
    }
    None
}
