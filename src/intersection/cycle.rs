use super::cursor::Cursor;

/// Floyd's tortoise and hare.
pub(crate) fn has_cycle<C: Cursor>(head: Option<C>) -> bool {
    let (mut slow, mut fast) = (head, head);
    loop {
        let Some(step) = fast.and_then(C::advance) else {
            return false;
        };
        fast = step.advance();
        slow = slow.and_then(C::advance);
        match (slow, fast) {
            (Some(s), Some(f)) if s.same_node(f) => return true,
            (_, None) => return false,
            _ => {}
        }
    }
}
