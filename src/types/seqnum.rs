//! Process-wide sequence number allocation

use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_SEQNUM: AtomicU32 = AtomicU32::new(1);

/// Allocate the next sequence number. Zero is never handed out.
pub fn next_seqnum() -> u32 {
    loop {
        let seqnum = NEXT_SEQNUM.fetch_add(1, Ordering::Relaxed);
        if seqnum != 0 {
            return seqnum;
        }
    }
}
