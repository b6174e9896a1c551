//! Raw flag constants shared by event tags and seek requests
//!
//! Values follow the native pipeline library's ABI so raw tags and flag words
//! can be exchanged with it unchanged.

// Direction and ordering bits packed into the low nibble of an event tag
pub mod event_type {
    pub const UPSTREAM: u32 = 1 << 0;
    pub const DOWNSTREAM: u32 = 1 << 1;
    pub const SERIALIZED: u32 = 1 << 2;
    pub const BOTH: u32 = UPSTREAM | DOWNSTREAM;

    /// Bits reserved for the flags above; the event number lives above them.
    pub const SHIFT: u32 = 4;
    pub const FLAGS_MASK: u32 = (1 << SHIFT) - 1;

    /// Pack an event number and its flags into a raw tag.
    pub const fn make(num: u32, flags: u32) -> u32 {
        (num << SHIFT) | flags
    }
}

// Seek request flags
pub mod seek {
    pub const NONE: u32 = 0;
    pub const FLUSH: u32 = 1 << 0;
    pub const ACCURATE: u32 = 1 << 1;
    pub const KEY_UNIT: u32 = 1 << 2;
    pub const SEGMENT: u32 = 1 << 3;
    pub const SKIP: u32 = 1 << 4;

    pub const ALL: u32 = FLUSH | ACCURATE | KEY_UNIT | SEGMENT | SKIP;
}
