// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Stack allocated containers used by the composition pipeline. Ids, slot registries and
//! id lists are all tiny, so they rarely spill onto the heap.

use smallstr::SmallString;
use smallvec::SmallVec;

/// Generated ids look like `action-list-item-12`, which fits in here without spilling.
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 24;

/// Stack allocated string storage for small strings. When this gets larger than
/// [`DEFAULT_STRING_STORAGE_SIZE`], it will be [`smallvec::SmallVec::spilled`] on the
/// heap.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

/// Stack allocated list, that can [`smallvec::SmallVec::spilled`] into the heap if it
/// gets larger than [`INLINE_VEC_SIZE`].
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;
pub const INLINE_VEC_SIZE: usize = 4;
