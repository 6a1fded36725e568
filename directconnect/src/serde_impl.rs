/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Deserialization shared by every shape member.
//!
//! Builders never store an empty list, so deserialization must not either: `[]` reads as an
//! absent member, matching what `set_x(Some(vec![]))` produces.

use serde::{Deserialize, Deserializer};
use smithy_types::{Blob, Instant};

/// A value that can be stored in a shape member
pub(crate) trait Member {
    /// Whether the value is stored, or read back as an absent member
    fn is_present(&self) -> bool {
        true
    }
}

impl Member for String {}
impl Member for i32 {}
impl Member for i64 {}
impl Member for bool {}
impl Member for Instant {}
impl Member for Blob {}

impl<T> Member for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

pub(crate) fn deserialize_member<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Member,
{
    Ok(Option::<T>::deserialize(deserializer)?.filter(Member::is_present))
}
