/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Protocol-agnostic primitives shared by generated service models.

#![warn(missing_debug_implementations, rust_2018_idioms, unreachable_pub)]

pub mod instant;
pub mod retry;
#[cfg(any(feature = "serde-serialize", feature = "serde-deserialize"))]
mod serde_impl;

pub use crate::instant::Instant;

/// Binary data
///
/// Blobs are opaque to the model. They are usually documents such as the PDF of a
/// Letter of Authorization.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default)]
pub struct Blob {
    inner: Vec<u8>,
}

impl Blob {
    pub fn new<T: Into<Vec<u8>>>(inp: T) -> Self {
        Blob { inner: inp.into() }
    }

    /// Consumes the `Blob` and returns the underlying bytes
    pub fn into_inner(self) -> Vec<u8> {
        self.inner
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl From<Vec<u8>> for Blob {
    fn from(bytes: Vec<u8>) -> Self {
        Blob::new(bytes)
    }
}

impl From<&[u8]> for Blob {
    fn from(bytes: &[u8]) -> Self {
        Blob::new(bytes)
    }
}

impl From<&str> for Blob {
    fn from(s: &str) -> Self {
        Blob::new(s.as_bytes())
    }
}

#[cfg(test)]
mod test {
    use crate::instant::Format;
    use crate::{Blob, Instant};

    #[test]
    fn test_instant_fmt() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098");

        let instant = Instant::from_fractional_seconds(1576540098, 0.52);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18.52Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098.52");
    }

    #[test]
    fn blob_conversions() {
        let from_str = Blob::from("%PDF-1.4");
        let from_vec = Blob::from(b"%PDF-1.4".to_vec());
        assert_eq!(from_str, from_vec);
        assert_eq!(from_str.len(), 8);
        assert!(Blob::default().is_empty());
        assert_eq!(from_vec.into_inner(), b"%PDF-1.4");
    }
}
