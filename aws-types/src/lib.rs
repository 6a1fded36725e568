/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Cross-service types for the AWS SDK.

#![warn(missing_debug_implementations, rust_2018_idioms)]

pub mod os_shim_internal;
pub mod region;

use std::borrow::Cow;

/// The name of the service used to sign requests
///
/// Generally, user code should not interact with `SigningService`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SigningService(Cow<'static, str>);

impl AsRef<str> for SigningService {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SigningService {
    pub const fn from_static(service: &'static str) -> Self {
        SigningService(Cow::Borrowed(service))
    }
}

impl From<String> for SigningService {
    fn from(service: String) -> Self {
        SigningService(Cow::Owned(service))
    }
}

impl From<&'static str> for SigningService {
    fn from(service: &'static str) -> Self {
        Self::from_static(service)
    }
}
