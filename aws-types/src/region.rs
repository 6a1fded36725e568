/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::os_shim_internal::Env;
use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

/// The region to send requests to.
///
/// The region MUST be specified on a request. It may be configured globally or on a
/// per-client basis unless otherwise noted. A full list of regions is found in the
/// "Regions and Endpoints" document.
///
/// See http://docs.aws.amazon.com/general/latest/gr/rande.html for
/// information on AWS regions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region(
    // Regions are almost always known statically. However, as an escape hatch for when they
    // are not, allow for an owned region
    Cow<'static, str>,
);

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Region {
    pub fn new(region: impl Into<Cow<'static, str>>) -> Self {
        Self(region.into())
    }

    pub const fn from_static(region: &'static str) -> Self {
        Self(Cow::Borrowed(region))
    }
}

impl From<&'static str> for Region {
    fn from(region: &'static str) -> Self {
        Region::from_static(region)
    }
}

impl From<String> for Region {
    fn from(region: String) -> Self {
        Region::new(region)
    }
}

/// Provide a [`Region`](Region) to use with AWS requests
///
/// For most cases [`default_provider`](default_provider) will be the best option, implementing
/// a standard provider chain.
pub trait ProvideRegion: Send + Sync + fmt::Debug {
    fn region(&self) -> Option<Region>;
}

impl ProvideRegion for Region {
    fn region(&self) -> Option<Region> {
        Some(self.clone())
    }
}

impl ProvideRegion for Option<Region> {
    fn region(&self) -> Option<Region> {
        self.clone()
    }
}

impl<T: ProvideRegion + ?Sized> ProvideRegion for &T {
    fn region(&self) -> Option<Region> {
        (**self).region()
    }
}

/// Region provider that tries a series of providers in order
///
/// # Example
/// ```rust
/// use aws_types::region::{ChainProvider, ProvideRegion, Region};
/// use std::env;
/// // check `CUSTOM_REGION` first, then the default chain, then fall back to us-east-1
/// let provider = ChainProvider::first_try(env::var("CUSTOM_REGION").ok().map(Region::new))
///     .or_default_provider()
///     .or_else(Region::new("us-east-1"));
/// assert!(provider.region().is_some());
/// ```
#[derive(Debug)]
pub struct ChainProvider {
    providers: Vec<Box<dyn ProvideRegion>>,
}

impl ChainProvider {
    pub fn first_try(provider: impl ProvideRegion + 'static) -> Self {
        ChainProvider {
            providers: vec![Box::new(provider)],
        }
    }

    pub fn or_else(mut self, fallback: impl ProvideRegion + 'static) -> Self {
        self.providers.push(Box::new(fallback));
        self
    }

    pub fn or_default_provider(mut self) -> Self {
        self.providers.push(Box::new(default_provider()));
        self
    }
}

impl ProvideRegion for ChainProvider {
    fn region(&self) -> Option<Region> {
        self.providers.iter().find_map(|provider| provider.region())
    }
}

pub fn default_provider() -> impl ProvideRegion {
    EnvironmentProvider::new()
}

/// Loads the region from `AWS_REGION`, falling back to `AWS_DEFAULT_REGION`
///
/// Blank values are treated as unset.
#[non_exhaustive]
#[derive(Debug)]
pub struct EnvironmentProvider {
    env: Env,
}

impl Default for EnvironmentProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentProvider {
    pub fn new() -> Self {
        EnvironmentProvider { env: Env::real() }
    }

    pub fn with_env(env: Env) -> Self {
        EnvironmentProvider { env }
    }
}

impl ProvideRegion for EnvironmentProvider {
    fn region(&self) -> Option<Region> {
        let region = ["AWS_REGION", "AWS_DEFAULT_REGION"]
            .iter()
            .find_map(|var| {
                self.env
                    .get_non_blank(var)
                    .map(|value| (*var, Region::new(value.trim().to_owned())))
            });
        match region {
            Some((var, region)) => {
                tracing::trace!(source = var, region = %region, "loaded region from environment");
                Some(region)
            }
            None => {
                tracing::trace!("no region set in the environment");
                None
            }
        }
    }
}

/// The region to use when signing requests
///
/// Generally, user code will not need to interact with `SigningRegion`. See [`Region`](Region).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SigningRegion(Cow<'static, str>);

impl AsRef<str> for SigningRegion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Region> for SigningRegion {
    fn from(inp: Region) -> Self {
        SigningRegion(inp.0)
    }
}

impl SigningRegion {
    pub const fn from_static(region: &'static str) -> Self {
        SigningRegion(Cow::Borrowed(region))
    }
}
