/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod endpoint;

use crate::{AwsEndpoint, BoxError, ResolveAwsEndpoint};
use aws_types::region::Region;

/// Resolve endpoints by first picking the partition a region belongs to
///
/// Partitions are checked in order. Regions no partition claims fall back to `base`.
#[derive(Debug)]
pub struct PartitionResolver {
    base: Partition,
    partitions: Vec<Partition>,
}

impl PartitionResolver {
    pub fn new(base: Partition, partitions: Vec<Partition>) -> Self {
        Self { base, partitions }
    }

    /// The partition `region` resolves within
    pub fn partition(&self, region: &Region) -> &Partition {
        self.partitions
            .iter()
            .find(|partition| partition.can_resolve(region))
            .unwrap_or(&self.base)
    }
}

impl ResolveAwsEndpoint for PartitionResolver {
    fn resolve_endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError> {
        let partition = self.partition(region);
        tracing::debug!(partition = partition.id(), region = %region, "selected partition");
        partition.resolve_endpoint(region)
    }
}

/// A group of regions sharing a DNS suffix and endpoint conventions (`aws`, `aws-cn`, `aws-us-gov`)
#[derive(Debug)]
pub struct Partition {
    id: &'static str,
    region_prefixes: Vec<&'static str>,
    default_endpoint: endpoint::Definition,
}

impl Partition {
    pub fn new(id: &'static str, default_endpoint: endpoint::Definition) -> Self {
        Self {
            id,
            region_prefixes: vec![],
            default_endpoint,
        }
    }

    /// Claim every region whose name starts with `prefix`
    pub fn region_prefix(mut self, prefix: &'static str) -> Self {
        self.region_prefixes.push(prefix);
        self
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Returns true if `region` belongs to this partition
    pub fn can_resolve(&self, region: &Region) -> bool {
        self.region_prefixes
            .iter()
            .any(|prefix| region.as_ref().starts_with(prefix))
    }
}

impl ResolveAwsEndpoint for Partition {
    fn resolve_endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError> {
        let endpoint = self.default_endpoint.resolve_endpoint(region)?;
        tracing::debug!(endpoint = ?endpoint, region = %region, "resolved endpoint");
        Ok(endpoint)
    }
}
