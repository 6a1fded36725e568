/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Service configuration: the region requests are made in and how that region maps to an
//! endpoint.

use aws_endpoint::partition::endpoint::{Definition, Protocol, SignatureVersion};
use aws_endpoint::partition::{Partition, PartitionResolver};
use aws_endpoint::{AwsEndpoint, BoxError, CredentialScope, ResolveAwsEndpoint};
use aws_types::region::{default_provider, ProvideRegion, Region};
use aws_types::SigningService;
use std::sync::Arc;

/// Service identifier used in SDK configuration and user agents
pub const SERVICE_ID: &str = "Direct Connect";

/// Host prefix of the service endpoints, also the name requests are signed with
pub const ENDPOINT_PREFIX: &str = "directconnect";

/// Version of the API this model describes
pub const API_VERSION: &str = "2012-10-25";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no region configured; set `AWS_REGION` or configure one on the builder")]
    NoRegion,
    #[error("failed to resolve an endpoint for region `{region}`")]
    ResolveEndpoint {
        region: Region,
        #[source]
        source: BoxError,
    },
}

/// Configuration for AWS Direct Connect
///
/// # Example
/// ```rust
/// use directconnect::Config;
/// let config = Config::builder().region("us-east-1").build();
/// let endpoint = config.endpoint().expect("region is set");
/// assert_eq!(endpoint.uri().host(), Some("directconnect.us-east-1.amazonaws.com"));
/// ```
#[derive(Clone, Debug)]
pub struct Config {
    region: Option<Region>,
    endpoint_resolver: Arc<dyn ResolveAwsEndpoint>,
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Configuration with the region taken from the default provider chain
    pub fn from_env() -> Self {
        Config::builder().region_provider(&default_provider()).build()
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    pub fn endpoint_resolver(&self) -> &Arc<dyn ResolveAwsEndpoint> {
        &self.endpoint_resolver
    }

    pub fn signing_service(&self) -> SigningService {
        SigningService::from_static(ENDPOINT_PREFIX)
    }

    /// Resolves the endpoint for the configured region
    pub fn endpoint(&self) -> Result<AwsEndpoint, ConfigError> {
        let region = self.region.as_ref().ok_or(ConfigError::NoRegion)?;
        self.endpoint_resolver
            .resolve_endpoint(region)
            .map_err(|source| ConfigError::ResolveEndpoint {
                region: region.clone(),
                source,
            })
    }
}

#[derive(Default, Debug)]
pub struct Builder {
    region: Option<Region>,
    endpoint_resolver: Option<Arc<dyn ResolveAwsEndpoint>>,
}

impl Builder {
    pub fn region(mut self, region: impl Into<Region>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn set_region(mut self, region: Option<Region>) -> Self {
        self.region = region;
        self
    }

    /// Sets the region from `provider`, leaving it unset if the provider has none
    pub fn region_provider(mut self, provider: &impl ProvideRegion) -> Self {
        self.region = provider.region();
        match &self.region {
            Some(region) => tracing::debug!(region = %region, provider = ?provider, "loaded region"),
            None => tracing::debug!(provider = ?provider, "provider did not supply a region"),
        }
        self
    }

    /// Overrides how the region is turned into an endpoint, for example to use a VPC endpoint
    pub fn endpoint_resolver(mut self, resolver: impl ResolveAwsEndpoint + 'static) -> Self {
        self.endpoint_resolver = Some(Arc::new(resolver));
        self
    }

    pub fn build(self) -> Config {
        Config {
            region: self.region,
            endpoint_resolver: self
                .endpoint_resolver
                .unwrap_or_else(|| Arc::new(endpoint_resolver())),
        }
    }
}

fn definition(uri_template: &'static str) -> Definition {
    Definition {
        uri_template,
        protocol: Protocol::Https,
        credential_scope: CredentialScope::builder()
            .service(SigningService::from_static(ENDPOINT_PREFIX))
            .build(),
        signature_versions: SignatureVersion::V4,
    }
}

/// The endpoints of AWS Direct Connect across the `aws`, `aws-cn` and `aws-us-gov` partitions
pub fn endpoint_resolver() -> PartitionResolver {
    PartitionResolver::new(
        Partition::new("aws", definition("directconnect.{region}.amazonaws.com")),
        vec![
            Partition::new("aws-cn", definition("directconnect.{region}.amazonaws.com.cn"))
                .region_prefix("cn-"),
            Partition::new("aws-us-gov", definition("directconnect.{region}.amazonaws.com"))
                .region_prefix("us-gov-"),
        ],
    )
}
