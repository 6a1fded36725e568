/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Endpoint resolution for AWS services: turning a [`Region`](aws_types::region::Region)
//! into the URI requests are sent to and the scope they are signed with.

#![warn(missing_debug_implementations, rust_2018_idioms)]

pub mod partition;

use aws_types::region::{Region, SigningRegion};
use aws_types::SigningService;
use http::Uri;
use std::error::Error;
use std::fmt::Debug;

pub use partition::endpoint::{Definition, Protocol, SignatureVersion};
pub use partition::{Partition, PartitionResolver};

pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Endpoint to send a request to, along with the scope to sign it with
#[derive(Clone, Debug, PartialEq)]
pub struct AwsEndpoint {
    endpoint: Uri,
    credential_scope: CredentialScope,
}

impl AwsEndpoint {
    pub fn new(endpoint: Uri, credential_scope: CredentialScope) -> Self {
        Self {
            endpoint,
            credential_scope,
        }
    }

    pub fn uri(&self) -> &Uri {
        &self.endpoint
    }

    pub fn credential_scope(&self) -> &CredentialScope {
        &self.credential_scope
    }
}

/// The region and service a request must be signed for
///
/// When unset, the signing region defaults to the region the endpoint was resolved for.
#[derive(Clone, Default, Debug, Eq, PartialEq)]
pub struct CredentialScope {
    region: Option<SigningRegion>,
    service: Option<SigningService>,
}

impl CredentialScope {
    pub fn builder() -> credential_scope::Builder {
        credential_scope::Builder::default()
    }

    pub fn region(&self) -> Option<&SigningRegion> {
        self.region.as_ref()
    }

    pub fn service(&self) -> Option<&SigningService> {
        self.service.as_ref()
    }

    /// Fills in values missing from `self` with the values from `other`
    pub fn merge(&self, other: &CredentialScope) -> CredentialScope {
        CredentialScope {
            region: self.region.clone().or_else(|| other.region.clone()),
            service: self.service.clone().or_else(|| other.service.clone()),
        }
    }
}

pub mod credential_scope {
    use crate::CredentialScope;
    use aws_types::region::SigningRegion;
    use aws_types::SigningService;

    #[derive(Debug, Default)]
    pub struct Builder {
        region: Option<SigningRegion>,
        service: Option<SigningService>,
    }

    impl Builder {
        pub fn region(mut self, region: impl Into<SigningRegion>) -> Self {
            self.region = Some(region.into());
            self
        }

        pub fn service(mut self, service: impl Into<SigningService>) -> Self {
            self.service = Some(service.into());
            self
        }

        pub fn build(self) -> CredentialScope {
            CredentialScope {
                region: self.region,
                service: self.service,
            }
        }
    }
}

/// Resolve the AWS endpoint for a given region
///
/// Each service has its own endpoint resolver, usually a [`PartitionResolver`]. Users who need
/// a fixed endpoint (a VPC endpoint or a test double) can supply their own implementation.
pub trait ResolveAwsEndpoint: Send + Sync + Debug {
    fn resolve_endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError>;
}

/// An endpoint that ignores the region
///
/// The signing region still follows the region the request is made in.
#[derive(Clone, Debug)]
pub struct StaticEndpoint {
    uri: Uri,
    credential_scope: CredentialScope,
}

impl StaticEndpoint {
    pub fn from_uri(uri: Uri) -> Self {
        Self {
            uri,
            credential_scope: CredentialScope::default(),
        }
    }

    pub fn with_credential_scope(mut self, credential_scope: CredentialScope) -> Self {
        self.credential_scope = credential_scope;
        self
    }
}

impl ResolveAwsEndpoint for StaticEndpoint {
    fn resolve_endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError> {
        let scope = self.credential_scope.merge(
            &CredentialScope::builder()
                .region(SigningRegion::from(region.clone()))
                .build(),
        );
        Ok(AwsEndpoint::new(self.uri.clone(), scope))
    }
}

#[cfg(test)]
mod test {
    use crate::{CredentialScope, ResolveAwsEndpoint, StaticEndpoint};
    use aws_types::region::{Region, SigningRegion};
    use aws_types::SigningService;
    use http::Uri;

    #[test]
    fn static_endpoint_signs_for_request_region() {
        let endpoint = StaticEndpoint::from_uri(Uri::from_static("http://localhost:8000"))
            .with_credential_scope(
                CredentialScope::builder()
                    .service(SigningService::from_static("directconnect"))
                    .build(),
            );
        let resolved = endpoint
            .resolve_endpoint(&Region::from_static("eu-central-1"))
            .expect("static endpoints always resolve");
        assert_eq!(resolved.uri(), &Uri::from_static("http://localhost:8000"));
        assert_eq!(
            resolved.credential_scope().region(),
            Some(&SigningRegion::from_static("eu-central-1"))
        );
        assert_eq!(
            resolved.credential_scope().service(),
            Some(&SigningService::from_static("directconnect"))
        );
    }

    #[test]
    fn explicit_scope_wins_on_merge() {
        let explicit = CredentialScope::builder()
            .region(SigningRegion::from_static("us-east-1"))
            .build();
        let fallback = CredentialScope::builder()
            .region(SigningRegion::from_static("us-west-2"))
            .service(SigningService::from_static("directconnect"))
            .build();
        let merged = explicit.merge(&fallback);
        assert_eq!(merged.region(), Some(&SigningRegion::from_static("us-east-1")));
        assert_eq!(
            merged.service(),
            Some(&SigningService::from_static("directconnect"))
        );
    }
}
