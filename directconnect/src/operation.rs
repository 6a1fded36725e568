/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! One marker type per operation, tying together its name, request and response shapes, and
//! the errors it may return.

use crate::error::{
    DirectConnectClientException, DirectConnectServerException, DuplicateTagKeysException, Error,
    TooManyTagsException,
};

/// An AWS Direct Connect API operation
pub trait Operation {
    /// Name of the operation as sent on the wire
    const NAME: &'static str;

    /// Deprecated operations remain callable but have a documented replacement
    const DEPRECATED: bool;

    type Input;
    type Output;

    /// Codes of the errors this operation may return
    fn modeled_errors() -> &'static [&'static str];

    /// Returns true if `error` is one of the errors modeled for this operation
    fn is_modeled_error(error: &Error) -> bool {
        Self::modeled_errors().contains(&error.code())
    }
}

const COMMON_ERRORS: &[&str] = &[
    DirectConnectClientException::CODE,
    DirectConnectServerException::CODE,
];

const TAGGING_ERRORS: &[&str] = &[
    DirectConnectClientException::CODE,
    DirectConnectServerException::CODE,
    DuplicateTagKeysException::CODE,
    TooManyTagsException::CODE,
];

macro_rules! operations {
    ($(
        $(#[$meta:meta])*
        $op:ident($name:literal, $errors:ident, deprecated = $deprecated:literal);
    )+) => {
        paste::paste! {
            $(
                $(#[$meta])*
                #[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
                pub struct $op;

                impl Operation for $op {
                    const NAME: &'static str = $name;
                    const DEPRECATED: bool = $deprecated;
                    type Input = crate::input::[<$op Input>];
                    type Output = crate::output::[<$op Output>];

                    fn modeled_errors() -> &'static [&'static str] {
                        $errors
                    }
                }
            )+

            /// Wire names of every operation, in alphabetical order
            pub const OPERATION_NAMES: &[&str] = &[$( $name ),+];
        }
    };
}

operations! {
    /// Accepts a proposal request to attach a virtual private gateway or transit gateway to a
    /// Direct Connect gateway.
    AcceptDirectConnectGatewayAssociationProposal("AcceptDirectConnectGatewayAssociationProposal", COMMON_ERRORS, deprecated = false);
    /// Deprecated. Use `AllocateHostedConnection` instead.
    ///
    /// Creates a hosted connection on an interconnect.
    AllocateConnectionOnInterconnect("AllocateConnectionOnInterconnect", COMMON_ERRORS, deprecated = true);
    /// Creates a hosted connection on the specified interconnect or a link aggregation group
    /// (LAG) of interconnects. Intended for use by AWS Direct Connect Partners only.
    AllocateHostedConnection("AllocateHostedConnection", TAGGING_ERRORS, deprecated = false);
    /// Provisions a private virtual interface to be owned by the specified AWS account.
    AllocatePrivateVirtualInterface("AllocatePrivateVirtualInterface", TAGGING_ERRORS, deprecated = false);
    /// Provisions a public virtual interface to be owned by the specified AWS account.
    AllocatePublicVirtualInterface("AllocatePublicVirtualInterface", TAGGING_ERRORS, deprecated = false);
    /// Provisions a transit virtual interface to be owned by the specified AWS account. Use this
    /// type of interface to connect a transit gateway to your Direct Connect gateway.
    AllocateTransitVirtualInterface("AllocateTransitVirtualInterface", TAGGING_ERRORS, deprecated = false);
    /// Associates an existing connection with a link aggregation group (LAG).
    AssociateConnectionWithLag("AssociateConnectionWithLag", COMMON_ERRORS, deprecated = false);
    /// Associates a hosted connection and its virtual interfaces with a link aggregation group
    /// (LAG) or interconnect.
    AssociateHostedConnection("AssociateHostedConnection", COMMON_ERRORS, deprecated = false);
    /// Associates a virtual interface with a specified link aggregation group (LAG) or
    /// connection.
    AssociateVirtualInterface("AssociateVirtualInterface", COMMON_ERRORS, deprecated = false);
    /// Confirms the creation of the specified hosted connection on an interconnect.
    ConfirmConnection("ConfirmConnection", COMMON_ERRORS, deprecated = false);
    /// Accepts ownership of a private virtual interface created by another AWS account.
    ConfirmPrivateVirtualInterface("ConfirmPrivateVirtualInterface", COMMON_ERRORS, deprecated = false);
    /// Accepts ownership of a public virtual interface created by another AWS account.
    ConfirmPublicVirtualInterface("ConfirmPublicVirtualInterface", COMMON_ERRORS, deprecated = false);
    /// Accepts ownership of a transit virtual interface created by another AWS account.
    ConfirmTransitVirtualInterface("ConfirmTransitVirtualInterface", COMMON_ERRORS, deprecated = false);
    /// Creates a BGP peer on the specified virtual interface.
    CreateBgpPeer("CreateBGPPeer", COMMON_ERRORS, deprecated = false);
    /// Creates a connection between a customer network and a specific AWS Direct Connect
    /// location.
    CreateConnection("CreateConnection", TAGGING_ERRORS, deprecated = false);
    /// Creates a Direct Connect gateway, which is an intermediate object that enables you to
    /// connect a set of virtual interfaces and virtual private gateways.
    CreateDirectConnectGateway("CreateDirectConnectGateway", COMMON_ERRORS, deprecated = false);
    /// Creates an association between a Direct Connect gateway and a virtual private gateway.
    CreateDirectConnectGatewayAssociation("CreateDirectConnectGatewayAssociation", COMMON_ERRORS, deprecated = false);
    /// Creates a proposal to associate the specified virtual private gateway or transit gateway
    /// with the specified Direct Connect gateway.
    CreateDirectConnectGatewayAssociationProposal("CreateDirectConnectGatewayAssociationProposal", COMMON_ERRORS, deprecated = false);
    /// Creates an interconnect between an AWS Direct Connect Partner's network and a specific
    /// AWS Direct Connect location.
    CreateInterconnect("CreateInterconnect", TAGGING_ERRORS, deprecated = false);
    /// Creates a link aggregation group (LAG) with the specified number of bundled physical
    /// dedicated connections between the customer network and a specific AWS Direct Connect
    /// location.
    CreateLag("CreateLag", TAGGING_ERRORS, deprecated = false);
    /// Creates a private virtual interface. A virtual interface is the VLAN that transports AWS
    /// Direct Connect traffic.
    CreatePrivateVirtualInterface("CreatePrivateVirtualInterface", TAGGING_ERRORS, deprecated = false);
    /// Creates a public virtual interface, used to connect to public AWS services such as
    /// Amazon S3.
    CreatePublicVirtualInterface("CreatePublicVirtualInterface", TAGGING_ERRORS, deprecated = false);
    /// Creates a transit virtual interface, used to access one or more transit gateways
    /// associated with Direct Connect gateways.
    CreateTransitVirtualInterface("CreateTransitVirtualInterface", TAGGING_ERRORS, deprecated = false);
    /// Deletes the specified BGP peer on the specified virtual interface with the specified
    /// customer address and ASN.
    DeleteBgpPeer("DeleteBGPPeer", COMMON_ERRORS, deprecated = false);
    /// Deletes the specified connection.
    DeleteConnection("DeleteConnection", COMMON_ERRORS, deprecated = false);
    /// Deletes the specified Direct Connect gateway. You must first delete all virtual
    /// interfaces that are attached to the Direct Connect gateway.
    DeleteDirectConnectGateway("DeleteDirectConnectGateway", COMMON_ERRORS, deprecated = false);
    /// Deletes the association between the specified Direct Connect gateway and virtual private
    /// gateway.
    DeleteDirectConnectGatewayAssociation("DeleteDirectConnectGatewayAssociation", COMMON_ERRORS, deprecated = false);
    /// Deletes the association proposal request between the specified Direct Connect gateway
    /// and virtual private gateway or transit gateway.
    DeleteDirectConnectGatewayAssociationProposal("DeleteDirectConnectGatewayAssociationProposal", COMMON_ERRORS, deprecated = false);
    /// Deletes the specified interconnect.
    DeleteInterconnect("DeleteInterconnect", COMMON_ERRORS, deprecated = false);
    /// Deletes the specified link aggregation group (LAG). You cannot delete a LAG if it has
    /// active virtual interfaces or hosted connections.
    DeleteLag("DeleteLag", COMMON_ERRORS, deprecated = false);
    /// Deletes a virtual interface.
    DeleteVirtualInterface("DeleteVirtualInterface", COMMON_ERRORS, deprecated = false);
    /// Deprecated. Use `DescribeLoa` instead.
    ///
    /// Gets the LOA-CFA for a connection.
    DescribeConnectionLoa("DescribeConnectionLoa", COMMON_ERRORS, deprecated = true);
    /// Displays the specified connection or all connections in this Region.
    DescribeConnections("DescribeConnections", COMMON_ERRORS, deprecated = false);
    /// Deprecated. Use `DescribeHostedConnections` instead.
    ///
    /// Lists the connections that have been provisioned on the specified interconnect.
    DescribeConnectionsOnInterconnect("DescribeConnectionsOnInterconnect", COMMON_ERRORS, deprecated = true);
    /// Describes one or more association proposals for connection between a virtual private
    /// gateway or transit gateway and a Direct Connect gateway.
    DescribeDirectConnectGatewayAssociationProposals("DescribeDirectConnectGatewayAssociationProposals", COMMON_ERRORS, deprecated = false);
    /// Lists the associations between your Direct Connect gateways and virtual private gateways
    /// and transit gateways.
    DescribeDirectConnectGatewayAssociations("DescribeDirectConnectGatewayAssociations", COMMON_ERRORS, deprecated = false);
    /// Lists the attachments between your Direct Connect gateways and virtual interfaces.
    DescribeDirectConnectGatewayAttachments("DescribeDirectConnectGatewayAttachments", COMMON_ERRORS, deprecated = false);
    /// Lists all your Direct Connect gateways or only the specified Direct Connect gateway.
    DescribeDirectConnectGateways("DescribeDirectConnectGateways", COMMON_ERRORS, deprecated = false);
    /// Lists the hosted connections that have been provisioned on the specified interconnect or
    /// link aggregation group (LAG).
    DescribeHostedConnections("DescribeHostedConnections", COMMON_ERRORS, deprecated = false);
    /// Deprecated. Use `DescribeLoa` instead.
    ///
    /// Gets the LOA-CFA for the specified interconnect.
    DescribeInterconnectLoa("DescribeInterconnectLoa", COMMON_ERRORS, deprecated = true);
    /// Lists the interconnects owned by the AWS account or only the specified interconnect.
    DescribeInterconnects("DescribeInterconnects", COMMON_ERRORS, deprecated = false);
    /// Describes all your link aggregation groups (LAG) or the specified LAG.
    DescribeLags("DescribeLags", COMMON_ERRORS, deprecated = false);
    /// Gets the LOA-CFA for a connection, interconnect, or link aggregation group (LAG).
    DescribeLoa("DescribeLoa", COMMON_ERRORS, deprecated = false);
    /// Lists the AWS Direct Connect locations in the current AWS Region.
    DescribeLocations("DescribeLocations", COMMON_ERRORS, deprecated = false);
    /// Describes the tags associated with the specified AWS Direct Connect resources.
    DescribeTags("DescribeTags", COMMON_ERRORS, deprecated = false);
    /// Lists the virtual private gateways owned by the AWS account.
    DescribeVirtualGateways("DescribeVirtualGateways", COMMON_ERRORS, deprecated = false);
    /// Displays all virtual interfaces for an AWS account.
    DescribeVirtualInterfaces("DescribeVirtualInterfaces", COMMON_ERRORS, deprecated = false);
    /// Disassociates a connection from a link aggregation group (LAG).
    DisassociateConnectionFromLag("DisassociateConnectionFromLag", COMMON_ERRORS, deprecated = false);
    /// Lists the virtual interface failover test history.
    ListVirtualInterfaceTestHistory("ListVirtualInterfaceTestHistory", COMMON_ERRORS, deprecated = false);
    /// Starts the virtual interface failover test that verifies your configuration meets your
    /// resiliency requirements by placing the BGP peering session in the DOWN state.
    StartBgpFailoverTest("StartBgpFailoverTest", COMMON_ERRORS, deprecated = false);
    /// Stops the virtual interface failover test.
    StopBgpFailoverTest("StopBgpFailoverTest", COMMON_ERRORS, deprecated = false);
    /// Adds the specified tags to the specified AWS Direct Connect resource. Each resource can
    /// have a maximum of 50 tags.
    TagResource("TagResource", TAGGING_ERRORS, deprecated = false);
    /// Removes one or more tags from the specified AWS Direct Connect resource.
    UntagResource("UntagResource", COMMON_ERRORS, deprecated = false);
    /// Updates the specified attributes of the Direct Connect gateway association.
    UpdateDirectConnectGatewayAssociation("UpdateDirectConnectGatewayAssociation", COMMON_ERRORS, deprecated = false);
    /// Updates the attributes of the specified link aggregation group (LAG).
    UpdateLag("UpdateLag", COMMON_ERRORS, deprecated = false);
    /// Updates the specified attributes of the specified virtual connection.
    UpdateVirtualInterfaceAttributes("UpdateVirtualInterfaceAttributes", COMMON_ERRORS, deprecated = false);
}
