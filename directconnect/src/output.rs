/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Response shapes, one per operation.
//!
//! Operations that respond with a whole resource have an output carrying that resource's members
//! directly. Those outputs convert to and from the shared shape in [`model`](crate::model).

use crate::model::{
    Connection, ConnectionState, DirectConnectGateway, DirectConnectGatewayAssociation,
    DirectConnectGatewayAssociationProposal, DirectConnectGatewayAttachment, Interconnect,
    InterconnectState, Lag, Loa, Location, ResourceTag, VirtualGateway, VirtualInterface,
    VirtualInterfaceState, VirtualInterfaceTestHistory,
};

shape! {
    pub struct AcceptDirectConnectGatewayAssociationProposalOutput {
        /// Information about an association between a Direct Connect gateway and a virtual
        /// private gateway or transit gateway.
        direct_connect_gateway_association: shape<DirectConnectGatewayAssociation>,
    }
}

connection_shape! {
    pub struct AllocateConnectionOnInterconnectOutput as crate::model::Connection
}

connection_shape! {
    pub struct AllocateHostedConnectionOutput as crate::model::Connection
}

virtual_interface_shape! {
    pub struct AllocatePrivateVirtualInterfaceOutput as crate::model::VirtualInterface
}

virtual_interface_shape! {
    pub struct AllocatePublicVirtualInterfaceOutput as crate::model::VirtualInterface
}

shape! {
    pub struct AllocateTransitVirtualInterfaceOutput {
        virtual_interface: shape<VirtualInterface>,
    }
}

connection_shape! {
    pub struct AssociateConnectionWithLagOutput as crate::model::Connection
}

connection_shape! {
    pub struct AssociateHostedConnectionOutput as crate::model::Connection
}

virtual_interface_shape! {
    pub struct AssociateVirtualInterfaceOutput as crate::model::VirtualInterface
}

shape! {
    pub struct ConfirmConnectionOutput {
        /// The state of the connection.
        connection_state: shape<ConnectionState>,
    }
}

shape! {
    pub struct ConfirmPrivateVirtualInterfaceOutput {
        /// The state of the virtual interface.
        virtual_interface_state: shape<VirtualInterfaceState>,
    }
}

shape! {
    pub struct ConfirmPublicVirtualInterfaceOutput {
        virtual_interface_state: shape<VirtualInterfaceState>,
    }
}

shape! {
    pub struct ConfirmTransitVirtualInterfaceOutput {
        virtual_interface_state: shape<VirtualInterfaceState>,
    }
}

shape! {
    pub struct CreateBgpPeerOutput {
        /// The virtual interface.
        virtual_interface: shape<VirtualInterface>,
    }
}

connection_shape! {
    pub struct CreateConnectionOutput as crate::model::Connection
}

shape! {
    pub struct CreateDirectConnectGatewayOutput {
        /// The Direct Connect gateway.
        direct_connect_gateway: shape<DirectConnectGateway>,
    }
}

shape! {
    pub struct CreateDirectConnectGatewayAssociationOutput {
        /// The association to be created.
        direct_connect_gateway_association: shape<DirectConnectGatewayAssociation>,
    }
}

shape! {
    pub struct CreateDirectConnectGatewayAssociationProposalOutput {
        /// Information about the Direct Connect gateway proposal.
        direct_connect_gateway_association_proposal: shape<DirectConnectGatewayAssociationProposal>,
    }
}

interconnect_shape! {
    pub struct CreateInterconnectOutput as crate::model::Interconnect
}

lag_shape! {
    pub struct CreateLagOutput as crate::model::Lag
}

virtual_interface_shape! {
    pub struct CreatePrivateVirtualInterfaceOutput as crate::model::VirtualInterface
}

virtual_interface_shape! {
    pub struct CreatePublicVirtualInterfaceOutput as crate::model::VirtualInterface
}

shape! {
    pub struct CreateTransitVirtualInterfaceOutput {
        virtual_interface: shape<VirtualInterface>,
    }
}

shape! {
    pub struct DeleteBgpPeerOutput {
        /// The virtual interface.
        virtual_interface: shape<VirtualInterface>,
    }
}

connection_shape! {
    pub struct DeleteConnectionOutput as crate::model::Connection
}

shape! {
    pub struct DeleteDirectConnectGatewayOutput {
        /// The Direct Connect gateway.
        direct_connect_gateway: shape<DirectConnectGateway>,
    }
}

shape! {
    pub struct DeleteDirectConnectGatewayAssociationOutput {
        /// Information about the deleted association.
        direct_connect_gateway_association: shape<DirectConnectGatewayAssociation>,
    }
}

shape! {
    pub struct DeleteDirectConnectGatewayAssociationProposalOutput {
        /// The deleted proposal.
        direct_connect_gateway_association_proposal: shape<DirectConnectGatewayAssociationProposal>,
    }
}

shape! {
    pub struct DeleteInterconnectOutput {
        /// The state of the interconnect.
        interconnect_state: shape<InterconnectState>,
    }
}

lag_shape! {
    pub struct DeleteLagOutput as crate::model::Lag
}

shape! {
    pub struct DeleteVirtualInterfaceOutput {
        /// The state of the virtual interface.
        virtual_interface_state: shape<VirtualInterfaceState>,
    }
}

shape! {
    pub struct DescribeConnectionLoaOutput {
        /// The Letter of Authorization - Connecting Facility Assignment (LOA-CFA).
        loa: shape<Loa>,
    }
}

shape! {
    pub struct DescribeConnectionsOutput {
        /// The connections.
        connections: list<Connection>,
    }
}

shape! {
    pub struct DescribeConnectionsOnInterconnectOutput {
        connections: list<Connection>,
    }
}

shape! {
    pub struct DescribeDirectConnectGatewayAssociationProposalsOutput {
        /// Describes the Direct Connect gateway association proposals.
        direct_connect_gateway_association_proposals: list<DirectConnectGatewayAssociationProposal>,
        /// The token to use to retrieve the next page of results. This value is absent when
        /// there are no more results to return.
        next_token: string,
    }
}

shape! {
    pub struct DescribeDirectConnectGatewayAssociationsOutput {
        /// Information about the associations.
        direct_connect_gateway_associations: list<DirectConnectGatewayAssociation>,
        next_token: string,
    }
}

shape! {
    pub struct DescribeDirectConnectGatewayAttachmentsOutput {
        /// The attachments.
        direct_connect_gateway_attachments: list<DirectConnectGatewayAttachment>,
        next_token: string,
    }
}

shape! {
    pub struct DescribeDirectConnectGatewaysOutput {
        /// The Direct Connect gateways.
        direct_connect_gateways: list<DirectConnectGateway>,
        next_token: string,
    }
}

shape! {
    pub struct DescribeHostedConnectionsOutput {
        connections: list<Connection>,
    }
}

shape! {
    pub struct DescribeInterconnectLoaOutput {
        loa: shape<Loa>,
    }
}

shape! {
    pub struct DescribeInterconnectsOutput {
        /// The interconnects.
        interconnects: list<Interconnect>,
    }
}

shape! {
    pub struct DescribeLagsOutput {
        /// The LAGs.
        lags: list<Lag>,
    }
}

loa_shape! {
    pub struct DescribeLoaOutput as crate::model::Loa
}

shape! {
    pub struct DescribeLocationsOutput {
        /// The locations.
        locations: list<Location>,
    }
}

shape! {
    pub struct DescribeTagsOutput {
        /// Information about the tags.
        resource_tags: list<ResourceTag>,
    }
}

shape! {
    pub struct DescribeVirtualGatewaysOutput {
        /// The virtual private gateways.
        virtual_gateways: list<VirtualGateway>,
    }
}

shape! {
    pub struct DescribeVirtualInterfacesOutput {
        /// The virtual interfaces
        virtual_interfaces: list<VirtualInterface>,
    }
}

connection_shape! {
    pub struct DisassociateConnectionFromLagOutput as crate::model::Connection
}

shape! {
    pub struct ListVirtualInterfaceTestHistoryOutput {
        /// The virtual interface failover test history.
        virtual_interface_test_history: list<VirtualInterfaceTestHistory>,
        next_token: string,
    }
}

shape! {
    pub struct StartBgpFailoverTestOutput {
        /// Information about the virtual interface failover test.
        virtual_interface_test: shape<VirtualInterfaceTestHistory>,
    }
}

shape! {
    pub struct StopBgpFailoverTestOutput {
        /// Information about the virtual interface failover test.
        virtual_interface_test: shape<VirtualInterfaceTestHistory>,
    }
}

shape! {
    pub struct TagResourceOutput {}
}

shape! {
    pub struct UntagResourceOutput {}
}

shape! {
    pub struct UpdateDirectConnectGatewayAssociationOutput {
        direct_connect_gateway_association: shape<DirectConnectGatewayAssociation>,
    }
}

lag_shape! {
    pub struct UpdateLagOutput as crate::model::Lag
}

virtual_interface_shape! {
    pub struct UpdateVirtualInterfaceAttributesOutput as crate::model::VirtualInterface
}
