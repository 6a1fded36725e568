/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request shapes, one per operation.

use crate::model::{
    LoaContentType, NewBgpPeer, NewPrivateVirtualInterface, NewPrivateVirtualInterfaceAllocation,
    NewPublicVirtualInterface, NewPublicVirtualInterfaceAllocation, NewTransitVirtualInterface,
    NewTransitVirtualInterfaceAllocation, RouteFilterPrefix, Tag,
};

shape! {
    pub struct AcceptDirectConnectGatewayAssociationProposalInput {
        /// The ID of the Direct Connect gateway.
        direct_connect_gateway_id: string,
        /// The ID of the request proposal.
        proposal_id: string,
        /// The ID of the AWS account that owns the virtual private gateway or transit gateway.
        associated_gateway_owner_account: string,
        /// Overrides the Amazon VPC prefixes advertised to the Direct Connect gateway.
        override_allowed_prefixes_to_direct_connect_gateway: list<RouteFilterPrefix>,
    }
}

shape! {
    pub struct AllocateConnectionOnInterconnectInput {
        /// The bandwidth of the connection. The possible values are 50Mbps, 100Mbps, 200Mbps,
        /// 300Mbps, 400Mbps, 500Mbps, 1Gbps, 2Gbps, 5Gbps, and 10Gbps.
        bandwidth: string,
        /// The name of the provisioned connection.
        connection_name: string,
        /// The ID of the AWS account of the customer for whom the connection will be
        /// provisioned.
        owner_account: string,
        /// The ID of the interconnect on which the connection will be provisioned.
        interconnect_id: string,
        /// The dedicated VLAN provisioned to the connection.
        vlan: int,
    }
}

shape! {
    pub struct AllocateHostedConnectionInput {
        /// The ID of the interconnect or LAG.
        connection_id: string,
        /// The ID of the AWS account ID of the customer for the connection.
        owner_account: string,
        /// The bandwidth of the connection.
        bandwidth: string,
        /// The name of the hosted connection.
        connection_name: string,
        /// The dedicated VLAN provisioned to the hosted connection.
        vlan: int,
        /// The tags associated with the connection.
        tags: list<Tag>,
    }
}

shape! {
    pub struct AllocatePrivateVirtualInterfaceInput {
        /// The ID of the connection on which the private virtual interface is provisioned.
        connection_id: string,
        /// The ID of the AWS account that owns the virtual private interface.
        owner_account: string,
        /// Information about the private virtual interface.
        new_private_virtual_interface_allocation: shape<NewPrivateVirtualInterfaceAllocation>,
    }
}

shape! {
    pub struct AllocatePublicVirtualInterfaceInput {
        /// The ID of the connection on which the public virtual interface is provisioned.
        connection_id: string,
        /// The ID of the AWS account that owns the public virtual interface.
        owner_account: string,
        /// Information about the public virtual interface.
        new_public_virtual_interface_allocation: shape<NewPublicVirtualInterfaceAllocation>,
    }
}

shape! {
    pub struct AllocateTransitVirtualInterfaceInput {
        /// The ID of the connection on which the transit virtual interface is provisioned.
        connection_id: string,
        /// The ID of the AWS account that owns the transit virtual interface.
        owner_account: string,
        /// Information about the transit virtual interface.
        new_transit_virtual_interface_allocation: shape<NewTransitVirtualInterfaceAllocation>,
    }
}

shape! {
    pub struct AssociateConnectionWithLagInput {
        /// The ID of the connection.
        connection_id: string,
        /// The ID of the LAG with which to associate the connection.
        lag_id: string,
    }
}

shape! {
    pub struct AssociateHostedConnectionInput {
        /// The ID of the hosted connection.
        connection_id: string,
        /// The ID of the interconnect or the LAG.
        parent_connection_id: string,
    }
}

shape! {
    pub struct AssociateVirtualInterfaceInput {
        /// The ID of the virtual interface.
        virtual_interface_id: string,
        /// The ID of the LAG or connection.
        connection_id: string,
    }
}

shape! {
    pub struct ConfirmConnectionInput {
        /// The ID of the hosted connection.
        connection_id: string,
    }
}

shape! {
    pub struct ConfirmPrivateVirtualInterfaceInput {
        virtual_interface_id: string,
        /// The ID of the virtual private gateway.
        virtual_gateway_id: string,
        /// The ID of the Direct Connect gateway.
        direct_connect_gateway_id: string,
    }
}

shape! {
    pub struct ConfirmPublicVirtualInterfaceInput {
        virtual_interface_id: string,
    }
}

shape! {
    pub struct ConfirmTransitVirtualInterfaceInput {
        virtual_interface_id: string,
        direct_connect_gateway_id: string,
    }
}

shape! {
    pub struct CreateBgpPeerInput {
        /// The ID of the virtual interface.
        virtual_interface_id: string,
        /// Information about the BGP peer.
        new_bgp_peer("newBGPPeer"): shape<NewBgpPeer>,
    }
}

shape! {
    pub struct CreateConnectionInput {
        /// The location of the connection.
        location: string,
        /// The bandwidth of the connection.
        bandwidth: string,
        /// The name of the connection.
        connection_name: string,
        /// The ID of the LAG.
        lag_id: string,
        /// The tags to associate with the connection.
        tags: list<Tag>,
        /// The name of the service provider associated with the requested connection.
        provider_name: string,
    }
}

shape! {
    pub struct CreateDirectConnectGatewayInput {
        /// The name of the Direct Connect gateway.
        direct_connect_gateway_name: string,
        /// The autonomous system number (ASN) for Border Gateway Protocol (BGP) to be
        /// configured on the Amazon side of the connection. The ASN must be in the private
        /// range of 64,512 to 65,534 or 4,200,000,000 to 4,294,967,294. The default is 64512.
        amazon_side_asn: long,
    }
}

shape! {
    pub struct CreateDirectConnectGatewayAssociationInput {
        direct_connect_gateway_id: string,
        /// The ID of the virtual private gateway or transit gateway.
        gateway_id: string,
        /// The Amazon VPC prefixes to advertise to the Direct Connect gateway.
        add_allowed_prefixes_to_direct_connect_gateway: list<RouteFilterPrefix>,
        virtual_gateway_id: string,
    }
}

shape! {
    pub struct CreateDirectConnectGatewayAssociationProposalInput {
        direct_connect_gateway_id: string,
        /// The ID of the AWS account that owns the Direct Connect gateway.
        direct_connect_gateway_owner_account: string,
        /// The ID of the virtual private gateway or transit gateway.
        gateway_id: string,
        add_allowed_prefixes_to_direct_connect_gateway: list<RouteFilterPrefix>,
        remove_allowed_prefixes_to_direct_connect_gateway: list<RouteFilterPrefix>,
    }
}

shape! {
    pub struct CreateInterconnectInput {
        /// The name of the interconnect.
        interconnect_name: string,
        /// The port bandwidth, in Gbps. The possible values are 1 and 10.
        bandwidth: string,
        /// The location of the interconnect.
        location: string,
        lag_id: string,
        tags: list<Tag>,
        provider_name: string,
    }
}

shape! {
    pub struct CreateLagInput {
        /// The number of physical dedicated connections initially provisioned and bundled by
        /// the LAG.
        number_of_connections: int,
        /// The location for the LAG.
        location: string,
        /// The bandwidth of the individual physical dedicated connections bundled by the LAG.
        connections_bandwidth: string,
        /// The name of the LAG.
        lag_name: string,
        /// The ID of an existing dedicated connection to migrate to the LAG.
        connection_id: string,
        /// The tags to associate with the LAG.
        tags: list<Tag>,
        /// The tags to associate with the automatically created connections.
        child_connection_tags: list<Tag>,
        provider_name: string,
    }
}

shape! {
    pub struct CreatePrivateVirtualInterfaceInput {
        connection_id: string,
        new_private_virtual_interface: shape<NewPrivateVirtualInterface>,
    }
}

shape! {
    pub struct CreatePublicVirtualInterfaceInput {
        connection_id: string,
        new_public_virtual_interface: shape<NewPublicVirtualInterface>,
    }
}

shape! {
    pub struct CreateTransitVirtualInterfaceInput {
        connection_id: string,
        new_transit_virtual_interface: shape<NewTransitVirtualInterface>,
    }
}

shape! {
    pub struct DeleteBgpPeerInput {
        /// The ID of the virtual interface.
        virtual_interface_id: string,
        /// The autonomous system (AS) number for Border Gateway Protocol (BGP) configuration.
        asn: int,
        /// The IP address assigned to the customer interface.
        customer_address: string,
        /// The ID of the BGP peer.
        bgp_peer_id: string,
    }
}

shape! {
    pub struct DeleteConnectionInput {
        connection_id: string,
    }
}

shape! {
    pub struct DeleteDirectConnectGatewayInput {
        direct_connect_gateway_id: string,
    }
}

shape! {
    pub struct DeleteDirectConnectGatewayAssociationInput {
        /// The ID of the Direct Connect gateway association.
        association_id: string,
        direct_connect_gateway_id: string,
        virtual_gateway_id: string,
    }
}

shape! {
    pub struct DeleteDirectConnectGatewayAssociationProposalInput {
        /// The ID of the proposal.
        proposal_id: string,
    }
}

shape! {
    pub struct DeleteInterconnectInput {
        interconnect_id: string,
    }
}

shape! {
    pub struct DeleteLagInput {
        lag_id: string,
    }
}

shape! {
    pub struct DeleteVirtualInterfaceInput {
        virtual_interface_id: string,
    }
}

shape! {
    pub struct DescribeConnectionLoaInput {
        /// The ID of the connection.
        connection_id: string,
        /// The name of the APN partner or service provider who establishes connectivity on
        /// your behalf. If you specify this parameter, the LOA-CFA lists the provider name
        /// alongside your company name as the requester of the cross connect.
        provider_name: string,
        /// The standard media type for the LOA-CFA document.
        loa_content_type: shape<LoaContentType>,
    }
}

shape! {
    pub struct DescribeConnectionsInput {
        connection_id: string,
    }
}

shape! {
    pub struct DescribeConnectionsOnInterconnectInput {
        interconnect_id: string,
    }
}

shape! {
    pub struct DescribeDirectConnectGatewayAssociationProposalsInput {
        direct_connect_gateway_id: string,
        proposal_id: string,
        /// The ID of the associated gateway.
        associated_gateway_id: string,
        /// The maximum number of results to return with a single call. To retrieve the
        /// remaining results, make another call with the returned `next_token` value.
        max_results: int,
        /// The token for the next page of results.
        next_token: string,
    }
}

shape! {
    pub struct DescribeDirectConnectGatewayAssociationsInput {
        association_id: string,
        associated_gateway_id: string,
        direct_connect_gateway_id: string,
        max_results: int,
        /// The token provided in the previous call to retrieve the next page.
        next_token: string,
        virtual_gateway_id: string,
    }
}

shape! {
    pub struct DescribeDirectConnectGatewayAttachmentsInput {
        direct_connect_gateway_id: string,
        virtual_interface_id: string,
        max_results: int,
        next_token: string,
    }
}

shape! {
    pub struct DescribeDirectConnectGatewaysInput {
        direct_connect_gateway_id: string,
        max_results: int,
        next_token: string,
    }
}

shape! {
    pub struct DescribeHostedConnectionsInput {
        /// The ID of the interconnect or LAG.
        connection_id: string,
    }
}

shape! {
    pub struct DescribeInterconnectLoaInput {
        interconnect_id: string,
        provider_name: string,
        loa_content_type: shape<LoaContentType>,
    }
}

shape! {
    pub struct DescribeInterconnectsInput {
        interconnect_id: string,
    }
}

shape! {
    pub struct DescribeLagsInput {
        lag_id: string,
    }
}

shape! {
    pub struct DescribeLoaInput {
        /// The ID of a connection, LAG, or interconnect.
        connection_id: string,
        provider_name: string,
        loa_content_type: shape<LoaContentType>,
    }
}

shape! {
    pub struct DescribeLocationsInput {}
}

shape! {
    pub struct DescribeTagsInput {
        /// The Amazon Resource Names (ARNs) of the resources.
        resource_arns: list<String>,
    }
}

shape! {
    pub struct DescribeVirtualGatewaysInput {}
}

shape! {
    pub struct DescribeVirtualInterfacesInput {
        connection_id: string,
        virtual_interface_id: string,
    }
}

shape! {
    pub struct DisassociateConnectionFromLagInput {
        /// The ID of the connection.
        connection_id: string,
        /// The ID of the LAG.
        lag_id: string,
    }
}

shape! {
    pub struct ListVirtualInterfaceTestHistoryInput {
        /// The ID of the virtual interface failover test.
        test_id: string,
        /// The ID of the virtual interface that was tested.
        virtual_interface_id: string,
        /// The BGP peers that were placed in the DOWN state during the virtual interface
        /// failover test.
        bgp_peers: list<String>,
        /// The status of the virtual interface failover test.
        status: string,
        max_results: int,
        next_token: string,
    }
}

shape! {
    pub struct StartBgpFailoverTestInput {
        /// The ID of the virtual interface you want to test.
        virtual_interface_id: string,
        /// The BGP peers to place in the DOWN state.
        bgp_peers: list<String>,
        /// The time in minutes that the virtual interface failover test will last.
        ///
        /// Maximum value: 180 minutes (3 hours). Default: 180 minutes (3 hours).
        test_duration_in_minutes: int,
    }
}

shape! {
    pub struct StopBgpFailoverTestInput {
        virtual_interface_id: string,
    }
}

shape! {
    pub struct TagResourceInput {
        /// The Amazon Resource Name (ARN) of the resource.
        resource_arn: string,
        /// The tags to add.
        tags: list<Tag>,
    }
}

shape! {
    pub struct UntagResourceInput {
        resource_arn: string,
        /// The tag keys of the tags to remove.
        tag_keys: list<String>,
    }
}

shape! {
    pub struct UpdateDirectConnectGatewayAssociationInput {
        /// The ID of the Direct Connect gateway association.
        association_id: string,
        /// The Amazon VPC prefixes to advertise to the Direct Connect gateway.
        add_allowed_prefixes_to_direct_connect_gateway: list<RouteFilterPrefix>,
        /// The Amazon VPC prefixes to no longer advertise to the Direct Connect gateway.
        remove_allowed_prefixes_to_direct_connect_gateway: list<RouteFilterPrefix>,
    }
}

shape! {
    pub struct UpdateLagInput {
        /// The ID of the LAG.
        lag_id: string,
        /// The name of the LAG.
        lag_name: string,
        /// The minimum number of physical connections that must be operational for the LAG
        /// itself to be operational.
        minimum_links: int,
    }
}

shape! {
    pub struct UpdateVirtualInterfaceAttributesInput {
        /// The ID of the virtual private interface.
        virtual_interface_id: string,
        /// The maximum transmission unit (MTU), in bytes. The supported values are 1500 and
        /// 9001. The default value is 1500.
        mtu: int,
    }
}
