/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Shapes shared between operations: the resources Direct Connect manages and the enumerations
//! describing their state.

string_enum! {
    /// The address family of a BGP peer.
    pub enum AddressFamily {
        Ipv4 => "ipv4",
        Ipv6 => "ipv6",
    }
}

string_enum! {
    /// The state of a BGP peer.
    pub enum BgpPeerState {
        /// The BGP peering addresses or ASN require validation before the peer can be created.
        /// Only valid on public virtual interfaces.
        Verifying => "verifying",
        /// The BGP peer is created, and remains in this state until it is ready to be established.
        Pending => "pending",
        /// The BGP peer is ready to be established.
        Available => "available",
        /// The BGP peer is being deleted.
        Deleting => "deleting",
        /// The BGP peer is deleted and cannot be established.
        Deleted => "deleted",
    }
}

string_enum! {
    /// The status of a BGP peer.
    pub enum BgpStatus {
        Up => "up",
        Down => "down",
        Unknown => "unknown",
    }
}

string_enum! {
    /// The state of a connection.
    pub enum ConnectionState {
        /// The initial state of a hosted connection provisioned on an interconnect. The
        /// connection stays in this state until the owner accepts or rejects it.
        Ordering => "ordering",
        /// The initial state of a standard connection. The connection stays in this state until
        /// the Letter of Authorization (LOA) is sent to the customer.
        Requested => "requested",
        /// The connection has been approved and is being initialized.
        Pending => "pending",
        /// The network link is up and the connection is ready for use.
        Available => "available",
        /// The network link is down.
        Down => "down",
        /// The connection is being deleted.
        Deleting => "deleting",
        /// The connection has been deleted.
        Deleted => "deleted",
        /// A hosted connection in the `ordering` state enters `rejected` if it is deleted by
        /// the customer.
        Rejected => "rejected",
        /// The state of the connection is not available.
        Unknown => "unknown",
    }
}

string_enum! {
    /// The state of a proposal to associate a gateway with a Direct Connect gateway.
    pub enum DirectConnectGatewayAssociationProposalState {
        Requested => "requested",
        Accepted => "accepted",
        Deleted => "deleted",
    }
}

string_enum! {
    /// The state of the association between a Direct Connect gateway and a virtual private
    /// gateway or transit gateway.
    pub enum DirectConnectGatewayAssociationState {
        Associating => "associating",
        Associated => "associated",
        Disassociating => "disassociating",
        Disassociated => "disassociated",
        Updating => "updating",
    }
}

string_enum! {
    /// The state of the attachment between a virtual interface and a Direct Connect gateway.
    pub enum DirectConnectGatewayAttachmentState {
        /// The initial state after a virtual interface is created using the Direct Connect
        /// gateway.
        Attaching => "attaching",
        /// The Direct Connect gateway and virtual interface are attached and ready to pass
        /// traffic.
        Attached => "attached",
        /// The initial state after calling `DeleteVirtualInterface`.
        Detaching => "detaching",
        /// The virtual interface is detached from the Direct Connect gateway. Traffic flow
        /// between the Direct Connect gateway and virtual interface is stopped.
        Detached => "detached",
    }
}

string_enum! {
    /// The type of virtual interface attached to a Direct Connect gateway.
    pub enum DirectConnectGatewayAttachmentType {
        TransitVirtualInterface => "TransitVirtualInterface",
        PrivateVirtualInterface => "PrivateVirtualInterface",
    }
}

string_enum! {
    /// The state of a Direct Connect gateway.
    pub enum DirectConnectGatewayState {
        /// The initial state after calling `CreateDirectConnectGateway`.
        Pending => "pending",
        /// The Direct Connect gateway is ready for use.
        Available => "available",
        /// The initial state after calling `DeleteDirectConnectGateway`.
        Deleting => "deleting",
        /// The Direct Connect gateway is deleted and cannot pass traffic.
        Deleted => "deleted",
    }
}

string_enum! {
    /// The type of gateway associated with a Direct Connect gateway.
    pub enum GatewayType {
        VirtualPrivateGateway => "virtualPrivateGateway",
        TransitGateway => "transitGateway",
    }
}

string_enum! {
    /// Whether a resource supports a secondary BGP peer in the same address family.
    pub enum HasLogicalRedundancy {
        Unknown => "unknown",
        Yes => "yes",
        No => "no",
    }
}

string_enum! {
    /// The state of an interconnect.
    pub enum InterconnectState {
        /// The initial state of an interconnect. The interconnect stays in this state until the
        /// Letter of Authorization (LOA) is sent to the customer.
        Requested => "requested",
        /// The interconnect is approved, and is being initialized.
        Pending => "pending",
        /// The network link is up, and the interconnect is ready for use.
        Available => "available",
        /// The network link is down.
        Down => "down",
        /// The interconnect is being deleted.
        Deleting => "deleting",
        /// The interconnect is deleted.
        Deleted => "deleted",
        /// The state of the interconnect is not available.
        Unknown => "unknown",
    }
}

string_enum! {
    /// The state of a link aggregation group (LAG).
    pub enum LagState {
        /// The initial state of a LAG. The LAG stays in the requested state until the Letter of
        /// Authorization (LOA) is available.
        Requested => "requested",
        /// The LAG has been approved and is being initialized.
        Pending => "pending",
        /// The network link is established and the LAG is ready for use.
        Available => "available",
        /// The network link is down.
        Down => "down",
        /// The LAG is being deleted.
        Deleting => "deleting",
        /// The LAG is deleted.
        Deleted => "deleted",
        /// The state of the LAG is not available.
        Unknown => "unknown",
    }
}

string_enum! {
    /// The standard media type of a Letter of Authorization.
    pub enum LoaContentType {
        ApplicationPdf => "application/pdf",
    }
}

string_enum! {
    /// The state of a virtual interface.
    pub enum VirtualInterfaceState {
        /// The creation of the virtual interface is pending confirmation from the virtual
        /// interface owner.
        Confirming => "confirming",
        /// This state only applies to public virtual interfaces. Each public virtual interface
        /// needs validation before the virtual interface can be created.
        Verifying => "verifying",
        /// A virtual interface is in this state from the time that it is created until the
        /// virtual interface is ready to forward traffic.
        Pending => "pending",
        /// A virtual interface that is able to forward traffic.
        Available => "available",
        /// A virtual interface that is BGP down.
        Down => "down",
        /// A virtual interface is in this state immediately after calling
        /// `DeleteVirtualInterface` until it can no longer forward traffic.
        Deleting => "deleting",
        /// A virtual interface that cannot forward traffic.
        Deleted => "deleted",
        /// The virtual interface owner has declined creation of the virtual interface.
        Rejected => "rejected",
        /// The state of the virtual interface is not available.
        Unknown => "unknown",
    }
}

/// Information about the associated gateway.
///
/// Written out by hand rather than through `shape!` since its `type` member is a keyword.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "camelCase")
)]
#[cfg_attr(feature = "serde-deserialize", serde(default))]
pub struct AssociatedGateway {
    /// The ID of the associated gateway.
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "Option::is_none")
    )]
    #[cfg_attr(
        feature = "serde-deserialize",
        serde(deserialize_with = "crate::serde_impl::deserialize_member")
    )]
    pub id: Option<String>,
    /// The type of associated gateway.
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "Option::is_none")
    )]
    #[cfg_attr(
        feature = "serde-deserialize",
        serde(deserialize_with = "crate::serde_impl::deserialize_member")
    )]
    pub r#type: Option<GatewayType>,
    /// The ID of the AWS account that owns the associated virtual private gateway or transit
    /// gateway.
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "Option::is_none")
    )]
    #[cfg_attr(
        feature = "serde-deserialize",
        serde(deserialize_with = "crate::serde_impl::deserialize_member")
    )]
    pub owner_account: Option<String>,
    /// The Region where the associated gateway is located.
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "Option::is_none")
    )]
    #[cfg_attr(
        feature = "serde-deserialize",
        serde(deserialize_with = "crate::serde_impl::deserialize_member")
    )]
    pub region: Option<String>,
}

#[cfg(feature = "serde-deserialize")]
impl crate::serde_impl::Member for AssociatedGateway {}

impl AssociatedGateway {
    /// The ID of the associated gateway.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The type of associated gateway.
    pub fn r#type(&self) -> Option<&GatewayType> {
        self.r#type.as_ref()
    }

    /// The ID of the AWS account that owns the associated virtual private gateway or transit
    /// gateway.
    pub fn owner_account(&self) -> Option<&str> {
        self.owner_account.as_deref()
    }

    /// The Region where the associated gateway is located.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Creates a new builder-style object to manufacture [`AssociatedGateway`]
    pub fn builder() -> associated_gateway::Builder {
        associated_gateway::Builder::default()
    }
}

/// See [`AssociatedGateway`](super::AssociatedGateway)
pub mod associated_gateway {
    use super::GatewayType;

    /// A builder for [`AssociatedGateway`](super::AssociatedGateway)
    #[derive(Clone, PartialEq, Debug, Default)]
    pub struct Builder {
        id: Option<String>,
        r#type: Option<GatewayType>,
        owner_account: Option<String>,
        region: Option<String>,
    }

    impl Builder {
        pub fn id(mut self, input: impl Into<String>) -> Self {
            self.id = Some(input.into());
            self
        }

        pub fn set_id(mut self, input: Option<String>) -> Self {
            self.id = input;
            self
        }

        pub fn get_id(&self) -> &Option<String> {
            &self.id
        }

        pub fn r#type(mut self, input: impl Into<GatewayType>) -> Self {
            self.r#type = Some(input.into());
            self
        }

        pub fn set_type(mut self, input: Option<GatewayType>) -> Self {
            self.r#type = input;
            self
        }

        pub fn get_type(&self) -> &Option<GatewayType> {
            &self.r#type
        }

        pub fn owner_account(mut self, input: impl Into<String>) -> Self {
            self.owner_account = Some(input.into());
            self
        }

        pub fn set_owner_account(mut self, input: Option<String>) -> Self {
            self.owner_account = input;
            self
        }

        pub fn get_owner_account(&self) -> &Option<String> {
            &self.owner_account
        }

        pub fn region(mut self, input: impl Into<String>) -> Self {
            self.region = Some(input.into());
            self
        }

        pub fn set_region(mut self, input: Option<String>) -> Self {
            self.region = input;
            self
        }

        pub fn get_region(&self) -> &Option<String> {
            &self.region
        }

        /// Consumes the builder and constructs an [`AssociatedGateway`](super::AssociatedGateway)
        pub fn build(self) -> super::AssociatedGateway {
            super::AssociatedGateway {
                id: self.id,
                r#type: self.r#type,
                owner_account: self.owner_account,
                region: self.region,
            }
        }
    }
}

shape! {
    /// Information about a BGP peer.
    pub struct BgpPeer {
        /// The ID of the BGP peer.
        bgp_peer_id: string,
        /// The autonomous system (AS) number for Border Gateway Protocol (BGP) configuration.
        asn: int,
        /// The authentication key for BGP configuration. This string has a minimum length of 6
        /// characters and a maximum length of 80 characters.
        auth_key: string,
        /// The address family for the BGP peer.
        address_family: shape<AddressFamily>,
        /// The IP address assigned to the Amazon interface.
        amazon_address: string,
        /// The IP address assigned to the customer interface.
        customer_address: string,
        /// The state of the BGP peer.
        bgp_peer_state: shape<BgpPeerState>,
        /// The status of the BGP peer.
        bgp_status: shape<BgpStatus>,
        /// The Direct Connect endpoint on which the BGP peer terminates.
        aws_device_v2: string,
    }
}

/// Members of a connection, shared by [`Connection`] and the outputs of the operations that
/// return one.
macro_rules! connection_shape {
    ($(#[$meta:meta])* pub struct $name:ident $(as $mirror:path)?) => {
        shape! {
            $(#[$meta])*
            pub struct $name $(as $mirror)? {
                /// The ID of the AWS account that owns the connection.
                owner_account: string,
                /// The ID of the connection.
                connection_id: string,
                /// The name of the connection.
                connection_name: string,
                /// The state of the connection.
                connection_state: shape<crate::model::ConnectionState>,
                /// The AWS Region where the connection is located.
                region: string,
                /// The location of the connection.
                location: string,
                /// The bandwidth of the connection.
                bandwidth: string,
                /// The ID of the VLAN.
                vlan: int,
                /// The name of the AWS Direct Connect service provider associated with the
                /// connection.
                partner_name: string,
                /// The time of the most recent call to `DescribeLoa` for this connection.
                loa_issue_time: timestamp,
                /// The ID of the LAG.
                lag_id: string,
                /// The Direct Connect endpoint on which the physical connection terminates.
                aws_device: string,
                /// Indicates whether jumbo frames (9001 MTU) are supported.
                jumbo_frame_capable: boolean,
                /// The Direct Connect endpoint on which the physical connection terminates.
                aws_device_v2: string,
                /// Indicates whether the connection supports a secondary BGP peer in the same
                /// address family (IPv4/IPv6).
                has_logical_redundancy: shape<crate::model::HasLogicalRedundancy>,
                /// The tags associated with the connection.
                tags: list<crate::model::Tag>,
                /// The name of the service provider associated with the connection.
                provider_name: string,
            }
        }
    };
}

connection_shape! {
    /// Information about an AWS Direct Connect connection.
    pub struct Connection
}

shape! {
    /// Information about a Direct Connect gateway, which enables you to connect virtual
    /// interfaces and virtual private gateway or transit gateways.
    pub struct DirectConnectGateway {
        /// The ID of the Direct Connect gateway.
        direct_connect_gateway_id: string,
        /// The name of the Direct Connect gateway.
        direct_connect_gateway_name: string,
        /// The autonomous system number (ASN) for the Amazon side of the connection.
        amazon_side_asn: long,
        /// The ID of the AWS account that owns the Direct Connect gateway.
        owner_account: string,
        /// The state of the Direct Connect gateway.
        direct_connect_gateway_state: shape<DirectConnectGatewayState>,
        /// The error message if the state of an object failed to advance.
        state_change_error: string,
    }
}

shape! {
    /// Information about an association between a Direct Connect gateway and a virtual private
    /// gateway or transit gateway.
    pub struct DirectConnectGatewayAssociation {
        direct_connect_gateway_id: string,
        direct_connect_gateway_owner_account: string,
        association_state: shape<DirectConnectGatewayAssociationState>,
        /// The error message if the state of an object failed to advance.
        state_change_error: string,
        /// Information about the associated gateway.
        associated_gateway: shape<AssociatedGateway>,
        association_id: string,
        /// The Amazon VPC prefixes to advertise to the Direct Connect gateway.
        allowed_prefixes_to_direct_connect_gateway: list<RouteFilterPrefix>,
        /// The ID of the virtual private gateway. Applies only to private virtual interfaces.
        virtual_gateway_id: string,
        /// The AWS Region where the virtual private gateway is located.
        virtual_gateway_region: string,
        /// The ID of the AWS account that owns the virtual private gateway.
        virtual_gateway_owner_account: string,
    }
}

shape! {
    /// Information about the proposal request to attach a virtual private gateway to a Direct
    /// Connect gateway.
    pub struct DirectConnectGatewayAssociationProposal {
        proposal_id: string,
        direct_connect_gateway_id: string,
        direct_connect_gateway_owner_account: string,
        proposal_state: shape<DirectConnectGatewayAssociationProposalState>,
        associated_gateway: shape<AssociatedGateway>,
        /// The existing Amazon VPC prefixes advertised to the Direct Connect gateway.
        existing_allowed_prefixes_to_direct_connect_gateway: list<RouteFilterPrefix>,
        /// The Amazon VPC prefixes to advertise to the Direct Connect gateway.
        requested_allowed_prefixes_to_direct_connect_gateway: list<RouteFilterPrefix>,
    }
}

shape! {
    /// Information about an attachment between a Direct Connect gateway and a virtual interface.
    pub struct DirectConnectGatewayAttachment {
        direct_connect_gateway_id: string,
        virtual_interface_id: string,
        virtual_interface_region: string,
        virtual_interface_owner_account: string,
        attachment_state: shape<DirectConnectGatewayAttachmentState>,
        /// The type of attachment.
        attachment_type: shape<DirectConnectGatewayAttachmentType>,
        /// The error message if the state of an object failed to advance.
        state_change_error: string,
    }
}

/// Members of an interconnect, shared by [`Interconnect`] and the outputs of the operations
/// that return one.
macro_rules! interconnect_shape {
    ($(#[$meta:meta])* pub struct $name:ident $(as $mirror:path)?) => {
        shape! {
            $(#[$meta])*
            pub struct $name $(as $mirror)? {
                /// The ID of the interconnect.
                interconnect_id: string,
                /// The name of the interconnect.
                interconnect_name: string,
                /// The state of the interconnect.
                interconnect_state: shape<crate::model::InterconnectState>,
                /// The AWS Region where the connection is located.
                region: string,
                /// The location of the connection.
                location: string,
                /// The bandwidth of the connection.
                bandwidth: string,
                /// The time of the most recent call to `DescribeLoa` for this connection.
                loa_issue_time: timestamp,
                /// The ID of the LAG.
                lag_id: string,
                /// The Direct Connect endpoint on which the physical connection terminates.
                aws_device: string,
                /// Indicates whether jumbo frames (9001 MTU) are supported.
                jumbo_frame_capable: boolean,
                /// The Direct Connect endpoint on which the physical connection terminates.
                aws_device_v2: string,
                /// Indicates whether the interconnect supports a secondary BGP in the same
                /// address family (IPv4/IPv6).
                has_logical_redundancy: shape<crate::model::HasLogicalRedundancy>,
                /// The tags associated with the interconnect.
                tags: list<crate::model::Tag>,
                /// The name of the service provider associated with the interconnect.
                provider_name: string,
            }
        }
    };
}

interconnect_shape! {
    /// Information about an interconnect.
    pub struct Interconnect
}

/// Members of a LAG, shared by [`Lag`] and the outputs of the operations that return one.
macro_rules! lag_shape {
    ($(#[$meta:meta])* pub struct $name:ident $(as $mirror:path)?) => {
        shape! {
            $(#[$meta])*
            pub struct $name $(as $mirror)? {
                /// The individual bandwidth of the physical connections bundled by the LAG. The
                /// possible values are 1Gbps and 10Gbps.
                connections_bandwidth: string,
                /// The number of physical connections bundled by the LAG, up to a maximum of 10.
                number_of_connections: int,
                /// The ID of the LAG.
                lag_id: string,
                /// The ID of the AWS account that owns the LAG.
                owner_account: string,
                /// The name of the LAG.
                lag_name: string,
                /// The state of the LAG.
                lag_state: shape<crate::model::LagState>,
                /// The location of the LAG.
                location: string,
                /// The AWS Region where the connection is located.
                region: string,
                /// The minimum number of physical connections that must be operational for the
                /// LAG itself to be operational.
                minimum_links: int,
                /// The AWS Direct Connect endpoint that hosts the LAG.
                aws_device: string,
                /// The AWS Direct Connect endpoint that hosts the LAG.
                aws_device_v2: string,
                /// The connections bundled by the LAG.
                connections: list<crate::model::Connection>,
                /// Indicates whether the LAG can host other connections.
                allows_hosted_connections: boolean,
                /// Indicates whether jumbo frames (9001 MTU) are supported.
                jumbo_frame_capable: boolean,
                /// Indicates whether the LAG supports a secondary BGP peer in the same address
                /// family (IPv4/IPv6).
                has_logical_redundancy: shape<crate::model::HasLogicalRedundancy>,
                /// The tags associated with the LAG.
                tags: list<crate::model::Tag>,
                /// The name of the service provider associated with the LAG.
                provider_name: string,
            }
        }
    };
}

lag_shape! {
    /// Information about a link aggregation group (LAG).
    pub struct Lag
}

/// Members of a Letter of Authorization, shared by [`Loa`] and `DescribeLoaOutput`.
macro_rules! loa_shape {
    ($(#[$meta:meta])* pub struct $name:ident $(as $mirror:path)?) => {
        shape! {
            $(#[$meta])*
            pub struct $name $(as $mirror)? {
                /// The binary contents of the LOA-CFA document.
                loa_content: blob,
                /// The standard media type for the LOA-CFA document. The only supported value
                /// is `application/pdf`.
                loa_content_type: shape<crate::model::LoaContentType>,
            }
        }
    };
}

loa_shape! {
    /// Information about a Letter of Authorization - Connecting Facility Assignment (LOA-CFA)
    /// for a connection.
    pub struct Loa
}

shape! {
    /// Information about an AWS Direct Connect location.
    pub struct Location {
        /// The code for the location.
        location_code: string,
        /// The name of the location. This includes the name of the colocation partner and the
        /// physical site of the building.
        location_name: string,
        /// The AWS Region for the location.
        region: string,
        /// The available port speeds for the location.
        available_port_speeds: list<String>,
        /// The name of the service provider for the location.
        available_providers: list<String>,
    }
}

shape! {
    /// Information about a new BGP peer.
    pub struct NewBgpPeer {
        asn: int,
        auth_key: string,
        address_family: shape<AddressFamily>,
        amazon_address: string,
        customer_address: string,
    }
}

shape! {
    /// Information about a private virtual interface.
    pub struct NewPrivateVirtualInterface {
        /// The name of the virtual interface assigned by the customer network.
        virtual_interface_name: string,
        /// The ID of the VLAN.
        vlan: int,
        /// The autonomous system (AS) number for Border Gateway Protocol (BGP) configuration.
        asn: int,
        /// The maximum transmission unit (MTU), in bytes. The supported values are 1500 and
        /// 9001. The default value is 1500.
        mtu: int,
        auth_key: string,
        amazon_address: string,
        customer_address: string,
        address_family: shape<AddressFamily>,
        /// The ID of the virtual private gateway.
        virtual_gateway_id: string,
        /// The ID of the Direct Connect gateway.
        direct_connect_gateway_id: string,
        /// The tags associated with the private virtual interface.
        tags: list<Tag>,
    }
}

shape! {
    /// Information about a private virtual interface to be provisioned on a connection.
    pub struct NewPrivateVirtualInterfaceAllocation {
        virtual_interface_name: string,
        vlan: int,
        asn: int,
        mtu: int,
        auth_key: string,
        amazon_address: string,
        address_family: shape<AddressFamily>,
        customer_address: string,
        tags: list<Tag>,
    }
}

shape! {
    /// Information about a public virtual interface.
    pub struct NewPublicVirtualInterface {
        virtual_interface_name: string,
        vlan: int,
        asn: int,
        auth_key: string,
        amazon_address: string,
        customer_address: string,
        address_family: shape<AddressFamily>,
        /// The routes to be advertised to the AWS network in this Region. Applies to public
        /// virtual interfaces.
        route_filter_prefixes: list<RouteFilterPrefix>,
        tags: list<Tag>,
    }
}

shape! {
    /// Information about a public virtual interface to be provisioned on a connection.
    pub struct NewPublicVirtualInterfaceAllocation {
        virtual_interface_name: string,
        vlan: int,
        asn: int,
        auth_key: string,
        amazon_address: string,
        customer_address: string,
        address_family: shape<AddressFamily>,
        route_filter_prefixes: list<RouteFilterPrefix>,
        tags: list<Tag>,
    }
}

shape! {
    /// Information about a transit virtual interface.
    pub struct NewTransitVirtualInterface {
        virtual_interface_name: string,
        vlan: int,
        asn: int,
        /// The maximum transmission unit (MTU), in bytes. The supported values are 1500 and
        /// 8500. The default value is 1500.
        mtu: int,
        auth_key: string,
        amazon_address: string,
        customer_address: string,
        address_family: shape<AddressFamily>,
        direct_connect_gateway_id: string,
        tags: list<Tag>,
    }
}

shape! {
    /// Information about a transit virtual interface to be provisioned on a connection.
    pub struct NewTransitVirtualInterfaceAllocation {
        virtual_interface_name: string,
        vlan: int,
        asn: int,
        mtu: int,
        auth_key: string,
        amazon_address: string,
        customer_address: string,
        address_family: shape<AddressFamily>,
        tags: list<Tag>,
    }
}

shape! {
    /// Information about a tag associated with an AWS Direct Connect resource.
    pub struct ResourceTag {
        /// The Amazon Resource Name (ARN) of the resource.
        resource_arn: string,
        /// The tags.
        tags: list<Tag>,
    }
}

shape! {
    /// Information about a route filter prefix that a customer can advertise through Border
    /// Gateway Protocol (BGP) over a public virtual interface.
    pub struct RouteFilterPrefix {
        /// The CIDR block for the advertised route. Separate multiple routes using commas. An
        /// IPv6 CIDR must use /64 or shorter.
        cidr: string,
    }
}

shape! {
    /// Information about a tag.
    pub struct Tag {
        /// The key.
        key: string,
        /// The value.
        value: string,
    }
}

shape! {
    /// Information about a virtual private gateway for a private virtual interface.
    pub struct VirtualGateway {
        virtual_gateway_id: string,
        /// The state of the virtual private gateway: `pending`, `available`, `deleting` or
        /// `deleted`.
        virtual_gateway_state: string,
    }
}

/// Members of a virtual interface, shared by [`VirtualInterface`] and the outputs of the
/// operations that return one.
macro_rules! virtual_interface_shape {
    ($(#[$meta:meta])* pub struct $name:ident $(as $mirror:path)?) => {
        shape! {
            $(#[$meta])*
            pub struct $name $(as $mirror)? {
                /// The ID of the AWS account that owns the virtual interface.
                owner_account: string,
                /// The ID of the virtual interface.
                virtual_interface_id: string,
                /// The location of the connection.
                location: string,
                /// The ID of the connection.
                connection_id: string,
                /// The type of virtual interface. The possible values are `private` and
                /// `public`.
                virtual_interface_type: string,
                /// The name of the virtual interface assigned by the customer network.
                virtual_interface_name: string,
                /// The ID of the VLAN.
                vlan: int,
                /// The autonomous system (AS) number for Border Gateway Protocol (BGP)
                /// configuration.
                asn: int,
                /// The autonomous system number (ASN) for the Amazon side of the connection.
                amazon_side_asn: long,
                /// The authentication key for BGP configuration.
                auth_key: string,
                /// The IP address assigned to the Amazon interface.
                amazon_address: string,
                /// The IP address assigned to the customer interface.
                customer_address: string,
                /// The address family for the BGP peer.
                address_family: shape<crate::model::AddressFamily>,
                /// The state of the virtual interface.
                virtual_interface_state: shape<crate::model::VirtualInterfaceState>,
                /// The customer router configuration.
                customer_router_config: string,
                /// The maximum transmission unit (MTU), in bytes.
                mtu: int,
                /// Indicates whether jumbo frames (9001 MTU) are supported.
                jumbo_frame_capable: boolean,
                /// The ID of the virtual private gateway. Applies only to private virtual
                /// interfaces.
                virtual_gateway_id: string,
                /// The ID of the Direct Connect gateway.
                direct_connect_gateway_id: string,
                /// The routes to be advertised to the AWS network in this Region. Applies to
                /// public virtual interfaces.
                route_filter_prefixes: list<crate::model::RouteFilterPrefix>,
                /// The BGP peers configured on this virtual interface.
                bgp_peers: list<crate::model::BgpPeer>,
                /// The AWS Region where the virtual interface is located.
                region: string,
                /// The Direct Connect endpoint on which the virtual interface terminates.
                aws_device_v2: string,
                /// The tags associated with the virtual interface.
                tags: list<crate::model::Tag>,
            }
        }
    };
}

virtual_interface_shape! {
    /// Information about a virtual interface.
    pub struct VirtualInterface
}

shape! {
    /// Information about the virtual interface failover test.
    pub struct VirtualInterfaceTestHistory {
        /// The ID of the virtual interface failover test.
        test_id: string,
        /// The ID of the tested virtual interface.
        virtual_interface_id: string,
        /// The BGP peers that were put in the DOWN state as part of the virtual interface
        /// failover test.
        bgp_peers: list<String>,
        /// The status of the virtual interface failover test.
        status: string,
        /// The owner ID of the tested virtual interface.
        owner_account: string,
        /// The time that the virtual interface failover test ran in minutes.
        test_duration_in_minutes: int,
        /// The time that the virtual interface moves to the DOWN state.
        start_time: timestamp,
        /// The time that the virtual interface moves out of the DOWN state.
        end_time: timestamp,
    }
}

#[cfg(test)]
mod test {
    use crate::model::{
        AddressFamily, BgpPeer, Connection, ConnectionState, GatewayType, Location, Tag,
        VirtualInterface,
    };
    use pretty_assertions::assert_eq;
    use std::collections::hash_map::DefaultHasher;
    use std::convert::TryFrom;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn enum_strings_are_canonical() {
        assert_eq!(GatewayType::VirtualPrivateGateway.as_str(), "virtualPrivateGateway");
        assert_eq!(GatewayType::TransitGateway.to_string(), "transitGateway");
        assert_eq!(
            "transitGateway".parse::<GatewayType>(),
            Ok(GatewayType::TransitGateway)
        );
        assert_eq!(AddressFamily::values(), &["ipv4", "ipv6"]);
    }

    #[test]
    fn enum_parsing_is_case_sensitive() {
        let err = "TransitGateway"
            .parse::<GatewayType>()
            .expect_err("wrong case");
        assert!(!err.is_empty());
        assert_eq!(err.value(), "TransitGateway");
        let err = GatewayType::try_from("").expect_err("empty");
        assert!(err.is_empty());
    }

    #[test]
    fn builder_and_setters_agree() {
        let built = Tag::builder().key("env").value("prod").build();
        let set = Tag::builder()
            .set_key(Some("env".to_string()))
            .set_value(Some("prod".to_string()))
            .build();
        assert_eq!(built, set);
        assert_eq!(hash_of(&built), hash_of(&set));
        assert_eq!(built.key(), Some("env"));
    }

    #[test]
    fn changing_one_member_breaks_equality() {
        let peer = BgpPeer::builder()
            .asn(65000)
            .address_family(AddressFamily::Ipv4)
            .build();
        let other = BgpPeer::builder()
            .asn(65001)
            .address_family(AddressFamily::Ipv4)
            .build();
        assert_ne!(peer, other);
    }

    #[test]
    fn list_members_append_and_normalize() {
        let location = Location::builder()
            .available_port_speeds("1Gbps")
            .available_port_speeds("10Gbps")
            .build();
        assert_eq!(location.available_port_speeds(), &["1Gbps", "10Gbps"]);

        let cleared = Location::builder()
            .available_port_speeds("1Gbps")
            .set_available_port_speeds(Some(vec![]))
            .build();
        assert_eq!(cleared.available_port_speeds, None);
        assert!(cleared.available_port_speeds().is_empty());
        assert_eq!(cleared, Location::builder().build());
    }

    #[test]
    fn nested_lists_keep_order() {
        let vif = VirtualInterface::builder()
            .bgp_peers(BgpPeer::builder().bgp_peer_id("peer-1").build())
            .bgp_peers(BgpPeer::builder().bgp_peer_id("peer-2").build())
            .build();
        let ids: Vec<_> = vif.bgp_peers().iter().filter_map(|p| p.bgp_peer_id()).collect();
        assert_eq!(ids, vec!["peer-1", "peer-2"]);
    }

    #[test]
    fn debug_includes_members() {
        let connection = Connection::builder()
            .connection_id("dxcon-fg5678gh")
            .connection_state(ConnectionState::Available)
            .build();
        let debug = format!("{:?}", connection);
        assert!(debug.contains("dxcon-fg5678gh"));
        assert!(debug.contains("Available"));
    }
}
