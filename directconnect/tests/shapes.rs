/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use directconnect::input::{
    CreateDirectConnectGatewayAssociationProposalInput, CreatePrivateVirtualInterfaceInput,
    DescribeTagsInput,
};
use directconnect::model::{
    AddressFamily, AssociatedGateway, BgpPeer, BgpPeerState, BgpStatus, Connection,
    ConnectionState, GatewayType, HasLogicalRedundancy, Interconnect, InterconnectState, Lag,
    LagState, Loa, LoaContentType, NewPrivateVirtualInterface, RouteFilterPrefix, Tag,
    VirtualInterface, VirtualInterfaceState, VirtualInterfaceTestHistory,
};
use directconnect::output::{
    AllocateConnectionOnInterconnectOutput, AllocateHostedConnectionOutput,
    AllocatePrivateVirtualInterfaceOutput, AllocatePublicVirtualInterfaceOutput,
    AssociateConnectionWithLagOutput, AssociateHostedConnectionOutput,
    AssociateVirtualInterfaceOutput, CreateConnectionOutput, CreateInterconnectOutput,
    CreateLagOutput, CreatePrivateVirtualInterfaceOutput, CreatePublicVirtualInterfaceOutput,
    DeleteConnectionOutput, DeleteLagOutput, DescribeLoaOutput,
    DisassociateConnectionFromLagOutput, UpdateLagOutput, UpdateVirtualInterfaceAttributesOutput,
};
use directconnect::{Blob, Instant};
use pretty_assertions::assert_eq;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn tag(key: &str, value: &str) -> Tag {
    Tag::builder().key(key).value(value).build()
}

fn connection() -> Connection {
    Connection::builder()
        .owner_account("123456789012")
        .connection_id("dxcon-fg5678gh")
        .connection_name("primary")
        .connection_state(ConnectionState::Available)
        .region("us-east-1")
        .location("EqDC2")
        .bandwidth("1Gbps")
        .vlan(101)
        .partner_name("Equinix")
        .loa_issue_time(Instant::from_epoch_seconds(1_573_000_000))
        .lag_id("dxlag-ffrz71kw")
        .aws_device("EqDC2-123h49s71dabc")
        .jumbo_frame_capable(true)
        .aws_device_v2("EqDC2-2bmxvn8h5tt4p")
        .has_logical_redundancy(HasLogicalRedundancy::Yes)
        .tags(tag("env", "prod"))
        .provider_name("Equinix")
        .build()
}

fn virtual_interface() -> VirtualInterface {
    VirtualInterface::builder()
        .owner_account("123456789012")
        .virtual_interface_id("dxvif-ffhhk74f")
        .virtual_interface_type("private")
        .vlan(101)
        .asn(65000)
        .amazon_side_asn(64512)
        .address_family(AddressFamily::Ipv4)
        .virtual_interface_state(VirtualInterfaceState::Available)
        .mtu(9001)
        .jumbo_frame_capable(true)
        .route_filter_prefixes(RouteFilterPrefix::builder().cidr("203.0.113.0/24").build())
        .bgp_peers(
            BgpPeer::builder()
                .bgp_peer_id("dxpeer-fg5678gh")
                .asn(65000)
                .bgp_peer_state(BgpPeerState::Available)
                .bgp_status(BgpStatus::Up)
                .build(),
        )
        .tags(tag("team", "network"))
        .build()
}

fn lag() -> Lag {
    Lag::builder()
        .connections_bandwidth("10Gbps")
        .number_of_connections(2)
        .lag_id("dxlag-ffrz71kw")
        .lag_state(LagState::Pending)
        .minimum_links(1)
        .connections(connection())
        .allows_hosted_connections(false)
        .build()
}

#[test]
fn identical_members_are_equal_and_hash_alike() {
    assert_eq!(connection(), connection());
    assert_eq!(hash_of(&connection()), hash_of(&connection()));
    assert_eq!(hash_of(&virtual_interface()), hash_of(&virtual_interface()));

    let mut seen = HashSet::new();
    assert!(seen.insert(lag()));
    assert!(!seen.insert(lag()));
}

fn assert_each_edit_breaks_equality<T>(base: fn() -> T, edits: &[(&str, fn(&mut T))])
where
    T: PartialEq + Hash + std::fmt::Debug,
{
    for (member, edit) in edits {
        let mut changed = base();
        edit(&mut changed);
        assert_ne!(base(), changed, "changing `{}` should break equality", member);
        assert_ne!(
            hash_of(&base()),
            hash_of(&changed),
            "changing `{}` should change the hash",
            member
        );
    }
}

#[test]
fn any_connection_member_change_breaks_equality() {
    assert_each_edit_breaks_equality::<Connection>(
        connection,
        &[
            ("owner_account", |c| c.owner_account = Some("210987654321".into())),
            ("connection_id", |c| c.connection_id = Some("dxcon-other".into())),
            ("connection_name", |c| c.connection_name = None),
            ("connection_state", |c| c.connection_state = Some(ConnectionState::Down)),
            ("region", |c| c.region = Some("us-west-2".into())),
            ("location", |c| c.location = Some("EqSe2".into())),
            ("bandwidth", |c| c.bandwidth = Some("10Gbps".into())),
            ("vlan", |c| c.vlan = Some(102)),
            ("partner_name", |c| c.partner_name = None),
            ("loa_issue_time", |c| c.loa_issue_time = Some(Instant::from_epoch_seconds(0))),
            ("lag_id", |c| c.lag_id = None),
            ("aws_device", |c| c.aws_device = Some("EqDC2-other".into())),
            ("jumbo_frame_capable", |c| c.jumbo_frame_capable = Some(false)),
            ("aws_device_v2", |c| c.aws_device_v2 = None),
            ("has_logical_redundancy", |c| {
                c.has_logical_redundancy = Some(HasLogicalRedundancy::No)
            }),
            ("tags", |c| c.tags = Some(vec![tag("env", "dev")])),
            ("provider_name", |c| c.provider_name = None),
        ],
    );
}

#[test]
fn any_virtual_interface_member_change_breaks_equality() {
    assert_each_edit_breaks_equality::<VirtualInterface>(
        virtual_interface,
        &[
            ("owner_account", |v| v.owner_account = None),
            ("virtual_interface_id", |v| v.virtual_interface_id = Some("dxvif-other".into())),
            ("location", |v| v.location = Some("EqDC2".into())),
            ("connection_id", |v| v.connection_id = Some("dxcon-fg5678gh".into())),
            ("virtual_interface_type", |v| v.virtual_interface_type = Some("public".into())),
            ("virtual_interface_name", |v| v.virtual_interface_name = Some("vif".into())),
            ("vlan", |v| v.vlan = Some(102)),
            ("asn", |v| v.asn = Some(65001)),
            ("amazon_side_asn", |v| v.amazon_side_asn = Some(64513)),
            ("auth_key", |v| v.auth_key = Some("secret".into())),
            ("amazon_address", |v| v.amazon_address = Some("169.254.0.1/30".into())),
            ("customer_address", |v| v.customer_address = Some("169.254.0.2/30".into())),
            ("address_family", |v| v.address_family = Some(AddressFamily::Ipv6)),
            ("virtual_interface_state", |v| {
                v.virtual_interface_state = Some(VirtualInterfaceState::Down)
            }),
            ("customer_router_config", |v| v.customer_router_config = Some("<xml/>".into())),
            ("mtu", |v| v.mtu = Some(1500)),
            ("jumbo_frame_capable", |v| v.jumbo_frame_capable = Some(false)),
            ("virtual_gateway_id", |v| v.virtual_gateway_id = Some("vgw-1".into())),
            ("direct_connect_gateway_id", |v| v.direct_connect_gateway_id = Some("dxgw-1".into())),
            ("route_filter_prefixes", |v| v.route_filter_prefixes = None),
            ("bgp_peers", |v| {
                v.bgp_peers = Some(vec![BgpPeer::builder().bgp_peer_id("dxpeer-other").build()])
            }),
            ("region", |v| v.region = Some("us-east-1".into())),
            ("aws_device_v2", |v| v.aws_device_v2 = Some("EqDC2-2bmxvn8h5tt4p".into())),
            ("tags", |v| v.tags = None),
        ],
    );
}

#[test]
fn builder_and_setters_populate_the_same_shape() {
    let chained = NewPrivateVirtualInterface::builder()
        .virtual_interface_name("vif-1")
        .vlan(300)
        .asn(65010)
        .mtu(1500)
        .address_family(AddressFamily::Ipv6)
        .virtual_gateway_id("vgw-0123456789abcdef0")
        .tags(tag("a", "1"))
        .tags(tag("b", "2"))
        .build();
    let set = NewPrivateVirtualInterface::builder()
        .set_virtual_interface_name(Some("vif-1".to_string()))
        .set_vlan(Some(300))
        .set_asn(Some(65010))
        .set_mtu(Some(1500))
        .set_address_family(Some(AddressFamily::Ipv6))
        .set_virtual_gateway_id(Some("vgw-0123456789abcdef0".to_string()))
        .set_tags(Some(vec![tag("a", "1"), tag("b", "2")]))
        .build();
    assert_eq!(chained, set);
    assert_eq!(hash_of(&chained), hash_of(&set));

    let input = CreatePrivateVirtualInterfaceInput::builder()
        .connection_id("dxcon-fg5678gh")
        .new_private_virtual_interface(chained.clone())
        .build();
    assert_eq!(input.new_private_virtual_interface(), Some(&chained));
}

#[test]
fn unset_members_read_as_absent() {
    let empty = Connection::builder().build();
    assert_eq!(empty, Connection::default());
    assert_eq!(empty.connection_id(), None);
    assert_eq!(empty.vlan(), None);
    assert_eq!(empty.loa_issue_time(), None);
    assert!(empty.tags().is_empty());
}

#[test]
fn list_members_round_trip_and_normalize() {
    let prefixes = vec![
        RouteFilterPrefix::builder().cidr("10.0.0.0/16").build(),
        RouteFilterPrefix::builder().cidr("10.1.0.0/16").build(),
    ];
    let input = CreateDirectConnectGatewayAssociationProposalInput::builder()
        .set_add_allowed_prefixes_to_direct_connect_gateway(Some(prefixes.clone()))
        .build();
    assert_eq!(input.add_allowed_prefixes_to_direct_connect_gateway(), &prefixes[..]);

    let from_empty = DescribeTagsInput::builder().set_resource_arns(Some(vec![])).build();
    let from_none = DescribeTagsInput::builder().set_resource_arns(None).build();
    let untouched = DescribeTagsInput::builder().build();
    assert_eq!(from_empty, from_none);
    assert_eq!(from_none, untouched);
    assert_eq!(from_empty.resource_arns, None);
    assert_eq!(hash_of(&from_empty), hash_of(&untouched));

    let builder = DescribeTagsInput::builder().resource_arns("arn:1");
    assert_eq!(builder.get_resource_arns(), &Some(vec!["arn:1".to_string()]));
}

#[test]
fn keyword_members_use_raw_identifiers() {
    let gateway = AssociatedGateway::builder()
        .id("tgw-0123456789abcdef0")
        .r#type(GatewayType::TransitGateway)
        .owner_account("123456789012")
        .region("us-west-2")
        .build();
    assert_eq!(gateway.r#type(), Some(&GatewayType::TransitGateway));
    let via_setter = AssociatedGateway::builder()
        .id("tgw-0123456789abcdef0")
        .set_type(Some(GatewayType::TransitGateway))
        .owner_account("123456789012")
        .region("us-west-2")
        .build();
    assert_eq!(gateway, via_setter);
}

#[test]
fn connection_outputs_mirror_connection() {
    let c = connection();
    assert_eq!(Connection::from(AllocateConnectionOnInterconnectOutput::from(c.clone())), c);
    assert_eq!(Connection::from(AllocateHostedConnectionOutput::from(c.clone())), c);
    assert_eq!(Connection::from(AssociateConnectionWithLagOutput::from(c.clone())), c);
    assert_eq!(Connection::from(AssociateHostedConnectionOutput::from(c.clone())), c);
    assert_eq!(Connection::from(CreateConnectionOutput::from(c.clone())), c);
    assert_eq!(Connection::from(DeleteConnectionOutput::from(c.clone())), c);
    assert_eq!(Connection::from(DisassociateConnectionFromLagOutput::from(c.clone())), c);

    let output = DeleteConnectionOutput::from(c.clone());
    assert_eq!(output.connection_state(), c.connection_state());
    assert_eq!(output.tags(), c.tags());
}

#[test]
fn virtual_interface_outputs_mirror_virtual_interface() {
    let vif = virtual_interface();
    let round_trips: Vec<VirtualInterface> = vec![
        AllocatePrivateVirtualInterfaceOutput::from(vif.clone()).into(),
        AllocatePublicVirtualInterfaceOutput::from(vif.clone()).into(),
        AssociateVirtualInterfaceOutput::from(vif.clone()).into(),
        CreatePrivateVirtualInterfaceOutput::from(vif.clone()).into(),
        CreatePublicVirtualInterfaceOutput::from(vif.clone()).into(),
        UpdateVirtualInterfaceAttributesOutput::from(vif.clone()).into(),
    ];
    for round_trip in round_trips {
        assert_eq!(round_trip, vif);
    }
}

#[test]
fn interconnect_lag_and_loa_outputs_mirror_their_shapes() {
    let interconnect = Interconnect::builder()
        .interconnect_id("dxcon-abc123")
        .interconnect_state(InterconnectState::Requested)
        .tags(tag("env", "prod"))
        .build();
    assert_eq!(
        Interconnect::from(CreateInterconnectOutput::from(interconnect.clone())),
        interconnect
    );

    for round_trip in vec![
        Lag::from(CreateLagOutput::from(lag())),
        Lag::from(DeleteLagOutput::from(lag())),
        Lag::from(UpdateLagOutput::from(lag())),
    ] {
        assert_eq!(round_trip, lag());
    }

    let loa = Loa::builder()
        .loa_content(Blob::new(&b"%PDF-1.4"[..]))
        .loa_content_type(LoaContentType::ApplicationPdf)
        .build();
    let output = DescribeLoaOutput::from(loa.clone());
    assert_eq!(output.loa_content().map(|blob| blob.len()), Some(8));
    assert_eq!(Loa::from(output), loa);
}

#[test]
fn timestamps_are_instants() {
    let history = VirtualInterfaceTestHistory::builder()
        .test_id("ff6e3ae4-6cbd-4d92-b7dc-7f3a5c1e4b7c")
        .bgp_peers("dxpeer-fg5678gh")
        .status("Completed")
        .test_duration_in_minutes(5)
        .start_time(Instant::from_epoch_seconds(1_600_000_000))
        .end_time(Instant::from_epoch_seconds(1_600_000_300))
        .build();
    let start = history.start_time().expect("set");
    let end = history.end_time().expect("set");
    assert_eq!(end.epoch_seconds() - start.epoch_seconds(), 300);
    assert!(start < end);
}

#[test]
fn debug_output_names_the_shape() {
    let debug = format!("{:?}", tag("env", "prod"));
    assert!(debug.starts_with("Tag {"));
    assert!(debug.contains(r#"key: Some("env")"#));
}

#[cfg(all(feature = "serde-serialize", feature = "serde-deserialize"))]
mod json {
    use super::{connection, hash_of, tag};
    use directconnect::input::{
        CreateBgpPeerInput, CreateDirectConnectGatewayAssociationProposalInput,
    };
    use directconnect::model::{AssociatedGateway, Connection, GatewayType, Loa, NewBgpPeer};
    use directconnect::Blob;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn members_use_wire_names() {
        let input = CreateBgpPeerInput::builder()
            .virtual_interface_id("dxvif-ffhhk74f")
            .new_bgp_peer(NewBgpPeer::builder().asn(65000).build())
            .build();
        assert_eq!(
            serde_json::to_value(&input).expect("serializes"),
            json!({"virtualInterfaceId": "dxvif-ffhhk74f", "newBGPPeer": {"asn": 65000}})
        );

        let gateway = AssociatedGateway::builder()
            .r#type(GatewayType::VirtualPrivateGateway)
            .build();
        assert_eq!(
            serde_json::to_value(&gateway).expect("serializes"),
            json!({"type": "virtualPrivateGateway"})
        );
    }

    #[test]
    fn shapes_survive_json() {
        let original = connection();
        let encoded = serde_json::to_string(&original).expect("serializes");
        assert!(encoded.contains(r#""loaIssueTime":1573000000"#));
        assert!(encoded.contains(r#""tags":[{"key":"env","value":"prod"}]"#));
        let decoded: Connection = serde_json::from_str(&encoded).expect("deserializes");
        assert_eq!(decoded, original);
    }

    #[test]
    fn blobs_are_base64() {
        let loa = Loa::builder().loa_content(Blob::new(&b"LOA"[..])).build();
        assert_eq!(
            serde_json::to_value(&loa).expect("serializes"),
            json!({"loaContent": "TE9B"})
        );
    }

    #[test]
    fn empty_json_lists_match_unset_members() {
        let from_json: Connection = serde_json::from_str(r#"{"tags": []}"#).expect("valid");
        assert_eq!(from_json.tags, None);
        assert_eq!(from_json, Connection::default());
        assert_eq!(hash_of(&from_json), hash_of(&Connection::builder().build()));

        let proposal: CreateDirectConnectGatewayAssociationProposalInput = serde_json::from_str(
            r#"{"addAllowedPrefixesToDirectConnectGateway": [], "directConnectGatewayId": "dxgw-1"}"#,
        )
        .expect("valid");
        assert_eq!(
            proposal,
            CreateDirectConnectGatewayAssociationProposalInput::builder()
                .direct_connect_gateway_id("dxgw-1")
                .set_add_allowed_prefixes_to_direct_connect_gateway(Some(vec![]))
                .build()
        );
    }

    #[test]
    fn missing_and_unknown_values() {
        let empty: Connection = serde_json::from_str("{}").expect("every member is optional");
        assert_eq!(empty, Connection::default());

        let err = serde_json::from_str::<Connection>(r#"{"connectionState": "AVAILABLE"}"#)
            .expect_err("enum values are case-sensitive");
        assert!(err.to_string().contains("ConnectionState"));

        let tagged: Connection =
            serde_json::from_str(r#"{"tags": [{"key": "env", "value": "prod"}]}"#).expect("valid");
        assert_eq!(tagged.tags(), &[tag("env", "prod")]);
    }
}
