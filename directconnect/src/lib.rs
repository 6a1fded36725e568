/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Data model for AWS Direct Connect.
//!
//! AWS Direct Connect links your internal network to an AWS Direct Connect location over a
//! standard Ethernet fiber-optic cable. This crate holds the request and response shapes of
//! the API, the errors it models, and the configuration needed to locate its endpoints.
//!
//! ```rust
//! use directconnect::input::CreateConnectionInput;
//! use directconnect::model::Tag;
//!
//! let input = CreateConnectionInput::builder()
//!     .location("EqDC2")
//!     .bandwidth("1Gbps")
//!     .connection_name("primary")
//!     .tags(Tag::builder().key("env").value("prod").build())
//!     .build();
//! assert_eq!(input.tags().len(), 1);
//! ```

#![warn(missing_debug_implementations, rust_2018_idioms)]

#[macro_use]
mod macros;

#[macro_use]
pub mod model;

pub mod config;
pub mod error;
pub mod input;
pub mod operation;
pub mod output;
#[cfg(feature = "serde-deserialize")]
mod serde_impl;

pub use crate::config::Config;
pub use crate::error::Error;
pub use aws_types::region::Region;
pub use smithy_types::{Blob, Instant};
