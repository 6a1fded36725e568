/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Macros that stamp out the structure shared by every shape of the service model.
//!
//! A shape is declared as a list of members, each with a member kind:
//!
//! | kind        | stored as               | getter returns     |
//! |-------------|-------------------------|--------------------|
//! | `string`    | `String`                | `Option<&str>`     |
//! | `int`       | `i32`                   | `Option<i32>`      |
//! | `long`      | `i64`                   | `Option<i64>`      |
//! | `boolean`   | `bool`                  | `Option<bool>`     |
//! | `timestamp` | `Instant`               | `Option<&Instant>` |
//! | `blob`      | `Blob`                  | `Option<&Blob>`    |
//! | `shape<T>`  | `T`                     | `Option<&T>`       |
//! | `list<T>`   | `Vec<T>`, never empty   | `&[T]`             |
//!
//! Members whose wire name is not the camelCase form of the field name carry it in
//! parentheses: `new_bgp_peer("newBGPPeer"): shape<NewBgpPeer>`.

/// Rust type stored for a member kind
macro_rules! member_type {
    (string) => { String };
    (int) => { i32 };
    (long) => { i64 };
    (boolean) => { bool };
    (timestamp) => { smithy_types::Instant };
    (blob) => { smithy_types::Blob };
    (shape<$t:ty>) => { $t };
    (list<$t:ty>) => { Vec<$t> };
}

/// Accessor on the built shape. Must be called from within an `impl` block.
macro_rules! member_getter {
    (@copy $(#[$meta:meta])* $field:ident: $t:ty) => {
        $(#[$meta])*
        pub fn $field(&self) -> Option<$t> {
            self.$field
        }
    };
    (@ref $(#[$meta:meta])* $field:ident: $t:ty) => {
        $(#[$meta])*
        pub fn $field(&self) -> Option<&$t> {
            self.$field.as_ref()
        }
    };
    ($(#[$meta:meta])* $field:ident: string) => {
        $(#[$meta])*
        pub fn $field(&self) -> Option<&str> {
            self.$field.as_deref()
        }
    };
    ($(#[$meta:meta])* $field:ident: int) => {
        member_getter!(@copy $(#[$meta])* $field: i32);
    };
    ($(#[$meta:meta])* $field:ident: long) => {
        member_getter!(@copy $(#[$meta])* $field: i64);
    };
    ($(#[$meta:meta])* $field:ident: boolean) => {
        member_getter!(@copy $(#[$meta])* $field: bool);
    };
    ($(#[$meta:meta])* $field:ident: timestamp) => {
        member_getter!(@ref $(#[$meta])* $field: smithy_types::Instant);
    };
    ($(#[$meta:meta])* $field:ident: blob) => {
        member_getter!(@ref $(#[$meta])* $field: smithy_types::Blob);
    };
    ($(#[$meta:meta])* $field:ident: shape<$t:ty>) => {
        member_getter!(@ref $(#[$meta])* $field: $t);
    };
    ($(#[$meta:meta])* $field:ident: list<$t:ty>) => {
        $(#[$meta])*
        pub fn $field(&self) -> &[$t] {
            self.$field.as_deref().unwrap_or_default()
        }
    };
}

/// Builder methods for a member: `field`, `set_field` and `get_field`.
/// Must be called from within an `impl` block.
macro_rules! member_setter {
    (@accessors $(#[$meta:meta])* $field:ident: $t:ty) => {
        paste::paste! {
            $(#[$meta])*
            pub fn [<set_ $field>](mut self, input: Option<$t>) -> Self {
                self.$field = input;
                self
            }

            pub fn [<get_ $field>](&self) -> &Option<$t> {
                &self.$field
            }
        }
    };
    (@value $(#[$meta:meta])* $field:ident: $t:ty) => {
        $(#[$meta])*
        pub fn $field(mut self, input: $t) -> Self {
            self.$field = Some(input);
            self
        }

        member_setter!(@accessors $(#[$meta])* $field: $t);
    };
    (@into $(#[$meta:meta])* $field:ident: $t:ty) => {
        $(#[$meta])*
        pub fn $field(mut self, input: impl Into<$t>) -> Self {
            self.$field = Some(input.into());
            self
        }

        member_setter!(@accessors $(#[$meta])* $field: $t);
    };
    ($(#[$meta:meta])* $field:ident: string) => {
        member_setter!(@into $(#[$meta])* $field: String);
    };
    ($(#[$meta:meta])* $field:ident: int) => {
        member_setter!(@value $(#[$meta])* $field: i32);
    };
    ($(#[$meta:meta])* $field:ident: long) => {
        member_setter!(@value $(#[$meta])* $field: i64);
    };
    ($(#[$meta:meta])* $field:ident: boolean) => {
        member_setter!(@value $(#[$meta])* $field: bool);
    };
    ($(#[$meta:meta])* $field:ident: timestamp) => {
        member_setter!(@value $(#[$meta])* $field: smithy_types::Instant);
    };
    ($(#[$meta:meta])* $field:ident: blob) => {
        member_setter!(@into $(#[$meta])* $field: smithy_types::Blob);
    };
    ($(#[$meta:meta])* $field:ident: shape<$t:ty>) => {
        member_setter!(@into $(#[$meta])* $field: $t);
    };
    ($(#[$meta:meta])* $field:ident: list<$t:ty>) => {
        paste::paste! {
            $(#[$meta])*
            ///
            /// Appends an item, creating the list on first use.
            pub fn $field(mut self, input: impl Into<$t>) -> Self {
                self.$field.get_or_insert_with(Vec::new).push(input.into());
                self
            }

            $(#[$meta])*
            ///
            /// An empty list is stored as absent.
            pub fn [<set_ $field>](mut self, input: Option<Vec<$t>>) -> Self {
                self.$field = input.filter(|items| !items.is_empty());
                self
            }

            pub fn [<get_ $field>](&self) -> &Option<Vec<$t>> {
                &self.$field
            }
        }
    };
}

/// Define a shape: the struct, its accessors, and a builder in a module named after it.
///
/// `pub struct Output as crate::model::Shape { .. }` additionally converts losslessly between
/// two shapes with the same members.
macro_rules! shape {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident $(($wire:literal))? : $kind:ident $(<$inner:ty>)?
            ),* $(,)?
        }
    ) => {
        paste::paste! {
            $(#[$meta])*
            #[non_exhaustive]
            #[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
            #[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
            #[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
            #[cfg_attr(
                any(feature = "serde-serialize", feature = "serde-deserialize"),
                serde(rename_all = "camelCase")
            )]
            #[cfg_attr(feature = "serde-deserialize", serde(default))]
            pub struct $name {
                $(
                    $(#[$fmeta])*
                    $(#[cfg_attr(
                        any(feature = "serde-serialize", feature = "serde-deserialize"),
                        serde(rename = $wire)
                    )])?
                    #[cfg_attr(
                        feature = "serde-serialize",
                        serde(skip_serializing_if = "Option::is_none")
                    )]
                    #[cfg_attr(
                        feature = "serde-deserialize",
                        serde(deserialize_with = "crate::serde_impl::deserialize_member")
                    )]
                    pub $field: Option<member_type!($kind $(<$inner>)?)>,
                )*
            }

            #[cfg(feature = "serde-deserialize")]
            impl crate::serde_impl::Member for $name {}

            impl $name {
                $(
                    member_getter!($(#[$fmeta])* $field: $kind $(<$inner>)?);
                )*

                #[doc = concat!("Creates a new builder-style object to manufacture [`", stringify!($name), "`]")]
                pub fn builder() -> [<$name:snake>]::Builder {
                    [<$name:snake>]::Builder::default()
                }
            }

            #[doc = concat!("See [`", stringify!($name), "`](super::", stringify!($name), ")")]
            pub mod [<$name:snake>] {
                #[allow(unused_imports)]
                use super::*;

                #[doc = concat!("A builder for [`", stringify!($name), "`](super::", stringify!($name), ")")]
                #[derive(Clone, PartialEq, Debug, Default)]
                pub struct Builder {
                    $(
                        $field: Option<member_type!($kind $(<$inner>)?)>,
                    )*
                }

                impl Builder {
                    $(
                        member_setter!($(#[$fmeta])* $field: $kind $(<$inner>)?);
                    )*

                    #[doc = concat!("Consumes the builder and constructs a [`", stringify!($name), "`](super::", stringify!($name), ")")]
                    pub fn build(self) -> super::$name {
                        super::$name {
                            $(
                                $field: self.$field,
                            )*
                        }
                    }
                }
            }
        }
    };
    (
        $(#[$meta:meta])*
        pub struct $name:ident as $mirror:path {
            $(
                $(#[$fmeta:meta])*
                $field:ident $(($wire:literal))? : $kind:ident $(<$inner:ty>)?
            ),* $(,)?
        }
    ) => {
        shape! {
            $(#[$meta])*
            pub struct $name {
                $(
                    $(#[$fmeta])*
                    $field $(($wire))? : $kind $(<$inner>)?,
                )*
            }
        }

        impl From<$mirror> for $name {
            fn from(value: $mirror) -> Self {
                Self {
                    $(
                        $field: value.$field,
                    )*
                }
            }
        }

        impl From<$name> for $mirror {
            fn from(value: $name) -> Self {
                Self {
                    $(
                        $field: value.$field,
                    )*
                }
            }
        }
    };
}

/// Define a closed enumeration keyed by its canonical wire strings.
///
/// Parsing is strict and case-sensitive: any string other than a canonical value is rejected
/// with an [`UnknownVariantError`](crate::error::UnknownVariantError).
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Returns the canonical string for this value
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $value, )+
                }
            }

            /// Returns every canonical string, in declaration order
            pub fn values() -> &'static [&'static str] {
                &[$( $value ),+]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::error::UnknownVariantError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $value => Ok($name::$variant), )+
                    other => Err(crate::error::UnknownVariantError::new(
                        stringify!($name),
                        other,
                        $name::values(),
                    )),
                }
            }
        }

        impl std::convert::TryFrom<&str> for $name {
            type Error = crate::error::UnknownVariantError;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        #[cfg(feature = "serde-serialize")]
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        #[cfg(feature = "serde-deserialize")]
        impl crate::serde_impl::Member for $name {}

        #[cfg(feature = "serde-deserialize")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <String as serde::Deserialize>::deserialize(deserializer)?;
                value.parse().map_err(<D::Error as serde::de::Error>::custom)
            }
        }
    };
}
