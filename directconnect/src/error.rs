/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Errors modeled by the service, and the error returned when a string is not a valid
//! enumeration value.

use smithy_types::retry::{ErrorKind, ProvideErrorKind};
use std::fmt;

/// A string was not one of the canonical values of an enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariantError {
    enum_name: &'static str,
    value: String,
    expected: &'static [&'static str],
}

impl UnknownVariantError {
    pub(crate) fn new(
        enum_name: &'static str,
        value: impl Into<String>,
        expected: &'static [&'static str],
    ) -> Self {
        Self {
            enum_name,
            value: value.into(),
            expected,
        }
    }

    /// Name of the enumeration that failed to parse
    pub fn enum_name(&self) -> &'static str {
        self.enum_name
    }

    /// The rejected input
    pub fn value(&self) -> &str {
        &self.value
    }

    /// True when the rejected input was the empty string
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Display for UnknownVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "{} value cannot be empty", self.enum_name)?;
        } else {
            write!(f, r#"unknown {} value "{}""#, self.enum_name, self.value)?;
        }
        write!(f, ", expected one of: {}", self.expected.join(", "))
    }
}

impl std::error::Error for UnknownVariantError {}

shape! {
    /// One or more parameters are not valid.
    pub struct DirectConnectClientException {
        message: string,
    }
}

shape! {
    /// A server-side error occurred.
    pub struct DirectConnectServerException {
        message: string,
    }
}

shape! {
    /// A tag key was specified more than once.
    pub struct DuplicateTagKeysException {
        message: string,
    }
}

shape! {
    /// You have reached the limit on the number of tags that can be assigned.
    pub struct TooManyTagsException {
        message: string,
    }
}

macro_rules! modeled_exceptions {
    ($($exception:ident),+ $(,)?) => {
        $(
            impl $exception {
                /// The error code the service returns for this exception
                pub const CODE: &'static str = stringify!($exception);
            }

            impl fmt::Display for $exception {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", Self::CODE)?;
                    if let Some(message) = &self.message {
                        write!(f, ": {}", message)?;
                    }
                    Ok(())
                }
            }

            impl std::error::Error for $exception {}

            impl From<$exception> for Error {
                fn from(err: $exception) -> Self {
                    Error::$exception(err)
                }
            }
        )+

        /// Error codes of every exception the service models
        pub const MODELED_ERROR_CODES: &[&str] = &[$( stringify!($exception) ),+];

        /// An error returned by AWS Direct Connect
        #[non_exhaustive]
        #[derive(Clone, PartialEq, Debug)]
        pub enum Error {
            $(
                $exception($exception),
            )+
            /// An error code this version of the model does not know about
            Unhandled(Unhandled),
        }

        impl Error {
            /// Maps an error code returned by the service to its modeled error
            ///
            /// Codes may carry a namespace (`com.amazonaws.directconnect#`) or a trailing
            /// `:`-separated suffix; both are ignored.
            pub fn from_code(code: &str, message: Option<String>) -> Self {
                let code = sanitize_error_code(code);
                match code {
                    $(
                        stringify!($exception) => {
                            $exception::builder().set_message(message).build().into()
                        }
                    )+
                    _ => {
                        tracing::debug!(code = code, "unrecognized error code");
                        Error::Unhandled(Unhandled {
                            code: code.to_owned(),
                            message,
                        })
                    }
                }
            }

            /// The error code, as returned by the service
            pub fn code(&self) -> &str {
                match self {
                    $( Error::$exception(_) => $exception::CODE, )+
                    Error::Unhandled(inner) => &inner.code,
                }
            }

            pub fn message(&self) -> Option<&str> {
                match self {
                    $( Error::$exception(inner) => inner.message(), )+
                    Error::Unhandled(inner) => inner.message.as_deref(),
                }
            }
        }

        impl fmt::Display for Error {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $( Error::$exception(inner) => fmt::Display::fmt(inner, f), )+
                    Error::Unhandled(inner) => fmt::Display::fmt(inner, f),
                }
            }
        }

        impl std::error::Error for Error {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                match self {
                    $( Error::$exception(inner) => Some(inner), )+
                    Error::Unhandled(_) => None,
                }
            }
        }
    };
}

modeled_exceptions!(
    DirectConnectClientException,
    DirectConnectServerException,
    DuplicateTagKeysException,
    TooManyTagsException,
);

impl Error {
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(self, Error::DirectConnectClientException(_))
    }

    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(self, Error::DirectConnectServerException(_))
    }

    pub fn is_duplicate_tag_keys_exception(&self) -> bool {
        matches!(self, Error::DuplicateTagKeysException(_))
    }

    pub fn is_too_many_tags_exception(&self) -> bool {
        matches!(self, Error::TooManyTagsException(_))
    }
}

impl ProvideErrorKind for Error {
    fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Error::DirectConnectServerException(_) => Some(ErrorKind::ServerError),
            Error::DirectConnectClientException(_)
            | Error::DuplicateTagKeysException(_)
            | Error::TooManyTagsException(_) => Some(ErrorKind::ClientError),
            Error::Unhandled(_) => None,
        }
    }

    fn code(&self) -> Option<&str> {
        Some(Error::code(self))
    }
}

/// An error whose code is not modeled
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Unhandled {
    code: String,
    message: Option<String>,
}

impl Unhandled {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for Unhandled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unhandled error ({})", self.code)?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Unhandled {}

/// Strips the namespace prefix and any `:`-separated suffix from an error code
fn sanitize_error_code(code: &str) -> &str {
    let code = code.split(':').next().unwrap_or(code);
    match code.rfind('#') {
        Some(idx) => &code[idx + 1..],
        None => code,
    }
}
