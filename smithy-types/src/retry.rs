/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Classification of service errors.

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum ErrorKind {
    /// A connection level error such as a socket timeout, socket connect error,
    /// TLS negotiation timeout etc.
    TransientError,

    /// An error where the server explicitly told the client to back off, such as a 429 or 503 HTTP error.
    ThrottlingError,

    /// Server error that isn't explicitly throttling.
    ServerError,

    /// The request was rejected because of something the caller sent.
    ClientError,
}

impl ErrorKind {
    /// Server-side failures may succeed if the same request is sent again.
    pub fn is_server_side(&self) -> bool {
        matches!(
            self,
            ErrorKind::TransientError | ErrorKind::ThrottlingError | ErrorKind::ServerError
        )
    }
}

pub trait ProvideErrorKind {
    /// Returns the `ErrorKind`.
    ///
    /// If the error kind cannot be determined (e.g. the error is unmodeled), return `None`.
    fn error_kind(&self) -> Option<ErrorKind>;

    /// Returns the `code` for this error if one exists
    fn code(&self) -> Option<&str>;
}

#[cfg(test)]
mod test {
    use super::ErrorKind;

    #[test]
    fn client_errors_are_not_server_side() {
        assert!(!ErrorKind::ClientError.is_server_side());
        assert!(ErrorKind::ServerError.is_server_side());
        assert!(ErrorKind::ThrottlingError.is_server_side());
    }
}
