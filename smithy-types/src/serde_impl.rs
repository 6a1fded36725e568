/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Blobs travel as base64 strings and instants as fractional epoch seconds, matching the
//! JSON protocols the models are exchanged over.

#[cfg(feature = "serde-serialize")]
mod ser {
    use crate::{Blob, Instant};
    use serde::{Serialize, Serializer};

    impl Serialize for Blob {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&base64::encode(&self.inner))
        }
    }

    impl Serialize for Instant {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if self.has_nanos() {
                serializer.serialize_f64(self.epoch_fractional_seconds())
            } else {
                serializer.serialize_i64(self.epoch_seconds())
            }
        }
    }
}

#[cfg(feature = "serde-deserialize")]
mod de {
    use crate::{Blob, Instant};
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer};
    use std::convert::TryFrom;
    use std::fmt;

    impl<'de> Deserialize<'de> for Blob {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let encoded = String::deserialize(deserializer)?;
            base64::decode(&encoded)
                .map(Blob::new)
                .map_err(|err| de::Error::custom(format!("invalid base64 blob: {}", err)))
        }
    }

    struct InstantVisitor;

    impl<'de> Visitor<'de> for InstantVisitor {
        type Value = Instant;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("epoch seconds")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Instant::from_epoch_seconds(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            i64::try_from(v)
                .map(Instant::from_epoch_seconds)
                .map_err(|_| E::custom(format!("epoch seconds {} out of range", v)))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            if v.is_finite() {
                Ok(Instant::from_f64(v))
            } else {
                Err(E::custom("epoch seconds must be finite"))
            }
        }
    }

    impl<'de> Deserialize<'de> for Instant {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(InstantVisitor)
        }
    }
}

#[cfg(all(test, feature = "serde-serialize", feature = "serde-deserialize"))]
mod test {
    use crate::{Blob, Instant};
    use pretty_assertions::assert_eq;

    #[test]
    fn blob_is_base64() {
        let blob = Blob::new("hello");
        let json = serde_json::to_string(&blob).unwrap();
        assert_eq!(json, r#""aGVsbG8=""#);
        assert_eq!(serde_json::from_str::<Blob>(&json).unwrap(), blob);
        serde_json::from_str::<Blob>(r#""not base64!""#).expect_err("invalid base64");
    }

    #[test]
    fn instant_is_epoch_seconds() {
        let whole = Instant::from_epoch_seconds(1576540098);
        assert_eq!(serde_json::to_string(&whole).unwrap(), "1576540098");
        let fractional = Instant::from_fractional_seconds(1576540098, 0.5);
        assert_eq!(serde_json::to_string(&fractional).unwrap(), "1576540098.5");
        assert_eq!(
            serde_json::from_str::<Instant>("1576540098.5").unwrap(),
            fractional
        );
        assert_eq!(serde_json::from_str::<Instant>("1576540098").unwrap(), whole);
    }
}
