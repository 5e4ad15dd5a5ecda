// Copyright (C) 2025 Stacks Open Internet Foundation
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

pub mod serialization;
pub mod signatures;

use std::fmt;

use num_bigint::{BigInt, BigUint};

use crate::errors::CLValueError;
use crate::types::serialization::{
    SerializationError, U128_MAX_SERIALIZED_BYTES, U256_MAX_SERIALIZED_BYTES,
    U512_MAX_SERIALIZED_BYTES,
};
use crate::types::signatures::CLType;
use crate::util::hash::to_hex;

pub const ACCOUNT_HASH_LENGTH: usize = 32;
pub const KEY_HASH_LENGTH: usize = 32;
pub const UREF_ADDR_LENGTH: usize = 32;
pub const ED25519_PUBLIC_KEY_LENGTH: usize = 32;
pub const SECP256K1_PUBLIC_KEY_LENGTH: usize = 33;

/// An opaque 32-byte account identifier.  Derivation from a public key
/// happens outside this crate; here it is only a fixed-size byte value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountHash(pub [u8; ACCOUNT_HASH_LENGTH]);
impl_array_hexstring_fmt!(AccountHash);
impl_byte_array_newtype!(AccountHash, u8, 32);

/// The 3-bit permission mask carried by a URef.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccessRights(u8);

impl AccessRights {
    pub const NONE: AccessRights = AccessRights(0);
    pub const READ: AccessRights = AccessRights(1);
    pub const WRITE: AccessRights = AccessRights(2);
    pub const ADD: AccessRights = AccessRights(4);
    pub const READ_ADD_WRITE: AccessRights = AccessRights(7);

    /// Accepts only the in-range masks 0..=7
    pub fn from_bits(bits: u8) -> Option<AccessRights> {
        if bits <= 0b111 {
            Some(AccessRights(bits))
        } else {
            None
        }
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn is_readable(&self) -> bool {
        self.0 & AccessRights::READ.0 != 0
    }

    pub fn is_writeable(&self) -> bool {
        self.0 & AccessRights::WRITE.0 != 0
    }

    pub fn is_addable(&self) -> bool {
        self.0 & AccessRights::ADD.0 != 0
    }
}

/// An unforgeable reference: a 32-byte address plus an access-rights mask.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct URef {
    addr: [u8; UREF_ADDR_LENGTH],
    access_rights: AccessRights,
}

impl URef {
    pub fn new(addr: [u8; UREF_ADDR_LENGTH], access_rights: AccessRights) -> URef {
        URef {
            addr,
            access_rights,
        }
    }

    pub fn addr(&self) -> &[u8; UREF_ADDR_LENGTH] {
        &self.addr
    }

    pub fn access_rights(&self) -> AccessRights {
        self.access_rights
    }

    /// Render the canonical text form
    /// `uref-<64 hex chars>-<3-digit access rights>`.
    pub fn to_formatted_string(&self) -> String {
        format!("uref-{}-{:03}", to_hex(&self.addr), self.access_rights.bits())
    }

    /// Parse the canonical text form produced by `to_formatted_string`.
    pub fn from_formatted_str(input: &str) -> Result<URef, SerializationError> {
        let remainder = input
            .strip_prefix("uref-")
            .ok_or("Missing 'uref-' prefix")?;
        let (addr_part, rights_part) = remainder
            .split_once('-')
            .ok_or("Missing access-rights suffix")?;
        if addr_part.len() != UREF_ADDR_LENGTH * 2 {
            return Err("URef address must be 64 hex characters".into());
        }
        let addr_bytes = crate::util::hash::hex_bytes(addr_part)?;
        let mut addr = [0u8; UREF_ADDR_LENGTH];
        addr.copy_from_slice(&addr_bytes);
        if rights_part.len() != 3 {
            return Err("Access rights must be 3 decimal digits".into());
        }
        let bits = rights_part
            .parse::<u8>()
            .map_err(|_| "Bad access-rights digits")?;
        let access_rights =
            AccessRights::from_bits(bits).ok_or("Access rights out of range")?;
        Ok(URef::new(addr, access_rights))
    }
}

impl fmt::Display for URef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_formatted_string())
    }
}

impl fmt::Debug for URef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_formatted_string())
    }
}

/// An on-chain addressable identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Account(AccountHash),
    Hash([u8; KEY_HASH_LENGTH]),
    URef(URef),
}

/// A public key as supplied by an external identity provider: an
/// algorithm tag plus that algorithm's raw key bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PublicKey {
    Ed25519([u8; ED25519_PUBLIC_KEY_LENGTH]),
    Secp256k1([u8; SECP256K1_PUBLIC_KEY_LENGTH]),
}

impl PublicKey {
    pub fn ed25519_from_bytes(bytes: &[u8]) -> Option<PublicKey> {
        if bytes.len() != ED25519_PUBLIC_KEY_LENGTH {
            return None;
        }
        let mut buf = [0u8; ED25519_PUBLIC_KEY_LENGTH];
        buf.copy_from_slice(bytes);
        Some(PublicKey::Ed25519(buf))
    }

    pub fn secp256k1_from_bytes(bytes: &[u8]) -> Option<PublicKey> {
        if bytes.len() != SECP256K1_PUBLIC_KEY_LENGTH {
            return None;
        }
        let mut buf = [0u8; SECP256K1_PUBLIC_KEY_LENGTH];
        buf.copy_from_slice(bytes);
        Some(PublicKey::Secp256k1(buf))
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            PublicKey::Ed25519(bytes) => bytes,
            PublicKey::Secp256k1(bytes) => bytes,
        }
    }
}

/// Optional data, carrying the inner type so a `None` still knows its
/// full descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionalData {
    pub inner_type: CLType,
    pub data: Option<Box<Value>>,
}

/// List data with its homogeneous element type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListData {
    pub entry_type: CLType,
    pub data: Vec<Value>,
}

/// Map data.  Entries keep their insertion order; the canonical bytes
/// reproduce exactly the order given at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapData {
    pub key_type: CLType,
    pub value_type: CLType,
    pub data: Vec<(Value, Value)>,
}

/// Result data.  Both branch types are carried so either branch can
/// reconstruct the full descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultData {
    pub ok_type: CLType,
    pub err_type: CLType,
    pub data: Result<Box<Value>, Box<Value>>,
}

/// A decoded CL value: the semantic counterpart of a `CLValue`'s
/// canonical bytes.  Composite variants own their children by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    I32(i32),
    I64(i64),
    U8(u8),
    U32(u32),
    U64(u64),
    U128(BigUint),
    U256(BigUint),
    U512(BigUint),
    Unit,
    String(String),
    Key(Key),
    URef(URef),
    PublicKey(PublicKey),
    Optional(OptionalData),
    List(ListData),
    ByteArray(Vec<u8>),
    Result(ResultData),
    Map(MapData),
    Tuple1([Box<Value>; 1]),
    Tuple2([Box<Value>; 2]),
    Tuple3([Box<Value>; 3]),
}

fn check_magnitude(
    magnitude: &BigUint,
    kind: CLType,
    max_bytes: u32,
) -> Result<(), CLValueError> {
    if magnitude.bits() > u64::from(max_bytes) * 8 {
        return Err(CLValueError::Range { kind, max_bytes });
    }
    Ok(())
}

impl Value {
    /// Derive the type descriptor of this value.
    pub fn cl_type(&self) -> CLType {
        match self {
            Value::Bool(_) => CLType::Bool,
            Value::I32(_) => CLType::I32,
            Value::I64(_) => CLType::I64,
            Value::U8(_) => CLType::U8,
            Value::U32(_) => CLType::U32,
            Value::U64(_) => CLType::U64,
            Value::U128(_) => CLType::U128,
            Value::U256(_) => CLType::U256,
            Value::U512(_) => CLType::U512,
            Value::Unit => CLType::Unit,
            Value::String(_) => CLType::String,
            Value::Key(_) => CLType::Key,
            Value::URef(_) => CLType::URef,
            Value::PublicKey(_) => CLType::PublicKey,
            Value::Optional(OptionalData { inner_type, .. }) => {
                CLType::option(inner_type.clone())
            }
            Value::List(ListData { entry_type, .. }) => CLType::list(entry_type.clone()),
            Value::ByteArray(bytes) => CLType::ByteArray(bytes.len() as u32),
            Value::Result(ResultData {
                ok_type, err_type, ..
            }) => CLType::result(ok_type.clone(), err_type.clone()),
            Value::Map(MapData {
                key_type,
                value_type,
                ..
            }) => CLType::map(key_type.clone(), value_type.clone()),
            Value::Tuple1([t0]) => CLType::tuple1(t0.cl_type()),
            Value::Tuple2([t0, t1]) => CLType::tuple2(t0.cl_type(), t1.cl_type()),
            Value::Tuple3([t0, t1, t2]) => {
                CLType::tuple3(t0.cl_type(), t1.cl_type(), t2.cl_type())
            }
        }
    }

    pub fn u128<T: Into<BigUint>>(magnitude: T) -> Result<Value, CLValueError> {
        let magnitude = magnitude.into();
        check_magnitude(&magnitude, CLType::U128, U128_MAX_SERIALIZED_BYTES)?;
        Ok(Value::U128(magnitude))
    }

    pub fn u256<T: Into<BigUint>>(magnitude: T) -> Result<Value, CLValueError> {
        let magnitude = magnitude.into();
        check_magnitude(&magnitude, CLType::U256, U256_MAX_SERIALIZED_BYTES)?;
        Ok(Value::U256(magnitude))
    }

    pub fn u512<T: Into<BigUint>>(magnitude: T) -> Result<Value, CLValueError> {
        let magnitude = magnitude.into();
        check_magnitude(&magnitude, CLType::U512, U512_MAX_SERIALIZED_BYTES)?;
        Ok(Value::U512(magnitude))
    }

    /// Create a present optional; the inner type is derived from `v`.
    pub fn some(v: Value) -> Value {
        Value::Optional(OptionalData {
            inner_type: v.cl_type(),
            data: Some(Box::new(v)),
        })
    }

    /// Create an empty optional of the given inner type.
    pub fn none(inner_type: CLType) -> Value {
        Value::Optional(OptionalData {
            inner_type,
            data: None,
        })
    }

    /// Create a list.  Every element must already have exactly the given
    /// entry type.
    pub fn list_from(entry_type: CLType, data: Vec<Value>) -> Result<Value, CLValueError> {
        for item in data.iter() {
            let found = item.cl_type();
            if found != entry_type {
                return Err(CLValueError::TypeMismatch {
                    expected: entry_type.to_string(),
                    found,
                });
            }
        }
        Ok(Value::List(ListData { entry_type, data }))
    }

    /// Create a map.  Entry order is preserved verbatim into the
    /// canonical bytes.
    pub fn map_from(
        key_type: CLType,
        value_type: CLType,
        data: Vec<(Value, Value)>,
    ) -> Result<Value, CLValueError> {
        for (key, value) in data.iter() {
            let found_key = key.cl_type();
            if found_key != key_type {
                return Err(CLValueError::TypeMismatch {
                    expected: key_type.to_string(),
                    found: found_key,
                });
            }
            let found_value = value.cl_type();
            if found_value != value_type {
                return Err(CLValueError::TypeMismatch {
                    expected: value_type.to_string(),
                    found: found_value,
                });
            }
        }
        Ok(Value::Map(MapData {
            key_type,
            value_type,
            data,
        }))
    }

    pub fn ok(value: Value, err_type: CLType) -> Value {
        Value::Result(ResultData {
            ok_type: value.cl_type(),
            err_type,
            data: Ok(Box::new(value)),
        })
    }

    pub fn err(ok_type: CLType, value: Value) -> Value {
        Value::Result(ResultData {
            ok_type,
            err_type: value.cl_type(),
            data: Err(Box::new(value)),
        })
    }

    pub fn byte_array(data: Vec<u8>) -> Result<Value, CLValueError> {
        if u32::try_from(data.len()).is_err() {
            return Err(CLValueError::Serialization(
                SerializationError::SerializationError(
                    "Byte array length exceeds u32".into(),
                ),
            ));
        }
        Ok(Value::ByteArray(data))
    }

    pub fn tuple1(t0: Value) -> Value {
        Value::Tuple1([Box::new(t0)])
    }

    pub fn tuple2(t0: Value, t1: Value) -> Value {
        Value::Tuple2([Box::new(t0), Box::new(t1)])
    }

    pub fn tuple3(t0: Value, t1: Value, t2: Value) -> Value {
        Value::Tuple3([Box::new(t0), Box::new(t1), Box::new(t2)])
    }
}

/// A type descriptor paired with the canonical byte encoding of one
/// value of that type.  The bytes are exclusively owned and immutable;
/// accessors re-derive the semantic value on demand rather than caching
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CLValue {
    cl_type: CLType,
    bytes: Vec<u8>,
}

impl CLValue {
    /// Pair a descriptor with already-encoded bytes.  The bytes are
    /// validated by a full decode unless the descriptor contains `Any`,
    /// which has no canonical decoding and is held opaquely.
    pub fn from_parts(cl_type: CLType, bytes: Vec<u8>) -> Result<CLValue, CLValueError> {
        let value = CLValue { cl_type, bytes };
        if !value.cl_type.contains_any() {
            value.value()?;
        }
        Ok(value)
    }

    /// Encode a semantic value into its canonical bytes.
    pub fn from_value(value: &Value) -> Result<CLValue, CLValueError> {
        let bytes = value.serialize_to_vec()?;
        Ok(CLValue {
            cl_type: value.cl_type(),
            bytes,
        })
    }

    pub fn cl_type(&self) -> &CLType {
        &self.cl_type
    }

    /// The canonical bytes, without the descriptor.
    pub fn inner_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn bool(value: bool) -> CLValue {
        CLValue {
            cl_type: CLType::Bool,
            bytes: vec![u8::from(value)],
        }
    }

    pub fn u8(value: u8) -> CLValue {
        CLValue {
            cl_type: CLType::U8,
            bytes: vec![value],
        }
    }

    pub fn i32(value: i32) -> CLValue {
        CLValue {
            cl_type: CLType::I32,
            bytes: value.to_le_bytes().to_vec(),
        }
    }

    pub fn i64(value: i64) -> CLValue {
        CLValue {
            cl_type: CLType::I64,
            bytes: value.to_le_bytes().to_vec(),
        }
    }

    pub fn u32(value: u32) -> CLValue {
        CLValue {
            cl_type: CLType::U32,
            bytes: value.to_le_bytes().to_vec(),
        }
    }

    pub fn u64(value: u64) -> CLValue {
        CLValue {
            cl_type: CLType::U64,
            bytes: value.to_le_bytes().to_vec(),
        }
    }

    pub fn unit() -> CLValue {
        CLValue {
            cl_type: CLType::Unit,
            bytes: vec![],
        }
    }

    pub fn u128<T: Into<BigUint>>(magnitude: T) -> Result<CLValue, CLValueError> {
        CLValue::from_value(&Value::u128(magnitude)?)
    }

    pub fn u256<T: Into<BigUint>>(magnitude: T) -> Result<CLValue, CLValueError> {
        CLValue::from_value(&Value::u256(magnitude)?)
    }

    pub fn u512<T: Into<BigUint>>(magnitude: T) -> Result<CLValue, CLValueError> {
        CLValue::from_value(&Value::u512(magnitude)?)
    }

    pub fn string<S: Into<String>>(value: S) -> Result<CLValue, CLValueError> {
        CLValue::from_value(&Value::String(value.into()))
    }

    pub fn key(value: Key) -> Result<CLValue, CLValueError> {
        CLValue::from_value(&Value::Key(value))
    }

    pub fn uref(value: URef) -> Result<CLValue, CLValueError> {
        CLValue::from_value(&Value::URef(value))
    }

    pub fn public_key(value: PublicKey) -> Result<CLValue, CLValueError> {
        CLValue::from_value(&Value::PublicKey(value))
    }

    pub fn byte_array(data: Vec<u8>) -> Result<CLValue, CLValueError> {
        CLValue::from_value(&Value::byte_array(data)?)
    }

    pub fn option(value: Option<Value>, inner_type: CLType) -> Result<CLValue, CLValueError> {
        let v = match value {
            Some(inner) => {
                let found = inner.cl_type();
                if found != inner_type {
                    return Err(CLValueError::TypeMismatch {
                        expected: inner_type.to_string(),
                        found,
                    });
                }
                Value::some(inner)
            }
            None => Value::none(inner_type),
        };
        CLValue::from_value(&v)
    }

    pub fn list(entry_type: CLType, data: Vec<Value>) -> Result<CLValue, CLValueError> {
        CLValue::from_value(&Value::list_from(entry_type, data)?)
    }

    pub fn map(
        key_type: CLType,
        value_type: CLType,
        data: Vec<(Value, Value)>,
    ) -> Result<CLValue, CLValueError> {
        CLValue::from_value(&Value::map_from(key_type, value_type, data)?)
    }

    pub fn ok(value: Value, err_type: CLType) -> Result<CLValue, CLValueError> {
        CLValue::from_value(&Value::ok(value, err_type))
    }

    pub fn err(ok_type: CLType, value: Value) -> Result<CLValue, CLValueError> {
        CLValue::from_value(&Value::err(ok_type, value))
    }

    pub fn tuple1(t0: Value) -> Result<CLValue, CLValueError> {
        CLValue::from_value(&Value::tuple1(t0))
    }

    pub fn tuple2(t0: Value, t1: Value) -> Result<CLValue, CLValueError> {
        CLValue::from_value(&Value::tuple2(t0, t1))
    }

    pub fn tuple3(t0: Value, t1: Value, t2: Value) -> Result<CLValue, CLValueError> {
        CLValue::from_value(&Value::tuple3(t0, t1, t2))
    }

    /// Decode the boolean this value encodes.
    pub fn as_bool(&self) -> Result<bool, CLValueError> {
        if self.cl_type != CLType::Bool {
            return Err(CLValueError::TypeMismatch {
                expected: "Bool".into(),
                found: self.cl_type.clone(),
            });
        }
        match self.value()? {
            Value::Bool(b) => Ok(b),
            v => Err(CLValueError::TypeMismatch {
                expected: "Bool".into(),
                found: v.cl_type(),
            }),
        }
    }

    /// Decode any numeric kind to an arbitrary-precision integer, so
    /// callers need not special-case I32 vs U256.
    pub fn as_big_number(&self) -> Result<BigInt, CLValueError> {
        match self.cl_type {
            CLType::I32
            | CLType::I64
            | CLType::U8
            | CLType::U32
            | CLType::U64
            | CLType::U128
            | CLType::U256
            | CLType::U512 => {}
            _ => {
                return Err(CLValueError::TypeMismatch {
                    expected: "a numeric kind".into(),
                    found: self.cl_type.clone(),
                })
            }
        }
        let number = match self.value()? {
            Value::I32(x) => BigInt::from(x),
            Value::I64(x) => BigInt::from(x),
            Value::U8(x) => BigInt::from(x),
            Value::U32(x) => BigInt::from(x),
            Value::U64(x) => BigInt::from(x),
            Value::U128(m) | Value::U256(m) | Value::U512(m) => BigInt::from(m),
            v => {
                return Err(CLValueError::TypeMismatch {
                    expected: "a numeric kind".into(),
                    found: v.cl_type(),
                })
            }
        };
        Ok(number)
    }

    pub fn as_string(&self) -> Result<String, CLValueError> {
        if self.cl_type != CLType::String {
            return Err(CLValueError::TypeMismatch {
                expected: "String".into(),
                found: self.cl_type.clone(),
            });
        }
        match self.value()? {
            Value::String(s) => Ok(s),
            v => Err(CLValueError::TypeMismatch {
                expected: "String".into(),
                found: v.cl_type(),
            }),
        }
    }

    pub fn as_key(&self) -> Result<Key, CLValueError> {
        if self.cl_type != CLType::Key {
            return Err(CLValueError::TypeMismatch {
                expected: "Key".into(),
                found: self.cl_type.clone(),
            });
        }
        match self.value()? {
            Value::Key(k) => Ok(k),
            v => Err(CLValueError::TypeMismatch {
                expected: "Key".into(),
                found: v.cl_type(),
            }),
        }
    }

    pub fn as_uref(&self) -> Result<URef, CLValueError> {
        if self.cl_type != CLType::URef {
            return Err(CLValueError::TypeMismatch {
                expected: "URef".into(),
                found: self.cl_type.clone(),
            });
        }
        match self.value()? {
            Value::URef(u) => Ok(u),
            v => Err(CLValueError::TypeMismatch {
                expected: "URef".into(),
                found: v.cl_type(),
            }),
        }
    }

    pub fn as_public_key(&self) -> Result<PublicKey, CLValueError> {
        if self.cl_type != CLType::PublicKey {
            return Err(CLValueError::TypeMismatch {
                expected: "PublicKey".into(),
                found: self.cl_type.clone(),
            });
        }
        match self.value()? {
            Value::PublicKey(pk) => Ok(pk),
            v => Err(CLValueError::TypeMismatch {
                expected: "PublicKey".into(),
                found: v.cl_type(),
            }),
        }
    }

    pub fn as_byte_array(&self) -> Result<Vec<u8>, CLValueError> {
        match self.cl_type {
            CLType::ByteArray(_) => {}
            _ => {
                return Err(CLValueError::TypeMismatch {
                    expected: "ByteArray".into(),
                    found: self.cl_type.clone(),
                })
            }
        }
        match self.value()? {
            Value::ByteArray(bytes) => Ok(bytes),
            v => Err(CLValueError::TypeMismatch {
                expected: "ByteArray".into(),
                found: v.cl_type(),
            }),
        }
    }
}
