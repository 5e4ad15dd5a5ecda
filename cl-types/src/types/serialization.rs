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

//! The canonical byte codec for CL values, and the structured
//! `{cl_type, bytes}` JSON form exchanged with clients.
//!
//! Encoding is type-directed in both directions: a `Value` knows how to
//! write itself, and decoding walks the expected `CLType` to know how
//! many bytes each component occupies.  There are no per-value type
//! tags in the byte form; the descriptor travels next to the bytes.

use std::io::{Read, Write};
use std::{error, fmt, io};

use num_bigint::BigUint;
use num_traits::Zero;

use crate::errors::{CLValueError, IncomparableError};
use crate::types::signatures::{CLType, MAX_TYPE_DEPTH};
use crate::types::{
    AccountHash, CLValue, Key, ListData, MapData, OptionalData, PublicKey, ResultData,
    URef, Value, AccessRights, ACCOUNT_HASH_LENGTH, ED25519_PUBLIC_KEY_LENGTH,
    KEY_HASH_LENGTH, SECP256K1_PUBLIC_KEY_LENGTH, UREF_ADDR_LENGTH,
};
use crate::util::hash::{hex_bytes, to_hex};
use crate::util::retry::BoundReader;
use crate::util::HexError;

/// Upper bound on any length prefix read out of a byte stream, before
/// allocation
pub const MAX_VALUE_SIZE: u32 = 1024 * 1024;
/// Upper bound on the total bytes one deserialization may consume
pub const BOUND_VALUE_SERIALIZATION_BYTES: u32 = MAX_VALUE_SIZE * 2;

/// Maximum magnitude widths of the big-integer kinds
pub const U128_MAX_SERIALIZED_BYTES: u32 = 16;
pub const U256_MAX_SERIALIZED_BYTES: u32 = 32;
pub const U512_MAX_SERIALIZED_BYTES: u32 = 64;

const OPTION_NONE_TAG: u8 = 0;
const OPTION_SOME_TAG: u8 = 1;
const RESULT_ERR_TAG: u8 = 0;
const RESULT_OK_TAG: u8 = 1;

define_u8_enum!(KeyPrefix {
    Account = 0,
    Hash = 1,
    Uref = 2
});

define_u8_enum!(PublicKeyPrefix {
    Ed25519 = 1,
    Secp256k1 = 2
});

/// Errors that may occur in serialization or deserialization.
/// Any IOErrors from the supplied buffer manifest as IOError variants;
/// a byte stream that describes more content than there are bytes to
/// read will surface as IOError(UnexpectedEof).
#[derive(Debug, PartialEq)]
pub enum SerializationError {
    IOError(IncomparableError<std::io::Error>),
    SerializationError(String),
    DeserializationError(String),
    /// The descriptor (or a component of it) has no canonical decoding
    TypeNotDeserializable(CLType),
    LeftoverBytesInDeserialization,
}

impl fmt::Display for SerializationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SerializationError::IOError(e) => {
                write!(f, "Serialization error caused by IO: {}", e.err)
            }
            SerializationError::SerializationError(e) => {
                write!(f, "Serialization error: {e}")
            }
            SerializationError::DeserializationError(e) => {
                write!(f, "Deserialization error: {e}")
            }
            SerializationError::TypeNotDeserializable(t) => {
                write!(f, "The type {t} has no canonical decoding")
            }
            SerializationError::LeftoverBytesInDeserialization => {
                write!(f, "Deserialization error: bytes left over in buffer")
            }
        }
    }
}

impl error::Error for SerializationError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SerializationError::IOError(e) => Some(&e.err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SerializationError {
    fn from(err: std::io::Error) -> Self {
        SerializationError::IOError(IncomparableError { err })
    }
}

impl From<&str> for SerializationError {
    fn from(e: &str) -> Self {
        SerializationError::DeserializationError(e.into())
    }
}

impl From<HexError> for SerializationError {
    fn from(e: HexError) -> Self {
        SerializationError::DeserializationError(e.to_string())
    }
}

/// Not a public trait,
///   this is just used to simplify serializing the fixed-layout parts
///   that appear both standalone and nested inside Key.
trait CLPartSerializable<T: Sized> {
    fn serialize_write<W: Write>(&self, w: &mut W) -> io::Result<()>;
    fn deserialize_read<R: Read>(r: &mut R) -> Result<T, SerializationError>;
}

impl CLPartSerializable<AccountHash> for AccountHash {
    fn serialize_write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.0)
    }

    fn deserialize_read<R: Read>(r: &mut R) -> Result<Self, SerializationError> {
        let mut data = [0u8; ACCOUNT_HASH_LENGTH];
        r.read_exact(&mut data)?;
        Ok(AccountHash(data))
    }
}

impl CLPartSerializable<URef> for URef {
    fn serialize_write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(self.addr())?;
        w.write_all(&[self.access_rights().bits()])
    }

    fn deserialize_read<R: Read>(r: &mut R) -> Result<Self, SerializationError> {
        let mut addr = [0u8; UREF_ADDR_LENGTH];
        r.read_exact(&mut addr)?;
        let mut rights = [0u8; 1];
        r.read_exact(&mut rights)?;
        let access_rights =
            AccessRights::from_bits(rights[0]).ok_or("Access rights out of range")?;
        Ok(URef::new(addr, access_rights))
    }
}

impl CLPartSerializable<Key> for Key {
    fn serialize_write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        match self {
            Key::Account(account_hash) => {
                w.write_all(&[KeyPrefix::Account.to_u8()])?;
                account_hash.serialize_write(w)
            }
            Key::Hash(hash) => {
                w.write_all(&[KeyPrefix::Hash.to_u8()])?;
                w.write_all(hash)
            }
            Key::URef(uref) => {
                w.write_all(&[KeyPrefix::Uref.to_u8()])?;
                uref.serialize_write(w)
            }
        }
    }

    fn deserialize_read<R: Read>(r: &mut R) -> Result<Self, SerializationError> {
        let mut header = [0u8; 1];
        r.read_exact(&mut header)?;
        let prefix = KeyPrefix::from_u8(header[0]).ok_or("Bad key prefix")?;
        match prefix {
            KeyPrefix::Account => AccountHash::deserialize_read(r).map(Key::Account),
            KeyPrefix::Hash => {
                let mut hash = [0u8; KEY_HASH_LENGTH];
                r.read_exact(&mut hash)?;
                Ok(Key::Hash(hash))
            }
            KeyPrefix::Uref => URef::deserialize_read(r).map(Key::URef),
        }
    }
}

impl CLPartSerializable<PublicKey> for PublicKey {
    fn serialize_write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        match self {
            PublicKey::Ed25519(bytes) => {
                w.write_all(&[PublicKeyPrefix::Ed25519.to_u8()])?;
                w.write_all(bytes)
            }
            PublicKey::Secp256k1(bytes) => {
                w.write_all(&[PublicKeyPrefix::Secp256k1.to_u8()])?;
                w.write_all(bytes)
            }
        }
    }

    fn deserialize_read<R: Read>(r: &mut R) -> Result<Self, SerializationError> {
        let mut header = [0u8; 1];
        r.read_exact(&mut header)?;
        let prefix = PublicKeyPrefix::from_u8(header[0]).ok_or("Bad public-key tag")?;
        match prefix {
            PublicKeyPrefix::Ed25519 => {
                let mut bytes = [0u8; ED25519_PUBLIC_KEY_LENGTH];
                r.read_exact(&mut bytes)?;
                Ok(PublicKey::Ed25519(bytes))
            }
            PublicKeyPrefix::Secp256k1 => {
                let mut bytes = [0u8; SECP256K1_PUBLIC_KEY_LENGTH];
                r.read_exact(&mut bytes)?;
                Ok(PublicKey::Secp256k1(bytes))
            }
        }
    }
}

/// Write a big-integer magnitude: one length byte, then that many
/// little-endian magnitude bytes with the most-significant zeros
/// stripped.  Zero is the single byte 0x00.
fn serialize_bignum<W: Write>(w: &mut W, magnitude: &BigUint) -> io::Result<()> {
    if magnitude.is_zero() {
        return w.write_all(&[0u8]);
    }
    // to_bytes_le() is already minimal
    let bytes = magnitude.to_bytes_le();
    let len = u8::try_from(bytes.len()).map_err(|_| {
        io::Error::new(io::ErrorKind::Other, "Magnitude exceeds 255 bytes")
    })?;
    w.write_all(&[len])?;
    w.write_all(&bytes)
}

fn deserialize_bignum<R: Read>(
    r: &mut R,
    max_bytes: u32,
) -> Result<BigUint, SerializationError> {
    let mut len = [0u8; 1];
    r.read_exact(&mut len)?;
    let len = u32::from(len[0]);
    if len > max_bytes {
        return Err(SerializationError::DeserializationError(format!(
            "Big-integer length byte {len} exceeds the kind's width {max_bytes}"
        )));
    }
    let mut data = vec![0u8; len as usize];
    r.read_exact(&mut data)?;
    Ok(BigUint::from_bytes_le(&data))
}

fn read_u32_le<R: Read>(r: &mut R) -> Result<u32, SerializationError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

impl Value {
    pub fn serialize_write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        match self {
            Value::Bool(b) => w.write_all(&[u8::from(*b)]),
            Value::I32(x) => w.write_all(&x.to_le_bytes()),
            Value::I64(x) => w.write_all(&x.to_le_bytes()),
            Value::U8(x) => w.write_all(&[*x]),
            Value::U32(x) => w.write_all(&x.to_le_bytes()),
            Value::U64(x) => w.write_all(&x.to_le_bytes()),
            Value::U128(m) | Value::U256(m) | Value::U512(m) => serialize_bignum(w, m),
            Value::Unit => Ok(()),
            Value::String(s) => {
                let len = u32::try_from(s.len()).map_err(|_| {
                    io::Error::new(io::ErrorKind::Other, "String length exceeds u32")
                })?;
                w.write_all(&len.to_le_bytes())?;
                w.write_all(s.as_bytes())
            }
            Value::Key(key) => key.serialize_write(w),
            Value::URef(uref) => uref.serialize_write(w),
            Value::PublicKey(public_key) => public_key.serialize_write(w),
            Value::Optional(OptionalData { data: None, .. }) => {
                w.write_all(&[OPTION_NONE_TAG])
            }
            Value::Optional(OptionalData {
                data: Some(inner), ..
            }) => {
                w.write_all(&[OPTION_SOME_TAG])?;
                inner.serialize_write(w)
            }
            Value::List(ListData { data, .. }) => {
                let len = u32::try_from(data.len()).map_err(|_| {
                    io::Error::new(io::ErrorKind::Other, "List length exceeds u32")
                })?;
                w.write_all(&len.to_le_bytes())?;
                for item in data.iter() {
                    item.serialize_write(w)?;
                }
                Ok(())
            }
            Value::ByteArray(bytes) => w.write_all(bytes),
            Value::Result(ResultData { data, .. }) => match data {
                Ok(inner) => {
                    w.write_all(&[RESULT_OK_TAG])?;
                    inner.serialize_write(w)
                }
                Err(inner) => {
                    w.write_all(&[RESULT_ERR_TAG])?;
                    inner.serialize_write(w)
                }
            },
            Value::Map(MapData { data, .. }) => {
                let len = u32::try_from(data.len()).map_err(|_| {
                    io::Error::new(io::ErrorKind::Other, "Map length exceeds u32")
                })?;
                w.write_all(&len.to_le_bytes())?;
                for (key, value) in data.iter() {
                    key.serialize_write(w)?;
                    value.serialize_write(w)?;
                }
                Ok(())
            }
            Value::Tuple1([t0]) => t0.serialize_write(w),
            Value::Tuple2([t0, t1]) => {
                t0.serialize_write(w)?;
                t1.serialize_write(w)
            }
            Value::Tuple3([t0, t1, t2]) => {
                t0.serialize_write(w)?;
                t1.serialize_write(w)?;
                t2.serialize_write(w)
            }
        }
    }

    /// Serialize to the canonical byte vector
    pub fn serialize_to_vec(&self) -> Result<Vec<u8>, SerializationError> {
        let mut buffer = Vec::new();
        self.serialize_write(&mut buffer)?;
        Ok(buffer)
    }

    /// Serialize to lowercase hex of the canonical bytes
    pub fn serialize_to_hex(&self) -> Result<String, SerializationError> {
        let bytes = self.serialize_to_vec()?;
        Ok(to_hex(&bytes))
    }

    /// Byte length of the canonical serialization, without materializing it
    pub fn serialized_size(&self) -> Result<u32, SerializationError> {
        let mut counter = WriteCounter { count: 0 };
        self.serialize_write(&mut counter)?;
        Ok(counter.count)
    }

    pub fn deserialize_read<R: Read>(
        r: &mut R,
        expected_type: &CLType,
    ) -> Result<Value, SerializationError> {
        Self::deserialize_read_count(r, expected_type).map(|(value, _)| value)
    }

    /// Deserialize just like `deserialize_read` but also
    ///  return the bytes read
    pub fn deserialize_read_count<R: Read>(
        r: &mut R,
        expected_type: &CLType,
    ) -> Result<(Value, u64), SerializationError> {
        let mut bound_reader =
            BoundReader::from_reader(r, u64::from(BOUND_VALUE_SERIALIZATION_BYTES));
        let value = Value::inner_deserialize_read(&mut bound_reader, expected_type, 0)?;
        let bytes_read = bound_reader.num_read();
        Ok((value, bytes_read))
    }

    fn inner_deserialize_read<R: Read>(
        r: &mut R,
        expected_type: &CLType,
        depth: u8,
    ) -> Result<Value, SerializationError> {
        if depth >= MAX_TYPE_DEPTH {
            warn!(
                "Refusing to decode a value nested deeper than the type-depth limit";
                "max_type_depth" => MAX_TYPE_DEPTH
            );
            return Err("Type descriptor too deep".into());
        }

        match expected_type {
            CLType::Bool => {
                let mut byte = [0u8; 1];
                r.read_exact(&mut byte)?;
                match byte[0] {
                    0 => Ok(Value::Bool(false)),
                    1 => Ok(Value::Bool(true)),
                    x => Err(SerializationError::DeserializationError(format!(
                        "Bad boolean byte 0x{x:02x}"
                    ))),
                }
            }
            CLType::I32 => {
                let mut buf = [0u8; 4];
                r.read_exact(&mut buf)?;
                Ok(Value::I32(i32::from_le_bytes(buf)))
            }
            CLType::I64 => {
                let mut buf = [0u8; 8];
                r.read_exact(&mut buf)?;
                Ok(Value::I64(i64::from_le_bytes(buf)))
            }
            CLType::U8 => {
                let mut buf = [0u8; 1];
                r.read_exact(&mut buf)?;
                Ok(Value::U8(buf[0]))
            }
            CLType::U32 => read_u32_le(r).map(Value::U32),
            CLType::U64 => {
                let mut buf = [0u8; 8];
                r.read_exact(&mut buf)?;
                Ok(Value::U64(u64::from_le_bytes(buf)))
            }
            CLType::U128 => {
                deserialize_bignum(r, U128_MAX_SERIALIZED_BYTES).map(Value::U128)
            }
            CLType::U256 => {
                deserialize_bignum(r, U256_MAX_SERIALIZED_BYTES).map(Value::U256)
            }
            CLType::U512 => {
                deserialize_bignum(r, U512_MAX_SERIALIZED_BYTES).map(Value::U512)
            }
            CLType::Unit => Ok(Value::Unit),
            CLType::String => {
                let len = read_u32_le(r)?;
                if len > MAX_VALUE_SIZE {
                    return Err("Illegal string length".into());
                }
                let mut data = vec![0u8; len as usize];
                r.read_exact(&mut data)?;
                String::from_utf8(data)
                    .map(Value::String)
                    .map_err(|_| "Non-UTF8 string data".into())
            }
            CLType::Key => Key::deserialize_read(r).map(Value::Key),
            CLType::URef => URef::deserialize_read(r).map(Value::URef),
            CLType::PublicKey => PublicKey::deserialize_read(r).map(Value::PublicKey),
            CLType::Any => Err(SerializationError::TypeNotDeserializable(CLType::Any)),
            CLType::Option(inner_type) => {
                let mut presence = [0u8; 1];
                r.read_exact(&mut presence)?;
                match presence[0] {
                    OPTION_NONE_TAG => Ok(Value::none(inner_type.as_ref().clone())),
                    OPTION_SOME_TAG => {
                        let inner =
                            Value::inner_deserialize_read(r, inner_type, depth + 1)?;
                        Ok(Value::Optional(OptionalData {
                            inner_type: inner_type.as_ref().clone(),
                            data: Some(Box::new(inner)),
                        }))
                    }
                    x => Err(SerializationError::DeserializationError(format!(
                        "Bad option presence byte 0x{x:02x}"
                    ))),
                }
            }
            CLType::List(entry_type) => {
                let len = read_u32_le(r)?;
                if len > MAX_VALUE_SIZE {
                    return Err("Illegal list size".into());
                }
                let mut items = Vec::with_capacity(len as usize);
                for _i in 0..len {
                    items.push(Value::inner_deserialize_read(r, entry_type, depth + 1)?);
                }
                Ok(Value::List(ListData {
                    entry_type: entry_type.as_ref().clone(),
                    data: items,
                }))
            }
            CLType::ByteArray(len) => {
                if *len > MAX_VALUE_SIZE {
                    return Err("Illegal byte-array size".into());
                }
                let mut data = vec![0u8; *len as usize];
                r.read_exact(&mut data)?;
                Ok(Value::ByteArray(data))
            }
            CLType::Result { ok, err } => {
                let mut variant = [0u8; 1];
                r.read_exact(&mut variant)?;
                match variant[0] {
                    RESULT_OK_TAG => {
                        let inner = Value::inner_deserialize_read(r, ok, depth + 1)?;
                        Ok(Value::Result(ResultData {
                            ok_type: ok.as_ref().clone(),
                            err_type: err.as_ref().clone(),
                            data: Ok(Box::new(inner)),
                        }))
                    }
                    RESULT_ERR_TAG => {
                        let inner = Value::inner_deserialize_read(r, err, depth + 1)?;
                        Ok(Value::Result(ResultData {
                            ok_type: ok.as_ref().clone(),
                            err_type: err.as_ref().clone(),
                            data: Err(Box::new(inner)),
                        }))
                    }
                    x => Err(SerializationError::DeserializationError(format!(
                        "Bad result variant byte 0x{x:02x}"
                    ))),
                }
            }
            CLType::Map { key, value } => {
                let len = read_u32_le(r)?;
                if len > MAX_VALUE_SIZE {
                    return Err("Illegal map size".into());
                }
                let mut entries = Vec::with_capacity(len as usize);
                for _i in 0..len {
                    let entry_key = Value::inner_deserialize_read(r, key, depth + 1)?;
                    let entry_value = Value::inner_deserialize_read(r, value, depth + 1)?;
                    entries.push((entry_key, entry_value));
                }
                Ok(Value::Map(MapData {
                    key_type: key.as_ref().clone(),
                    value_type: value.as_ref().clone(),
                    data: entries,
                }))
            }
            CLType::Tuple1([t0]) => {
                let v0 = Value::inner_deserialize_read(r, t0, depth + 1)?;
                Ok(Value::Tuple1([Box::new(v0)]))
            }
            CLType::Tuple2([t0, t1]) => {
                let v0 = Value::inner_deserialize_read(r, t0, depth + 1)?;
                let v1 = Value::inner_deserialize_read(r, t1, depth + 1)?;
                Ok(Value::Tuple2([Box::new(v0), Box::new(v1)]))
            }
            CLType::Tuple3([t0, t1, t2]) => {
                let v0 = Value::inner_deserialize_read(r, t0, depth + 1)?;
                let v1 = Value::inner_deserialize_read(r, t1, depth + 1)?;
                let v2 = Value::inner_deserialize_read(r, t2, depth + 1)?;
                Ok(Value::Tuple3([Box::new(v0), Box::new(v1), Box::new(v2)]))
            }
        }
    }

    /// Decode a byte buffer against an expected type.
    pub fn try_deserialize_bytes(
        bytes: &[u8],
        expected: &CLType,
    ) -> Result<Value, SerializationError> {
        let mut cursor = bytes;
        Value::deserialize_read(&mut cursor, expected)
    }

    /// Decode a byte buffer against an expected type, requiring that the
    /// whole buffer is consumed.
    pub fn try_deserialize_bytes_exact(
        bytes: &[u8],
        expected: &CLType,
    ) -> Result<Value, SerializationError> {
        let input_length = bytes.len();
        let mut cursor = bytes;
        let (value, read_count) = Value::deserialize_read_count(&mut cursor, expected)?;
        if read_count != (input_length as u64) {
            Err(SerializationError::LeftoverBytesInDeserialization)
        } else {
            Ok(value)
        }
    }

    /// Decode a hex string against an expected type, requiring full
    /// consumption.
    pub fn try_deserialize_hex(
        hex: &str,
        expected: &CLType,
    ) -> Result<Value, SerializationError> {
        let data = hex_bytes(hex)?;
        Value::try_deserialize_bytes_exact(&data, expected)
    }
}

/// A writer that just counts the bytes written
struct WriteCounter {
    count: u32,
}

impl Write for WriteCounter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let input: u32 = buf.len().try_into().map_err(|_e| {
            io::Error::new(
                io::ErrorKind::Other,
                "Serialization size would overflow u32",
            )
        })?;
        self.count = self.count.checked_add(input).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::Other,
                "Serialization size would overflow u32",
            )
        })?;
        Ok(input as usize)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl CLValue {
    /// Re-derive the semantic value from the stored canonical bytes,
    /// requiring that the whole buffer is consumed.
    pub fn value(&self) -> Result<Value, SerializationError> {
        Value::try_deserialize_bytes_exact(&self.bytes, &self.cl_type)
    }

    /// Render the structured text form
    /// `{ "cl_type": <descriptor>, "bytes": "<lowercase hex>" }`.
    pub fn to_json(&self) -> serde_json::Value {
        let cl_type = serde_json::to_value(&self.cl_type)
            .expect("BUG: CLType serialization failed");
        let mut obj = serde_json::Map::new();
        obj.insert("cl_type".into(), cl_type);
        obj.insert("bytes".into(), serde_json::Value::String(to_hex(&self.bytes)));
        serde_json::Value::Object(obj)
    }

    /// Parse the structured text form back into a CLValue.  Fails on
    /// malformed or odd-length hex and on unrecognized descriptor
    /// shapes.
    pub fn from_json(value: &serde_json::Value) -> Result<CLValue, SerializationError> {
        let obj = value
            .as_object()
            .ok_or("Expected a JSON object with cl_type and bytes")?;
        let type_json = obj.get("cl_type").ok_or("Missing cl_type")?;
        let cl_type: CLType = serde_json::from_value(type_json.clone())
            .map_err(|_| "Unrecognized type-descriptor shape")?;
        let bytes_hex = obj
            .get("bytes")
            .and_then(|b| b.as_str())
            .ok_or("Missing bytes hex string")?;
        let bytes = hex_bytes(bytes_hex)?;
        CLValue::from_parts(cl_type, bytes).map_err(|e| match e {
            CLValueError::Serialization(se) => se,
            other => SerializationError::DeserializationError(other.to_string()),
        })
    }
}

impl serde::Serialize for CLValue {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut obj = s.serialize_struct("CLValue", 2)?;
        obj.serialize_field("cl_type", &self.cl_type)?;
        obj.serialize_field("bytes", &to_hex(&self.bytes))?;
        obj.end()
    }
}

#[derive(Deserialize)]
struct CLValueRepr {
    cl_type: CLType,
    bytes: String,
}

impl<'de> serde::Deserialize<'de> for CLValue {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<CLValue, D::Error> {
        let repr = CLValueRepr::deserialize(d)?;
        let bytes = hex_bytes(&repr.bytes).map_err(serde::de::Error::custom)?;
        CLValue::from_parts(repr.cl_type, bytes).map_err(serde::de::Error::custom)
    }
}
