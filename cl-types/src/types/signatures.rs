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

use std::fmt;

/// Maximum nesting depth accepted when decoding a value against a
/// composite type.  Deeper descriptors are representable, but decoding
/// them is refused so a hostile input cannot grow the stack unboundedly.
pub const MAX_TYPE_DEPTH: u8 = 16;

/// The recursive descriptor naming a CLValue's kind.
///
/// Simple kinds carry no arguments; composite kinds own their child
/// descriptor(s) by value.  The serde representation is the structured
/// text form of the wire contract: simple kinds serialize as their bare
/// name string (`"Bool"`, `"U128"`), composite kinds as a single-entry
/// mapping from the kind name to its argument(s), e.g.
/// `{"Option": "Bool"}`, `{"ByteArray": 32}`,
/// `{"Map": {"key": "String", "value": "U64"}}`,
/// `{"Tuple2": ["U128", "Bool"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CLType {
    Bool,
    I32,
    I64,
    U8,
    U32,
    U64,
    U128,
    U256,
    U512,
    Unit,
    String,
    Key,
    URef,
    PublicKey,
    Any,
    Option(Box<CLType>),
    List(Box<CLType>),
    ByteArray(u32),
    Result { ok: Box<CLType>, err: Box<CLType> },
    Map { key: Box<CLType>, value: Box<CLType> },
    Tuple1([Box<CLType>; 1]),
    Tuple2([Box<CLType>; 2]),
    Tuple3([Box<CLType>; 3]),
}

impl CLType {
    pub fn option(inner: CLType) -> CLType {
        CLType::Option(Box::new(inner))
    }

    pub fn list(element: CLType) -> CLType {
        CLType::List(Box::new(element))
    }

    pub fn result(ok: CLType, err: CLType) -> CLType {
        CLType::Result {
            ok: Box::new(ok),
            err: Box::new(err),
        }
    }

    pub fn map(key: CLType, value: CLType) -> CLType {
        CLType::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn tuple1(t0: CLType) -> CLType {
        CLType::Tuple1([Box::new(t0)])
    }

    pub fn tuple2(t0: CLType, t1: CLType) -> CLType {
        CLType::Tuple2([Box::new(t0), Box::new(t1)])
    }

    pub fn tuple3(t0: CLType, t1: CLType, t2: CLType) -> CLType {
        CLType::Tuple3([Box::new(t0), Box::new(t1), Box::new(t2)])
    }

    /// Does `Any` appear anywhere in this descriptor?  Values of such a
    /// type have no canonical decoding, so their bytes are opaque.
    pub fn contains_any(&self) -> bool {
        match self {
            CLType::Any => true,
            CLType::Option(inner) | CLType::List(inner) => inner.contains_any(),
            CLType::Result { ok, err } => ok.contains_any() || err.contains_any(),
            CLType::Map { key, value } => key.contains_any() || value.contains_any(),
            CLType::Tuple1(ts) => ts.iter().any(|t| t.contains_any()),
            CLType::Tuple2(ts) => ts.iter().any(|t| t.contains_any()),
            CLType::Tuple3(ts) => ts.iter().any(|t| t.contains_any()),
            _ => false,
        }
    }
}

impl fmt::Display for CLType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CLType::Bool => write!(f, "Bool"),
            CLType::I32 => write!(f, "I32"),
            CLType::I64 => write!(f, "I64"),
            CLType::U8 => write!(f, "U8"),
            CLType::U32 => write!(f, "U32"),
            CLType::U64 => write!(f, "U64"),
            CLType::U128 => write!(f, "U128"),
            CLType::U256 => write!(f, "U256"),
            CLType::U512 => write!(f, "U512"),
            CLType::Unit => write!(f, "Unit"),
            CLType::String => write!(f, "String"),
            CLType::Key => write!(f, "Key"),
            CLType::URef => write!(f, "URef"),
            CLType::PublicKey => write!(f, "PublicKey"),
            CLType::Any => write!(f, "Any"),
            CLType::Option(inner) => write!(f, "Option({inner})"),
            CLType::List(element) => write!(f, "List({element})"),
            CLType::ByteArray(len) => write!(f, "ByteArray({len})"),
            CLType::Result { ok, err } => write!(f, "Result({ok}, {err})"),
            CLType::Map { key, value } => write!(f, "Map({key}, {value})"),
            CLType::Tuple1([t0]) => write!(f, "Tuple1({t0})"),
            CLType::Tuple2([t0, t1]) => write!(f, "Tuple2({t0}, {t1})"),
            CLType::Tuple3([t0, t1, t2]) => write!(f, "Tuple3({t0}, {t1}, {t2})"),
        }
    }
}
