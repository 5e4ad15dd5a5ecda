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

use std::{error, fmt};

use crate::types::serialization::SerializationError;
use crate::types::signatures::CLType;

/// A wrapper for an error type that does not implement PartialEq,
///  so that enclosing error enums can.  Pattern-matched comparisons
///  treat any two wrapped errors as unequal.
pub struct IncomparableError<T> {
    pub err: T,
}

impl<T> PartialEq for IncomparableError<T> {
    fn eq(&self, _other: &IncomparableError<T>) -> bool {
        false
    }
}

impl<T: fmt::Display> fmt::Display for IncomparableError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.err.fmt(f)
    }
}

impl<T: fmt::Debug> fmt::Debug for IncomparableError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.err.fmt(f)
    }
}

/// Errors raised when constructing a CLValue or reading a native value
/// back out of one.
#[derive(Debug, PartialEq)]
pub enum CLValueError {
    /// Encoding or decoding the canonical byte form failed
    Serialization(SerializationError),
    /// A constructor input's magnitude exceeds the target kind's width
    Range { kind: CLType, max_bytes: u32 },
    /// An accessor was invoked against a value of a different kind
    TypeMismatch { expected: String, found: CLType },
}

impl fmt::Display for CLValueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CLValueError::Serialization(e) => {
                write!(f, "Serialization error: {e}")
            }
            CLValueError::Range { kind, max_bytes } => {
                write!(
                    f,
                    "Magnitude does not fit in {kind} (at most {max_bytes} bytes)"
                )
            }
            CLValueError::TypeMismatch { expected, found } => {
                write!(f, "Expected {expected} but the value is typed {found}")
            }
        }
    }
}

impl error::Error for CLValueError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            CLValueError::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SerializationError> for CLValueError {
    fn from(e: SerializationError) -> Self {
        CLValueError::Serialization(e)
    }
}
