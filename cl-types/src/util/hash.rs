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

use std::fmt::Write;

use crate::util::HexError;

/// Convert a hexadecimal-encoded string to its corresponding bytes
pub fn hex_bytes(s: &str) -> Result<Vec<u8>, HexError> {
    if s.len() % 2 != 0 {
        return Err(HexError::BadLength(s.len()));
    }
    let mut v = Vec::with_capacity(s.len() / 2);
    let mut iter = s.chars();
    while let (Some(f), Some(g)) = (iter.next(), iter.next()) {
        match (f.to_digit(16), g.to_digit(16)) {
            (None, _) => return Err(HexError::BadCharacter(f)),
            (_, None) => return Err(HexError::BadCharacter(g)),
            (Some(f), Some(g)) => v.push((f * 0x10 + g) as u8),
        }
    }
    Ok(v)
}

/// Convert a slice of u8 to a hex string
pub fn to_hex(s: &[u8]) -> String {
    let mut r = String::with_capacity(s.len() * 2);
    for b in s.iter() {
        write!(r, "{b:02x}").unwrap();
    }
    r
}
