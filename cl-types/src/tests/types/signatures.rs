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

use serde_json::json;

use crate::types::signatures::CLType;

fn test_json_form(t: CLType, expected: serde_json::Value) {
    assert_eq!(serde_json::to_value(&t).unwrap(), expected);
    assert_eq!(serde_json::from_value::<CLType>(expected).unwrap(), t);
}

#[test]
fn test_simple_kinds_serialize_as_bare_names() {
    let kinds = [
        (CLType::Bool, "Bool"),
        (CLType::I32, "I32"),
        (CLType::I64, "I64"),
        (CLType::U8, "U8"),
        (CLType::U32, "U32"),
        (CLType::U64, "U64"),
        (CLType::U128, "U128"),
        (CLType::U256, "U256"),
        (CLType::U512, "U512"),
        (CLType::Unit, "Unit"),
        (CLType::String, "String"),
        (CLType::Key, "Key"),
        (CLType::URef, "URef"),
        (CLType::PublicKey, "PublicKey"),
        (CLType::Any, "Any"),
    ];
    for (kind, name) in kinds {
        test_json_form(kind.clone(), json!(name));
        assert_eq!(kind.to_string(), name);
    }
}

#[test]
fn test_composite_kinds_serialize_as_single_entry_maps() {
    test_json_form(CLType::option(CLType::Bool), json!({"Option": "Bool"}));
    test_json_form(CLType::list(CLType::U256), json!({"List": "U256"}));
    test_json_form(CLType::ByteArray(32), json!({"ByteArray": 32}));
    test_json_form(
        CLType::result(CLType::Unit, CLType::String),
        json!({"Result": {"ok": "Unit", "err": "String"}}),
    );
    test_json_form(
        CLType::map(CLType::String, CLType::U64),
        json!({"Map": {"key": "String", "value": "U64"}}),
    );
    test_json_form(CLType::tuple1(CLType::Bool), json!({"Tuple1": ["Bool"]}));
    test_json_form(
        CLType::tuple2(CLType::U128, CLType::tuple1(CLType::Bool)),
        json!({"Tuple2": ["U128", {"Tuple1": ["Bool"]}]}),
    );
    test_json_form(
        CLType::tuple3(CLType::String, CLType::U64, CLType::Bool),
        json!({"Tuple3": ["String", "U64", "Bool"]}),
    );
    // nesting composes
    test_json_form(
        CLType::option(CLType::list(CLType::ByteArray(4))),
        json!({"Option": {"List": {"ByteArray": 4}}}),
    );
}

#[test]
fn test_unknown_shapes_rejected() {
    assert!(serde_json::from_value::<CLType>(json!("Bogus")).is_err());
    assert!(serde_json::from_value::<CLType>(json!({"Option": "Bogus"})).is_err());
    assert!(serde_json::from_value::<CLType>(json!({"Tuple1": ["Bool", "Bool"]})).is_err());
    assert!(serde_json::from_value::<CLType>(json!({"Map": {"key": "String"}})).is_err());
    assert!(serde_json::from_value::<CLType>(json!(42)).is_err());
}

#[test]
fn test_display_recursion() {
    assert_eq!(CLType::option(CLType::Bool).to_string(), "Option(Bool)");
    assert_eq!(
        CLType::map(CLType::String, CLType::U64).to_string(),
        "Map(String, U64)"
    );
    assert_eq!(
        CLType::result(CLType::Unit, CLType::String).to_string(),
        "Result(Unit, String)"
    );
    assert_eq!(CLType::ByteArray(32).to_string(), "ByteArray(32)");
    assert_eq!(
        CLType::tuple3(
            CLType::String,
            CLType::U64,
            CLType::list(CLType::option(CLType::U8))
        )
        .to_string(),
        "Tuple3(String, U64, List(Option(U8)))"
    );
}

#[test]
fn test_contains_any() {
    assert!(CLType::Any.contains_any());
    assert!(CLType::list(CLType::Any).contains_any());
    assert!(CLType::map(CLType::String, CLType::option(CLType::Any)).contains_any());
    assert!(CLType::tuple3(CLType::Bool, CLType::Bool, CLType::Any).contains_any());
    assert!(CLType::result(CLType::Any, CLType::Unit).contains_any());

    assert!(!CLType::Bool.contains_any());
    assert!(!CLType::tuple2(CLType::U512, CLType::list(CLType::String)).contains_any());
}
