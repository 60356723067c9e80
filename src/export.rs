//! Export of a built document back to plain JSON.
//!
//! Only accepted members survive: anything dropped during validation is
//! absent from the output.

use serde_json::{Map, Value};

use crate::access::{Accessable, Member, Shape};

/// Convert an element and everything below it to a JSON value.
pub fn to_value(node: &dyn Accessable) -> Value {
    let members = node.members();
    match members.shape() {
        Shape::Null => Value::Null,
        Shape::Array => Value::Array(members.iter().map(|(_, m)| member_to_value(m)).collect()),
        Shape::Object => {
            let mut object = Map::new();
            for (key, member) in members.iter() {
                object.insert(key.to_string(), member_to_value(member));
            }
            Value::Object(object)
        }
    }
}

fn member_to_value(member: &Member) -> Value {
    match member {
        Member::Value(value) => value.clone(),
        Member::Node(node) => to_value(node.as_ref()),
    }
}
