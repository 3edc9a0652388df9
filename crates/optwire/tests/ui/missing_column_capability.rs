// A payload type may join the container without any column capability,
// but the first scan call must then fail to compile, not at runtime.

use optwire::{column::ColumnValue, prelude::*};

#[derive(Clone, Debug, Default, PartialEq)]
struct Payload(Vec<u8>);

impl Field for Payload {}

fn main() {
    let mut field: Optional<Payload> = Optional::default();
    let _ = field.scan(&ColumnValue::Null);
}
