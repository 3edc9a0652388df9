// Same rule for the textual boundary: no text capability, no decode.

use optwire::{prelude::*, types::Timestamp};

#[derive(Clone, Debug, Default, PartialEq)]
struct Window {
    start: Timestamp,
    end: Timestamp,
}

impl Field for Window {}

fn main() {
    let mut field: Optional<Window> = Optional::default();
    let _ = field.decode_text("2024-01-01/2024-02-01");
}
