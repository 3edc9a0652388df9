// Reference-typed payloads must be rejected at the type level: a wrapped
// reference has no zero value and would alias external mutable state.

use optwire::Optional;

fn main() {
    let name = String::from("abc");
    let _field: Optional<&String> = Optional::some(&name);
}
