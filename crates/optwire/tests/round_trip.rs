//! Property round-trips for the three boundaries.

use optwire::prelude::*;
use proptest::prelude::*;

fn arb_timestamp() -> impl Strategy<Value = Timestamp> {
    // calendar-rendering range: keep clear of the chrono year cap
    (0_u64..253_402_300_799).prop_map(Timestamp::from_seconds)
}

fn arb_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.-]{0,16}"
}

proptest! {
    #[test]
    fn json_round_trip_i64(v in any::<i64>()) {
        let field = Optional::some(v);
        let encoded = serde_json::to_string(&field).unwrap();
        let decoded: Optional<i64> = serde_json::from_str(&encoded).unwrap();

        prop_assert_eq!(decoded, field);
    }

    #[test]
    fn json_round_trip_string(v in arb_text()) {
        let field = Optional::some(v);
        let encoded = serde_json::to_string(&field).unwrap();
        let decoded: Optional<String> = serde_json::from_str(&encoded).unwrap();

        prop_assert_eq!(decoded, field);
    }

    #[test]
    fn json_round_trip_timestamp(t in arb_timestamp()) {
        let field = Optional::some(t);
        let encoded = serde_json::to_string(&field).unwrap();
        let decoded: Optional<Timestamp> = serde_json::from_str(&encoded).unwrap();

        prop_assert_eq!(decoded, field);
    }

    #[test]
    fn text_round_trip_i64(v in any::<i64>()) {
        let field = Optional::some(v);
        let mut decoded = Optional::<i64>::none();
        decoded.decode_text(&field.encode_text().unwrap()).unwrap();

        prop_assert_eq!(decoded, field);
    }

    #[test]
    fn text_round_trip_bool(v in any::<bool>()) {
        let field = Optional::some(v);
        let mut decoded = Optional::<bool>::none();
        decoded.decode_text(&field.encode_text().unwrap()).unwrap();

        prop_assert_eq!(decoded, field);
    }

    // Strings collapse onto the absent/present partition: empty (and the
    // "null" literal) decode as absent, everything else round-trips.
    #[test]
    fn text_round_trip_string_partition(v in arb_text()) {
        let field = Optional::some(v.clone());
        let mut decoded = Optional::<String>::none();
        decoded.decode_text(&field.encode_text().unwrap()).unwrap();

        if v.is_empty() || v == "null" {
            prop_assert!(!decoded.is_valid());
        } else {
            prop_assert_eq!(decoded, field);
        }
    }

    // decode-then-encode identity on canonical decimal tokens
    #[test]
    fn text_decode_then_encode_is_identity(v in "0|-?[1-9][0-9]{0,17}") {
        let mut field = Optional::<i64>::none();
        field.decode_text(&v).unwrap();

        prop_assert_eq!(field.encode_text().unwrap(), v);
    }

    #[test]
    fn column_round_trip_i64(v in any::<i64>()) {
        let field = Optional::some(v);
        let mut decoded = Optional::<i64>::none();
        decoded.scan(&field.value_out().unwrap()).unwrap();

        prop_assert_eq!(decoded, field);
    }

    #[test]
    fn column_round_trip_string(v in arb_text()) {
        let field = Optional::some(v);
        let mut decoded = Optional::<String>::none();
        decoded.scan(&field.value_out().unwrap()).unwrap();

        prop_assert_eq!(decoded, field);
    }

    #[test]
    fn column_round_trip_timestamp(t in arb_timestamp()) {
        let field = Optional::some(t);
        let mut decoded = Optional::<Timestamp>::none();
        decoded.scan(&field.value_out().unwrap()).unwrap();

        prop_assert_eq!(decoded, field);
    }

    // Scanning null wins over any prior state.
    #[test]
    fn scan_null_resets_any_prior_state(v in any::<i64>(), valid in any::<bool>()) {
        let mut field = Optional::new(if valid { v } else { 0 }, valid);
        field.scan(&ColumnValue::Null).unwrap();

        prop_assert!(!field.is_valid());
        prop_assert_eq!(field.value_or_zero(), 0);
    }

}

#[test]
fn absent_round_trips_everywhere() {
    let field = Optional::<i64>::none();

    let json = serde_json::to_string(&field).unwrap();
    assert_eq!(json, "null");
    let decoded: Optional<i64> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, field);

    assert_eq!(field.encode_text().unwrap(), "");
    assert_eq!(field.value_out().unwrap(), ColumnValue::Null);
}
