//! Number formatting shared by every value that ends up on the wire.

/// Format a number the way the inspector protocol prints it.
///
/// Integral values carry no fraction (`10`, not `10.0`), negative zero prints
/// as `0`, and non-finite values use `NaN`, `Infinity` and `-Infinity`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
