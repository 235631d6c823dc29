//! Number formatting shared by token display and operation descriptions.

/// Formats a number in its shortest decimal form.
///
/// Negative zero is formatted as `0`, and infinities as `∞` / `-∞`.
pub fn number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        format!("{}∞", if n.is_sign_negative() { "-" } else { "" })
    } else if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}
