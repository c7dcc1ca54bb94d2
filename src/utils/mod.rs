use urlencoding::encode;

/// Renders ordered key/value pairs as a query string, percent-encoding each
/// value so an identifier can't smuggle in extra parameters.
pub fn encode_query(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
