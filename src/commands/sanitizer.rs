//! Input normalization applied before matching.

/// Normalizes a raw input line.
///
/// Trims surrounding whitespace. When the line holds more than two double
/// quotes, the first and last quote are kept as the delimiters of a single
/// quoted argument and every double quote between them becomes a single quote.
pub fn sanitize(raw: &str) -> String {
    let line = raw.trim();

    if line.matches('"').count() <= 2 {
        return line.to_string();
    }

    // Both indices exist: there are at least three quotes.
    let (Some(first), Some(last)) = (line.find('"'), line.rfind('"')) else {
        return line.to_string();
    };

    let inner = line[first + 1..last].replace('"', "'");
    format!("{}{}{}", &line[..=first], inner, &line[last..])
}
