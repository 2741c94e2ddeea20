//! Airport display labels

/// Render an airport the way the rest of the system refers to it,
/// e.g. "Heathrow (London)".
pub fn airport_label(name: &str, closest_big_city: &str) -> String {
    format!("{} ({})", name, closest_big_city)
}

/// Render a route as its endpoint pair, e.g.
/// "Heathrow (London) - Boryspil (Kyiv)".
pub fn route_label(source: &str, destination: &str) -> String {
    format!("{} - {}", source, destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn airport_label_includes_city() {
        assert_eq!(airport_label("Heathrow", "London"), "Heathrow (London)");
    }

    #[test]
    fn route_label_joins_endpoints() {
        let source = airport_label("Heathrow", "London");
        let destination = airport_label("Boryspil", "Kyiv");
        assert_eq!(
            route_label(&source, &destination),
            "Heathrow (London) - Boryspil (Kyiv)"
        );
    }
}
