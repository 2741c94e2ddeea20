//! Crew display labels

/// "First Last"
pub fn full_name(first_name: &str, last_name: &str) -> String {
    format!("{} {}", first_name, last_name)
}

/// "Position: First Last", the label flights use for assigned crew
pub fn crew_label(position: &str, first_name: &str, last_name: &str) -> String {
    format!("{}: {}", position, full_name(first_name, last_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crew_label_leads_with_position() {
        assert_eq!(
            crew_label("Pilot", "Amelia", "Earhart"),
            "Pilot: Amelia Earhart"
        );
    }
}
