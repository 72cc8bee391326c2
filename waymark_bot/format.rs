use waymark_app::distance::RankedLocation;
use waymark_types::location::Location;

/// A formatted location, ready to be rendered by the transport.
/// Never persisted; rebuilt on every query.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayUnit {
    pub title: String,
    pub description: String,
    pub position: String,
    pub added_by: String,
    pub image_url: Option<String>,
    pub footer: Option<String>,
}

pub fn location_to_unit(location: &Location) -> DisplayUnit {
    DisplayUnit {
        title: format!(
            "#{} {}",
            location.id,
            location.name.as_deref().unwrap_or("No name")
        ),
        description: location
            .description
            .as_deref()
            .unwrap_or("No description")
            .to_string(),
        // Raw coordinate values, no rounding.
        position: format!("{}, {}, {}", location.x, location.y, location.z),
        added_by: format!("<@{}>", location.added_by),
        image_url: location.screenshot_url.clone(),
        footer: None,
    }
}

/// Same as `location_to_unit`, with the rounded distance in the footer.
pub fn ranked_to_unit(ranked: &RankedLocation) -> DisplayUnit {
    let mut unit = location_to_unit(&ranked.location);
    unit.footer = Some(format!("{} blocks away from you", ranked.distance.round()));
    unit
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use waymark_types::location::Location;

    use super::*;

    fn location() -> Location {
        Location {
            id: 3,
            x: 120.5,
            y: 64.0,
            z: -233.0,
            name: None,
            description: None,
            added_by: "1234".to_string(),
            screenshot_url: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_defaults_for_missing_name_and_description() {
        let unit = location_to_unit(&location());
        assert_eq!(unit.title, "#3 No name");
        assert_eq!(unit.description, "No description");
    }

    #[test]
    fn test_position_and_attribution() {
        let unit = location_to_unit(&location());
        assert_eq!(unit.position, "120.5, 64, -233");
        assert_eq!(unit.added_by, "<@1234>");
        assert_eq!(unit.image_url, None);
        assert_eq!(unit.footer, None);
    }

    #[test]
    fn test_named_location_with_screenshot() {
        let mut loc = location();
        loc.name = Some("Spawn".to_string());
        loc.description = Some("Where it all began".to_string());
        loc.screenshot_url = Some("https://example.com/spawn.png".to_string());

        let unit = location_to_unit(&loc);
        assert_eq!(unit.title, "#3 Spawn");
        assert_eq!(unit.description, "Where it all began");
        assert_eq!(
            unit.image_url,
            Some("https://example.com/spawn.png".to_string())
        );
    }

    #[test]
    fn test_distance_footer_is_rounded() {
        let ranked = RankedLocation {
            location: location(),
            distance: 706.7,
        };
        let unit = ranked_to_unit(&ranked);
        assert_eq!(unit.footer, Some("707 blocks away from you".to_string()));
    }
}
