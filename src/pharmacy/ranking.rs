use crate::geo::{google_maps_url, haversine_km, round_to};
use crate::models::pharmacy::{DEFAULT_ADDRESS, DEFAULT_OPENING_HOURS, DEFAULT_PHONE};
use crate::models::{Location, PharmacyRecord};
use crate::overpass::OverpassElement;

/// Maximum number of pharmacies returned by a search
pub const DEFAULT_RESULT_LIMIT: usize = 8;

/// Build a record from one element, or `None` when it has no coordinates or name
#[must_use]
pub fn pharmacy_from_element(origin: &Location, element: &OverpassElement) -> Option<PharmacyRecord> {
    let (Some(latitude), Some(longitude)) = (element.lat, element.lon) else {
        return None;
    };
    let name = element.display_name()?;

    let place = Location::new(latitude, longitude);
    let distance_km = round_to(haversine_km(origin, &place), 2);

    Some(PharmacyRecord {
        name: name.to_string(),
        address: element
            .first_tag(&["addr:full", "addr:street"])
            .unwrap_or(DEFAULT_ADDRESS)
            .to_string(),
        opening_hours: element
            .tag("opening_hours")
            .unwrap_or(DEFAULT_OPENING_HOURS)
            .to_string(),
        phone: element
            .tag("contact:phone")
            .unwrap_or(DEFAULT_PHONE)
            .to_string(),
        latitude,
        longitude,
        distance_km,
        maps_url: google_maps_url(&place),
    })
}

/// Keep usable elements, sort them nearest first and cut to `limit`
#[must_use]
pub fn rank_pharmacies(
    origin: &Location,
    elements: &[OverpassElement],
    limit: usize,
) -> Vec<PharmacyRecord> {
    let mut pharmacies: Vec<PharmacyRecord> = elements
        .iter()
        .filter_map(|element| pharmacy_from_element(origin, element))
        .collect();

    // stable, so equal distances keep upstream order
    pharmacies.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    pharmacies.truncate(limit);
    pharmacies
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const ORIGIN: Location = Location {
        latitude: 24.345_942,
        longitude: 54.539_434,
    };

    fn element(lat: Option<f64>, lon: Option<f64>, tags: &[(&str, &str)]) -> OverpassElement {
        OverpassElement {
            kind: Some("node".to_string()),
            id: Some(1),
            lat,
            lon,
            tags: tags
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_al_shifa_example() {
        let elements = vec![element(
            Some(24.35),
            Some(54.55),
            &[("name", "Al Shifa Pharmacy")],
        )];

        let result = rank_pharmacies(&ORIGIN, &elements, DEFAULT_RESULT_LIMIT);
        assert_eq!(result.len(), 1);
        let pharmacy = &result[0];
        assert_eq!(pharmacy.name, "Al Shifa Pharmacy");
        assert!(pharmacy.distance_km > 0.0);
        assert_eq!(
            pharmacy.maps_url,
            "https://www.google.com/maps/search/?api=1&query=24.35,54.55"
        );
        assert_eq!(pharmacy.address, "Abu Dhabi, UAE");
        assert_eq!(pharmacy.opening_hours, "9:00");
        assert_eq!(pharmacy.phone, "N/A");
    }

    #[test]
    fn test_truncates_to_eight_sorted_ascending() {
        let elements: Vec<OverpassElement> = (0..10)
            .rev()
            .map(|i| {
                let offset = 0.002 * f64::from(i + 1);
                element(
                    Some(ORIGIN.latitude + offset),
                    Some(ORIGIN.longitude),
                    &[("name", "Pharmacy")],
                )
            })
            .collect();

        let result = rank_pharmacies(&ORIGIN, &elements, DEFAULT_RESULT_LIMIT);
        assert_eq!(result.len(), 8);
        assert!(
            result
                .windows(2)
                .all(|pair| pair[0].distance_km <= pair[1].distance_km)
        );
        // the two farthest were dropped
        let farthest = ORIGIN.latitude + 0.002 * 9.0;
        assert!(result.iter().all(|p| p.latitude < farthest));
    }

    #[rstest]
    #[case::no_name_or_operator(element(Some(24.35), Some(54.55), &[("amenity", "pharmacy")]))]
    #[case::missing_lat(element(None, Some(54.55), &[("name", "Boots")]))]
    #[case::missing_lon(element(Some(24.35), None, &[("name", "Boots")]))]
    #[case::empty_name(element(Some(24.35), Some(54.55), &[("name", "")]))]
    fn test_unusable_elements_are_skipped(#[case] bad: OverpassElement) {
        let good = element(Some(24.36), Some(54.56), &[("name", "Life Pharmacy")]);
        let result = rank_pharmacies(&ORIGIN, &[bad, good], DEFAULT_RESULT_LIMIT);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Life Pharmacy");
    }

    #[test]
    fn test_operator_used_when_name_missing() {
        let elements = vec![element(
            Some(24.35),
            Some(54.55),
            &[("operator", "Aster Pharmacies Group")],
        )];
        let result = rank_pharmacies(&ORIGIN, &elements, DEFAULT_RESULT_LIMIT);
        assert_eq!(result[0].name, "Aster Pharmacies Group");
    }

    #[rstest]
    #[case(&[("addr:full", "Villa 3, Khalifa City"), ("addr:street", "Corniche Rd")], "Villa 3, Khalifa City")]
    #[case(&[("addr:street", "Corniche Rd")], "Corniche Rd")]
    #[case(&[], "Abu Dhabi, UAE")]
    fn test_address_fallback(#[case] address_tags: &[(&str, &str)], #[case] expected: &str) {
        let mut tags = vec![("name", "Medicina")];
        tags.extend_from_slice(address_tags);
        let elements = vec![element(Some(24.35), Some(54.55), &tags)];

        let result = rank_pharmacies(&ORIGIN, &elements, DEFAULT_RESULT_LIMIT);
        assert_eq!(result[0].address, expected);
    }

    #[test]
    fn test_optional_tags_are_copied() {
        let elements = vec![element(
            Some(24.35),
            Some(54.55),
            &[
                ("name", "Medicina"),
                ("opening_hours", "24/7"),
                ("contact:phone", "+971 2 000 0000"),
            ],
        )];
        let result = rank_pharmacies(&ORIGIN, &elements, DEFAULT_RESULT_LIMIT);
        assert_eq!(result[0].opening_hours, "24/7");
        assert_eq!(result[0].phone, "+971 2 000 0000");
    }

    #[test]
    fn test_empty_optional_tags_are_kept_as_is() {
        let elements = vec![element(
            Some(24.35),
            Some(54.55),
            &[
                ("name", "Medicina"),
                ("addr:full", ""),
                ("addr:street", "Corniche Rd"),
                ("opening_hours", ""),
                ("contact:phone", ""),
            ],
        )];
        let result = rank_pharmacies(&ORIGIN, &elements, DEFAULT_RESULT_LIMIT);
        assert_eq!(result[0].address, "");
        assert_eq!(result[0].opening_hours, "");
        assert_eq!(result[0].phone, "");
    }

    #[test]
    fn test_distance_is_rounded() {
        let elements = vec![element(Some(24.4), Some(54.6), &[("name", "Far")])];
        let result = rank_pharmacies(&ORIGIN, &elements, DEFAULT_RESULT_LIMIT);
        let d = result[0].distance_km;
        assert_eq!(d, (d * 100.0).round() / 100.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_pharmacies(&ORIGIN, &[], DEFAULT_RESULT_LIMIT).is_empty());
    }
}
