use crate::models::Location;

/// Overpass QL query for every node, way and relation tagged
/// `amenity=pharmacy` within `radius_m` meters of `origin`.
#[must_use]
pub fn build_pharmacy_query(origin: &Location, radius_m: i64, timeout_secs: u32) -> String {
    format!(
        "[out:json][timeout:{timeout_secs}];\nnwr[amenity=pharmacy](around:{radius_m},{},{});\nout center;\n",
        origin.latitude, origin.longitude
    )
}
