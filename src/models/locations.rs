//! Fixed set of location labels a listing can carry.
//! Singapore MRT stations, which double as district names.

pub const LOCATIONS: &[&str] = &[
    "Admiralty",
    "Aljunied",
    "Ang Mo Kio",
    "Bartley",
    "Bayfront",
    "Beauty World",
    "Bedok",
    "Bedok North",
    "Bedok Reservoir",
    "Bencoolen",
    "Bendemeer",
    "Bishan",
    "Boon Keng",
    "Boon Lay",
    "Botanic Gardens",
    "Braddell",
    "Bras Basah",
    "Buangkok",
    "Bugis",
    "Bukit Batok",
    "Bukit Gombak",
    "Bukit Panjang",
    "Buona Vista",
    "Caldecott",
    "Canberra",
    "Cashew",
    "Changi Airport",
    "Chinatown",
    "Chinese Garden",
    "Choa Chu Kang",
    "City Hall",
    "Clarke Quay",
    "Clementi",
    "Commonwealth",
    "Dakota",
    "Dhoby Ghaut",
    "Dover",
    "Downtown",
    "Esplanade",
    "Eunos",
    "Expo",
    "Farrer Park",
    "Farrer Road",
    "Fort Canning",
    "Geylang Bahru",
    "Gul Circle",
    "HarbourFront",
    "Haw Par Villa",
    "Hillview",
    "Holland Village",
    "Hougang",
    "Jalan Besar",
    "Joo Koon",
    "Jurong East",
    "Kaki Bukit",
    "Kallang",
    "Kembangan",
    "Kent Ridge",
    "Khatib",
    "King Albert Park",
    "Kovan",
    "Kranji",
    "Labrador Park",
    "Lakeside",
    "Lavender",
    "Little India",
    "Lorong Chuan",
    "MacPherson",
    "Marina Bay",
    "Marina South Pier",
    "Marsiling",
    "Marymount",
    "Mattar",
    "Maxwell",
    "Mayflower",
    "Newton",
    "Nicoll Highway",
    "Novena",
    "Orchard",
    "Outram Park",
    "Pasir Panjang",
    "Pasir Ris",
    "Paya Lebar",
    "Pioneer",
    "Potong Pasir",
    "Promenade",
    "Punggol",
    "Queenstown",
    "Raffles Place",
    "Redhill",
    "Rochor",
    "Sembawang",
    "Sengkang",
    "Serangoon",
    "Simei",
    "Sixth Avenue",
    "Somerset",
    "Stadium",
    "Stevens",
    "Tai Seng",
    "Tampines",
    "Tampines East",
    "Tampines West",
    "Tan Kah Kee",
    "Tanah Merah",
    "Tanjong Pagar",
    "Telok Ayer",
    "Telok Blangah",
    "Tiong Bahru",
    "Toa Payoh",
    "Tuas Crescent",
    "Tuas Link",
    "Tuas West Road",
    "Upper Changi",
    "Upper Thomson",
    "Woodlands",
    "Woodleigh",
    "Yew Tee",
    "Yio Chu Kang",
    "Yishun",
];

/// Exact, case-sensitive membership check
pub fn is_known(location: &str) -> bool {
    LOCATIONS.contains(&location)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locations_are_unique() {
        let mut sorted = LOCATIONS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), LOCATIONS.len());
    }

    #[test]
    fn membership_is_exact() {
        assert!(is_known("Punggol"));
        assert!(is_known("HarbourFront"));
        assert!(!is_known("punggol"));
        assert!(!is_known(""));
    }
}
