//! Regions and the area codes that can be searched in them

use std::collections::BTreeMap;

/// US states and their area codes
const US_STATES: &[(&str, &[&str])] = &[
    ("Alabama", &["205", "251", "256", "334", "659", "938"]),
    ("Alaska", &["907"]),
    ("Arizona", &["480", "520", "602", "623", "928"]),
    ("Arkansas", &["479", "501", "870"]),
    ("California", &["209", "213", "279", "310", "323", "408", "415", "424", "442", "510", "530", "559", "562", "619", "626", "628", "650", "657", "661", "669", "707", "714", "747", "760", "805", "818", "820", "831", "840", "858", "909", "916", "925", "949", "951"]),
    ("Colorado", &["303", "719", "720", "970", "983"]),
    ("Connecticut", &["203", "475", "860", "959"]),
    ("Delaware", &["302"]),
    ("Florida", &["239", "305", "321", "352", "386", "407", "448", "561", "645", "656", "689", "727", "754", "772", "786", "813", "850", "863", "904", "941", "954"]),
    ("Georgia", &["229", "404", "470", "478", "678", "706", "762", "770", "912", "943"]),
    ("Hawaii", &["808"]),
    ("Idaho", &["208", "986"]),
    ("Illinois", &["217", "224", "309", "312", "331", "447", "464", "618", "630", "708", "730", "773", "779", "815", "847", "872"]),
    ("Indiana", &["219", "260", "317", "463", "574", "765", "812", "930"]),
    ("Iowa", &["319", "515", "563", "641", "712"]),
    ("Kansas", &["316", "620", "785", "913"]),
    ("Kentucky", &["270", "364", "502", "606", "859"]),
    ("Louisiana", &["225", "318", "337", "504", "985"]),
    ("Maine", &["207"]),
    ("Maryland", &["227", "240", "301", "410", "443", "667"]),
    ("Massachusetts", &["339", "351", "413", "508", "617", "774", "781", "857", "978"]),
    ("Michigan", &["231", "248", "269", "313", "517", "586", "616", "679", "734", "810", "906", "947", "989"]),
    ("Minnesota", &["218", "320", "507", "612", "651", "763", "952"]),
    ("Mississippi", &["228", "601", "662", "769"]),
    ("Missouri", &["314", "417", "573", "636", "660", "816"]),
    ("Montana", &["406"]),
    ("Nebraska", &["308", "402", "531"]),
    ("Nevada", &["702", "725", "775"]),
    ("New Hampshire", &["603"]),
    ("New Jersey", &["201", "551", "609", "640", "732", "848", "856", "862", "908", "973"]),
    ("New Mexico", &["505", "575"]),
    ("New York", &["212", "315", "332", "347", "516", "518", "585", "607", "631", "646", "680", "716", "718", "838", "845", "914", "917", "929", "934"]),
    ("North Carolina", &["252", "336", "704", "743", "828", "910", "919", "980", "984"]),
    ("North Dakota", &["701"]),
    ("Ohio", &["216", "220", "234", "283", "326", "330", "380", "419", "440", "513", "567", "614", "740", "937"]),
    ("Oklahoma", &["405", "539", "572", "580", "918"]),
    ("Oregon", &["458", "503", "541", "971"]),
    ("Pennsylvania", &["215", "223", "267", "272", "412", "445", "484", "570", "582", "610", "717", "724", "814", "835", "878"]),
    ("Rhode Island", &["401"]),
    ("South Carolina", &["803", "821", "839", "843", "854", "864"]),
    ("South Dakota", &["605"]),
    ("Tennessee", &["423", "615", "629", "731", "865", "901", "931"]),
    ("Texas", &["210", "214", "254", "281", "325", "346", "361", "409", "430", "432", "469", "512", "682", "713", "726", "737", "806", "817", "830", "832", "903", "915", "936", "940", "945", "956", "972", "979"]),
    ("Utah", &["385", "435", "801"]),
    ("Vermont", &["802"]),
    ("Virginia", &["276", "434", "540", "571", "703", "757", "804", "826", "948"]),
    ("Washington", &["206", "253", "360", "425", "509", "564"]),
    ("West Virginia", &["304", "681"]),
    ("Wisconsin", &["262", "274", "414", "534", "608", "715", "920"]),
    ("Wyoming", &["307"]),
];

/// Lookup table from region name to its area codes
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegionCatalog {
    regions: BTreeMap<String, Vec<String>>,
}

impl RegionCatalog {
    /// Empty catalog; fill it with [`RegionCatalog::with_region`]
    pub fn new() -> Self {
        Self::default()
    }

    /// The 50 US states
    pub fn us_states() -> Self {
        US_STATES
            .iter()
            .fold(Self::new(), |catalog, (name, codes)| {
                catalog.with_region(*name, codes.iter().copied())
            })
    }

    pub fn with_region<I, S>(mut self, name: impl Into<String>, area_codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regions.insert(
            name.into(),
            area_codes.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Region names in alphabetical order
    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(|s| s.as_str())
    }

    /// Area codes of a region, in catalog order
    pub fn area_codes(&self, region: &str) -> Option<&[String]> {
        self.regions.get(region).map(|codes| codes.as_slice())
    }

    pub fn contains_region(&self, region: &str) -> bool {
        self.regions.contains_key(region)
    }

    pub fn has_area_code(&self, region: &str, code: &str) -> bool {
        self.area_codes(region)
            .is_some_and(|codes| codes.iter().any(|c| c == code))
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_us_catalog_has_every_state() {
        let catalog = RegionCatalog::us_states();
        assert_eq!(catalog.len(), 50);
        assert_eq!(catalog.regions().next(), Some("Alabama"));
        assert_eq!(catalog.regions().last(), Some("Wyoming"));
    }

    #[test]
    fn test_area_code_lookup() {
        let catalog = RegionCatalog::us_states();
        assert_eq!(
            catalog.area_codes("Alaska"),
            Some(&["907".to_string()][..])
        );
        assert!(catalog.has_area_code("California", "415"));
        assert!(!catalog.has_area_code("California", "212"));
        assert!(!catalog.has_area_code("Atlantis", "000"));
        assert_eq!(catalog.area_codes("Atlantis"), None);
    }

    #[test]
    fn test_every_code_is_three_digits() {
        let catalog = RegionCatalog::us_states();
        for region in catalog.regions() {
            let codes = catalog.area_codes(region).unwrap_or_default();
            assert!(!codes.is_empty(), "{} has no area codes", region);
            for code in codes {
                assert!(code.len() == 3 && code.chars().all(|c| c.is_ascii_digit()));
            }
        }
    }
}
