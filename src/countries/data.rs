//! Built-in country reference data: ISO codes, short names and land borders.
//!
//! Border lists use ISO 3166-1 alpha-3 codes and are symmetric. A handful of
//! non-sovereign territories (Western Sahara, French Guiana, Gibraltar, Hong
//! Kong, Macau) are included because they appear in other countries' borders.

pub struct CountryRecord {
    pub code: &'static str,
    pub iso2: &'static str,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub borders: &'static [&'static str],
}

macro_rules! country {
    ($code:literal, $iso2:literal, $name:literal, [$($alias:literal),*], [$($border:literal),*]) => {
        CountryRecord {
            code: $code,
            iso2: $iso2,
            name: $name,
            aliases: &[$($alias),*],
            borders: &[$($border),*],
        }
    };
}

pub const COUNTRIES: &[CountryRecord] = &[
    // ─── Africa ─────────────────────────────────────────────────
    country!("DZA", "DZ", "Algeria", ["People's Democratic Republic of Algeria"], ["TUN", "LBY", "NER", "ESH", "MRT", "MLI", "MAR"]),
    country!("AGO", "AO", "Angola", [], ["COG", "COD", "ZMB", "NAM"]),
    country!("BEN", "BJ", "Benin", [], ["BFA", "NER", "NGA", "TGO"]),
    country!("BWA", "BW", "Botswana", [], ["NAM", "ZAF", "ZMB", "ZWE"]),
    country!("BFA", "BF", "Burkina Faso", [], ["BEN", "CIV", "GHA", "MLI", "NER", "TGO"]),
    country!("BDI", "BI", "Burundi", [], ["COD", "RWA", "TZA"]),
    country!("CMR", "CM", "Cameroon", [], ["CAF", "TCD", "COG", "GNQ", "GAB", "NGA"]),
    country!("CPV", "CV", "Cabo Verde", ["Cape Verde"], []),
    country!("CAF", "CF", "Central African Republic", [], ["CMR", "TCD", "COD", "COG", "SSD", "SDN"]),
    country!("TCD", "TD", "Chad", [], ["CMR", "CAF", "LBY", "NER", "NGA", "SDN"]),
    country!("COM", "KM", "Comoros", [], []),
    country!("COG", "CG", "Congo Republic", ["Republic of the Congo", "Congo", "Congo-Brazzaville"], ["AGO", "CMR", "CAF", "COD", "GAB"]),
    country!("COD", "CD", "DR Congo", ["Democratic Republic of the Congo", "Congo-Kinshasa", "DRC"], ["AGO", "BDI", "CAF", "COG", "RWA", "SSD", "TZA", "UGA", "ZMB"]),
    country!("CIV", "CI", "Cote d'Ivoire", ["Ivory Coast", "Côte d'Ivoire"], ["BFA", "GHA", "GIN", "LBR", "MLI"]),
    country!("DJI", "DJ", "Djibouti", [], ["ERI", "ETH", "SOM"]),
    country!("EGY", "EG", "Egypt", ["Arab Republic of Egypt"], ["ISR", "LBY", "PSE", "SDN"]),
    country!("GNQ", "GQ", "Equatorial Guinea", [], ["CMR", "GAB"]),
    country!("ERI", "ER", "Eritrea", [], ["DJI", "ETH", "SDN"]),
    country!("SWZ", "SZ", "Eswatini", ["Swaziland"], ["MOZ", "ZAF"]),
    country!("ETH", "ET", "Ethiopia", [], ["DJI", "ERI", "KEN", "SOM", "SSD", "SDN"]),
    country!("GAB", "GA", "Gabon", [], ["CMR", "COG", "GNQ"]),
    country!("GMB", "GM", "Gambia", ["The Gambia"], ["SEN"]),
    country!("GHA", "GH", "Ghana", [], ["BFA", "CIV", "TGO"]),
    country!("GIN", "GN", "Guinea", [], ["CIV", "GNB", "LBR", "MLI", "SEN", "SLE"]),
    country!("GNB", "GW", "Guinea-Bissau", [], ["GIN", "SEN"]),
    country!("KEN", "KE", "Kenya", [], ["ETH", "SOM", "SSD", "TZA", "UGA"]),
    country!("LSO", "LS", "Lesotho", [], ["ZAF"]),
    country!("LBR", "LR", "Liberia", [], ["GIN", "CIV", "SLE"]),
    country!("LBY", "LY", "Libya", [], ["DZA", "TCD", "EGY", "NER", "SDN", "TUN"]),
    country!("MDG", "MG", "Madagascar", [], []),
    country!("MWI", "MW", "Malawi", [], ["MOZ", "TZA", "ZMB"]),
    country!("MLI", "ML", "Mali", [], ["DZA", "BFA", "GIN", "CIV", "MRT", "NER", "SEN"]),
    country!("MRT", "MR", "Mauritania", [], ["DZA", "MLI", "SEN", "ESH"]),
    country!("MUS", "MU", "Mauritius", [], []),
    country!("MAR", "MA", "Morocco", ["Kingdom of Morocco"], ["DZA", "ESH", "ESP"]),
    country!("MOZ", "MZ", "Mozambique", [], ["MWI", "ZAF", "SWZ", "TZA", "ZMB", "ZWE"]),
    country!("NAM", "NA", "Namibia", [], ["AGO", "BWA", "ZAF", "ZMB"]),
    country!("NER", "NE", "Niger", [], ["DZA", "BEN", "BFA", "TCD", "LBY", "MLI", "NGA"]),
    country!("NGA", "NG", "Nigeria", [], ["BEN", "CMR", "TCD", "NER"]),
    country!("RWA", "RW", "Rwanda", [], ["BDI", "COD", "TZA", "UGA"]),
    country!("STP", "ST", "Sao Tome and Principe", ["São Tomé and Príncipe"], []),
    country!("SEN", "SN", "Senegal", [], ["GMB", "GIN", "GNB", "MLI", "MRT"]),
    country!("SYC", "SC", "Seychelles", [], []),
    country!("SLE", "SL", "Sierra Leone", [], ["GIN", "LBR"]),
    country!("SOM", "SO", "Somalia", [], ["DJI", "ETH", "KEN"]),
    country!("ZAF", "ZA", "South Africa", ["Republic of South Africa"], ["BWA", "LSO", "MOZ", "NAM", "SWZ", "ZWE"]),
    country!("SSD", "SS", "South Sudan", [], ["CAF", "COD", "ETH", "KEN", "SDN", "UGA"]),
    country!("SDN", "SD", "Sudan", [], ["CAF", "TCD", "EGY", "ERI", "ETH", "LBY", "SSD"]),
    country!("TZA", "TZ", "Tanzania", ["United Republic of Tanzania"], ["BDI", "COD", "KEN", "MWI", "MOZ", "RWA", "UGA", "ZMB"]),
    country!("TGO", "TG", "Togo", [], ["BEN", "BFA", "GHA"]),
    country!("TUN", "TN", "Tunisia", [], ["DZA", "LBY"]),
    country!("UGA", "UG", "Uganda", [], ["COD", "KEN", "RWA", "SSD", "TZA"]),
    country!("ZMB", "ZM", "Zambia", [], ["AGO", "BWA", "COD", "MWI", "MOZ", "NAM", "TZA", "ZWE"]),
    country!("ZWE", "ZW", "Zimbabwe", [], ["BWA", "MOZ", "ZAF", "ZMB"]),
    country!("ESH", "EH", "Western Sahara", [], ["DZA", "MRT", "MAR"]),
    // ─── Europe ─────────────────────────────────────────────────
    country!("ALB", "AL", "Albania", [], ["MNE", "GRC", "MKD", "XKX"]),
    country!("AND", "AD", "Andorra", [], ["FRA", "ESP"]),
    country!("AUT", "AT", "Austria", ["Republic of Austria", "Österreich"], ["CZE", "DEU", "HUN", "ITA", "LIE", "SVK", "SVN", "CHE"]),
    country!("BLR", "BY", "Belarus", [], ["LVA", "LTU", "POL", "RUS", "UKR"]),
    country!("BEL", "BE", "Belgium", ["Kingdom of Belgium"], ["FRA", "DEU", "LUX", "NLD"]),
    country!("BIH", "BA", "Bosnia and Herzegovina", [], ["HRV", "MNE", "SRB"]),
    country!("BGR", "BG", "Bulgaria", [], ["GRC", "MKD", "ROU", "SRB", "TUR"]),
    country!("HRV", "HR", "Croatia", [], ["BIH", "HUN", "MNE", "SRB", "SVN"]),
    country!("CYP", "CY", "Cyprus", [], []),
    country!("CZE", "CZ", "Czech Republic", ["Czechia"], ["AUT", "DEU", "POL", "SVK"]),
    country!("DNK", "DK", "Denmark", ["Kingdom of Denmark"], ["DEU"]),
    country!("EST", "EE", "Estonia", [], ["LVA", "RUS"]),
    country!("FIN", "FI", "Finland", ["Suomi"], ["NOR", "SWE", "RUS"]),
    country!("FRA", "FR", "France", ["French Republic"], ["AND", "BEL", "DEU", "ITA", "LUX", "MCO", "ESP", "CHE"]),
    country!("DEU", "DE", "Germany", ["Federal Republic of Germany", "Deutschland"], ["AUT", "BEL", "CZE", "DNK", "FRA", "LUX", "NLD", "POL", "CHE"]),
    country!("GIB", "GI", "Gibraltar", [], ["ESP"]),
    country!("GRC", "GR", "Greece", ["Hellenic Republic"], ["ALB", "BGR", "TUR", "MKD"]),
    country!("HUN", "HU", "Hungary", [], ["AUT", "HRV", "ROU", "SRB", "SVK", "SVN", "UKR"]),
    country!("ISL", "IS", "Iceland", [], []),
    country!("IRL", "IE", "Ireland", ["Republic of Ireland"], ["GBR"]),
    country!("ITA", "IT", "Italy", ["Italian Republic", "Italia"], ["AUT", "FRA", "SMR", "SVN", "CHE", "VAT"]),
    country!("XKX", "XK", "Kosovo", [], ["ALB", "MKD", "MNE", "SRB"]),
    country!("LVA", "LV", "Latvia", [], ["BLR", "EST", "LTU", "RUS"]),
    country!("LIE", "LI", "Liechtenstein", [], ["AUT", "CHE"]),
    country!("LTU", "LT", "Lithuania", [], ["BLR", "LVA", "POL", "RUS"]),
    country!("LUX", "LU", "Luxembourg", [], ["BEL", "FRA", "DEU"]),
    country!("MLT", "MT", "Malta", [], []),
    country!("MDA", "MD", "Moldova", ["Republic of Moldova"], ["ROU", "UKR"]),
    country!("MCO", "MC", "Monaco", [], ["FRA"]),
    country!("MNE", "ME", "Montenegro", [], ["ALB", "BIH", "HRV", "XKX", "SRB"]),
    country!("NLD", "NL", "Netherlands", ["Holland", "The Netherlands", "Kingdom of the Netherlands"], ["BEL", "DEU"]),
    country!("MKD", "MK", "North Macedonia", ["Macedonia"], ["ALB", "BGR", "GRC", "XKX", "SRB"]),
    country!("NOR", "NO", "Norway", ["Kingdom of Norway", "Norge"], ["FIN", "SWE", "RUS"]),
    country!("POL", "PL", "Poland", ["Republic of Poland", "Polska"], ["BLR", "CZE", "DEU", "LTU", "RUS", "SVK", "UKR"]),
    country!("PRT", "PT", "Portugal", ["Portuguese Republic"], ["ESP"]),
    country!("ROU", "RO", "Romania", [], ["BGR", "HUN", "MDA", "SRB", "UKR"]),
    country!("RUS", "RU", "Russia", ["Russian Federation"], ["AZE", "BLR", "CHN", "EST", "FIN", "GEO", "KAZ", "PRK", "LVA", "LTU", "MNG", "NOR", "POL", "UKR"]),
    country!("SMR", "SM", "San Marino", [], ["ITA"]),
    country!("SRB", "RS", "Serbia", ["Republic of Serbia"], ["BIH", "BGR", "HRV", "HUN", "XKX", "MKD", "MNE", "ROU"]),
    country!("SVK", "SK", "Slovakia", ["Slovak Republic"], ["AUT", "CZE", "HUN", "POL", "UKR"]),
    country!("SVN", "SI", "Slovenia", [], ["AUT", "HRV", "ITA", "HUN"]),
    country!("ESP", "ES", "Spain", ["Kingdom of Spain", "España"], ["AND", "FRA", "GIB", "PRT", "MAR"]),
    country!("SWE", "SE", "Sweden", ["Kingdom of Sweden", "Sverige"], ["NOR", "FIN"]),
    country!("CHE", "CH", "Switzerland", ["Swiss Confederation", "Schweiz", "Suisse"], ["AUT", "FRA", "ITA", "LIE", "DEU"]),
    country!("UKR", "UA", "Ukraine", [], ["BLR", "HUN", "MDA", "POL", "ROU", "RUS", "SVK"]),
    country!("GBR", "GB", "United Kingdom", ["United Kingdom of Great Britain and Northern Ireland", "Great Britain", "Britain", "UK"], ["IRL"]),
    country!("VAT", "VA", "Vatican", ["Holy See", "Vatican City"], ["ITA"]),
    // ─── Asia ───────────────────────────────────────────────────
    country!("AFG", "AF", "Afghanistan", [], ["IRN", "PAK", "TKM", "UZB", "TJK", "CHN"]),
    country!("ARM", "AM", "Armenia", [], ["AZE", "GEO", "IRN", "TUR"]),
    country!("AZE", "AZ", "Azerbaijan", [], ["ARM", "GEO", "IRN", "RUS", "TUR"]),
    country!("BHR", "BH", "Bahrain", [], []),
    country!("BGD", "BD", "Bangladesh", [], ["MMR", "IND"]),
    country!("BTN", "BT", "Bhutan", [], ["CHN", "IND"]),
    country!("BRN", "BN", "Brunei", ["Brunei Darussalam"], ["MYS"]),
    country!("KHM", "KH", "Cambodia", [], ["LAO", "THA", "VNM"]),
    country!("CHN", "CN", "China", ["People's Republic of China"], ["AFG", "BTN", "MMR", "HKG", "IND", "KAZ", "PRK", "KGZ", "LAO", "MAC", "MNG", "PAK", "RUS", "TJK", "VNM", "NPL"]),
    country!("GEO", "GE", "Georgia", [], ["ARM", "AZE", "RUS", "TUR"]),
    country!("HKG", "HK", "Hong Kong", [], ["CHN"]),
    country!("IND", "IN", "India", ["Republic of India"], ["BGD", "BTN", "MMR", "CHN", "NPL", "PAK"]),
    country!("IDN", "ID", "Indonesia", [], ["TLS", "MYS", "PNG"]),
    country!("IRN", "IR", "Iran", ["Islamic Republic of Iran"], ["AFG", "ARM", "AZE", "IRQ", "PAK", "TUR", "TKM"]),
    country!("IRQ", "IQ", "Iraq", [], ["IRN", "JOR", "KWT", "SAU", "SYR", "TUR"]),
    country!("ISR", "IL", "Israel", ["State of Israel"], ["EGY", "JOR", "LBN", "PSE", "SYR"]),
    country!("JPN", "JP", "Japan", [], []),
    country!("JOR", "JO", "Jordan", [], ["IRQ", "ISR", "PSE", "SAU", "SYR"]),
    country!("KAZ", "KZ", "Kazakhstan", [], ["CHN", "KGZ", "RUS", "TKM", "UZB"]),
    country!("KWT", "KW", "Kuwait", [], ["IRQ", "SAU"]),
    country!("KGZ", "KG", "Kyrgyzstan", ["Kyrgyz Republic"], ["CHN", "KAZ", "TJK", "UZB"]),
    country!("LAO", "LA", "Laos", ["Lao People's Democratic Republic"], ["MMR", "KHM", "CHN", "THA", "VNM"]),
    country!("LBN", "LB", "Lebanon", [], ["ISR", "SYR"]),
    country!("MAC", "MO", "Macau", ["Macao"], ["CHN"]),
    country!("MYS", "MY", "Malaysia", [], ["BRN", "IDN", "THA"]),
    country!("MDV", "MV", "Maldives", [], []),
    country!("MNG", "MN", "Mongolia", [], ["CHN", "RUS"]),
    country!("MMR", "MM", "Myanmar", ["Burma"], ["BGD", "CHN", "IND", "LAO", "THA"]),
    country!("NPL", "NP", "Nepal", [], ["CHN", "IND"]),
    country!("PRK", "KP", "North Korea", ["Democratic People's Republic of Korea"], ["CHN", "KOR", "RUS"]),
    country!("OMN", "OM", "Oman", [], ["SAU", "ARE", "YEM"]),
    country!("PAK", "PK", "Pakistan", ["Islamic Republic of Pakistan"], ["AFG", "CHN", "IND", "IRN"]),
    country!("PSE", "PS", "Palestine", ["State of Palestine", "Palestinian Territories"], ["ISR", "EGY", "JOR"]),
    country!("PHL", "PH", "Philippines", [], []),
    country!("QAT", "QA", "Qatar", [], ["SAU"]),
    country!("SAU", "SA", "Saudi Arabia", ["Kingdom of Saudi Arabia", "KSA"], ["IRQ", "JOR", "KWT", "OMN", "QAT", "ARE", "YEM"]),
    country!("SGP", "SG", "Singapore", [], []),
    country!("KOR", "KR", "South Korea", ["Republic of Korea", "Korea"], ["PRK"]),
    country!("LKA", "LK", "Sri Lanka", [], []),
    country!("SYR", "SY", "Syria", ["Syrian Arab Republic"], ["IRQ", "ISR", "JOR", "LBN", "TUR"]),
    country!("TWN", "TW", "Taiwan", [], []),
    country!("TJK", "TJ", "Tajikistan", [], ["AFG", "CHN", "KGZ", "UZB"]),
    country!("THA", "TH", "Thailand", [], ["MMR", "KHM", "LAO", "MYS"]),
    country!("TLS", "TL", "Timor-Leste", ["East Timor"], ["IDN"]),
    country!("TUR", "TR", "Turkey", ["Türkiye", "Republic of Turkey"], ["ARM", "AZE", "BGR", "GEO", "GRC", "IRN", "IRQ", "SYR"]),
    country!("TKM", "TM", "Turkmenistan", [], ["AFG", "IRN", "KAZ", "UZB"]),
    country!("ARE", "AE", "United Arab Emirates", ["UAE", "Emirates"], ["OMN", "SAU"]),
    country!("UZB", "UZ", "Uzbekistan", [], ["AFG", "KAZ", "KGZ", "TJK", "TKM"]),
    country!("VNM", "VN", "Vietnam", ["Viet Nam"], ["KHM", "CHN", "LAO"]),
    country!("YEM", "YE", "Yemen", [], ["OMN", "SAU"]),
    // ─── Americas ───────────────────────────────────────────────
    country!("ATG", "AG", "Antigua and Barbuda", [], []),
    country!("ARG", "AR", "Argentina", ["Argentine Republic"], ["BOL", "BRA", "CHL", "PRY", "URY"]),
    country!("BHS", "BS", "Bahamas", ["The Bahamas"], []),
    country!("BRB", "BB", "Barbados", [], []),
    country!("BLZ", "BZ", "Belize", [], ["GTM", "MEX"]),
    country!("BOL", "BO", "Bolivia", ["Plurinational State of Bolivia"], ["ARG", "BRA", "CHL", "PRY", "PER"]),
    country!("BRA", "BR", "Brazil", ["Federative Republic of Brazil", "Brasil"], ["ARG", "BOL", "COL", "GUF", "GUY", "PRY", "PER", "SUR", "URY", "VEN"]),
    country!("CAN", "CA", "Canada", [], ["USA"]),
    country!("CHL", "CL", "Chile", [], ["ARG", "BOL", "PER"]),
    country!("COL", "CO", "Colombia", [], ["BRA", "ECU", "PAN", "PER", "VEN"]),
    country!("CRI", "CR", "Costa Rica", [], ["NIC", "PAN"]),
    country!("CUB", "CU", "Cuba", [], []),
    country!("DMA", "DM", "Dominica", [], []),
    country!("DOM", "DO", "Dominican Republic", [], ["HTI"]),
    country!("ECU", "EC", "Ecuador", [], ["COL", "PER"]),
    country!("SLV", "SV", "El Salvador", [], ["GTM", "HND"]),
    country!("GUF", "GF", "French Guiana", [], ["BRA", "SUR"]),
    country!("GRL", "GL", "Greenland", [], []),
    country!("GRD", "GD", "Grenada", [], []),
    country!("GTM", "GT", "Guatemala", [], ["BLZ", "SLV", "HND", "MEX"]),
    country!("GUY", "GY", "Guyana", [], ["BRA", "SUR", "VEN"]),
    country!("HTI", "HT", "Haiti", [], ["DOM"]),
    country!("HND", "HN", "Honduras", [], ["GTM", "SLV", "NIC"]),
    country!("JAM", "JM", "Jamaica", [], []),
    country!("MEX", "MX", "Mexico", ["United Mexican States", "México"], ["BLZ", "GTM", "USA"]),
    country!("NIC", "NI", "Nicaragua", [], ["CRI", "HND"]),
    country!("PAN", "PA", "Panama", [], ["COL", "CRI"]),
    country!("PRY", "PY", "Paraguay", [], ["ARG", "BOL", "BRA"]),
    country!("PER", "PE", "Peru", [], ["BOL", "BRA", "CHL", "COL", "ECU"]),
    country!("PRI", "PR", "Puerto Rico", [], []),
    country!("KNA", "KN", "St. Kitts and Nevis", ["Saint Kitts and Nevis"], []),
    country!("LCA", "LC", "St. Lucia", ["Saint Lucia"], []),
    country!("VCT", "VC", "St. Vincent and the Grenadines", ["Saint Vincent and the Grenadines"], []),
    country!("SUR", "SR", "Suriname", [], ["BRA", "GUF", "GUY"]),
    country!("TTO", "TT", "Trinidad and Tobago", [], []),
    country!("USA", "US", "United States", ["United States of America", "USA", "America"], ["CAN", "MEX"]),
    country!("URY", "UY", "Uruguay", [], ["ARG", "BRA"]),
    country!("VEN", "VE", "Venezuela", ["Bolivarian Republic of Venezuela"], ["BRA", "COL", "GUY"]),
    // ─── Oceania ────────────────────────────────────────────────
    country!("AUS", "AU", "Australia", ["Commonwealth of Australia"], []),
    country!("FJI", "FJ", "Fiji", [], []),
    country!("KIR", "KI", "Kiribati", [], []),
    country!("MHL", "MH", "Marshall Islands", [], []),
    country!("FSM", "FM", "Micronesia", ["Federated States of Micronesia"], []),
    country!("NRU", "NR", "Nauru", [], []),
    country!("NZL", "NZ", "New Zealand", ["Aotearoa"], []),
    country!("PLW", "PW", "Palau", [], []),
    country!("PNG", "PG", "Papua New Guinea", [], ["IDN"]),
    country!("WSM", "WS", "Samoa", [], []),
    country!("SLB", "SB", "Solomon Islands", [], []),
    country!("TON", "TO", "Tonga", [], []),
    country!("TUV", "TV", "Tuvalu", [], []),
    country!("VUT", "VU", "Vanuatu", [], []),
];

/// Find a country by display name, alias, or ISO alpha-2/alpha-3 code.
/// Case-insensitive; surrounding whitespace is ignored.
pub fn lookup(query: &str) -> Option<&'static CountryRecord> {
    lookup_in(COUNTRIES, query)
}

pub fn lookup_in(table: &'static [CountryRecord], query: &str) -> Option<&'static CountryRecord> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return None;
    }

    table.iter().find(|c| {
        c.name.to_lowercase() == q
            || c.code.eq_ignore_ascii_case(&q)
            || c.iso2.eq_ignore_ascii_case(&q)
            || c.aliases.iter().any(|a| a.to_lowercase() == q)
    })
}

/// Find a country by ISO alpha-3 code (exact, upper-case).
pub fn by_code(code: &str) -> Option<&'static CountryRecord> {
    by_code_in(COUNTRIES, code)
}

pub fn by_code_in(table: &'static [CountryRecord], code: &str) -> Option<&'static CountryRecord> {
    table.iter().find(|c| c.code == code)
}
