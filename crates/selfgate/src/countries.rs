// Copyright 2025 Selfgate Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Forbidden-country bitmaps.
//!
//! The gated contracts take their country restrictions as a fixed array of
//! four `uint256` words. Each [`Country`] owns one bit of that array, fixed
//! by its position in the enumeration: word `index / 256`, bit `index % 256`.
//! [`pack`] and [`unpack`] are exact inverses for any set of countries, and
//! need no chain access.

use std::{fmt, str::FromStr};

use alloy::primitives::U256;

/// Number of `uint256` words in the packed forbidden-country list.
pub const PACKED_WORDS: usize = 4;

/// The three-NUL-byte entry the contract pads unused list slots with.
pub const PADDING_SENTINEL: &str = "\0\0\0";

/// Country identifier outside the known enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown country code: {0:?}")]
pub struct UnknownCountry(pub String);

macro_rules! countries {
    ($($variant:ident => $code:literal,)*) => {
        /// A country recognized by the identity-verification hub, identified
        /// by its ISO 3166-1 alpha-3 code.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[allow(missing_docs)]
        pub enum Country {
            $($variant,)*
        }

        impl Country {
            /// Every country in the enumeration, in bit-position order.
            pub const ALL: &'static [Country] = &[$(Country::$variant,)*];

            /// The ISO 3166-1 alpha-3 code.
            pub const fn code(self) -> &'static str {
                match self {
                    $(Country::$variant => $code,)*
                }
            }
        }

        impl FromStr for Country {
            type Err = UnknownCountry;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_ascii_uppercase().as_str() {
                    $($code => Ok(Country::$variant),)*
                    _ => Err(UnknownCountry(s.to_string())),
                }
            }
        }
    };
}

countries! {
    Afghanistan => "AFG",
    Albania => "ALB",
    Algeria => "DZA",
    Andorra => "AND",
    Angola => "AGO",
    AntiguaAndBarbuda => "ATG",
    Argentina => "ARG",
    Armenia => "ARM",
    Australia => "AUS",
    Austria => "AUT",
    Azerbaijan => "AZE",
    Bahamas => "BHS",
    Bahrain => "BHR",
    Bangladesh => "BGD",
    Barbados => "BRB",
    Belarus => "BLR",
    Belgium => "BEL",
    Belize => "BLZ",
    Benin => "BEN",
    Bhutan => "BTN",
    Bolivia => "BOL",
    BosniaAndHerzegovina => "BIH",
    Botswana => "BWA",
    Brazil => "BRA",
    Brunei => "BRN",
    Bulgaria => "BGR",
    BurkinaFaso => "BFA",
    Burundi => "BDI",
    CaboVerde => "CPV",
    Cambodia => "KHM",
    Cameroon => "CMR",
    Canada => "CAN",
    CentralAfricanRepublic => "CAF",
    Chad => "TCD",
    Chile => "CHL",
    China => "CHN",
    Colombia => "COL",
    Comoros => "COM",
    Congo => "COG",
    DemocraticRepublicOfTheCongo => "COD",
    CostaRica => "CRI",
    IvoryCoast => "CIV",
    Croatia => "HRV",
    Cuba => "CUB",
    Cyprus => "CYP",
    Czechia => "CZE",
    Denmark => "DNK",
    Djibouti => "DJI",
    Dominica => "DMA",
    DominicanRepublic => "DOM",
    Ecuador => "ECU",
    Egypt => "EGY",
    ElSalvador => "SLV",
    EquatorialGuinea => "GNQ",
    Eritrea => "ERI",
    Estonia => "EST",
    Eswatini => "SWZ",
    Ethiopia => "ETH",
    Fiji => "FJI",
    Finland => "FIN",
    France => "FRA",
    Gabon => "GAB",
    Gambia => "GMB",
    Georgia => "GEO",
    Germany => "DEU",
    Ghana => "GHA",
    Greece => "GRC",
    Grenada => "GRD",
    Guatemala => "GTM",
    Guinea => "GIN",
    GuineaBissau => "GNB",
    Guyana => "GUY",
    Haiti => "HTI",
    Honduras => "HND",
    Hungary => "HUN",
    Iceland => "ISL",
    India => "IND",
    Indonesia => "IDN",
    Iran => "IRN",
    Iraq => "IRQ",
    Ireland => "IRL",
    Israel => "ISR",
    Italy => "ITA",
    Jamaica => "JAM",
    Japan => "JPN",
    Jordan => "JOR",
    Kazakhstan => "KAZ",
    Kenya => "KEN",
    Kiribati => "KIR",
    NorthKorea => "PRK",
    SouthKorea => "KOR",
    Kosovo => "XKX",
    Kuwait => "KWT",
    Kyrgyzstan => "KGZ",
    Laos => "LAO",
    Latvia => "LVA",
    Lebanon => "LBN",
    Lesotho => "LSO",
    Liberia => "LBR",
    Libya => "LBY",
    Liechtenstein => "LIE",
    Lithuania => "LTU",
    Luxembourg => "LUX",
    Madagascar => "MDG",
    Malawi => "MWI",
    Malaysia => "MYS",
    Maldives => "MDV",
    Mali => "MLI",
    Malta => "MLT",
    MarshallIslands => "MHL",
    Mauritania => "MRT",
    Mauritius => "MUS",
    Mexico => "MEX",
    Micronesia => "FSM",
    Moldova => "MDA",
    Monaco => "MCO",
    Mongolia => "MNG",
    Montenegro => "MNE",
    Morocco => "MAR",
    Mozambique => "MOZ",
    Myanmar => "MMR",
    Namibia => "NAM",
    Nauru => "NRU",
    Nepal => "NPL",
    Netherlands => "NLD",
    NewZealand => "NZL",
    Nicaragua => "NIC",
    Niger => "NER",
    Nigeria => "NGA",
    NorthMacedonia => "MKD",
    Norway => "NOR",
    Oman => "OMN",
    Pakistan => "PAK",
    Palau => "PLW",
    Palestine => "PSE",
    Panama => "PAN",
    PapuaNewGuinea => "PNG",
    Paraguay => "PRY",
    Peru => "PER",
    Philippines => "PHL",
    Poland => "POL",
    Portugal => "PRT",
    Qatar => "QAT",
    Romania => "ROU",
    Russia => "RUS",
    Rwanda => "RWA",
    SaintKittsAndNevis => "KNA",
    SaintLucia => "LCA",
    SaintVincentAndTheGrenadines => "VCT",
    Samoa => "WSM",
    SanMarino => "SMR",
    SaoTomeAndPrincipe => "STP",
    SaudiArabia => "SAU",
    Senegal => "SEN",
    Serbia => "SRB",
    Seychelles => "SYC",
    SierraLeone => "SLE",
    Singapore => "SGP",
    Slovakia => "SVK",
    Slovenia => "SVN",
    SolomonIslands => "SLB",
    Somalia => "SOM",
    SouthAfrica => "ZAF",
    SouthSudan => "SSD",
    Spain => "ESP",
    SriLanka => "LKA",
    Sudan => "SDN",
    Suriname => "SUR",
    Sweden => "SWE",
    Switzerland => "CHE",
    Syria => "SYR",
    Taiwan => "TWN",
    Tajikistan => "TJK",
    Tanzania => "TZA",
    Thailand => "THA",
    TimorLeste => "TLS",
    Togo => "TGO",
    Tonga => "TON",
    TrinidadAndTobago => "TTO",
    Tunisia => "TUN",
    Turkey => "TUR",
    Turkmenistan => "TKM",
    Tuvalu => "TUV",
    Uganda => "UGA",
    Ukraine => "UKR",
    UnitedArabEmirates => "ARE",
    UnitedKingdom => "GBR",
    UnitedStates => "USA",
    Uruguay => "URY",
    Uzbekistan => "UZB",
    Vanuatu => "VUT",
    VaticanCity => "VAT",
    Venezuela => "VEN",
    Vietnam => "VNM",
    Yemen => "YEM",
    Zambia => "ZMB",
    Zimbabwe => "ZWE",
}

impl Country {
    fn bit_position(self) -> (usize, usize) {
        let index = self as usize;
        (index / 256, index % 256)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Packs a set of forbidden countries into the contract's four-word bitmap.
///
/// An empty set packs to four zero words. Duplicates are harmless; each
/// country sets its single bit at most once.
pub fn pack(countries: impl IntoIterator<Item = Country>) -> [U256; PACKED_WORDS] {
    let mut packed = [U256::ZERO; PACKED_WORDS];
    for country in countries {
        let (word, bit) = country.bit_position();
        packed[word] |= U256::from(1u64) << bit;
    }
    packed
}

/// Recovers the set of forbidden countries from a packed bitmap, in
/// enumeration order.
pub fn unpack(packed: &[U256; PACKED_WORDS]) -> Vec<Country> {
    Country::ALL
        .iter()
        .copied()
        .filter(|country| {
            let (word, bit) = country.bit_position();
            packed[word].bit(bit)
        })
        .collect()
}

/// Formats the raw blocked-country list a contract returns for display.
///
/// Unused slots come back as the NUL-byte padding sentinel and are dropped;
/// real entries are trimmed of surrounding whitespace. Relative order is
/// preserved, and an all-padding list formats to an empty one.
pub fn format_blocked_countries<S: AsRef<str>>(
    raw: impl IntoIterator<Item = S>,
) -> Vec<String> {
    raw.into_iter()
        .filter(|entry| entry.as_ref() != PADDING_SENTINEL)
        .map(|entry| entry.as_ref().trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_packs_to_zero_words() {
        assert_eq!(pack([]), [U256::ZERO; PACKED_WORDS]);
    }

    #[test]
    fn round_trips_losslessly() {
        let forbidden = vec![
            Country::NorthKorea,
            Country::Pakistan,
            Country::Iran,
            Country::Afghanistan,
            Country::Zimbabwe,
        ];
        let mut recovered = unpack(&pack(forbidden.clone()));
        let mut expected = forbidden;
        recovered.sort();
        expected.sort();
        assert_eq!(recovered, expected);
    }

    #[test]
    fn round_trips_full_enumeration() {
        let packed = pack(Country::ALL.iter().copied());
        assert_eq!(unpack(&packed), Country::ALL);
    }

    #[test]
    fn one_bit_per_country() {
        // Blocking North Korea and Pakistan sets exactly two bits in total.
        let packed = pack([Country::NorthKorea, Country::Pakistan]);
        let bits: usize = packed.iter().map(|word| word.count_ones()).sum();
        assert_eq!(bits, 2);
    }

    #[test]
    fn duplicates_are_idempotent() {
        assert_eq!(
            pack([Country::Cuba, Country::Cuba]),
            pack([Country::Cuba])
        );
    }

    #[test]
    fn codes_parse_back() {
        for country in Country::ALL {
            assert_eq!(country.code().parse::<Country>().unwrap(), *country);
            assert_eq!(country.code().len(), 3);
        }
        assert_eq!("prk".parse::<Country>().unwrap(), Country::NorthKorea);
        assert!("ZZZ".parse::<Country>().is_err());
    }

    #[test]
    fn formats_all_padding_to_empty() {
        let raw = vec![PADDING_SENTINEL; 8];
        assert!(format_blocked_countries(raw).is_empty());
    }

    #[test]
    fn formats_mixed_entries_in_order() {
        let raw = vec![PADDING_SENTINEL, " PRK ", PADDING_SENTINEL, "PAK", "  IRN"];
        assert_eq!(format_blocked_countries(raw), vec!["PRK", "PAK", "IRN"]);
    }
}
