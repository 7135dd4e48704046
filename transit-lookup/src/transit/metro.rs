//! Metro stations, entrances and co-located station pairs.
//!
//! Transfer stations such as Metro Center or L'Enfant Plaza have one station
//! code per platform level. The feed links them through `station_together`,
//! and the board shows them as a single station with merged predictions.

use serde::Serialize;

use crate::geo::Coordinate;

use super::StationCode;

/// How many stations to look up per search. The upstream rate limit allows
/// about five calls in a burst.
pub const DEFAULT_MAX_STATIONS: usize = 5;

/// Street address of a station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// A metro station (one platform level).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetroStation {
    pub code: StationCode,
    pub name: String,
    pub coordinate: Coordinate,
    pub address: Address,
    /// Line codes serving this platform, in feed order, empty slots removed.
    pub line_codes: Vec<String>,
    /// The other platform level at the same location, if any.
    pub station_together: Option<StationCode>,
}

/// A street entrance, which may serve one or two platform levels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationEntrance {
    pub name: String,
    pub description: String,
    pub coordinate: Coordinate,
    pub station_codes: Vec<StationCode>,
}

/// Station codes reachable from a set of entrances.
///
/// Codes are deduplicated in first-seen order and truncated to `limit`.
pub fn unique_station_codes(entrances: &[StationEntrance], limit: usize) -> Vec<StationCode> {
    let mut codes: Vec<StationCode> = Vec::new();

    for code in entrances.iter().flat_map(|e| e.station_codes.iter()) {
        if !codes.contains(code) {
            codes.push(*code);
        }
    }

    codes.truncate(limit);
    codes
}

/// A station shown as one entry, with its co-located partner if loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationGroup {
    pub station: MetroStation,
    pub partner: Option<MetroStation>,
}

impl StationGroup {
    /// Lines across both platform levels: this station's first, then the
    /// partner's.
    pub fn lines(&self) -> Vec<&str> {
        self.station
            .line_codes
            .iter()
            .chain(self.partner.iter().flat_map(|p| p.line_codes.iter()))
            .map(String::as_str)
            .collect()
    }

    /// Codes to fetch predictions for: this station, then its partner.
    ///
    /// The partner code comes from `station_together`, so it is present even
    /// when the partner station itself was not loaded.
    pub fn codes(&self) -> (StationCode, Option<StationCode>) {
        (self.station.code, self.station.station_together)
    }
}

/// Collapse co-located stations into groups.
///
/// A station is dropped when its partner appears earlier in the list (it is
/// already represented by that partner's group). Surviving stations keep
/// their input order.
pub fn group_stations(stations: Vec<MetroStation>) -> Vec<StationGroup> {
    let mut groups = Vec::new();

    for (i, station) in stations.iter().enumerate() {
        let shown_earlier = station
            .station_together
            .is_some_and(|partner| stations[..i].iter().any(|s| s.code == partner));
        if shown_earlier {
            continue;
        }

        let partner = station
            .station_together
            .and_then(|code| stations.iter().find(|s| s.code == code))
            .cloned();

        groups.push(StationGroup {
            station: station.clone(),
            partner,
        });
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> StationCode {
        StationCode::parse(s).unwrap()
    }

    fn station(c: &str, name: &str, lines: &[&str], together: Option<&str>) -> MetroStation {
        MetroStation {
            code: code(c),
            name: name.to_string(),
            coordinate: Coordinate::new(38.898, -77.028),
            address: Address {
                street: "607 13th St NW".to_string(),
                city: "Washington".to_string(),
                state: "DC".to_string(),
                zip: "20005".to_string(),
            },
            line_codes: lines.iter().map(|l| (*l).to_string()).collect(),
            station_together: together.map(code),
        }
    }

    fn entrance(codes: &[&str]) -> StationEntrance {
        StationEntrance {
            name: "Entrance".to_string(),
            description: String::new(),
            coordinate: Coordinate::new(38.898, -77.028),
            station_codes: codes.iter().map(|c| code(c)).collect(),
        }
    }

    #[test]
    fn unique_codes_first_seen_order() {
        let entrances = vec![
            entrance(&["A01", "C01"]),
            entrance(&["A01", "C01"]),
            entrance(&["A02"]),
            entrance(&["C02"]),
        ];

        let codes = unique_station_codes(&entrances, DEFAULT_MAX_STATIONS);
        assert_eq!(codes, vec![code("A01"), code("C01"), code("A02"), code("C02")]);
    }

    #[test]
    fn unique_codes_limited() {
        let entrances = vec![
            entrance(&["A01", "C01"]),
            entrance(&["A02"]),
            entrance(&["A03"]),
            entrance(&["B01", "F01"]),
            entrance(&["C02"]),
        ];

        let codes = unique_station_codes(&entrances, 5);
        assert_eq!(codes.len(), 5);
        assert_eq!(codes[4], code("B01"));
    }

    #[test]
    fn unique_codes_empty() {
        assert!(unique_station_codes(&[], 5).is_empty());
    }

    #[test]
    fn groups_pair_colocated_stations() {
        let stations = vec![
            station("A01", "Metro Center", &["RD"], Some("C01")),
            station("C01", "Metro Center", &["BL", "OR", "SV"], Some("A01")),
            station("A02", "Farragut North", &["RD"], None),
        ];

        let groups = group_stations(stations);
        assert_eq!(groups.len(), 2);

        assert_eq!(groups[0].station.code, code("A01"));
        assert_eq!(groups[0].partner.as_ref().unwrap().code, code("C01"));
        assert_eq!(groups[0].lines(), ["RD", "BL", "OR", "SV"]);
        assert_eq!(groups[0].codes(), (code("A01"), Some(code("C01"))));

        assert_eq!(groups[1].station.code, code("A02"));
        assert!(groups[1].partner.is_none());
        assert_eq!(groups[1].lines(), ["RD"]);
        assert_eq!(groups[1].codes(), (code("A02"), None));
    }

    #[test]
    fn partner_not_loaded_still_fetched() {
        // The partner fell outside the station limit
        let stations = vec![station("F03", "L'Enfant Plaza", &["GR", "YL"], Some("D03"))];

        let groups = group_stations(stations);
        assert_eq!(groups.len(), 1);
        assert!(groups[0].partner.is_none());
        assert_eq!(groups[0].lines(), ["GR", "YL"]);
        assert_eq!(groups[0].codes(), (code("F03"), Some(code("D03"))));
    }

    #[test]
    fn group_order_follows_first_platform_seen() {
        let stations = vec![
            station("A02", "Farragut North", &["RD"], None),
            station("C01", "Metro Center", &["BL"], Some("A01")),
            station("A01", "Metro Center", &["RD"], Some("C01")),
        ];

        let groups = group_stations(stations);
        let codes: Vec<StationCode> = groups.iter().map(|g| g.station.code).collect();
        assert_eq!(codes, vec![code("A02"), code("C01")]);
        assert_eq!(groups[1].partner.as_ref().unwrap().code, code("A01"));
    }

    #[test]
    fn group_empty() {
        assert!(group_stations(Vec::new()).is_empty());
    }
}
