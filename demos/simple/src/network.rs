//! Small synthetic bus network in south Moscow.
//!
//! Two routes share `Universam`, so a ride from `Biryusinka` to
//! `Rasskazovka` needs a transfer.  `Tsaritsyno` is served by no route.

use anyhow::Result;

use tc_catalogue::Catalogue;
use tc_core::Coordinates;

/// Stop name, latitude, longitude.
const STOPS: &[(&str, f64, f64)] = &[
    ("Biryulyovo Zapadnoye",      55.574371, 37.651700),
    ("Biryusinka",                55.581065, 37.648390),
    ("Universam",                 55.587655, 37.645687),
    ("Biryulyovo Tovarnaya",      55.592028, 37.653656),
    ("Biryulyovo Passazhirskaya", 55.580999, 37.659164),
    ("Rossoshanskaya ulitsa",     55.595579, 37.605757),
    ("Prazhskaya",                55.611678, 37.603831),
    ("Rasskazovka",               55.632761, 37.333324),
    ("Tsaritsyno",                55.621049, 37.669766),
];

/// From, to, metres.  The reverse direction falls back to the same value
/// unless listed separately.
const DISTANCES: &[(&str, &str, u32)] = &[
    ("Biryulyovo Zapadnoye",      "Rossoshanskaya ulitsa",     7_500),
    ("Biryulyovo Zapadnoye",      "Biryusinka",                1_800),
    ("Biryulyovo Zapadnoye",      "Universam",                 2_400),
    ("Biryusinka",                "Universam",                   750),
    ("Universam",                 "Rossoshanskaya ulitsa",     5_600),
    ("Universam",                 "Biryulyovo Tovarnaya",        900),
    ("Biryulyovo Tovarnaya",      "Biryulyovo Passazhirskaya", 1_300),
    ("Biryulyovo Passazhirskaya", "Biryulyovo Zapadnoye",      1_200),
    ("Rossoshanskaya ulitsa",     "Prazhskaya",                4_300),
    ("Prazhskaya",                "Rasskazovka",              14_600),
    ("Rasskazovka",               "Prazhskaya",               15_100),
];

pub fn build_catalogue() -> Result<Catalogue> {
    let mut c = Catalogue::new();
    for &(name, lat, lng) in STOPS {
        c.add_stop(name, Coordinates::new(lat, lng))?;
    }
    for &(from, to, meters) in DISTANCES {
        c.add_distance(from, to, meters)?;
    }

    c.add_route(
        "297",
        &[
            "Biryulyovo Zapadnoye",
            "Biryusinka",
            "Universam",
            "Biryulyovo Tovarnaya",
            "Biryulyovo Passazhirskaya",
            "Biryulyovo Zapadnoye",
        ],
        true,
    )?;
    c.add_route(
        "635",
        &[
            "Biryulyovo Tovarnaya",
            "Universam",
            "Biryusinka",
            "Biryulyovo Zapadnoye",
        ],
        false,
    )?;
    c.add_route(
        "828",
        &[
            "Biryulyovo Zapadnoye",
            "Universam",
            "Rossoshanskaya ulitsa",
            "Prazhskaya",
            "Rasskazovka",
        ],
        false,
    )?;
    Ok(c)
}
