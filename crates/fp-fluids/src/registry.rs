//! Static fluid name/alias registry.
//!
//! Maps common and IUPAC-ish fluid names to catalog filenames. Lookup
//! is insensitive to case, spaces, and dashes. Names absent from the
//! registry fall back to `<name>.json` in the loader.

use crate::error::{FluidError, FluidResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FluidRegistryEntry {
    /// Canonical display name.
    pub name: &'static str,
    /// Catalog filename this entry resolves to.
    pub filename: &'static str,
    /// Accepted lookup keys, already normalized (lowercase, no
    /// spaces or dashes). Includes the canonical name.
    pub aliases: &'static [&'static str],
}

const FLUID_REGISTRY: &[FluidRegistryEntry] = &[
    // Common gases
    FluidRegistryEntry {
        name: "Air",
        filename: "Air.json",
        aliases: &["air"],
    },
    FluidRegistryEntry {
        name: "Nitrogen",
        filename: "Nitrogen.json",
        aliases: &["nitrogen", "n2"],
    },
    FluidRegistryEntry {
        name: "Oxygen",
        filename: "Oxygen.json",
        aliases: &["oxygen", "o2"],
    },
    FluidRegistryEntry {
        name: "Argon",
        filename: "Argon.json",
        aliases: &["argon", "ar"],
    },
    FluidRegistryEntry {
        name: "Helium",
        filename: "Helium.json",
        aliases: &["helium", "he"],
    },
    FluidRegistryEntry {
        name: "Neon",
        filename: "Neon.json",
        aliases: &["neon", "ne"],
    },
    FluidRegistryEntry {
        name: "Krypton",
        filename: "Krypton.json",
        aliases: &["krypton", "kr"],
    },
    FluidRegistryEntry {
        name: "Xenon",
        filename: "Xenon.json",
        aliases: &["xenon", "xe"],
    },
    FluidRegistryEntry {
        name: "Hydrogen",
        filename: "Hydrogen.json",
        aliases: &["hydrogen", "h2"],
    },
    FluidRegistryEntry {
        name: "ParaHydrogen",
        filename: "ParaHydrogen.json",
        aliases: &["parahydrogen"],
    },
    FluidRegistryEntry {
        name: "OrthoHydrogen",
        filename: "OrthoHydrogen.json",
        aliases: &["orthohydrogen"],
    },
    FluidRegistryEntry {
        name: "Deuterium",
        filename: "Deuterium.json",
        aliases: &["deuterium", "d2"],
    },
    // Water
    FluidRegistryEntry {
        name: "Water",
        filename: "Water.json",
        aliases: &["water", "h2o"],
    },
    FluidRegistryEntry {
        name: "HeavyWater",
        filename: "HeavyWater.json",
        aliases: &["heavywater", "d2o"],
    },
    // Carbon compounds
    FluidRegistryEntry {
        name: "CarbonDioxide",
        filename: "CarbonDioxide.json",
        aliases: &["carbondioxide", "co2"],
    },
    FluidRegistryEntry {
        name: "CarbonMonoxide",
        filename: "CarbonMonoxide.json",
        aliases: &["carbonmonoxide", "co"],
    },
    // Hydrocarbons
    FluidRegistryEntry {
        name: "Methane",
        filename: "Methane.json",
        aliases: &["methane", "ch4"],
    },
    FluidRegistryEntry {
        name: "Ethane",
        filename: "Ethane.json",
        aliases: &["ethane", "c2h6"],
    },
    FluidRegistryEntry {
        name: "n-Propane",
        filename: "n-Propane.json",
        aliases: &["propane", "npropane", "c3h8"],
    },
    FluidRegistryEntry {
        name: "n-Butane",
        filename: "n-Butane.json",
        aliases: &["butane", "nbutane"],
    },
    FluidRegistryEntry {
        name: "IsoButane",
        filename: "IsoButane.json",
        aliases: &["isobutane"],
    },
    FluidRegistryEntry {
        name: "n-Pentane",
        filename: "n-Pentane.json",
        aliases: &["pentane", "npentane"],
    },
    FluidRegistryEntry {
        name: "Isopentane",
        filename: "Isopentane.json",
        aliases: &["isopentane"],
    },
    FluidRegistryEntry {
        name: "n-Hexane",
        filename: "n-Hexane.json",
        aliases: &["hexane", "nhexane"],
    },
    FluidRegistryEntry {
        name: "Isohexane",
        filename: "Isohexane.json",
        aliases: &["isohexane"],
    },
    FluidRegistryEntry {
        name: "n-Heptane",
        filename: "n-Heptane.json",
        aliases: &["heptane", "nheptane"],
    },
    FluidRegistryEntry {
        name: "n-Octane",
        filename: "n-Octane.json",
        aliases: &["octane", "noctane"],
    },
    FluidRegistryEntry {
        name: "n-Nonane",
        filename: "n-Nonane.json",
        aliases: &["nonane", "nnonane"],
    },
    FluidRegistryEntry {
        name: "n-Decane",
        filename: "n-Decane.json",
        aliases: &["decane", "ndecane"],
    },
    // Refrigerants (R-series)
    FluidRegistryEntry {
        name: "R11",
        filename: "R11.json",
        aliases: &["r11"],
    },
    FluidRegistryEntry {
        name: "R12",
        filename: "R12.json",
        aliases: &["r12"],
    },
    FluidRegistryEntry {
        name: "R13",
        filename: "R13.json",
        aliases: &["r13"],
    },
    FluidRegistryEntry {
        name: "R14",
        filename: "R14.json",
        aliases: &["r14"],
    },
    FluidRegistryEntry {
        name: "R21",
        filename: "R21.json",
        aliases: &["r21"],
    },
    FluidRegistryEntry {
        name: "R22",
        filename: "R22.json",
        aliases: &["r22"],
    },
    FluidRegistryEntry {
        name: "R23",
        filename: "R23.json",
        aliases: &["r23"],
    },
    FluidRegistryEntry {
        name: "R32",
        filename: "R32.json",
        aliases: &["r32"],
    },
    FluidRegistryEntry {
        name: "R40",
        filename: "R40.json",
        aliases: &["r40"],
    },
    FluidRegistryEntry {
        name: "R41",
        filename: "R41.json",
        aliases: &["r41"],
    },
    FluidRegistryEntry {
        name: "R113",
        filename: "R113.json",
        aliases: &["r113"],
    },
    FluidRegistryEntry {
        name: "R114",
        filename: "R114.json",
        aliases: &["r114"],
    },
    FluidRegistryEntry {
        name: "R115",
        filename: "R115.json",
        aliases: &["r115"],
    },
    FluidRegistryEntry {
        name: "R116",
        filename: "R116.json",
        aliases: &["r116"],
    },
    FluidRegistryEntry {
        name: "R123",
        filename: "R123.json",
        aliases: &["r123"],
    },
    FluidRegistryEntry {
        name: "R124",
        filename: "R124.json",
        aliases: &["r124"],
    },
    FluidRegistryEntry {
        name: "R125",
        filename: "R125.json",
        aliases: &["r125"],
    },
    FluidRegistryEntry {
        name: "R134a",
        filename: "R134a.json",
        aliases: &["r134a"],
    },
    FluidRegistryEntry {
        name: "R141b",
        filename: "R141b.json",
        aliases: &["r141b"],
    },
    FluidRegistryEntry {
        name: "R142b",
        filename: "R142b.json",
        aliases: &["r142b"],
    },
    FluidRegistryEntry {
        name: "R143a",
        filename: "R143a.json",
        aliases: &["r143a"],
    },
    FluidRegistryEntry {
        name: "R152a",
        filename: "R152A.json",
        aliases: &["r152a"],
    },
    FluidRegistryEntry {
        name: "R161",
        filename: "R161.json",
        aliases: &["r161"],
    },
    FluidRegistryEntry {
        name: "R218",
        filename: "R218.json",
        aliases: &["r218"],
    },
    FluidRegistryEntry {
        name: "R227ea",
        filename: "R227EA.json",
        aliases: &["r227ea"],
    },
    FluidRegistryEntry {
        name: "R236ea",
        filename: "R236EA.json",
        aliases: &["r236ea"],
    },
    FluidRegistryEntry {
        name: "R236fa",
        filename: "R236FA.json",
        aliases: &["r236fa"],
    },
    FluidRegistryEntry {
        name: "R245ca",
        filename: "R245ca.json",
        aliases: &["r245ca"],
    },
    FluidRegistryEntry {
        name: "R245fa",
        filename: "R245fa.json",
        aliases: &["r245fa"],
    },
    FluidRegistryEntry {
        name: "R365mfc",
        filename: "R365MFC.json",
        aliases: &["r365mfc"],
    },
    FluidRegistryEntry {
        name: "R404A",
        filename: "R404A.json",
        aliases: &["r404a"],
    },
    FluidRegistryEntry {
        name: "R407C",
        filename: "R407C.json",
        aliases: &["r407c"],
    },
    FluidRegistryEntry {
        name: "R410A",
        filename: "R410A.json",
        aliases: &["r410a"],
    },
    FluidRegistryEntry {
        name: "R507A",
        filename: "R507A.json",
        aliases: &["r507a"],
    },
    FluidRegistryEntry {
        name: "R1233zd(E)",
        filename: "R1233zd(E).json",
        aliases: &["r1233zd(e)"],
    },
    FluidRegistryEntry {
        name: "R1234yf",
        filename: "R1234yf.json",
        aliases: &["r1234yf"],
    },
    FluidRegistryEntry {
        name: "R1234ze(E)",
        filename: "R1234ze(E).json",
        aliases: &["r1234ze(e)"],
    },
    FluidRegistryEntry {
        name: "R1234ze(Z)",
        filename: "R1234ze(Z).json",
        aliases: &["r1234ze(z)"],
    },
    FluidRegistryEntry {
        name: "R1243zf",
        filename: "R1243zf.json",
        aliases: &["r1243zf"],
    },
    // Ammonia and other inorganics
    FluidRegistryEntry {
        name: "Ammonia",
        filename: "Ammonia.json",
        aliases: &["ammonia", "nh3"],
    },
    FluidRegistryEntry {
        name: "SulfurDioxide",
        filename: "SulfurDioxide.json",
        aliases: &["sulfurdioxide", "so2"],
    },
    FluidRegistryEntry {
        name: "HydrogenSulfide",
        filename: "HydrogenSulfide.json",
        aliases: &["hydrogensulfide", "h2s"],
    },
    FluidRegistryEntry {
        name: "NitrousOxide",
        filename: "NitrousOxide.json",
        aliases: &["nitrousoxide", "n2o"],
    },
    // Alcohols
    FluidRegistryEntry {
        name: "Methanol",
        filename: "Methanol.json",
        aliases: &["methanol"],
    },
    FluidRegistryEntry {
        name: "Ethanol",
        filename: "Ethanol.json",
        aliases: &["ethanol"],
    },
    // Aromatics
    FluidRegistryEntry {
        name: "Benzene",
        filename: "Benzene.json",
        aliases: &["benzene"],
    },
    FluidRegistryEntry {
        name: "Toluene",
        filename: "Toluene.json",
        aliases: &["toluene"],
    },
    FluidRegistryEntry {
        name: "EthylBenzene",
        filename: "EthylBenzene.json",
        aliases: &["ethylbenzene"],
    },
    FluidRegistryEntry {
        name: "m-Xylene",
        filename: "m-Xylene.json",
        aliases: &["mxylene"],
    },
    FluidRegistryEntry {
        name: "o-Xylene",
        filename: "o-Xylene.json",
        aliases: &["oxylene"],
    },
    FluidRegistryEntry {
        name: "p-Xylene",
        filename: "p-Xylene.json",
        aliases: &["pxylene"],
    },
    // Others
    FluidRegistryEntry {
        name: "Acetone",
        filename: "Acetone.json",
        aliases: &["acetone"],
    },
    FluidRegistryEntry {
        name: "Ethylene",
        filename: "Ethylene.json",
        aliases: &["ethylene"],
    },
    FluidRegistryEntry {
        name: "Propylene",
        filename: "Propylene.json",
        aliases: &["propylene"],
    },
];

/// Normalize a lookup key: lowercase, spaces and dashes removed.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != ' ' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Resolve a fluid name or alias to its catalog filename.
pub fn fluid_filename(name: &str) -> FluidResult<&'static str> {
    let key = normalize(name);

    for entry in FLUID_REGISTRY {
        if normalize(entry.name) == key || entry.aliases.contains(&key.as_str()) {
            return Ok(entry.filename);
        }
    }

    Err(FluidError::NotFound {
        name: name.to_string(),
    })
}

/// All registered fluids by canonical name, sorted.
pub fn list_available_fluids() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = FLUID_REGISTRY.iter().map(|e| e.name).collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lookup_is_case_space_dash_insensitive() {
        assert_eq!(fluid_filename("Water").unwrap(), "Water.json");
        assert_eq!(fluid_filename("WATER").unwrap(), "Water.json");
        assert_eq!(fluid_filename("h2o").unwrap(), "Water.json");
        assert_eq!(fluid_filename("Carbon Dioxide").unwrap(), "CarbonDioxide.json");
        assert_eq!(fluid_filename("n-propane").unwrap(), "n-Propane.json");
        assert_eq!(fluid_filename("R-134a").unwrap(), "R134a.json");
    }

    #[test]
    fn unknown_name_is_a_catalog_miss() {
        let err = fluid_filename("unobtainium").unwrap_err();
        assert!(matches!(err, FluidError::NotFound { .. }));
    }

    #[test]
    fn filenames_are_unique() {
        let mut seen = HashSet::new();
        for entry in FLUID_REGISTRY {
            assert!(
                seen.insert(entry.filename),
                "duplicate filename: {}",
                entry.filename
            );
        }
    }

    #[test]
    fn listing_is_sorted_and_complete() {
        let fluids = list_available_fluids();
        assert_eq!(fluids.len(), FLUID_REGISTRY.len());
        assert!(fluids.windows(2).all(|w| w[0] <= w[1]));
        assert!(fluids.contains(&"Water"));
        assert!(fluids.contains(&"Nitrogen"));
    }
}
