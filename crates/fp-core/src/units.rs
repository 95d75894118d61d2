// fp-core/src/units.rs

use uom::si::f64::{
    DynamicViscosity as UomDynamicViscosity, MolarConcentration as UomMolarConcentration,
    MolarEnergy as UomMolarEnergy, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI molar, f64)
pub type DynVisc = UomDynamicViscosity;
pub type MolarDensity = UomMolarConcentration;
pub type MolarEnergy = UomMolarEnergy;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn molm3(v: f64) -> MolarDensity {
    use uom::si::molar_concentration::mole_per_cubic_meter;
    MolarDensity::new::<mole_per_cubic_meter>(v)
}

#[inline]
pub fn jpmol(v: f64) -> MolarEnergy {
    use uom::si::molar_energy::joule_per_mole;
    MolarEnergy::new::<joule_per_mole>(v)
}

pub mod constants {
    /// CODATA molar gas constant [J/(mol K)], used where a catalog
    /// entry does not carry its own EOS-specific value.
    pub const GAS_CONSTANT_SI: f64 = 8.314_462_618;
}
