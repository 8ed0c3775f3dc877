// wf-core/src/units.rs

use uom::si::f64::{
    DiffusionCoefficient as UomDiffusionCoefficient, Length as UomLength,
    ThermalConductivity as UomThermalConductivity, Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
/// Kinematic viscosity shares the m²/s dimension of diffusivity.
pub type KinVisc = UomDiffusionCoefficient;
pub type Length = UomLength;
pub type ThermalConductivity = UomThermalConductivity;
pub type Velocity = UomVelocity;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn m2ps(v: f64) -> KinVisc {
    use uom::si::diffusion_coefficient::square_meter_per_second;
    KinVisc::new::<square_meter_per_second>(v)
}

#[inline]
pub fn w_per_mk(v: f64) -> ThermalConductivity {
    use uom::si::thermal_conductivity::watt_per_meter_kelvin;
    ThermalConductivity::new::<watt_per_meter_kelvin>(v)
}
