// pf-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, Length as UomLength, Time as UomTime, VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Length = UomLength;
pub type Time = UomTime;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

#[inline]
pub fn cm(v: f64) -> Length {
    use uom::si::length::centimeter;
    Length::new::<centimeter>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn ha(v: f64) -> Area {
    use uom::si::area::hectare;
    Area::new::<hectare>(v)
}

#[inline]
pub fn hours(v: f64) -> Time {
    use uom::si::time::hour;
    Time::new::<hour>(v)
}

#[inline]
pub fn cms(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolumeRate::new::<cubic_meter_per_second>(v)
}
