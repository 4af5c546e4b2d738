//! 유체 물성 조회 모듈.

pub mod water_properties;

pub use water_properties::{
    water_density, water_kinematic_viscosity, water_properties, FluidProperties,
};
