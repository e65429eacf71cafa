pub mod surface_type;

pub use surface_type::SurfaceType;
