pub mod object_type;
pub mod orbit_code;

pub use object_type::ObjectType;
pub use orbit_code::OrbitCode;
