//! Planar geometry for proximity sensing: vectors, line segments, obstacle
//! shapes and the viewing cone that resolves the nearest visible obstacle.

extern crate euclid;

#[macro_export]
macro_rules! pub_mod_and_use {
    ($($module:ident), +) => {
        $(
            pub mod $module;
            pub use self::$module::*;
        )+
    };
}

pub_mod_and_use!(coordinates, geometry_error, line_segment, shapes, viewing_cone);


pub use euclid::{point2, vec2, Angle};
