//! Writers which turn a finished sequence of surface points into an output document. None of
//! them modify the points they are given.

pub mod dxf;
pub mod json;
pub mod svg;

pub use self::dxf::{to_dxf_drawing, write_dxf};
pub use self::json::{to_json, write_json};
pub use self::svg::{to_svg, write_svg, SvgOptions};
