//! Structural elements module

mod material;
mod member;
mod point;
mod section;
mod support;

pub use material::Material;
pub use member::Member;
pub use point::Point;
pub use section::Section;
pub use support::{RollerOrientation, Support, SupportKind};
