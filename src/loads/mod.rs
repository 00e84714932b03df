//! Load types
//!
//! Only nodal loads are assembled. Loads distributed along a member would
//! need equivalent nodal loads (fixed end reactions) and are not modelled.

mod node_load;

pub use node_load::NodeLoad;
