mod make_edge;
mod make_edge_loop;
mod make_face;
mod make_face_loop;
mod make_volume;

pub use make_edge::MakeEdge;
pub use make_edge_loop::MakeEdgeLoop;
pub use make_face::MakeFace;
pub use make_face_loop::MakeFaceLoop;
pub use make_volume::MakeVolume;

pub(crate) use make_edge_loop::check_closed;
pub(crate) use make_face_loop::check_watertight;
pub(crate) use make_volume::check_encloses;

#[cfg(test)]
pub(crate) mod fixtures;
