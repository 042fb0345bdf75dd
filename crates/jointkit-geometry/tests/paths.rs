#[path = "paths/path_algebra.rs"]
mod path_algebra;
#[path = "paths/transforms.rs"]
mod transforms;
