pub mod select3d;
