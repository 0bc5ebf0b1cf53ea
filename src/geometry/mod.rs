pub mod aabb2;
