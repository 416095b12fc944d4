use crate::sprites::{Bounds, Sprite};

// Comparación estricta: cajas que sólo se tocan en el borde no chocan
pub fn bounds_overlap(a: &Bounds, b: &Bounds) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

pub fn is_colliding(a: &Sprite, b: &Sprite) -> bool {
    bounds_overlap(&a.bounds(), &b.bounds())
}
