use crate::constants::{PARALLAX_BLOB_DEPTHS, PARALLAX_TITLE_GAIN};
use glam::Vec2;

/// Pointer position relative to the hero, in `[-0.5, 0.5]` per axis when the
/// pointer is inside it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeroParallax {
    offset: Vec2,
}

impl HeroParallax {
    /// Returns `false` and leaves the offset untouched for empty bounds.
    pub fn update(&mut self, client_x: f32, client_y: f32, width: f32, height: f32) -> bool {
        if !(width > 0.0 && height > 0.0) {
            return false;
        }
        self.offset = Vec2::new(client_x / width - 0.5, client_y / height - 0.5);
        true
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn title_transform(&self) -> String {
        let t = self.offset * PARALLAX_TITLE_GAIN;
        format!(
            "translate3d({}px, {}px, 0) rotateX({}deg) rotateY({}deg)",
            t.x,
            t.y,
            -t.y / 2.0,
            t.x / 2.0
        )
    }

    /// Background blobs drift against the pointer, deeper ones further.
    pub fn blob_transform(&self, depth: f32) -> String {
        let t = self.offset * -depth;
        format!("translate3d({}px, {}px, 0)", t.x, t.y)
    }

    pub fn blob_transforms(&self) -> [String; 3] {
        PARALLAX_BLOB_DEPTHS.map(|d| self.blob_transform(d))
    }
}
