use crate::constants::{GLOW_SPREAD_PERCENT, TILT_DIVISOR, TILT_HOVER_SCALE, TILT_PERSPECTIVE_PX};

/// Rotation pair in degrees applied to a hovered card.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltState {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

/// Client-space bounds of a card, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Tilt for a pointer sample. Horizontal offset from the card centre turns
/// into `rotate_y`, vertical offset (inverted) into `rotate_x`.
#[inline]
pub fn tilt_for_pointer(pointer_x: f64, pointer_y: f64, rect: &SurfaceRect) -> TiltState {
    let rx = (pointer_x - rect.left - rect.width / 2.0) / TILT_DIVISOR;
    let ry = -(pointer_y - rect.top - rect.height / 2.0) / TILT_DIVISOR;
    TiltState {
        rotate_x: ry,
        rotate_y: rx,
    }
}

/// Per-card hover and tilt state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardTilt {
    tilt: TiltState,
    hovered: bool,
}

impl CardTilt {
    pub fn on_enter(&mut self) {
        self.hovered = true;
    }

    pub fn on_move(&mut self, pointer_x: f64, pointer_y: f64, rect: &SurfaceRect) -> TiltState {
        self.tilt = tilt_for_pointer(pointer_x, pointer_y, rect);
        self.tilt
    }

    pub fn on_leave(&mut self) {
        self.hovered = false;
        self.tilt = TiltState::default();
    }

    pub fn tilt(&self) -> TiltState {
        self.tilt
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn transform_css(&self) -> String {
        if self.hovered {
            format!(
                "perspective({p}px) rotateX({x}deg) rotateY({y}deg) scale3d({s}, {s}, {s})",
                p = TILT_PERSPECTIVE_PX,
                x = self.tilt.rotate_x,
                y = self.tilt.rotate_y,
                s = TILT_HOVER_SCALE,
            )
        } else {
            format!("perspective({}px) rotateX(0) rotateY(0)", TILT_PERSPECTIVE_PX)
        }
    }

    /// Centre of the hover glow in percent of the card box, while hovered.
    pub fn glow_position(&self) -> Option<(f64, f64)> {
        self.hovered.then(|| {
            (
                self.tilt.rotate_y * GLOW_SPREAD_PERCENT + 50.0,
                self.tilt.rotate_x * GLOW_SPREAD_PERCENT + 50.0,
            )
        })
    }

    pub fn glow_css(&self, color: &str) -> Option<String> {
        self.glow_position().map(|(gx, gy)| {
            format!(
                "radial-gradient(circle at {}% {}%, {} 0%, transparent 50%)",
                gx, gy, color
            )
        })
    }
}
