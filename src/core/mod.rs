pub mod background;
pub mod config;
pub mod contact;
pub mod host;
pub mod parallax;
pub mod particles;
pub mod scroll_spy;
pub mod showcase;
pub mod tilt;
pub mod timing;
pub mod visibility;

pub use background::ParticleBackground;
pub use config::SiteConfig;
pub use host::*;
pub use particles::{FieldCanvas, Rgba};
pub use scroll_spy::{ScrollSpy, Scroller, SectionLayout, SectionRect, SECTIONS};
pub use tilt::{CardTilt, SurfaceRect};
pub use visibility::{RevealWatch, VisibilityRegistry};
