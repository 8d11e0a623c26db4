/// Motion and interaction tuning constants.
///
/// These constants express intended behavior (e.g., densities, thresholds,
/// delays) and keep magic numbers out of the code, improving readability.
// Surface area (CSS px²) that earns one particle
pub const AREA_PER_PARTICLE: f32 = 15_000.0;
pub const MAX_PARTICLES: usize = 100;

// Particle seeding ranges (half-open)
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_MAX: f32 = 4.0;
pub const PARTICLE_SPEED_MAX: f32 = 0.1; // per axis, per frame
pub const PARTICLE_OPACITY_MIN: f32 = 0.1;
pub const PARTICLE_OPACITY_MAX: f32 = 0.6;

// Lilac palette: base channel plus random spread
pub const PALETTE_BASE_RGB: [f32; 3] = [157.0, 112.0, 213.0];
pub const PALETTE_SPREAD_RGB: [f32; 3] = [20.0, 30.0, 30.0];
pub const PALETTE_ALPHA_MIN: f32 = 0.3;
pub const PALETTE_ALPHA_SPAN: f32 = 0.5;

// Proximity links
pub const LINK_DISTANCE: f32 = 100.0; // strict upper bound
pub const LINK_ALPHA: f32 = 0.2;
pub const LINK_WIDTH: f32 = 0.5;

// Card tilt
pub const TILT_DIVISOR: f64 = 25.0; // px of pointer offset per degree
pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;
pub const TILT_HOVER_SCALE: f64 = 1.02;
pub const GLOW_SPREAD_PERCENT: f64 = 20.0; // glow shift per degree of tilt
pub const GLOW_COLOR: &str = "rgba(157, 112, 213, 0.3)";

// Section reveal
pub const REVEAL_THRESHOLD: f64 = 0.2;

// Navigation
pub const NAV_REFERENCE_LINE: f64 = 200.0; // px below viewport top
pub const NAV_SCROLLED_THRESHOLD: f64 = 100.0;

// Hero parallax
pub const PARALLAX_TITLE_GAIN: f32 = 20.0;
pub const PARALLAX_BLOB_DEPTHS: [f32; 3] = [30.0, 20.0, 15.0];

// Timers (milliseconds)
pub const HERO_ENTRANCE_DELAY_MS: u64 = 200;
pub const SPOTLIGHT_DEBOUNCE_MS: u64 = 100;
pub const SPOTLIGHT_ACTIVATE_MS: u64 = 10;
pub const SPOTLIGHT_LIFETIME_MS: u64 = 2_000;
pub const NOTICE_LIFETIME_MS: u64 = 5_000;

// Staggered entrance for filtered grids
pub const STAGGER_BASE_MS: u32 = 300;
pub const STAGGER_STEP_MS: u32 = 100;

// Contact relay
pub const CONTACT_ENDPOINT: &str = "/api/contact"; // overridden by data-contact-endpoint
