/// Spotlight tilt and smoothing tuning constants.
///
/// These keep the reference tuning in one place so the effect, the page loops
/// and the host-side tests agree on the same numbers.
// Spring smoothing (mass 1)
pub const SPRING_STIFFNESS: f32 = 300.0;
pub const SPRING_DAMPING: f32 = 25.0;
pub const SPRING_MASS: f32 = 1.0;

// Integration limits (seconds)
pub const SPRING_MAX_FRAME_SEC: f32 = 0.1; // longer gaps (hidden tab) are capped
pub const SPRING_SUBSTEP_SEC: f32 = 1.0 / 240.0;

// Rest thresholds (normalized units, units per second)
pub const SPRING_REST_DELTA: f32 = 0.0005;
pub const SPRING_REST_SPEED: f32 = 0.005;

// Normalized pointer offsets live in [-OFFSET_LIMIT, OFFSET_LIMIT]
pub const OFFSET_LIMIT: f32 = 0.5;

// Tilt: offset -0.5..0.5 maps onto -15deg..15deg
pub const MAX_TILT_DEG: f32 = 15.0;

// Spotlight glow
pub const GLOW_RADIUS_PX: f32 = 150.0;
pub const GLOW_FADE_PERCENT: f32 = 80.0;
pub const DEFAULT_SPOTLIGHT_COLOR: &str = "rgba(255, 255, 255, 0.25)";

// Firefly particles
pub const PARTICLE_COUNT: usize = 3;
pub const PARTICLE_TRAVEL: [f32; 2] = [400.0, 200.0]; // px per unit offset
pub const PARTICLE_STAGGER: [f32; 2] = [40.0, 20.0]; // px between neighbours
pub const PARTICLE_IDLE_PERIOD_SEC: f32 = 2.0;
pub const PARTICLE_MAX_DELAY_SEC: f32 = 2.0;
pub const PARTICLE_OPACITY_KEYS: [f32; 3] = [0.0, 1.0, 0.0];
pub const PARTICLE_SCALE_KEYS: [f32; 3] = [0.5, 1.2, 0.5];

// Host perspective for the 3D tilt
pub const PERSPECTIVE_PX: f32 = 1000.0;

// Stat counters count up from zero, each one starting a little later
pub const COUNTER_DURATION_SEC: f32 = 2.0;
pub const COUNTER_DELAY_BASE_SEC: f32 = 0.2;
pub const COUNTER_DELAY_STEP_SEC: f32 = 0.1;

// Hero parallax: scroll progress 0..1 maps onto these ranges
pub const HERO_OPACITY_RANGE: [f32; 2] = [1.0, 0.0];
pub const HERO_SCALE_RANGE: [f32; 2] = [1.0, 0.8];
pub const HERO_TRANSLATE_Y_RANGE: [f32; 2] = [0.0, 100.0];
