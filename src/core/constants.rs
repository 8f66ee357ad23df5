/// Default tuning for both background effects.
///
/// These are the values the typed config in `config.rs` starts from; page
/// markup can override a subset of them through `data-*` attributes.

// Accent colour (RGB) shared by every stroke and fill
pub const ACCENT_RGB: [u8; 3] = [59, 130, 246];

// Pointer sampling
pub const POINTER_THROTTLE_MS: u64 = 8; // ~120 accepted moves per second

// Particle field
pub const PARTICLE_COUNT: usize = 55;
pub const MAX_PARTICLE_COUNT: usize = 500; // connection scan is quadratic
pub const INITIAL_SPEED: f64 = 0.15; // per-axis velocity range is [-s, s]
pub const BASE_RADIUS_MIN: f64 = 2.5;
pub const BASE_RADIUS_MAX: f64 = 4.0;
pub const DAMPING: f64 = 0.98; // velocity multiplier applied every tick

// Pointer attraction
pub const ATTRACTION_RADIUS: f64 = 200.0;
pub const ATTRACTION_GAIN: f64 = 0.02;

// Connections
pub const CONNECTION_MAX_DISTANCE: f64 = 160.0;
pub const CONNECTION_BASE_ALPHA: f64 = 0.08;
pub const CONNECTION_POINTER_RADIUS: f64 = 150.0;
pub const CONNECTION_BOOSTED_ALPHA: f64 = 0.25;
pub const CONNECTION_LINE_WIDTH: f64 = 1.0;

// Nodes
pub const NODE_INFLUENCE_RADIUS: f64 = 100.0;
pub const NODE_RADIUS_BOOST: f64 = 3.5;
pub const NODE_BASE_OPACITY: f64 = 0.5;
pub const NODE_GLOW_SCALE: f64 = 3.0; // glow reaches this multiple of the core radius
pub const NODE_GLOW_MID_STOP: f64 = 0.5;
pub const NODE_GLOW_MID_ALPHA: f64 = 0.35; // fraction of node opacity at the middle stop

// Grid twist
pub const GRID_CELL_SIZE: f64 = 40.0;
pub const GRID_MIN_CELL_SIZE: f64 = 4.0;
pub const GRID_INFLUENCE_RADIUS: f64 = 120.0;
pub const GRID_TWIST_STRENGTH: f64 = 12.0;
pub const GRID_EASE_EXPONENT: f64 = 1.5;
pub const GRID_CELL_ALPHA: f64 = 0.5;
pub const GRID_CELL_LINE_WIDTH: f64 = 2.0;
pub const GRID_FILL_ALPHA: f64 = 0.08;
pub const GRID_FILL_EVERY: usize = 4; // cells with (i + j) % n == 0 get a fill
pub const GRID_GUIDE_ALPHA: f64 = 0.2;
pub const GRID_GUIDE_LINE_WIDTH: f64 = 1.0;
pub const GRID_POINT_RADIUS: f64 = 2.5;
pub const GRID_POINT_ALPHA: f64 = 0.6;

// DOM hooks used by the auto-start entry point
pub const DEFAULT_CANVAS_ID: &str = "neuron-canvas";
pub const DEFAULT_CONTAINER_ID: &str = "home";
