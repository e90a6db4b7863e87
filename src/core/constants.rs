/// Address format version.
///
/// Bumped whenever the dictionary, the shuffle key, the round count or the grid
/// changes, since any of those invalidates previously issued addresses.
pub const FORMAT_VERSION: u8 = 1;

/// Separator between the three words of the canonical address form.
pub const ADDRESS_SEPARATOR: char = '.';

// GRS80 first eccentricity.
pub(crate) const GRS80_E: f64 = 0.0818191910428158;

// Lambert93 (EPSG:2154) parameters.
pub(crate) const LAMBERT93_LAMBDA0: f64 = 3.0 * std::f64::consts::PI / 180.0;
pub(crate) const LAMBERT93_N: f64 = 0.7256077650532670;
pub(crate) const LAMBERT93_C: f64 = 11754255.4261;
pub(crate) const LAMBERT93_XS: f64 = 700000.0;
pub(crate) const LAMBERT93_YS: f64 = 12655612.0499;

/// Maximum fixed-point iterations of the inverse isometric latitude.
pub(crate) const INVERSE_MAX_ITERATIONS: usize = 10;
/// Convergence tolerance of the inverse isometric latitude, in radians.
pub(crate) const INVERSE_TOLERANCE: f64 = 1e-12;

/// Grid extent in Lambert93 metres (half-open on the max side).
pub const EMIN: f64 = 100_000.0;
pub const EMAX: f64 = 1_250_000.0;
pub const NMIN: f64 = 6_050_000.0;
pub const NMAX: f64 = 7_120_000.0;

/// Grid dimensions in 1m cells.
pub const GRID_WIDTH: u64 = 1_150_000;
pub const GRID_HEIGHT: u64 = 1_070_000;
pub const TOTAL_CELLS: u64 = GRID_WIDTH * GRID_HEIGHT;

/// Number of words in the bundled dictionary.
pub const DICT_SIZE: usize = 10_800;

/// Radix of the word decomposition.
pub const W: u64 = DICT_SIZE as u64;

/// Minimum and maximum word length in the dictionary.
pub const MIN_WORD_LEN: usize = 4;
pub const MAX_WORD_LEN: usize = 8;

// Feistel shuffle. Part of the address format: see FORMAT_VERSION.
pub(crate) const SHUFFLE_KEY: u64 = 0x9E3779B97F4A7C15;
pub(crate) const SHUFFLE_ROUNDS: u64 = 8;
pub(crate) const SHUFFLE_HALF_BITS: u32 = 21;
pub(crate) const SHUFFLE_HALF_MASK: u64 = (1 << SHUFFLE_HALF_BITS) - 1;

/// Upper bound on cycle-walk steps before the shuffle reports a broken invariant.
pub(crate) const MAX_CYCLE_WALK: usize = 1000;

const _: () = assert!(GRID_WIDTH == (EMAX - EMIN) as u64);
const _: () = assert!(GRID_HEIGHT == (NMAX - NMIN) as u64);
const _: () = assert!(W * W * W >= TOTAL_CELLS);
const _: () = assert!(1u64 << (2 * SHUFFLE_HALF_BITS) >= TOTAL_CELLS);
