pub mod constants;
pub mod dictionary;
pub mod geometry;
pub mod grid;
pub mod projection;
pub mod shuffle;

pub use constants::{
    ADDRESS_SEPARATOR, DICT_SIZE, EMAX, EMIN, FORMAT_VERSION, GRID_HEIGHT, GRID_WIDTH, NMAX,
    NMIN, TOTAL_CELLS, W,
};
pub use dictionary::{Dictionary, dictionary, index_of, word_at};
pub use geometry::{create_cell_square, create_cell_square_from_point, polygon_to_wgs84};
pub use grid::{cell_center, cell_index, cell_to_point, point_to_cell};
pub use projection::{from_lambert93, isometric_latitude, to_lambert93};
pub use shuffle::{shuffle, unshuffle};
