//! Named constructors, one per strategy.
//!
//! Each takes the engine explicitly and returns an uninitialized [`Sketch`].
use crate::engine::Engine;
use crate::sketch::instance::Sketch;
use crate::sketch::strategy::Strategy;

macro_rules! sketch_constructors {
    ($($(#[$doc:meta])* $name:ident => $strategy:expr;)*) => {
        $(
            $(#[$doc])*
            pub fn $name<E: Engine>(engine: E, width: u32) -> Sketch<E> {
                Sketch::new(engine, $strategy, width)
            }
        )*
    };
}

sketch_constructors! {
    /// Concentric circles with uniform diameters in `[0, width)`.
    random_1d => Strategy::RANDOM_1D;
    /// Concentric circles with diameters from `Normal(0, width)`.
    gauss_1d => Strategy::GAUSS_1D;
    /// Concentric circles whose diameters follow a noise track.
    noise_1d => Strategy::NOISE_1D;
    /// Dots at uniform positions.
    random_2d => Strategy::RANDOM_2D;
    /// Dots clustered around the center, one sixth of the surface per standard deviation.
    gauss_2d => Strategy::GAUSS_2D;
    /// Dots walking along two decorrelated noise tracks.
    noise_2d => Strategy::NOISE_2D;
    /// Lattice circles with uniform diameters in `[0.2, 0.8]` of a cell.
    random_grid => Strategy::RANDOM_GRID;
    /// Lattice circles with diameters from `Normal(0, cell / 3)`.
    gauss_grid => Strategy::GAUSS_GRID;
    /// Lattice circles sized by a 2D noise lookup.
    noise_grid => Strategy::NOISE_GRID;
}
