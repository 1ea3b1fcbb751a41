pub mod direction;
pub mod grid;
pub mod parser;
pub mod path_builder;
pub mod path_finder;
pub mod renderer;
