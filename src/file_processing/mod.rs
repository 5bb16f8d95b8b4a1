pub mod extractor;
pub mod packager;
pub mod renderer;
pub mod writer;
