pub mod relations;
pub mod svg;
pub mod table;
