pub mod entities;
pub mod heuristic;
pub mod model_mapper;
pub mod ports;
pub mod remote;
pub mod schema;
pub mod services;
pub mod value_objects;
