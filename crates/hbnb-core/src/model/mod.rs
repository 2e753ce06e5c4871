pub mod amenity;
pub mod attributes;
pub mod base;
pub mod city;
pub mod entity;
pub mod kind;
pub mod place;
pub mod review;
pub mod state;
pub mod timestamp;
pub mod user;

pub use amenity::Amenity;
pub use base::{BaseModel, Model};
pub use city::City;
pub use entity::Entity;
pub use kind::{composite_key, EntityKind};
pub use place::Place;
pub use review::Review;
pub use state::State;
pub use user::User;
