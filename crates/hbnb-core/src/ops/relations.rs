//! Explicit relationship accessors
//!
//! Relationships are stored as foreign-key ids on the child entity (and as
//! `Place::amenity_ids` for the many-to-many link). Following one is always
//! an explicit fetch through a [`StorageEngine`]; nothing loads implicitly
//! on attribute access.

use crate::engine::StorageEngine;
use crate::errors::StorageResult;
use crate::model::{Amenity, City, Model, Place, Review, State, User};

/// All stored objects of type `T` matching `keep`
fn fetch<T, F>(storage: &dyn StorageEngine, keep: F) -> StorageResult<Vec<T>>
where
    T: Model,
    F: Fn(&T) -> bool,
{
    Ok(storage
        .all(Some(T::KIND))?
        .into_values()
        .filter_map(T::from_entity)
        .filter(|m| keep(m))
        .collect())
}

/// Cities of a state, sorted by name
pub fn cities_of(storage: &dyn StorageEngine, state: &State) -> StorageResult<Vec<City>> {
    let mut cities = fetch(storage, |c: &City| c.state_id == state.id())?;
    cities.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(cities)
}

/// The state a city belongs to, if it is stored
pub fn state_of(storage: &dyn StorageEngine, city: &City) -> StorageResult<Option<State>> {
    Ok(storage
        .get(State::KIND, &city.state_id)?
        .and_then(State::from_entity))
}

/// Places located in a city, sorted by name
pub fn places_of_city(storage: &dyn StorageEngine, city: &City) -> StorageResult<Vec<Place>> {
    let mut places = fetch(storage, |p: &Place| p.city_id == city.id())?;
    places.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(places)
}

/// Places owned by a user, sorted by name
pub fn places_of_user(storage: &dyn StorageEngine, user: &User) -> StorageResult<Vec<Place>> {
    let mut places = fetch(storage, |p: &Place| p.user_id == user.id())?;
    places.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(places)
}

/// Reviews of a place, oldest first
pub fn reviews_of_place(storage: &dyn StorageEngine, place: &Place) -> StorageResult<Vec<Review>> {
    let mut reviews = fetch(storage, |r: &Review| r.place_id == place.id())?;
    reviews.sort_by_key(|r| r.base.created_at());
    Ok(reviews)
}

/// Reviews written by a user, oldest first
pub fn reviews_of_user(storage: &dyn StorageEngine, user: &User) -> StorageResult<Vec<Review>> {
    let mut reviews = fetch(storage, |r: &Review| r.user_id == user.id())?;
    reviews.sort_by_key(|r| r.base.created_at());
    Ok(reviews)
}

/// Amenities linked to a place, in link order
///
/// Linked ids with no stored amenity are skipped.
pub fn amenities_of(storage: &dyn StorageEngine, place: &Place) -> StorageResult<Vec<Amenity>> {
    let mut stored = storage.all(Some(Amenity::KIND))?;
    Ok(place
        .amenity_ids
        .iter()
        .filter_map(|id| stored.remove(&crate::model::composite_key(Amenity::KIND, id)))
        .filter_map(Amenity::from_entity)
        .collect())
}
