use hbnb_core::{Amenity, City, Entity, Model, Place, Review, State, StorageEngine, User};
use hbnb_store::{DbConfig, DbStorage, FileStorage};
use std::path::Path;

/// A small connected object graph: one of each domain type
#[allow(dead_code)]
pub struct Graph {
    pub state: State,
    pub city: City,
    pub user: User,
    pub amenity: Amenity,
    pub place: Place,
    pub review: Review,
}

/// Build a connected graph without registering it anywhere
#[allow(dead_code)]
pub fn build_graph() -> Graph {
    let state = State::new("California");
    let city = City::new(&state, "San Jose");
    let mut user = User::new("betty@hbnb.io", "pwd");
    user.first_name = "Betty".to_string();
    let amenity = Amenity::new("Wifi");
    let mut place = Place::new(&city, &user, "Cozy loft");
    place.number_rooms = 2;
    place.price_by_night = 120;
    place.latitude = 37.33;
    place.link_amenity(&amenity);
    let review = Review::new(&place, &user, "Great stay");
    Graph {
        state,
        city,
        user,
        amenity,
        place,
        review,
    }
}

impl Graph {
    /// Every object, parents first
    #[allow(dead_code)]
    pub fn entities(&self) -> Vec<Entity> {
        vec![
            self.state.clone().into(),
            self.user.clone().into(),
            self.amenity.clone().into(),
            self.city.clone().into(),
            self.place.clone().into(),
            self.review.clone().into(),
        ]
    }

    /// Register every object with `storage` and save once
    #[allow(dead_code)]
    pub fn persist(&self, storage: &mut dyn StorageEngine) {
        for entity in self.entities() {
            storage.new(entity).unwrap();
        }
        storage.save().unwrap();
    }

    #[allow(dead_code)]
    pub fn keys(&self) -> Vec<String> {
        self.entities().iter().map(Entity::key).collect()
    }
}

/// File engine over `dir/file.json`, already reloaded
#[allow(dead_code)]
pub fn file_storage(dir: &Path) -> FileStorage {
    let mut storage = FileStorage::new(dir.join("file.json"));
    storage.reload().unwrap();
    storage
}

/// Relational engine over `dir/hbnb.sqlite`, already reloaded
#[allow(dead_code)]
pub fn db_storage(dir: &Path) -> DbStorage {
    let mut storage = DbStorage::new(db_config(dir));
    storage.reload().unwrap();
    storage
}

#[allow(dead_code)]
pub fn db_config(dir: &Path) -> DbConfig {
    DbConfig::new(dir.join("hbnb.sqlite").display().to_string())
}

#[allow(dead_code)]
pub fn key_of<T: Model>(model: &T) -> String {
    model.key()
}
