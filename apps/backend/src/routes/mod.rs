pub mod courses;
pub mod flashcards;
pub mod resources;
pub mod videos;
