pub mod games;
pub mod pits;

pub use games::Entity as Games;
pub use games::Model as GameRow;
pub use pits::Entity as Pits;
pub use pits::Model as PitRow;
