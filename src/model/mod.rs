pub mod category;
pub mod item;
pub mod rating;
pub mod scores;
pub mod weights;
pub mod zones;
