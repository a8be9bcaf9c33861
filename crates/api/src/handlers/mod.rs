pub mod authors;
pub mod moods;
pub mod quotes;
