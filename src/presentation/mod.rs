pub mod card;
pub mod status;
pub mod theme;
