pub mod decision_game;
pub mod flood_game;
