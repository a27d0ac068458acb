pub mod ai_model;
pub mod game_record;
