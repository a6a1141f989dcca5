pub mod draft_config;
pub mod draft_room;
pub mod draft_state;
pub mod hero;
