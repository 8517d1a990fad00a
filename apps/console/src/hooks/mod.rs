pub mod lead_chat;
pub mod session;
pub mod simulation;
