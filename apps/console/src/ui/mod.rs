pub mod analytics;
pub mod campaigns;
pub mod dashboard;
pub mod home;
pub mod layout;
pub mod lead_detail;
pub mod leads;
pub mod leads_table;
pub mod login;
pub mod not_found;
pub mod notifications;
pub mod simulation;
pub mod stats;
