pub mod campaigns;
pub mod leads;
pub mod scripts;
