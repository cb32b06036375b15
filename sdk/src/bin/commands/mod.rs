// Command modules for the ticket-burn CLI

pub mod burn;
pub mod info;
pub mod utils;
