pub mod directory_lister;
