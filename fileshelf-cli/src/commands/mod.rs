pub mod cat;
pub mod download;
pub mod edit;
pub mod ls;
pub mod mkdir;
pub mod new_file;
pub mod rename;
pub mod upload;
pub mod view;
