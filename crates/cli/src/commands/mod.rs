pub mod categories;
pub mod chat;
pub mod init;
pub mod products;
pub mod routine;
pub mod selection;
