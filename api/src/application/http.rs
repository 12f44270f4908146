pub mod chat;
pub mod detection;
pub mod health;
pub mod inventory;
pub mod nutrition;
pub mod recipe;
pub mod server;

#[cfg(test)]
pub mod test;
