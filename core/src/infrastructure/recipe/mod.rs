pub mod edamam_client;
