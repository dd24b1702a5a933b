pub mod response_structs;
pub mod stats_client;
