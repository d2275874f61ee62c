pub mod init;
pub mod kinds;
pub mod resolve;
