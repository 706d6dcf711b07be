pub mod init;
pub mod teams;
