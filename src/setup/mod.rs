pub mod init;
pub mod records;
