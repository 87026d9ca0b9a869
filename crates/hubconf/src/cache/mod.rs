//! # Config Directories and the Local Disk Cache

pub mod archive;
pub mod disk;
pub mod prefabs;
