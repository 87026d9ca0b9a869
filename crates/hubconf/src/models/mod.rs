//! # Model Configuration Families

pub mod resnet;
