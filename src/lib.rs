//! CyberZone - Cyber-security training platform backend.
//!
//! This crate implements the CyberZone e-learning service: student and
//! admin accounts, video course modules, simulated labs, and per-user
//! progress tracking, exposed over an HTTP JSON API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
