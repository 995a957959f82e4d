//! duplex-lib: Build pipeline for client/server application bundles
//!
//! This crate provides the components of the duplex build pipeline:
//! - `runner`: shell command execution with captured output
//! - `prepare`: output directory preparation
//! - `tsconfig`: generation of the server compiler configuration
//! - `steps`: the client and server build steps
//! - `pipeline`: the top-level orchestration and its configuration

pub mod consts;
pub mod pipeline;
pub mod prepare;
pub mod runner;
pub mod steps;
pub mod tsconfig;
