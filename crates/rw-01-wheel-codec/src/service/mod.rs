//! Service Layer - Orchestration

pub mod wheel_service;

pub use wheel_service::WheelService;
