//! Test Module
//!
//! Cross-module test suite for the HealthChat core.
//!
//! ## Test Categories
//! - `router_tests`: Stage precedence, response contract, line conventions
//! - `symptom_tests`: Analyzer branches, urgency selection, knowledge search
//! - `nutrition_tests`: Calorie templates, food recommendations, daily tip
//! - `config_tests`: Environment overlay and validation
//! - `supervisor_tests`: Actor plus HTTP collaborator against a mock server
//! - `chaos_test`: Concurrency, failing and slow collaborators, hostile input

pub mod chaos_test;
pub mod config_tests;
pub mod symptom_tests;
