// ABOUTME: Re-exports helper modules for pantry-cli
// ABOUTME: Provides display formatting utilities

pub mod display;
