// ABOUTME: Command handlers for pantry-cli
// ABOUTME: Search commands talk to USDA; inventory commands only touch the local file

pub mod inventory;
pub mod search;
