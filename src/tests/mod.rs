//! Internal test modules - whitebox tests with crate access
//!
//! Scenario tests that drive the demo host the way a user would: pulling the
//! list down past the top, letting go, scrolling through sections and
//! rotating the device.
