//! Tests for the Slack client and bot layer.

#[cfg(test)]
mod client_tests;

#[cfg(test)]
mod services_tests;

#[cfg(test)]
mod auth_tests;
