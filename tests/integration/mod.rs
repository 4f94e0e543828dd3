//! Integration tests for the agent launcher

mod cli_flows;
mod panel_flow;
mod registry_lifecycle;
